// ============================================================================
// minishop - a toy e-commerce demo split into independent HTTP services
// ============================================================================
//
// Three binaries share this library:
// - order-service:   the core; in-memory order store behind JSON endpoints
// - product-service: static read-only catalog
// - cart-service:    non-persistent cart accumulator
//
// ============================================================================

pub mod config;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod store;
