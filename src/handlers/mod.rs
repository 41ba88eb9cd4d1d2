// ============================================================================
// HTTP Handlers - Transport Layer for the Order Service
// ============================================================================
//
// Thin glue over the store: decode JSON, call the store, encode JSON.
// Error kinds are translated to status codes here; the store itself knows
// nothing about HTTP.
//
// ============================================================================

pub mod health;
pub mod orders;
