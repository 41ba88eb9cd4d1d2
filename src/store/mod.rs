// ============================================================================
// Order Store - In-Memory Repository for Orders
// ============================================================================
//
// This module contains everything the store owns:
// - Clock abstraction (Clock trait, SystemClock)
// - Errors (OrderStoreError enum)
// - The store itself (OrderStore: locking, identifier minting, status rules)
//
// The store is transport-agnostic: it neither logs nor knows about HTTP.
//
// ============================================================================

pub mod clock;
pub mod errors;
pub mod order_store;

// Re-export for convenience
pub use clock::{Clock, SystemClock};
pub use errors::OrderStoreError;
pub use order_store::OrderStore;
