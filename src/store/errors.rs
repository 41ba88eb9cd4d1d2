// ============================================================================
// Order Store Errors
// ============================================================================
//
// All variants are deterministic validation failures. The store never
// retries and never logs; the caller translates each kind into a
// transport-level response.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum OrderStoreError {
    #[error("cannot create order with empty cart")]
    EmptyCart,

    #[error("order not found: {0}")]
    NotFound(String),

    #[error("invalid order status: {0}")]
    InvalidStatus(String),
}
