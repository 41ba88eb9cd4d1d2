use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{CartItem, Order, OrderStatus};

use super::clock::{Clock, SystemClock};
use super::errors::OrderStoreError;

// ============================================================================
// Order Store - Concurrency-Safe In-Memory Repository
// ============================================================================
//
// Discipline: readers take the shared lock, writers take the exclusive lock
// for their entire check-then-act sequence. Critical sections are bounded
// (map lookups/inserts, or one pass over the order set) and never perform
// I/O while holding the lock.
//
// ============================================================================

/// Mutable state behind the lock: the canonical order map and the
/// identifier sequence. Keeping both under one lock means an existence
/// check and the corresponding write can never interleave with another
/// writer, and two concurrent creates can never mint the same identifier.
struct StoreInner {
    orders: HashMap<String, Order>,
    next_id: u64,
}

/// In-memory order repository.
///
/// The store is the only long-lived owner of order records; every read
/// returns an owned copy, never a view into the map. Construct one per
/// process and share it behind `Arc` (or actix `web::Data`).
pub struct OrderStore {
    inner: RwLock<StoreInner>,
    clock: Arc<dyn Clock>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                orders: HashMap::new(),
                next_id: 1,
            }),
            clock,
        }
    }

    /// Create a new order from cart items.
    ///
    /// The total is the sum of unit prices; `quantity` does not factor in.
    /// Identifiers are `ORD-<YYYYMMDD>-<NNNN>` where the sequence number is
    /// process-wide monotonic and advances only on successful insert.
    /// Uniqueness rests on the sequence alone, not on the date portion.
    pub async fn create(&self, items: Vec<CartItem>) -> Result<Order, OrderStoreError> {
        if items.is_empty() {
            return Err(OrderStoreError::EmptyCart);
        }

        let total_amount: f64 = items.iter().map(|item| item.price).sum();

        let mut inner = self.inner.write().await;

        let now = self.clock.now();
        let id = format!("ORD-{}-{:04}", now.format("%Y%m%d"), inner.next_id);

        let order = Order {
            id: id.clone(),
            items,
            total_amount,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        inner.orders.insert(id, order.clone());
        inner.next_id += 1;

        Ok(order)
    }

    /// Return every stored order. Result order is unspecified; callers
    /// needing a stable order must sort.
    pub async fn get_all(&self) -> Vec<Order> {
        let inner = self.inner.read().await;
        inner.orders.values().cloned().collect()
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Order, OrderStoreError> {
        let inner = self.inner.read().await;
        inner
            .orders
            .get(id)
            .cloned()
            .ok_or_else(|| OrderStoreError::NotFound(id.to_string()))
    }

    /// Set an order's status.
    ///
    /// Any member of the valid set may be assigned from any current status,
    /// including reassigning the current value; a no-op reassignment still
    /// refreshes `updatedAt`. Existence is checked before status validity,
    /// and `status` and `updatedAt` change together under the exclusive
    /// lock. Returns the updated order.
    pub async fn update_status(&self, id: &str, status: &str) -> Result<Order, OrderStoreError> {
        let mut inner = self.inner.write().await;

        let order = inner
            .orders
            .get_mut(id)
            .ok_or_else(|| OrderStoreError::NotFound(id.to_string()))?;

        let status = OrderStatus::parse(status)
            .ok_or_else(|| OrderStoreError::InvalidStatus(status.to_string()))?;

        order.status = status;
        order.updated_at = self.clock.now();

        Ok(order.clone())
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
