// Private module declaration
mod server;

use prometheus::{IntCounter, IntCounterVec, Opts, Registry};

// Re-export for public API
pub use server::metrics_handler;

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Counters for the order service:
// - orders created
// - status updates (by target status)
// - rejected operations (by reason)
//
// All metrics are registered with Prometheus and can be scraped via /metrics
// ============================================================================

/// Central metrics registry for the order service.
pub struct Metrics {
    registry: Registry,

    pub orders_created: IntCounter,
    pub status_updates: IntCounterVec,
    pub rejections: IntCounterVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let orders_created = IntCounter::new(
            "orders_created_total",
            "Total orders successfully created",
        )?;
        registry.register(Box::new(orders_created.clone()))?;

        let status_updates = IntCounterVec::new(
            Opts::new(
                "order_status_updates_total",
                "Total successful order status updates",
            ),
            &["status"],
        )?;
        registry.register(Box::new(status_updates.clone()))?;

        let rejections = IntCounterVec::new(
            Opts::new(
                "order_rejections_total",
                "Total rejected order operations",
            ),
            &["reason"],
        )?;
        registry.register(Box::new(rejections.clone()))?;

        Ok(Self {
            registry,
            orders_created,
            status_updates,
            rejections,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_order_created(&self) {
        self.orders_created.inc();
    }

    pub fn record_status_update(&self, status: &str) {
        self.status_updates.with_label_values(&[status]).inc();
    }

    pub fn record_rejection(&self, reason: &str) {
        self.rejections.with_label_values(&[reason]).inc();
    }
}
