use chrono::{DateTime, Utc};

// ============================================================================
// Clock Abstraction
// ============================================================================

/// Source of the current time for the store.
///
/// Injected so tests can control timestamps deterministically instead of
/// sleeping between operations.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system wall clock.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
