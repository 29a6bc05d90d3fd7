//! Tracing/logging setup shared by simulations embedding vending hardware.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, format).
pub mod tracing;

/// Listener that logs hardware notifications.
pub mod listener;

pub use listener::TracingListener;
pub use self::tracing::{LogConfig, LogFormat, init_with};
