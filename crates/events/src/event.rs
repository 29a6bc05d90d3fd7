use chrono::{DateTime, Utc};

/// A hardware notification.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **versioned** (schema evolution)
/// - emitted **after** the state change they describe
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "rack.item.added").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// When the event occurred (simulation wall-clock time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
