use serde::Serialize;

use vending_events::{Event, Listener};

/// Logs every notification at `info` with its type and JSON payload.
///
/// Register one on any device to get an event trail in the process log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingListener;

impl TracingListener {
    pub fn new() -> Self {
        Self
    }
}

impl<E> Listener<E> for TracingListener
where
    E: Event + Serialize,
{
    fn on_event(&self, event: &E) {
        match serde_json::to_string(event) {
            Ok(payload) => ::tracing::info!(
                event_type = event.event_type(),
                version = event.version(),
                occurred_at = %event.occurred_at(),
                payload = %payload,
                "hardware event"
            ),
            Err(err) => ::tracing::warn!(
                event_type = event.event_type(),
                error = %err,
                "hardware event could not be serialized"
            ),
        }
    }

    fn name(&self) -> &'static str {
        "tracing"
    }
}
