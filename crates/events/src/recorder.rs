//! In-memory event history for tests/dev.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::listener::Listener;

/// Listener that keeps every event it receives, in arrival order.
#[derive(Debug)]
pub struct EventRecorder<E> {
    events: Mutex<Vec<E>>,
}

impl<E> EventRecorder<E> {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<E>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drain the recorded history.
    pub fn take(&self) -> Vec<E> {
        std::mem::take(&mut *self.lock())
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl<E: Clone> EventRecorder<E> {
    /// Copy of the recorded history.
    pub fn events(&self) -> Vec<E> {
        self.lock().clone()
    }
}

impl<E> Default for EventRecorder<E> {
    fn default() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }
}

impl<E> Listener<E> for EventRecorder<E>
where
    E: Clone + Send + Sync,
{
    fn on_event(&self, event: &E) {
        self.lock().push(event.clone());
    }

    fn name(&self) -> &'static str {
        "recorder"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_drains_history() {
        let recorder = EventRecorder::new();
        recorder.on_event(&"a");
        recorder.on_event(&"b");

        assert_eq!(recorder.take(), vec!["a", "b"]);
        assert!(recorder.is_empty());
    }

    #[test]
    fn clear_forgets_everything() {
        let recorder = EventRecorder::new();
        recorder.on_event(&1u8);
        recorder.clear();
        assert_eq!(recorder.len(), 0);
    }
}
