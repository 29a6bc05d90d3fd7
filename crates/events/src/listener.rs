//! Listener capability and the ordered registry a device broadcasts through.
//!
//! Dispatch is synchronous: `notify` returns only after every registered
//! listener has seen the event. Listeners are invoked in registration order,
//! once each.
//!
//! The registry snapshots its listeners before dispatching, so a listener may
//! register or deregister (itself or others) from inside `on_event`; the change
//! applies from the next notification on.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Receives events of type `E`.
pub trait Listener<E>: Send + Sync {
    /// Called synchronously from the emitting device, after the state change.
    fn on_event(&self, event: &E);

    /// Short name used in diagnostics.
    fn name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

impl<E, L> Listener<E> for Arc<L>
where
    L: Listener<E> + ?Sized,
{
    fn on_event(&self, event: &E) {
        (**self).on_event(event)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Token returned by [`ListenerRegistry::register`], used to deregister.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ListenerHandle(u64);

struct Entry<E> {
    handle: ListenerHandle,
    listener: Arc<dyn Listener<E>>,
}

struct Inner<E> {
    next_handle: u64,
    entries: Vec<Entry<E>>,
}

/// Ordered collection of listeners held by an emitting device.
pub struct ListenerRegistry<E> {
    inner: Mutex<Inner<E>>,
}

impl<E> ListenerRegistry<E> {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner<E>> {
        // The registry holds no invariant a panicking listener could break.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a listener; it will be notified after every earlier one.
    pub fn register(&self, listener: Arc<dyn Listener<E>>) -> ListenerHandle {
        let mut inner = self.lock();
        let handle = ListenerHandle(inner.next_handle);
        inner.next_handle += 1;
        inner.entries.push(Entry { handle, listener });
        handle
    }

    /// Remove a listener. Returns `false` if the handle was not registered.
    pub fn deregister(&self, handle: ListenerHandle) -> bool {
        let mut inner = self.lock();
        let before = inner.entries.len();
        inner.entries.retain(|e| e.handle != handle);
        inner.entries.len() != before
    }

    pub fn deregister_all(&self) {
        self.lock().entries.clear();
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Broadcast `event` to every registered listener, in registration order.
    pub fn notify(&self, event: &E) {
        let snapshot: Vec<Arc<dyn Listener<E>>> =
            self.lock().entries.iter().map(|e| e.listener.clone()).collect();

        for listener in snapshot {
            listener.on_event(event);
        }
    }
}

impl<E> Default for ListenerRegistry<E> {
    fn default() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_handle: 0,
                entries: Vec::new(),
            }),
        }
    }
}

impl<E> core::fmt::Debug for ListenerRegistry<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let inner = self.lock();
        f.debug_struct("ListenerRegistry")
            .field(
                "listeners",
                &inner.entries.iter().map(|e| e.listener.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::EventRecorder;

    /// Appends its tag to a shared log on every event.
    struct Tagged {
        tag: &'static str,
        log: Arc<Mutex<Vec<(&'static str, u32)>>>,
    }

    impl Listener<u32> for Tagged {
        fn on_event(&self, event: &u32) {
            self.log.lock().unwrap().push((self.tag, *event));
        }
    }

    #[test]
    fn notifies_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = ListenerRegistry::<u32>::new();
        registry.register(Arc::new(Tagged { tag: "first", log: log.clone() }));
        registry.register(Arc::new(Tagged { tag: "second", log: log.clone() }));

        registry.notify(&7);

        assert_eq!(*log.lock().unwrap(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn deregistered_listener_is_not_notified() {
        let registry = ListenerRegistry::<u32>::new();
        let kept = Arc::new(EventRecorder::<u32>::new());
        let dropped = Arc::new(EventRecorder::<u32>::new());
        registry.register(kept.clone());
        let handle = registry.register(dropped.clone());

        assert!(registry.deregister(handle));
        assert!(!registry.deregister(handle));
        registry.notify(&1);

        assert_eq!(kept.events(), vec![1]);
        assert!(dropped.is_empty());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn deregister_all_empties_the_registry() {
        let registry = ListenerRegistry::<u32>::new();
        registry.register(Arc::new(EventRecorder::<u32>::new()));
        registry.register(Arc::new(EventRecorder::<u32>::new()));

        registry.deregister_all();

        assert!(registry.is_empty());
    }

    /// Registers another listener the first time it is notified.
    struct Recruiter {
        registry: Arc<ListenerRegistry<u32>>,
        recruit: Arc<EventRecorder<u32>>,
    }

    impl Listener<u32> for Recruiter {
        fn on_event(&self, _event: &u32) {
            if self.registry.len() == 1 {
                self.registry.register(self.recruit.clone());
            }
        }
    }

    #[test]
    fn registration_during_dispatch_applies_to_next_event() {
        let registry = Arc::new(ListenerRegistry::<u32>::new());
        let recruit = Arc::new(EventRecorder::<u32>::new());
        registry.register(Arc::new(Recruiter {
            registry: registry.clone(),
            recruit: recruit.clone(),
        }));

        registry.notify(&1);
        assert!(recruit.is_empty());

        registry.notify(&2);
        assert_eq!(recruit.events(), vec![2]);
    }
}
