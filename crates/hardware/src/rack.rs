//! Bounded FIFO pop rack.
//!
//! ## Event ordering
//!
//! - `add_pop`: `ItemAdded`, then `Full` if that add reached capacity.
//! - `dispense_pop`: `ItemRemoved`, then (only after the downstream sink
//!   accepted the item) `Empty` if that removal drained the rack and nothing
//!   refilled it in the meantime (a listener or a looped-back pipeline).
//!
//! `Full` and `Empty` are edge-triggered: they fire on the call that crosses
//! the boundary and never while already sitting at it.
//!
//! ## Dispense is not transactional
//!
//! The item leaves the rack before it is forwarded. If no channel is connected,
//! or the downstream sink rejects the item, the removal stands and the
//! `ItemRemoved` notification has already gone out. The item is lost to the
//! simulation.
//!
//! ## Locking
//!
//! Contents and the channel connection sit behind a per-rack mutex. The lock is
//! released before listeners are notified and before forwarding downstream, so
//! listeners may query the rack and pipelines may loop back into it.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use vending_core::{Device, DeviceId, DeviceState, Entity, HardwareError, HardwareResult, Item};
use vending_events::{Listener, ListenerHandle, ListenerRegistry};

use crate::acceptor::PopAcceptor;
use crate::channel::Channel;
use crate::config::RackConfig;
use crate::event::RackEvent;

/// Fill level of a rack relative to its capacity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FillState {
    Empty,
    Partial,
    Full,
}

#[derive(Default)]
struct RackInner {
    contents: VecDeque<Item>,
    sink: Option<Arc<Channel>>,
}

/// A fixed-capacity store of items that dispenses, oldest first, into a
/// connected [`Channel`].
pub struct Rack {
    id: DeviceId,
    capacity: usize,
    state: DeviceState,
    inner: Mutex<RackInner>,
    listeners: ListenerRegistry<RackEvent>,
}

impl Rack {
    /// Create an empty, enabled, unconnected rack.
    pub fn new(capacity: usize) -> HardwareResult<Self> {
        Self::from_config(&RackConfig::new(capacity))
    }

    pub fn from_config(config: &RackConfig) -> HardwareResult<Self> {
        config.validate()?;
        Ok(Self {
            id: DeviceId::new(),
            capacity: config.capacity,
            state: DeviceState::new(),
            inner: Mutex::new(RackInner::default()),
            listeners: ListenerRegistry::new(),
        })
    }

    fn lock(&self) -> MutexGuard<'_, RackInner> {
        // Every mutation completes before any call that could panic, so a
        // poisoned lock still guards consistent contents.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn id_typed(&self) -> DeviceId {
        self.id
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items currently held.
    pub fn size(&self) -> usize {
        self.lock().contents.len()
    }

    /// Free slots left.
    pub fn remaining(&self) -> usize {
        self.capacity - self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn is_full(&self) -> bool {
        self.size() == self.capacity
    }

    pub fn fill_state(&self) -> FillState {
        match self.size() {
            0 => FillState::Empty,
            n if n == self.capacity => FillState::Full,
            _ => FillState::Partial,
        }
    }

    /// Bind the output channel. A later call replaces the earlier connection.
    pub fn connect(&self, channel: Arc<Channel>) {
        self.lock().sink = Some(channel);
    }

    pub fn is_connected(&self) -> bool {
        self.lock().sink.is_some()
    }

    pub fn register(&self, listener: Arc<dyn Listener<RackEvent>>) -> ListenerHandle {
        self.listeners.register(listener)
    }

    pub fn deregister(&self, handle: ListenerHandle) -> bool {
        self.listeners.deregister(handle)
    }

    fn emit(&self, event: RackEvent) {
        self.listeners.notify(&event);
    }

    /// Store `item` at the back of the rack.
    ///
    /// Fails with `Disabled` or `CapacityExceeded` without touching any state.
    pub fn add_pop(&self, item: Item) -> HardwareResult<()> {
        if self.state.is_disabled() {
            return Err(HardwareError::Disabled);
        }

        let item_id = item.id_typed();
        let size = {
            let mut inner = self.lock();
            if inner.contents.len() >= self.capacity {
                return Err(HardwareError::CapacityExceeded);
            }
            inner.contents.push_back(item);
            inner.contents.len()
        };

        tracing::debug!(rack_id = %self.id, item_id = %item_id, size, "item added to rack");

        self.emit(RackEvent::item_added(self.id, item_id));
        if size == self.capacity {
            self.emit(RackEvent::full(self.id));
        }
        Ok(())
    }

    /// Remove the oldest item and forward it to the connected channel.
    ///
    /// Fails with `Disabled` or `Empty` without touching any state. Past that
    /// point the item is gone from the rack: `Unconnected` or a downstream
    /// failure is returned after `ItemRemoved` has fired, and `Empty` is not
    /// emitted for that call. `Empty` is also skipped when the rack was
    /// restocked while the item was in flight.
    pub fn dispense_pop(&self) -> HardwareResult<()> {
        if self.state.is_disabled() {
            return Err(HardwareError::Disabled);
        }

        let (item, size) = {
            let mut inner = self.lock();
            let item = inner.contents.pop_front().ok_or(HardwareError::Empty)?;
            (item, inner.contents.len())
        };
        let item_id = item.id_typed();

        tracing::debug!(rack_id = %self.id, item_id = %item_id, size, "item removed from rack");

        self.emit(RackEvent::item_removed(self.id, item_id));

        let sink = self.lock().sink.clone().ok_or(HardwareError::Unconnected)?;
        sink.accept_pop(item)?;

        if size == 0 && self.is_empty() {
            self.emit(RackEvent::empty(self.id));
        }
        Ok(())
    }

    /// Append `items` in order without notifying anyone.
    ///
    /// Intended for stocking a rack before the simulation starts. All or
    /// nothing: if the batch does not fit in the remaining capacity, nothing is
    /// stored and `InvalidConfiguration` is returned. Existing contents are kept.
    /// Like `unload`, this ignores the enabled flag.
    pub fn load_without_events(&self, items: Vec<Item>) -> HardwareResult<()> {
        let count = items.len();
        let size = {
            let mut inner = self.lock();
            if inner.contents.len() + count > self.capacity {
                return Err(HardwareError::invalid_configuration(format!(
                    "cannot load {count} items into rack holding {} of {}",
                    inner.contents.len(),
                    self.capacity
                )));
            }
            inner.contents.extend(items);
            inner.contents.len()
        };

        tracing::debug!(rack_id = %self.id, count, size, "rack loaded");
        Ok(())
    }

    /// Take every item out, oldest first, without notifying anyone.
    ///
    /// Maintenance path for restocking; ignores the enabled flag.
    pub fn unload(&self) -> Vec<Item> {
        let items: Vec<Item> = self.lock().contents.drain(..).collect();
        tracing::debug!(rack_id = %self.id, count = items.len(), "rack unloaded");
        items
    }
}

impl Entity for Rack {
    type Id = DeviceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Device for Rack {
    fn device_id(&self) -> DeviceId {
        self.id
    }

    fn state(&self) -> &DeviceState {
        &self.state
    }
}

/// A rack downstream of a channel stores what it is handed.
impl PopAcceptor for Rack {
    fn accept_pop(&self, item: Item) -> HardwareResult<()> {
        self.add_pop(item)
    }
}

impl core::fmt::Debug for Rack {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let inner = self.lock();
        f.debug_struct("Rack")
            .field("id", &self.id)
            .field("capacity", &self.capacity)
            .field("size", &inner.contents.len())
            .field("connected", &inner.sink.is_some())
            .field("disabled", &self.state.is_disabled())
            .field("listeners", &self.listeners)
            .finish()
    }
}
