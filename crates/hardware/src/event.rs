use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vending_core::{DeviceId, ItemId};
use vending_events::Event;

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub rack_id: DeviceId,
    pub item_id: ItemId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: Full. The rack just reached capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RackFull {
    pub rack_id: DeviceId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub rack_id: DeviceId,
    pub item_id: ItemId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: Empty. The rack's last item was just dispensed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RackEmpty {
    pub rack_id: DeviceId,
    pub occurred_at: DateTime<Utc>,
}

/// Notifications broadcast by a [`Rack`](crate::Rack).
///
/// Items are referenced by id; the item itself has already moved on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RackEvent {
    ItemAdded(ItemAdded),
    Full(RackFull),
    ItemRemoved(ItemRemoved),
    Empty(RackEmpty),
}

impl RackEvent {
    pub(crate) fn item_added(rack_id: DeviceId, item_id: ItemId) -> Self {
        RackEvent::ItemAdded(ItemAdded {
            rack_id,
            item_id,
            occurred_at: Utc::now(),
        })
    }

    pub(crate) fn full(rack_id: DeviceId) -> Self {
        RackEvent::Full(RackFull {
            rack_id,
            occurred_at: Utc::now(),
        })
    }

    pub(crate) fn item_removed(rack_id: DeviceId, item_id: ItemId) -> Self {
        RackEvent::ItemRemoved(ItemRemoved {
            rack_id,
            item_id,
            occurred_at: Utc::now(),
        })
    }

    pub(crate) fn empty(rack_id: DeviceId) -> Self {
        RackEvent::Empty(RackEmpty {
            rack_id,
            occurred_at: Utc::now(),
        })
    }

    /// The rack that emitted this event.
    pub fn rack_id(&self) -> DeviceId {
        match self {
            RackEvent::ItemAdded(e) => e.rack_id,
            RackEvent::Full(e) => e.rack_id,
            RackEvent::ItemRemoved(e) => e.rack_id,
            RackEvent::Empty(e) => e.rack_id,
        }
    }

    /// The item involved, for `ItemAdded`/`ItemRemoved`.
    pub fn item_id(&self) -> Option<ItemId> {
        match self {
            RackEvent::ItemAdded(e) => Some(e.item_id),
            RackEvent::ItemRemoved(e) => Some(e.item_id),
            RackEvent::Full(_) | RackEvent::Empty(_) => None,
        }
    }
}

impl Event for RackEvent {
    fn event_type(&self) -> &'static str {
        match self {
            RackEvent::ItemAdded(_) => "rack.item.added",
            RackEvent::Full(_) => "rack.full",
            RackEvent::ItemRemoved(_) => "rack.item.removed",
            RackEvent::Empty(_) => "rack.empty",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            RackEvent::ItemAdded(e) => e.occurred_at,
            RackEvent::Full(e) => e.occurred_at,
            RackEvent::ItemRemoved(e) => e.occurred_at,
            RackEvent::Empty(e) => e.occurred_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_expose_rack_and_item() {
        let rack_id = DeviceId::new();
        let item_id = ItemId::new();

        let added = RackEvent::item_added(rack_id, item_id);
        assert_eq!(added.rack_id(), rack_id);
        assert_eq!(added.item_id(), Some(item_id));
        assert_eq!(added.event_type(), "rack.item.added");

        let full = RackEvent::full(rack_id);
        assert_eq!(full.rack_id(), rack_id);
        assert_eq!(full.item_id(), None);
        assert_eq!(full.event_type(), "rack.full");
    }

    #[test]
    fn serializes_as_tagged_variant() {
        let rack_id = DeviceId::new();
        let event = RackEvent::empty(rack_id);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["Empty"]["rack_id"], rack_id.to_string());
    }
}
