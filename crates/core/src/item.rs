//! The dispensable item token.

use serde::Serialize;

use crate::entity::Entity;
use crate::id::ItemId;

/// One dispensable unit (a pop can, a snack bag, ...).
///
/// Items are opaque to the hardware: a rack only cares whether one is present.
/// Identity is the [`ItemId`] assigned at construction, so two items with the
/// same label are still distinct.
///
/// `Item` is deliberately not `Clone` and cannot be deserialized or built from
/// an existing id. It moves from rack to channel to whatever sink sits
/// downstream, with exactly one owner at a time.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Item {
    id: ItemId,
    label: Option<String>,
}

impl Item {
    /// Create an unlabelled item with a fresh identity.
    pub fn new() -> Self {
        Self::with_id(ItemId::new())
    }

    /// Create a labelled item with a fresh identity.
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            label: Some(label.into()),
        }
    }

    fn with_id(id: ItemId) -> Self {
        Self { id, label: None }
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    /// Display label (brand name). Never interpreted by hardware.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
