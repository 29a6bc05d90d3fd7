//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Items and devices are compared by identity: two items with the same label
/// are still different items.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
