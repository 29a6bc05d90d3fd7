//! `vending-core` — building blocks shared by simulated vending hardware.
//!
//! This crate contains **pure** primitives (no IO, no logging): the error
//! taxonomy, strongly-typed identifiers, the dispensable [`Item`] token and the
//! enable/disable capability every device embeds.

pub mod device;
pub mod entity;
pub mod error;
pub mod id;
pub mod item;

pub use device::{Device, DeviceState};
pub use entity::Entity;
pub use error::{HardwareError, HardwareResult};
pub use id::{DeviceId, ItemId};
pub use item::Item;
