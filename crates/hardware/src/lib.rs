//! Simulated vending hardware: pop racks and the channels between them.
//!
//! A [`Rack`] is a bounded FIFO store that dispenses into a connected
//! [`Channel`], which forwards to any downstream [`PopAcceptor`]. Racks
//! broadcast [`RackEvent`]s to registered listeners as they fill and drain.
//!
//! ```text
//! caller ─► Rack::dispense_pop ─► Channel::accept_pop ─► sink (chute, another rack, ...)
//! ```

pub mod acceptor;
pub mod channel;
pub mod config;
pub mod event;
pub mod rack;

pub use acceptor::PopAcceptor;
pub use channel::Channel;
pub use config::RackConfig;
pub use event::{ItemAdded, ItemRemoved, RackEmpty, RackEvent, RackFull};
pub use rack::{FillState, Rack};
