//! Hardware notification plumbing.
//!
//! Devices own a [`ListenerRegistry`] and broadcast typed events to it
//! synchronously, in registration order.

pub mod event;
pub mod listener;
pub mod recorder;

pub use event::Event;
pub use listener::{Listener, ListenerHandle, ListenerRegistry};
pub use recorder::EventRecorder;
