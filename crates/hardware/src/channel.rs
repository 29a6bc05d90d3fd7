use std::sync::Arc;

use vending_core::{HardwareError, HardwareResult, Item};

use crate::acceptor::PopAcceptor;

/// Stateless pass-through between a rack and whatever sits downstream.
///
/// The sink is bound once at construction and never changes.
pub struct Channel {
    sink: Arc<dyn PopAcceptor>,
}

impl Channel {
    /// Bind a channel to `sink`. Fails with `InvalidConfiguration` if the sink is absent.
    pub fn new(sink: Option<Arc<dyn PopAcceptor>>) -> HardwareResult<Self> {
        let sink = sink.ok_or_else(|| {
            HardwareError::invalid_configuration("channel requires a downstream sink")
        })?;
        Ok(Self { sink })
    }

    /// Bind a channel to a sink that is known to exist.
    pub fn to(sink: Arc<dyn PopAcceptor>) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &Arc<dyn PopAcceptor> {
        &self.sink
    }
}

impl PopAcceptor for Channel {
    fn accept_pop(&self, item: Item) -> HardwareResult<()> {
        self.sink.accept_pop(item)
    }
}

impl core::fmt::Debug for Channel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Channel").finish_non_exhaustive()
    }
}
