use std::sync::Arc;

use vending_core::{HardwareResult, Item};

/// Anything that can take delivery of one item.
///
/// This is the only thing racks and channels require of whatever sits
/// downstream, so pipelines chain freely: rack → channel → rack → channel → ...
/// By contract a sink rejects an item with
/// [`CapacityExceeded`](vending_core::HardwareError::CapacityExceeded) or
/// [`Disabled`](vending_core::HardwareError::Disabled). A rejected item is
/// dropped by the sink.
pub trait PopAcceptor: Send + Sync {
    fn accept_pop(&self, item: Item) -> HardwareResult<()>;
}

impl<A> PopAcceptor for Arc<A>
where
    A: PopAcceptor + ?Sized,
{
    fn accept_pop(&self, item: Item) -> HardwareResult<()> {
        (**self).accept_pop(item)
    }
}
