//! Enable/disable capability shared by every simulated device.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::id::DeviceId;

/// Enabled/disabled flag embedded by value in each device.
///
/// A disabled device rejects every mutating operation with
/// [`HardwareError::Disabled`](crate::HardwareError::Disabled) and leaves its
/// state untouched. Devices only read the flag; toggling it belongs to the
/// surrounding assembly.
#[derive(Debug, Default)]
pub struct DeviceState {
    disabled: AtomicBool,
}

impl DeviceState {
    /// A new, enabled device state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::Acquire)
    }

    pub fn disable(&self) {
        self.disabled.store(true, Ordering::Release);
    }

    pub fn enable(&self) {
        self.disabled.store(false, Ordering::Release);
    }
}

/// A piece of simulated hardware.
pub trait Device {
    fn device_id(&self) -> DeviceId;

    /// The embedded enable/disable capability.
    fn state(&self) -> &DeviceState;

    fn is_disabled(&self) -> bool {
        self.state().is_disabled()
    }

    fn disable(&self) {
        self.state().disable();
    }

    fn enable(&self) {
        self.state().enable();
    }
}
