//! Hardware error model.

use thiserror::Error;

/// Result type used across the hardware layer.
pub type HardwareResult<T> = Result<T, HardwareError>;

/// Failure raised by a simulated hardware device.
///
/// Every failure is surfaced synchronously to the immediate caller. Devices
/// never log or swallow these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HardwareError {
    /// Bad construction or load input (e.g. zero capacity, missing sink,
    /// bulk load past remaining capacity). Retrying with the same input fails again.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The device is disabled.
    #[error("device is disabled")]
    Disabled,

    /// The device (or a downstream sink) cannot take another item.
    #[error("capacity exceeded")]
    CapacityExceeded,

    /// Dispense attempted with nothing stored.
    #[error("device is empty")]
    Empty,

    /// Dispense attempted with no downstream sink connected.
    ///
    /// This is a wiring defect in the assembly, not a transient condition.
    #[error("no output channel is connected")]
    Unconnected,

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl HardwareError {
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Whether the caller may reasonably retry the same operation later.
    ///
    /// `Disabled`, `CapacityExceeded` and `Empty` depend on device state that can
    /// change; configuration and wiring errors do not.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            HardwareError::Disabled | HardwareError::CapacityExceeded | HardwareError::Empty
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_conditions_are_recoverable() {
        assert!(HardwareError::Disabled.is_recoverable());
        assert!(HardwareError::CapacityExceeded.is_recoverable());
        assert!(HardwareError::Empty.is_recoverable());
    }

    #[test]
    fn wiring_and_configuration_errors_are_not_recoverable() {
        assert!(!HardwareError::Unconnected.is_recoverable());
        assert!(!HardwareError::invalid_configuration("capacity must be positive").is_recoverable());
        assert!(!HardwareError::invalid_id("nope").is_recoverable());
    }

    #[test]
    fn display_includes_detail() {
        let err = HardwareError::invalid_configuration("capacity must be positive");
        assert_eq!(err.to_string(), "invalid configuration: capacity must be positive");
    }
}
