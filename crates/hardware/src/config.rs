//! Rack configuration as supplied by the embedding assembly.

use serde::{Deserialize, Serialize};

use vending_core::{HardwareError, HardwareResult};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RackConfig {
    /// Maximum number of items the rack holds. Must be positive.
    pub capacity: usize,
}

impl RackConfig {
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    pub fn validate(&self) -> HardwareResult<()> {
        if self.capacity == 0 {
            return Err(HardwareError::invalid_configuration(
                "rack capacity must be positive",
            ));
        }
        Ok(())
    }
}
