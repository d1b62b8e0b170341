//! Inventory configuration
//!
//! Hosts set the capacity and the initially selected slot here, then hand the
//! config to [`crate::Inventory::from_config`] or
//! [`crate::Inventory::apply_config`] whenever it changes.
//!
//! # Example Config
//!
//! ```json
//! { "size": 9, "active_slot_index": 0 }
//! ```

use crate::error::{ConfigError, InventoryError};
use serde::{Deserialize, Serialize};

/// Default number of slots
pub const DEFAULT_INVENTORY_SIZE: usize = 20;

/// Inventory configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Number of slots (must be at least 1)
    pub size: usize,
    /// Requested active slot, wrapped into range when applied
    pub active_slot_index: isize,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_INVENTORY_SIZE,
            active_slot_index: 0,
        }
    }
}

impl InventoryConfig {
    /// Create a config with `size` slots and the first slot active
    pub fn new(size: usize) -> Self {
        Self {
            size,
            active_slot_index: 0,
        }
    }

    /// Set the initial active slot
    pub fn with_active_slot(mut self, index: isize) -> Self {
        self.active_slot_index = index;
        self
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot back an inventory
    pub fn validate(&self) -> Result<(), InventoryError> {
        if self.size == 0 {
            return Err(InventoryError::InvalidSize(self.size));
        }
        Ok(())
    }
}
