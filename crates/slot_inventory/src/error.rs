//! Error types for inventory operations

use std::fmt;
use thiserror::Error;

/// Operation that raised an [`InventoryError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryOperation {
    /// Adding a stack
    Add,
    /// Removing the active slot's stack
    Remove,
    /// Applying size or active slot configuration
    Configure,
}

impl fmt::Display for InventoryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Remove => write!(f, "remove"),
            Self::Configure => write!(f, "configure"),
        }
    }
}

/// Inventory operation errors
///
/// A failed operation never leaves a partial mutation behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// No empty slot and no stack that can absorb the item
    #[error("Inventory is full ({operation})")]
    Full { operation: InventoryOperation },
    /// The active slot holds nothing
    #[error("Slot is empty ({operation})")]
    SlotEmpty { operation: InventoryOperation },
    /// The stack has no item definition
    #[error("Item stack has no item ({operation})")]
    EmptyStack { operation: InventoryOperation },
    /// Inventories need at least one slot
    #[error("Invalid inventory size: {0}")]
    InvalidSize(usize),
}

impl InventoryError {
    /// Get the operation that failed
    pub fn operation(&self) -> InventoryOperation {
        match self {
            Self::Full { operation }
            | Self::SlotEmpty { operation }
            | Self::EmptyStack { operation } => *operation,
            Self::InvalidSize(_) => InventoryOperation::Configure,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed configuration document
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Well-formed but rejected configuration
    #[error("Invalid config: {0}")]
    Invalid(#[from] InventoryError),
}

/// Item catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Key already registered
    #[error("Item already registered: {0}")]
    DuplicateKey(String),
    /// Malformed catalog document
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
