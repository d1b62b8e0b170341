//! Slot Inventory - Fixed-Capacity Item Container
//!
//! This crate provides the inventory a game entity carries: a fixed number of
//! slots, each holding at most one stack, with one slot selected as active
//! (the equipped item).
//!
//! # Features
//!
//! - Item definitions compared by identity through a shared catalog
//! - Stacking of stackable items into the first matching slot
//! - Active slot selection with wrap-around
//! - Resizing that keeps surviving slot contents
//! - Removal with an optional world spawner
//! - Change events for UI refresh
//!
//! # Example
//!
//! ```
//! use slot_inventory::prelude::*;
//!
//! let mut catalog = ItemCatalog::new();
//! let arrow = catalog.register(ItemDefinition::new("arrow", "Arrow").stackable()).unwrap();
//!
//! let mut inventory = Inventory::new(9).unwrap();
//! inventory.add_item_stack(ItemStack::new(arrow.clone(), 16)).unwrap();
//! inventory.add_item_stack(ItemStack::new(arrow.clone(), 8)).unwrap();
//! assert_eq!(inventory.slots()[0].amount(), 24);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod inventory;
pub mod item;
pub mod slot;
pub mod spawn;

pub mod prelude {
    pub use crate::catalog::ItemCatalog;
    pub use crate::config::{InventoryConfig, DEFAULT_INVENTORY_SIZE};
    pub use crate::error::{CatalogError, ConfigError, InventoryError, InventoryOperation, Result};
    pub use crate::inventory::{Inventory, InventoryEvent};
    pub use crate::item::{ItemDefinition, ItemRef, ItemStack};
    pub use crate::slot::InventorySlot;
    pub use crate::spawn::{DropQueue, DroppedItem, ItemSpawner};
}

pub use prelude::*;
