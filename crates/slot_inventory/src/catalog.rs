//! Item catalog
//!
//! Registry handing out the [`ItemRef`]s inventories compare by identity.

use crate::error::CatalogError;
use crate::item::{ItemDefinition, ItemRef};
use std::collections::HashMap;

/// Registry of item definitions, keyed by [`ItemDefinition::key`]
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    /// Definitions in registration order
    items: Vec<ItemRef>,
    /// key -> index into `items`
    by_key: HashMap<String, usize>,
}

impl ItemCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a JSON array of definitions
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let definitions: Vec<ItemDefinition> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for definition in definitions {
            catalog.register(definition)?;
        }
        log::debug!("Loaded item catalog with {} definitions", catalog.len());
        Ok(catalog)
    }

    /// Register a definition and get its handle
    pub fn register(&mut self, definition: ItemDefinition) -> Result<ItemRef, CatalogError> {
        if self.by_key.contains_key(&definition.key) {
            return Err(CatalogError::DuplicateKey(definition.key));
        }

        let item = ItemRef::new(definition);
        self.by_key.insert(item.key.clone(), self.items.len());
        self.items.push(item.clone());
        Ok(item)
    }

    /// Get a handle by key
    pub fn get(&self, key: &str) -> Option<&ItemRef> {
        self.by_key.get(key).map(|&index| &self.items[index])
    }

    /// Check if a key is registered
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Number of registered definitions
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate definitions in registration order
    pub fn iter(&self) -> impl Iterator<Item = &ItemRef> {
        self.items.iter()
    }
}
