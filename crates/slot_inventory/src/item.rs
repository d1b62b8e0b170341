//! Item definitions and stacks

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

/// Item definition
///
/// Immutable catalog entry. Inventories never own or mutate definitions, they
/// only hold [`ItemRef`]s to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Unique catalog key
    pub key: String,
    /// Display name
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Whether several units combine into one stack
    #[serde(default)]
    pub can_stack: bool,
}

impl ItemDefinition {
    /// Create a new, non-stackable item definition
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            description: String::new(),
            can_stack: false,
        }
    }

    /// Set description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Make stackable
    pub fn stackable(self) -> Self {
        self.with_can_stack(true)
    }

    /// Set stackability
    pub fn with_can_stack(mut self, can_stack: bool) -> Self {
        self.can_stack = can_stack;
        self
    }
}

/// Shared handle to an [`ItemDefinition`]
///
/// Equality and hashing go by identity, not by value: two definitions with the
/// same fields that were wrapped separately are different item types.
#[derive(Clone)]
pub struct ItemRef(Arc<ItemDefinition>);

impl ItemRef {
    /// Wrap a definition in a new identity
    pub fn new(definition: ItemDefinition) -> Self {
        Self(Arc::new(definition))
    }

    /// Get the definition
    #[inline]
    pub fn definition(&self) -> &ItemDefinition {
        &self.0
    }

    /// Check whether both handles point at the same definition
    #[inline]
    pub fn ptr_eq(&self, other: &ItemRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for ItemRef {
    type Target = ItemDefinition;

    fn deref(&self) -> &ItemDefinition {
        &self.0
    }
}

impl PartialEq for ItemRef {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ItemRef {}

impl Hash for ItemRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.0) as usize).hash(state);
    }
}

impl fmt::Debug for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemRef({:?} @ {:p})", self.0.key, Arc::as_ptr(&self.0))
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.key)
    }
}

/// A quantity of one item type
///
/// The default value is the canonical empty stack: no item, amount 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStack {
    item: Option<ItemRef>,
    amount: u32,
}

impl ItemStack {
    /// Create a new item stack
    pub fn new(item: ItemRef, amount: u32) -> Self {
        Self {
            item: Some(item),
            amount,
        }
    }

    /// Create a single item
    pub fn single(item: ItemRef) -> Self {
        Self::new(item, 1)
    }

    /// Create the empty stack
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the item type, if any
    #[inline]
    pub fn item(&self) -> Option<&ItemRef> {
        self.item.as_ref()
    }

    /// Get the quantity
    #[inline]
    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// Check if this stack holds no item
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }

    /// Check if this stack's item type can stack
    pub fn can_stack(&self) -> bool {
        self.item.as_ref().map(|i| i.can_stack).unwrap_or(false)
    }

    /// Check if this stack holds the given item type
    pub fn is_same_item(&self, item: &ItemRef) -> bool {
        self.item.as_ref() == Some(item)
    }

    /// Move the contents out, leaving the empty stack behind
    pub fn take(&mut self) -> ItemStack {
        std::mem::take(self)
    }

    /// Absorb `amount` more units of the same item
    pub(crate) fn absorb(&mut self, amount: u32) {
        debug_assert!(!self.is_empty(), "absorbing into an empty stack");
        self.amount = self.amount.saturating_add(amount);
    }
}

impl From<ItemRef> for ItemStack {
    fn from(item: ItemRef) -> Self {
        Self::single(item)
    }
}
