//! Inventory slots

use crate::item::{ItemRef, ItemStack};

/// A single storage cell holding at most one stack
///
/// Contents and the active flag change only through [`crate::Inventory`], which
/// keeps exactly one slot active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventorySlot {
    stack: ItemStack,
    active: bool,
}

impl InventorySlot {
    /// Create an empty, inactive slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the slot holds an item
    #[inline]
    pub fn has_item(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Check if this is the active slot
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Get the stack in this slot
    pub fn stack(&self) -> &ItemStack {
        &self.stack
    }

    /// Get the item type in this slot
    pub fn item(&self) -> Option<&ItemRef> {
        self.stack.item()
    }

    /// Get the quantity in this slot
    pub fn amount(&self) -> u32 {
        self.stack.amount()
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub(crate) fn stack_mut(&mut self) -> &mut ItemStack {
        &mut self.stack
    }

    pub(crate) fn put(&mut self, stack: ItemStack) {
        self.stack = stack;
    }

    /// Reset to the empty stack, returning what was there
    pub(crate) fn clear(&mut self) -> ItemStack {
        self.stack.take()
    }
}
