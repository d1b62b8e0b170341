//! Inventory component

use crate::config::{InventoryConfig, DEFAULT_INVENTORY_SIZE};
use crate::error::{InventoryError, InventoryOperation, Result};
use crate::item::{ItemRef, ItemStack};
use crate::slot::InventorySlot;
use crate::spawn::ItemSpawner;

/// Inventory events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryEvent {
    /// Item added to inventory
    ItemAdded {
        slot: usize,
        item: ItemRef,
        amount: u32,
        /// Absorbed into an existing stack rather than placed in an empty slot
        merged: bool,
    },
    /// Item removed from the active slot
    ItemRemoved {
        slot: usize,
        stack: ItemStack,
        spawned: bool,
    },
    /// Active slot moved
    ActiveSlotChanged {
        from: usize,
        to: usize,
    },
    /// Slot count changed
    Resized {
        from: usize,
        to: usize,
        /// Stacks lost from truncated slots
        discarded: Vec<ItemStack>,
    },
}

/// Fixed-capacity slot inventory with one active slot
///
/// Every successful mutation queues an [`InventoryEvent`]. The queue is never
/// trimmed on its own: hosts must call [`Inventory::drain_events`] regularly
/// (once per frame is typical) or it keeps growing.
#[derive(Debug, Clone)]
pub struct Inventory {
    /// Configured capacity
    size: usize,
    /// Slots, always `size` long
    slots: Vec<InventorySlot>,
    /// Index of the only slot with the active flag set
    active_slot_index: usize,
    /// Pending change notifications, kept until drained
    events: Vec<InventoryEvent>,
}

impl Inventory {
    /// Create an inventory with `size` empty slots and the first one active
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(InventoryError::InvalidSize(size));
        }
        Ok(Self::with_size(size))
    }

    /// Create an inventory from configuration
    pub fn from_config(config: &InventoryConfig) -> Result<Self> {
        config.validate()?;
        let mut inventory = Self::with_size(config.size);
        inventory.set_active_slot_index(config.active_slot_index);
        inventory.events.clear();
        Ok(inventory)
    }

    fn with_size(size: usize) -> Self {
        let mut slots = vec![InventorySlot::new(); size];
        slots[0].set_active(true);
        Self {
            size,
            slots,
            active_slot_index: 0,
            events: Vec::new(),
        }
    }

    /// Apply a (possibly changed) configuration
    ///
    /// Resizes to the configured size, then selects the configured active slot.
    pub fn apply_config(&mut self, config: &InventoryConfig) -> Result<()> {
        config.validate()?;
        self.set_size(config.size)?;
        self.set_active_slot_index(config.active_slot_index);
        Ok(())
    }

    /// Get inventory capacity
    pub fn size(&self) -> usize {
        self.size
    }

    /// Change the capacity
    ///
    /// Shrinking drops trailing slots together with their contents.
    pub fn set_size(&mut self, size: usize) -> Result<()> {
        if size == 0 {
            return Err(InventoryError::InvalidSize(size));
        }
        self.size = size;
        self.setup_slot_size();
        Ok(())
    }

    /// Make the slot list exactly `size` long, keeping surviving contents
    fn setup_slot_size(&mut self) {
        let previous = self.slots.len();
        let mut discarded = Vec::new();

        if previous > self.size {
            discarded = self
                .slots
                .drain(self.size..)
                .filter(InventorySlot::has_item)
                .map(|mut slot| slot.clear())
                .collect();
            if !discarded.is_empty() {
                log::warn!(
                    "Shrinking inventory {} -> {} discarded {} stacks",
                    previous,
                    self.size,
                    discarded.len()
                );
            }
        } else if previous < self.size {
            self.slots.resize_with(self.size, InventorySlot::new);
        }

        let previous_active = self.active_slot_index;
        self.active_slot_index = previous_active.min(self.size - 1);
        for (index, slot) in self.slots.iter_mut().enumerate() {
            slot.set_active(index == self.active_slot_index);
        }

        if previous != self.size {
            log::debug!("Resized inventory {} -> {}", previous, self.size);
            self.events.push(InventoryEvent::Resized {
                from: previous,
                to: self.size,
                discarded,
            });
        }
        if previous_active != self.active_slot_index {
            self.events.push(InventoryEvent::ActiveSlotChanged {
                from: previous_active,
                to: self.active_slot_index,
            });
        }
    }

    /// Get all slots in order
    pub fn slots(&self) -> &[InventorySlot] {
        &self.slots
    }

    /// Get a slot by index
    pub fn slot(&self, index: usize) -> Option<&InventorySlot> {
        self.slots.get(index)
    }

    /// Get the active slot index
    pub fn active_slot_index(&self) -> usize {
        self.active_slot_index
    }

    /// Select the active slot
    ///
    /// Negative indices select the last slot; others wrap modulo the size.
    pub fn set_active_slot_index(&mut self, index: isize) {
        let previous = self.active_slot_index;
        self.slots[previous].set_active(false);
        self.active_slot_index = if index < 0 {
            self.size - 1
        } else {
            index as usize % self.size
        };
        self.slots[self.active_slot_index].set_active(true);

        if previous != self.active_slot_index {
            log::debug!("Active slot {} -> {}", previous, self.active_slot_index);
            self.events.push(InventoryEvent::ActiveSlotChanged {
                from: previous,
                to: self.active_slot_index,
            });
        }
    }

    /// Select the slot after the active one, wrapping to the first
    pub fn select_next(&mut self) {
        self.set_active_slot_index(self.active_slot_index as isize + 1);
    }

    /// Select the slot before the active one, wrapping to the last
    pub fn select_previous(&mut self) {
        self.set_active_slot_index(self.active_slot_index as isize - 1);
    }

    /// Get the active slot
    pub fn active_slot(&self) -> &InventorySlot {
        &self.slots[self.active_slot_index]
    }

    /// Get the stack in the active slot
    pub fn active_slot_item_stack(&self) -> &ItemStack {
        self.active_slot().stack()
    }

    /// Check if the active slot holds an item
    pub fn current_slot_has_item(&self) -> bool {
        self.active_slot().has_item()
    }

    /// Get number of occupied slots
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.has_item()).count()
    }

    /// Check if every slot is occupied
    pub fn is_full(&self) -> bool {
        debug_assert_eq!(self.slots.len(), self.size);
        self.slots.iter().all(InventorySlot::has_item)
    }

    /// Check if no slot is occupied
    pub fn is_empty(&self) -> bool {
        !self.slots.iter().any(InventorySlot::has_item)
    }

    /// Find first empty slot
    pub fn first_empty_slot_index(&self) -> Option<usize> {
        self.slots.iter().position(|s| !s.has_item())
    }

    /// Find the first slot holding `item`
    ///
    /// With `only_can_stack`, slots only match when the item type can stack.
    pub fn find_slot_index_by_item(&self, item: &ItemRef, only_can_stack: bool) -> Option<usize> {
        let index = self
            .slots
            .iter()
            .position(|s| s.item() == Some(item) && (item.can_stack || !only_can_stack));
        if index.is_none() {
            log::trace!("No slot for '{}' (only_can_stack: {})", item, only_can_stack);
        }
        index
    }

    /// Find the first slot holding `item`, see [`Self::find_slot_index_by_item`]
    pub fn find_slot_by_item(&self, item: &ItemRef, only_can_stack: bool) -> Option<&InventorySlot> {
        self.find_slot_index_by_item(item, only_can_stack)
            .map(|index| &self.slots[index])
    }

    /// Count total quantity of an item across all slots
    pub fn count_item(&self, item: &ItemRef) -> u32 {
        self.slots
            .iter()
            .filter(|s| s.item() == Some(item))
            .fold(0u32, |total, s| total.saturating_add(s.amount()))
    }

    /// Check if `stack` could be added without failing
    pub fn can_accept_item_stack(&self, stack: &ItemStack) -> bool {
        match stack.item() {
            Some(item) => !self.is_full() || self.find_slot_index_by_item(item, true).is_some(),
            None => false,
        }
    }

    /// Add a stack to the inventory
    ///
    /// Merges into the first slot already holding the same stackable item,
    /// otherwise takes the first empty slot. Returns the stack that was added.
    pub fn add_item_stack(&mut self, stack: ItemStack) -> Result<ItemStack> {
        let Some(item) = stack.item().cloned() else {
            return Err(InventoryError::EmptyStack {
                operation: InventoryOperation::Add,
            });
        };

        let full = InventoryError::Full {
            operation: InventoryOperation::Add,
        };
        let stackable = self.find_slot_index_by_item(&item, true);
        if self.is_full() && stackable.is_none() {
            log::debug!("Cannot add '{}' x{}: inventory full", item, stack.amount());
            return Err(full);
        }

        let (slot, merged) = match stackable {
            Some(index) => {
                self.slots[index].stack_mut().absorb(stack.amount());
                (index, true)
            }
            None => {
                let index = self.first_empty_slot_index().ok_or(full)?;
                self.slots[index].put(stack.clone());
                (index, false)
            }
        };

        log::debug!(
            "Added '{}' x{} to slot {} (now x{})",
            item,
            stack.amount(),
            slot,
            self.slots[slot].amount()
        );
        self.events.push(InventoryEvent::ItemAdded {
            slot,
            item,
            amount: stack.amount(),
            merged,
        });
        Ok(stack)
    }

    /// Remove the active slot's stack
    ///
    /// Returns the removed stack. Fails with [`InventoryError::SlotEmpty`] if
    /// the active slot holds nothing.
    pub fn remove_item_stack(&mut self) -> Result<ItemStack> {
        self.remove_active(None)
    }

    /// Remove the active slot's stack and spawn it into the world
    ///
    /// The spawner sees the stack before the slot is cleared.
    pub fn remove_and_spawn(&mut self, spawner: &mut dyn ItemSpawner) -> Result<ItemStack> {
        self.remove_active(Some(spawner))
    }

    fn remove_active(&mut self, spawner: Option<&mut dyn ItemSpawner>) -> Result<ItemStack> {
        if !self.current_slot_has_item() {
            return Err(InventoryError::SlotEmpty {
                operation: InventoryOperation::Remove,
            });
        }

        let spawned = spawner.is_some();
        if let Some(spawner) = spawner {
            spawner.spawn_item(self.active_slot_item_stack());
        }

        let slot = self.active_slot_index;
        let stack = self.slots[slot].clear();
        log::debug!(
            "Removed x{} from slot {} (spawned: {})",
            stack.amount(),
            slot,
            spawned
        );
        self.events.push(InventoryEvent::ItemRemoved {
            slot,
            stack: stack.clone(),
            spawned,
        });
        Ok(stack)
    }

    /// Clear the active slot, returning whatever it held
    pub fn clear_active_slot(&mut self) -> ItemStack {
        let slot = self.active_slot_index;
        let stack = self.slots[slot].clear();
        if !stack.is_empty() {
            self.events.push(InventoryEvent::ItemRemoved {
                slot,
                stack: stack.clone(),
                spawned: false,
            });
        }
        stack
    }

    /// Get pending events
    pub fn events(&self) -> &[InventoryEvent] {
        &self.events
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<InventoryEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::with_size(DEFAULT_INVENTORY_SIZE)
    }
}
