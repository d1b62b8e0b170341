//! Spawning removed stacks into the world

use crate::item::ItemStack;

/// Receives a stack the inventory is about to clear
///
/// Called before the slot is reset, so the stack holds the real contents. The
/// spawner must not call back into the same inventory.
pub trait ItemSpawner {
    /// Put the stack into the world at the holder's location
    fn spawn_item(&mut self, stack: &ItemStack);
}

impl<F> ItemSpawner for F
where
    F: FnMut(&ItemStack),
{
    fn spawn_item(&mut self, stack: &ItemStack) {
        self(stack)
    }
}

/// A stack dropped into the world
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedItem {
    /// Dropped contents
    pub stack: ItemStack,
    /// World position of the drop
    pub position: [f32; 3],
}

/// Spawner that queues drops at the holder's position
///
/// The host drains the queue and turns each entry into a world pickup.
#[derive(Debug, Clone, Default)]
pub struct DropQueue {
    /// Holder position used for new drops
    position: [f32; 3],
    /// Drops not yet drained
    drops: Vec<DroppedItem>,
}

impl DropQueue {
    /// Create a queue dropping at `position`
    pub fn new(position: [f32; 3]) -> Self {
        Self {
            position,
            drops: Vec::new(),
        }
    }

    /// Move the drop position (call when the holder moves)
    pub fn set_position(&mut self, position: [f32; 3]) {
        self.position = position;
    }

    /// Get the current drop position
    pub fn position(&self) -> [f32; 3] {
        self.position
    }

    /// Number of queued drops
    pub fn len(&self) -> usize {
        self.drops.len()
    }

    /// Check if nothing is queued
    pub fn is_empty(&self) -> bool {
        self.drops.is_empty()
    }

    /// Take all queued drops
    pub fn drain(&mut self) -> Vec<DroppedItem> {
        std::mem::take(&mut self.drops)
    }
}

impl ItemSpawner for DropQueue {
    fn spawn_item(&mut self, stack: &ItemStack) {
        log::debug!(
            "Dropping {} x{} at {:?}",
            stack.item().map(|i| i.key.as_str()).unwrap_or("nothing"),
            stack.amount(),
            self.position
        );
        self.drops.push(DroppedItem {
            stack: stack.clone(),
            position: self.position,
        });
    }
}
