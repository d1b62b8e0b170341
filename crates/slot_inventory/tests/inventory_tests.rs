//! Integration tests for slot allocation and stacking
//!
//! Covers:
//! - Resizing and content preservation
//! - Active slot wrap-around
//! - Merge and full-reject behavior on add
//! - Removal from the active slot, with and without spawning

use slot_inventory::prelude::*;

struct Items {
    d1: ItemRef,
    d2: ItemRef,
    d3: ItemRef,
    d4: ItemRef,
}

fn catalog() -> Items {
    let mut catalog = ItemCatalog::new();
    Items {
        d1: catalog.register(ItemDefinition::new("d1", "Stone").stackable()).unwrap(),
        d2: catalog.register(ItemDefinition::new("d2", "Wood").stackable()).unwrap(),
        d3: catalog.register(ItemDefinition::new("d3", "Sword")).unwrap(),
        d4: catalog.register(ItemDefinition::new("d4", "Shield")).unwrap(),
    }
}

fn active_flags(inv: &Inventory) -> Vec<bool> {
    inv.slots().iter().map(InventorySlot::is_active).collect()
}

fn contents(inv: &Inventory) -> Vec<(Option<String>, u32)> {
    inv.slots()
        .iter()
        .map(|s| (s.item().map(|i| i.key.clone()), s.amount()))
        .collect()
}

#[test]
fn test_resize_is_idempotent() {
    let items = catalog();
    let mut inv = Inventory::new(3).unwrap();
    inv.add_item_stack(ItemStack::new(items.d1.clone(), 2)).unwrap();

    inv.set_size(5).unwrap();
    let once = inv.slots().to_vec();
    inv.set_size(5).unwrap();

    assert_eq!(inv.slots(), once.as_slice());
    assert_eq!(inv.slots().len(), 5);
}

#[test]
fn test_resize_preserves_surviving_slots() {
    let items = catalog();
    let mut inv = Inventory::new(4).unwrap();
    inv.add_item_stack(ItemStack::new(items.d1.clone(), 2)).unwrap();
    inv.add_item_stack(ItemStack::single(items.d3.clone())).unwrap();
    inv.add_item_stack(ItemStack::single(items.d4.clone())).unwrap();
    inv.drain_events();

    inv.set_size(2).unwrap();
    assert_eq!(
        contents(&inv),
        vec![(Some("d1".to_string()), 2), (Some("d3".to_string()), 1)]
    );

    let events = inv.drain_events();
    assert_eq!(
        events,
        vec![InventoryEvent::Resized {
            from: 4,
            to: 2,
            discarded: vec![ItemStack::single(items.d4.clone())],
        }]
    );

    inv.set_size(4).unwrap();
    assert_eq!(inv.slots().len(), 4);
    assert!(!inv.slots()[2].has_item());
    assert!(!inv.slots()[3].has_item());
    assert_eq!(inv.slots()[0].amount(), 2);
}

#[test]
fn test_active_index_wraps() {
    let size = 4;
    let mut inv = Inventory::new(size).unwrap();

    inv.set_active_slot_index(-1);
    assert_eq!(inv.active_slot_index(), size - 1);

    inv.set_active_slot_index(size as isize);
    assert_eq!(inv.active_slot_index(), 0);

    for k in 0..10 {
        inv.set_active_slot_index((size + k) as isize);
        assert_eq!(inv.active_slot_index(), k % size);
        assert_eq!(active_flags(&inv).iter().filter(|a| **a).count(), 1);
        assert!(inv.slots()[k % size].is_active());
    }

    inv.set_active_slot_index(-7);
    assert_eq!(inv.active_slot_index(), size - 1);
}

#[test]
fn test_add_merges_stackable() {
    let items = catalog();
    let mut inv = Inventory::new(3).unwrap();
    inv.add_item_stack(ItemStack::new(items.d1.clone(), 4)).unwrap();

    let added = inv.add_item_stack(ItemStack::new(items.d1.clone(), 6)).unwrap();

    assert_eq!(added.amount(), 6);
    assert_eq!(inv.occupied_count(), 1);
    assert_eq!(inv.slots()[0].amount(), 10);
    assert_eq!(inv.count_item(&items.d1), 10);
}

#[test]
fn test_merge_preferred_over_earlier_empty_slot() {
    let items = catalog();
    let mut inv = Inventory::new(3).unwrap();
    inv.add_item_stack(ItemStack::single(items.d3.clone())).unwrap();
    inv.add_item_stack(ItemStack::new(items.d1.clone(), 2)).unwrap();
    inv.remove_item_stack().unwrap();
    assert!(!inv.slots()[0].has_item());

    inv.add_item_stack(ItemStack::new(items.d1.clone(), 3)).unwrap();

    assert!(!inv.slots()[0].has_item());
    assert_eq!(inv.slots()[1].item(), Some(&items.d1));
    assert_eq!(inv.slots()[1].amount(), 5);
    assert_eq!(inv.occupied_count(), 1);
}

#[test]
fn test_non_stackable_fills_earlier_empty_slot() {
    let items = catalog();
    let mut inv = Inventory::new(3).unwrap();
    inv.add_item_stack(ItemStack::single(items.d4.clone())).unwrap();
    inv.add_item_stack(ItemStack::single(items.d3.clone())).unwrap();
    inv.remove_item_stack().unwrap();
    assert!(!inv.slots()[0].has_item());

    inv.add_item_stack(ItemStack::single(items.d3.clone())).unwrap();

    assert_eq!(inv.slots()[0].item(), Some(&items.d3));
    assert_eq!(inv.slots()[1].item(), Some(&items.d3));
    assert_eq!(inv.slots()[1].amount(), 1);
    assert_eq!(inv.occupied_count(), 2);
}

#[test]
fn test_merge_ignores_fullness() {
    let items = catalog();
    let mut inv = Inventory::new(2).unwrap();
    inv.add_item_stack(ItemStack::new(items.d1.clone(), 1)).unwrap();
    inv.add_item_stack(ItemStack::single(items.d3.clone())).unwrap();
    assert!(inv.is_full());

    assert!(inv.can_accept_item_stack(&ItemStack::single(items.d1.clone())));
    inv.add_item_stack(ItemStack::new(items.d1.clone(), 9)).unwrap();
    assert_eq!(inv.slots()[0].amount(), 10);
}

#[test]
fn test_full_rejects_and_leaves_slots_unchanged() {
    let items = catalog();
    let mut inv = Inventory::new(2).unwrap();
    inv.add_item_stack(ItemStack::single(items.d3.clone())).unwrap();
    inv.add_item_stack(ItemStack::single(items.d4.clone())).unwrap();
    inv.drain_events();
    let before = inv.slots().to_vec();

    for stack in [
        ItemStack::single(items.d3.clone()),
        ItemStack::new(items.d2.clone(), 5),
    ] {
        assert!(!inv.can_accept_item_stack(&stack));
        let err = inv.add_item_stack(stack).unwrap_err();
        assert_eq!(
            err,
            InventoryError::Full {
                operation: InventoryOperation::Add
            }
        );
    }

    assert_eq!(inv.slots(), before.as_slice());
    assert!(inv.events().is_empty());
}

#[test]
fn test_identity_not_value_equality() {
    let mut inv = Inventory::new(3).unwrap();
    let a = ItemRef::new(ItemDefinition::new("ore", "Ore").stackable());
    let b = ItemRef::new(ItemDefinition::new("ore", "Ore").stackable());

    inv.add_item_stack(ItemStack::new(a.clone(), 1)).unwrap();
    inv.add_item_stack(ItemStack::new(b.clone(), 1)).unwrap();

    assert_eq!(inv.occupied_count(), 2);
    assert_eq!(inv.find_slot_index_by_item(&b, true), Some(1));
}

#[test]
fn test_find_first_match_wins() {
    let items = catalog();
    let mut inv = Inventory::new(4).unwrap();
    inv.add_item_stack(ItemStack::single(items.d2.clone())).unwrap();
    inv.add_item_stack(ItemStack::single(items.d3.clone())).unwrap();
    inv.add_item_stack(ItemStack::single(items.d3.clone())).unwrap();

    assert_eq!(inv.find_slot_index_by_item(&items.d3, false), Some(1));
    assert!(inv.find_slot_by_item(&items.d3, true).is_none());
    assert!(inv.find_slot_by_item(&items.d1, false).is_none());
}

#[test]
fn test_remove_empty_slot_fails() {
    let items = catalog();
    let mut inv = Inventory::new(3).unwrap();
    inv.add_item_stack(ItemStack::single(items.d3.clone())).unwrap();
    inv.set_active_slot_index(2);
    let before = inv.slots().to_vec();

    let err = inv.remove_item_stack().unwrap_err();
    assert_eq!(
        err,
        InventoryError::SlotEmpty {
            operation: InventoryOperation::Remove
        }
    );
    assert_eq!(inv.slots(), before.as_slice());
}

#[test]
fn test_scenario_fill_then_reject() {
    let items = catalog();
    let mut inv = Inventory::new(3).unwrap();

    inv.add_item_stack(ItemStack::new(items.d1.clone(), 2)).unwrap();
    assert_eq!(contents(&inv)[0], (Some("d1".to_string()), 2));

    inv.add_item_stack(ItemStack::new(items.d1.clone(), 3)).unwrap();
    assert_eq!(contents(&inv)[0], (Some("d1".to_string()), 5));
    assert_eq!(inv.occupied_count(), 1);

    inv.add_item_stack(ItemStack::new(items.d2.clone(), 1)).unwrap();
    assert_eq!(contents(&inv)[1], (Some("d2".to_string()), 1));

    inv.add_item_stack(ItemStack::single(items.d3.clone())).unwrap();
    assert!(inv.is_full());

    let before = contents(&inv);
    let result = inv.add_item_stack(ItemStack::new(items.d4.clone(), 1));
    assert!(matches!(result, Err(InventoryError::Full { .. })));
    assert_eq!(contents(&inv), before);
}

#[test]
fn test_scenario_wrap_then_remove_empty() {
    let items = catalog();
    let mut inv = Inventory::new(2).unwrap();
    inv.add_item_stack(ItemStack::single(items.d1.clone())).unwrap();

    inv.set_active_slot_index(-1);
    assert_eq!(inv.active_slot_index(), 1);
    assert_eq!(active_flags(&inv), vec![false, true]);

    assert!(!inv.current_slot_has_item());
    assert!(matches!(
        inv.remove_item_stack(),
        Err(InventoryError::SlotEmpty { .. })
    ));
    assert_eq!(inv.slots()[0].amount(), 1);
}

#[test]
fn test_remove_and_spawn_into_drop_queue() {
    let items = catalog();
    let mut inv = Inventory::new(3).unwrap();
    inv.add_item_stack(ItemStack::new(items.d2.clone(), 7)).unwrap();
    let mut drops = DropQueue::new([0.0, 1.0, 0.0]);

    let removed = inv.remove_and_spawn(&mut drops).unwrap();

    assert_eq!(removed, ItemStack::new(items.d2.clone(), 7));
    assert!(inv.is_empty());
    let dropped = drops.drain();
    assert_eq!(dropped.len(), 1);
    assert_eq!(dropped[0].stack, removed);
    assert_eq!(dropped[0].position, [0.0, 1.0, 0.0]);

    assert!(inv.remove_and_spawn(&mut drops).is_err());
    assert!(drops.is_empty());
}

#[test]
fn test_freed_slot_is_reused_first() {
    let items = catalog();
    let mut inv = Inventory::new(3).unwrap();
    inv.add_item_stack(ItemStack::single(items.d3.clone())).unwrap();
    inv.add_item_stack(ItemStack::single(items.d4.clone())).unwrap();

    inv.remove_item_stack().unwrap();
    inv.add_item_stack(ItemStack::new(items.d2.clone(), 2)).unwrap();

    assert_eq!(inv.slots()[0].item(), Some(&items.d2));
    assert_eq!(inv.first_empty_slot_index(), Some(2));
}

#[test]
fn test_config_driven_inventory() {
    let config = InventoryConfig::from_json(r#"{ "size": 5, "active_slot_index": 7 }"#).unwrap();
    let mut inv = Inventory::from_config(&config).unwrap();
    assert_eq!(inv.size(), 5);
    assert_eq!(inv.active_slot_index(), 2);

    let shrunk = InventoryConfig::new(2).with_active_slot(0);
    inv.apply_config(&shrunk).unwrap();
    assert_eq!(inv.slots().len(), 2);
    assert_eq!(inv.active_slot_index(), 0);
    assert_eq!(active_flags(&inv), vec![true, false]);
}
