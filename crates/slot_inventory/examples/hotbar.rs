//! Hotbar demonstration
//!
//! This example shows:
//! - Loading an item catalog and inventory config from JSON
//! - Stacking pickups into existing slots
//! - Scrolling the active slot
//! - Dropping the active stack into the world
//!
//! Run with `RUST_LOG=debug` to see the inventory's own log output.

use slot_inventory::prelude::*;

const CATALOG: &str = r#"[
    { "key": "stone", "name": "Stone", "can_stack": true },
    { "key": "torch", "name": "Torch", "can_stack": true },
    { "key": "pickaxe", "name": "Pickaxe", "description": "Breaks stone" }
]"#;

const CONFIG: &str = r#"{ "size": 3, "active_slot_index": 0 }"#;

fn print_slots(inventory: &Inventory) {
    for (index, slot) in inventory.slots().iter().enumerate() {
        let marker = if slot.is_active() { '>' } else { ' ' };
        match slot.item() {
            Some(item) => println!("{} [{}] {} x{}", marker, index, item.name, slot.amount()),
            None => println!("{} [{}] -", marker, index),
        }
    }
    println!();
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    println!("Hotbar Demo");
    println!("===========\n");

    let catalog = ItemCatalog::from_json(CATALOG)?;
    let config = InventoryConfig::from_json(CONFIG)?;
    let mut hotbar = Inventory::from_config(&config)?;

    let stone = catalog.get("stone").ok_or("missing stone")?;
    let torch = catalog.get("torch").ok_or("missing torch")?;
    let pickaxe = catalog.get("pickaxe").ok_or("missing pickaxe")?;

    for pickup in [
        ItemStack::single(pickaxe.clone()),
        ItemStack::new(stone.clone(), 12),
        ItemStack::new(stone.clone(), 20),
        ItemStack::new(torch.clone(), 4),
        ItemStack::single(pickaxe.clone()),
    ] {
        if !hotbar.can_accept_item_stack(&pickup) {
            println!("No room for {}", pickup.item().map(|i| i.name.as_str()).unwrap_or("?"));
            continue;
        }
        hotbar.add_item_stack(pickup)?;
    }
    print_slots(&hotbar);

    hotbar.select_next();
    let mut drops = DropQueue::new([4.0, 0.0, -2.0]);
    let dropped = hotbar.remove_and_spawn(&mut drops)?;
    println!("Dropped {} x{}", dropped.item().map(|i| i.name.as_str()).unwrap_or("?"), dropped.amount());
    print_slots(&hotbar);

    for event in hotbar.drain_events() {
        println!("{:?}", event);
    }

    Ok(())
}
