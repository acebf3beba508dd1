//! Equipment system
//!
//! Maps a creature's slots to worn item entities and keeps the items'
//! holder markers in sync.

use std::collections::HashMap;

use hecs::{Entity, World};
use serde::{Deserialize, Serialize};

use super::holder::Holder;
use crate::ecs::Position;

/// Equipment slot for wearable items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipSlot {
    Head,
    Torso,
    Waist,
    Hands,
    Feet,
}

impl EquipSlot {
    pub fn name(&self) -> &'static str {
        match self {
            EquipSlot::Head => "Head",
            EquipSlot::Torso => "Torso",
            EquipSlot::Waist => "Waist",
            EquipSlot::Hands => "Hands",
            EquipSlot::Feet => "Feet",
        }
    }
}

/// Worn items per slot
#[derive(Debug, Clone, Default)]
pub struct Equipment {
    slots: HashMap<EquipSlot, Entity>,
}

impl Equipment {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Get item in a slot
    pub fn get(&self, slot: EquipSlot) -> Option<Entity> {
        self.slots.get(&slot).copied()
    }

    /// Check if a slot is empty
    pub fn is_empty(&self, slot: EquipSlot) -> bool {
        !self.slots.contains_key(&slot)
    }

    /// All worn item entities
    pub fn all_items(&self) -> impl Iterator<Item = Entity> + '_ {
        self.slots.values().copied()
    }
}

/// Equip an item on a wearer, returning the previously worn item if any.
///
/// Worn items lose their own position and track the wearer instead; a
/// displaced item is dropped at the wearer's feet.
pub fn equip_item(world: &mut World, wearer: Entity, item: Entity, slot: EquipSlot) -> Option<Entity> {
    if !world.contains(wearer) || !world.contains(item) {
        return None;
    }

    if world.get::<&Equipment>(wearer).is_err() {
        let _ = world.insert_one(wearer, Equipment::new());
    }

    let displaced = {
        let mut equipment = world.get::<&mut Equipment>(wearer).ok()?;
        equipment.slots.insert(slot, item)
    };

    let _ = world.insert_one(item, Holder::Equipped { wearer, slot });
    let _ = world.remove_one::<Position>(item);

    if let Some(old) = displaced {
        drop_at_wearer(world, wearer, old);
    }
    displaced
}

/// Take an item out of a wearer's slot, dropping it at the wearer's feet.
pub fn unequip_item(world: &mut World, wearer: Entity, slot: EquipSlot) -> Option<Entity> {
    let item = {
        let mut equipment = world.get::<&mut Equipment>(wearer).ok()?;
        equipment.slots.remove(&slot)?
    };
    drop_at_wearer(world, wearer, item);
    Some(item)
}

/// Place an item loose at the wearer's position. A wearer without a
/// position leaves the item unplaced until the host puts it somewhere.
fn drop_at_wearer(world: &mut World, wearer: Entity, item: Entity) {
    let _ = world.insert_one(item, Holder::Loose);
    let wearer_pos = world.get::<&Position>(wearer).ok().map(|p| *p);
    if let Some(pos) = wearer_pos {
        let _ = world.insert_one(item, pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::{Health, Name};
    use crate::items::item::Item;

    fn spawn_wearer(world: &mut World, pos: Position) -> Entity {
        world.spawn((Name::new("Grim"), Health::new(30), pos, Equipment::new()))
    }

    fn spawn_item(world: &mut World, pos: Position) -> Entity {
        world.spawn((Item::new("vest", "Vest"), pos, Holder::Loose))
    }

    #[test]
    fn test_equip_updates_holder() {
        let mut world = World::new();
        let wearer = spawn_wearer(&mut world, Position::new(2, 2));
        let item = spawn_item(&mut world, Position::new(5, 5));

        assert_eq!(equip_item(&mut world, wearer, item, EquipSlot::Torso), None);

        let holder = *world.get::<&Holder>(item).unwrap();
        assert!(matches!(holder, Holder::Equipped { wearer: w, slot: EquipSlot::Torso } if w == wearer));
        // worn items track the wearer, not their old spot
        assert!(world.get::<&Position>(item).is_err());
    }

    #[test]
    fn test_unequip_drops_at_wearer() {
        let mut world = World::new();
        let wearer = spawn_wearer(&mut world, Position::new(2, 2));
        let item = spawn_item(&mut world, Position::new(5, 5));
        equip_item(&mut world, wearer, item, EquipSlot::Torso);

        assert_eq!(unequip_item(&mut world, wearer, EquipSlot::Torso), Some(item));
        assert!(matches!(*world.get::<&Holder>(item).unwrap(), Holder::Loose));
        assert_eq!(*world.get::<&Position>(item).unwrap(), Position::new(2, 2));
    }

    #[test]
    fn test_equip_displaces_previous() {
        let mut world = World::new();
        let wearer = spawn_wearer(&mut world, Position::new(1, 1));
        let first = spawn_item(&mut world, Position::new(0, 0));
        let second = spawn_item(&mut world, Position::new(0, 1));

        equip_item(&mut world, wearer, first, EquipSlot::Torso);
        let displaced = equip_item(&mut world, wearer, second, EquipSlot::Torso);

        assert_eq!(displaced, Some(first));
        assert!(matches!(*world.get::<&Holder>(first).unwrap(), Holder::Loose));
        assert_eq!(*world.get::<&Position>(first).unwrap(), Position::new(1, 1));
    }
}
