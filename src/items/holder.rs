//! Holder resolution
//!
//! Where an item currently is: loose on the map, worn by a creature, or
//! inside a container. A closed set of holder kinds keeps wearer lookup an
//! explicit query instead of open-ended type inspection.

use hecs::{Entity, World};

use super::equipment::EquipSlot;
use crate::ecs::Position;

/// Containers nested inside containers deeper than this are treated as
/// detached from the world.
const MAX_HOLDER_DEPTH: usize = 8;

/// Who is holding an item right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Holder {
    /// Lying in the world (or unplaced, if the item has no position)
    Loose,
    /// Worn in a creature's equipment slot
    Equipped { wearer: Entity, slot: EquipSlot },
    /// Inside another entity (chest, crate, corpse inventory)
    Container { container: Entity },
}

/// The creature currently wearing an item, if any.
pub fn wearer_of(world: &World, item: Entity) -> Option<Entity> {
    match world.get::<&Holder>(item) {
        Ok(holder) => match *holder {
            Holder::Equipped { wearer, .. } if world.contains(wearer) => Some(wearer),
            _ => None,
        },
        Err(_) => None,
    }
}

/// Whether an item is currently worn by a living creature.
pub fn is_worn(world: &World, item: Entity) -> bool {
    wearer_of(world, item).is_some()
}

/// Resolve the acting subject and blast origin for an item.
///
/// Worn items act through their wearer and use the wearer's position.
/// Anything else acts as itself, anchored at its own position or, failing
/// that, the position of whatever container chain it sits in. Returns
/// `None` when neither the item nor any holder is placed in the world.
pub fn resolve_origin(world: &World, item: Entity) -> Option<(Entity, Position)> {
    if let Some(wearer) = wearer_of(world, item) {
        return world.get::<&Position>(wearer).ok().map(|pos| (wearer, *pos));
    }

    let mut current = item;
    for _ in 0..MAX_HOLDER_DEPTH {
        if let Ok(pos) = world.get::<&Position>(current) {
            return Some((item, *pos));
        }
        match world.get::<&Holder>(current).map(|h| *h) {
            Ok(Holder::Container { container }) if world.contains(container) => {
                current = container;
            }
            _ => return None,
        }
    }
    None
}
