//! Item model
//!
//! Items are entities: a stack descriptor, a durability pool, and a holder
//! marker saying where the item currently is.

pub mod item;
pub mod equipment;
pub mod holder;

pub use item::{Durability, Item};
pub use equipment::{equip_item, unequip_item, EquipSlot, Equipment};
pub use holder::{is_worn, resolve_origin, wearer_of, Holder};
