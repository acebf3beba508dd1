//! Item components

use serde::{Deserialize, Serialize};

/// An item instance in the world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Template id this item was spawned from
    pub template_id: String,
    /// Display name
    pub name: String,
    /// How many identical units this instance represents
    pub stack_count: u32,
    /// Max stack size
    pub max_stack: u32,
}

impl Item {
    pub fn new(template_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            template_id: template_id.into(),
            name: name.into(),
            stack_count: 1,
            max_stack: 1,
        }
    }

    pub fn is_stackable(&self) -> bool {
        self.max_stack > 1
    }
}

/// Hit points of an item
///
/// Separate from creature `Health`: items additionally latch a destroyed
/// flag so the transition only ever happens once.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Durability {
    pub current: i32,
    pub max: i32,
    pub destroyed: bool,
}

impl Durability {
    pub fn new(max: i32) -> Self {
        Self {
            current: max,
            max,
            destroyed: false,
        }
    }

    /// Apply damage; destroys the item when hit points run out
    pub fn take_damage(&mut self, amount: i32) {
        self.current = (self.current - amount).max(0);
        if self.current == 0 {
            self.destroyed = true;
        }
    }

    /// Mark the item destroyed. Idempotent.
    pub fn destroy(&mut self) {
        self.current = 0;
        self.destroyed = true;
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}
