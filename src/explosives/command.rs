//! Manual trigger command
//!
//! Operator-invocable detonation for worn explosives. Bypasses the
//! probability model entirely and runs the same detonation procedure the
//! automatic trigger uses.

use hecs::{Entity, World};

use super::component::{detonate, DetonationComponent};
use super::effect::ExplosionHost;
use crate::items::holder::is_worn;
use crate::world::Map;

/// An operator-invocable action the host surfaces in its UI
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorCommand {
    pub label: String,
    pub description: String,
    pub icon: String,
    pub action: CommandAction,
}

/// What an operator command does when invoked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    /// Detonate the given worn item immediately
    Detonate(Entity),
}

/// Commands available for an item while it is worn.
///
/// Yields the detonate command only for a live explosive currently in a
/// creature's equipment slot; unequipped items expose nothing.
pub fn worn_commands(world: &World, item: Entity) -> Vec<OperatorCommand> {
    let mut commands = Vec::new();

    if !is_worn(world, item) {
        return commands;
    }
    let live_explosive = world
        .get::<&DetonationComponent>(item)
        .map(|c| !c.has_detonated())
        .unwrap_or(false);
    if !live_explosive {
        return commands;
    }

    commands.push(OperatorCommand {
        label: "Detonate".to_string(),
        description: "Set off the explosive immediately.".to_string(),
        icon: "ui/buttons/blast_flame".to_string(),
        action: CommandAction::Detonate(item),
    });
    commands
}

/// Run an operator command. Success is observed via the resulting
/// explosion; there is nothing to return.
pub fn run_command(world: &mut World, map: &Map, action: CommandAction, host: &mut dyn ExplosionHost) {
    match action {
        CommandAction::Detonate(item) => detonate(world, map, item, host),
    }
}
