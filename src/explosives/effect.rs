//! Host effect surface
//!
//! The side-effecting calls the detonation core issues. The host owns all
//! resulting world mutation; from this side the area effect is
//! fire-and-forget.

use hecs::Entity;

use super::profile::SpawnSpec;
use crate::combat::DamageKind;
use crate::ecs::Position;

/// Handle to a spawned visual effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectHandle(pub u64);

/// Everything the host needs to execute one explosion
#[derive(Debug, Clone, PartialEq)]
pub struct AreaEffectRequest {
    /// Blast origin
    pub origin: Position,
    /// Effective radius, stack growth already applied
    pub radius: f32,
    /// Damage model of the blast
    pub damage_kind: DamageKind,
    /// The originating item, as the effect's instigator
    pub source: Entity,
    /// Entity spawned before the blast
    pub pre_spawn: Option<SpawnSpec>,
    /// Entity spawned after the blast
    pub post_spawn: Option<SpawnSpec>,
    /// Whether cells adjacent to the perimeter also take damage
    pub damages_cell_neighbors: bool,
}

/// The host services a detonation invokes
pub trait ExplosionHost {
    /// Instantiate a visual effect at the given origin
    fn spawn_effect(&mut self, effect: &str, origin: Position) -> EffectHandle;

    /// Trigger a previously spawned effect
    fn trigger_effect(&mut self, handle: EffectHandle, origin: Position);

    /// Release a spawned effect. Effects never persist past the
    /// detonation procedure that spawned them.
    fn cleanup_effect(&mut self, handle: EffectHandle);

    /// Execute the area effect
    fn execute_area_effect(&mut self, request: AreaEffectRequest);
}

/// A host that records every invocation and mutates nothing.
///
/// Used by the test suite and by headless harnesses that want to inspect
/// what a detonation asked for.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub spawned_effects: Vec<(String, Position)>,
    pub triggered_effects: Vec<EffectHandle>,
    pub cleaned_effects: Vec<EffectHandle>,
    pub area_effects: Vec<AreaEffectRequest>,
    next_handle: u64,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExplosionHost for RecordingHost {
    fn spawn_effect(&mut self, effect: &str, origin: Position) -> EffectHandle {
        self.spawned_effects.push((effect.to_string(), origin));
        let handle = EffectHandle(self.next_handle);
        self.next_handle += 1;
        handle
    }

    fn trigger_effect(&mut self, handle: EffectHandle, _origin: Position) {
        self.triggered_effects.push(handle);
    }

    fn cleanup_effect(&mut self, handle: EffectHandle) {
        self.cleaned_effects.push(handle);
    }

    fn execute_area_effect(&mut self, request: AreaEffectRequest) {
        self.area_effects.push(request);
    }
}
