//! Detonation profiles
//!
//! Immutable per-item-type configuration for the detonation component.
//! Loaded once with the item templates and shared by every instance of
//! that type.

use serde::{Deserialize, Serialize};

use crate::combat::DamageKind;

/// An entity spawned around the blast (shrapnel, smoke, fire puddles)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnSpec {
    /// What to spawn
    pub entity_kind: String,
    /// Per-cell spawn chance in [0, 1]
    pub chance: f32,
    /// How many to spawn per cell
    #[serde(default = "default_spawn_count")]
    pub count: u32,
}

fn default_spawn_count() -> u32 {
    1
}

/// Per-type detonation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetonationProfile {
    /// Base explosion radius
    pub radius: f32,
    /// Extra radius per additional unit in an un-worn stack; applied as
    /// sqrt((stack_count - 1) * growth)
    #[serde(default)]
    pub radius_growth_per_extra_unit: f32,
    /// Which damage model the explosion applies
    pub damage_kind: DamageKind,
    /// Optional entity spawned before the blast
    #[serde(default)]
    pub pre_spawn: Option<SpawnSpec>,
    /// Optional entity spawned after the blast
    #[serde(default)]
    pub post_spawn: Option<SpawnSpec>,
    /// Whether cells adjacent to the blast perimeter also take damage
    #[serde(default = "default_true")]
    pub damages_explosion_cell_neighbors: bool,
    /// Effect triggered at the blast origin before the explosion fires
    #[serde(default)]
    pub visual_effect: Option<String>,
    /// Scales how likely the item is to explode when it takes damage.
    ///   stability = max hit points: cannot detonate until full destruction
    ///   stability = 2: cannot detonate until at least half its HP is gone
    ///   stability = 0.5: at least a 50/50 chance of exploding on the first hit
    ///   stability = 0: could explode without taking any damage in theory
    #[serde(default = "default_stability")]
    pub stability: f32,
}

fn default_true() -> bool {
    true
}

fn default_stability() -> f32 {
    1.1
}

impl DetonationProfile {
    /// A minimal profile with the given radius and damage kind
    pub fn new(radius: f32, damage_kind: DamageKind) -> Self {
        Self {
            radius,
            radius_growth_per_extra_unit: 0.0,
            damage_kind,
            pre_spawn: None,
            post_spawn: None,
            damages_explosion_cell_neighbors: true,
            visual_effect: None,
            stability: default_stability(),
        }
    }

    /// Effective blast radius for an item in its current state.
    ///
    /// Un-worn stacks of identical units blow up bigger; worn items never
    /// get the stack bonus no matter how they are counted.
    pub fn effective_radius(&self, worn: bool, stack_count: u32) -> f32 {
        let mut radius = self.radius;
        if !worn && stack_count > 1 && self.radius_growth_per_extra_unit > 0.0 {
            radius += ((stack_count - 1) as f32 * self.radius_growth_per_extra_unit).sqrt();
        }
        radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worn_items_never_grow() {
        let mut profile = DetonationProfile::new(1.9, DamageKind::Bomb);
        profile.radius_growth_per_extra_unit = 0.8;
        assert_eq!(profile.effective_radius(true, 25), 1.9);
    }

    #[test]
    fn test_stack_growth_formula() {
        let mut profile = DetonationProfile::new(1.9, DamageKind::Bomb);
        profile.radius_growth_per_extra_unit = 0.8;
        let expected = 1.9 + ((25.0 - 1.0) * 0.8_f32).sqrt();
        assert_eq!(profile.effective_radius(false, 25), expected);
    }

    #[test]
    fn test_no_growth_without_factor() {
        let profile = DetonationProfile::new(1.9, DamageKind::Bomb);
        assert_eq!(profile.effective_radius(false, 25), 1.9);
    }

    #[test]
    fn test_single_unit_has_base_radius() {
        let mut profile = DetonationProfile::new(2.4, DamageKind::Flame);
        profile.radius_growth_per_extra_unit = 0.8;
        assert_eq!(profile.effective_radius(false, 1), 2.4);
    }

    #[test]
    fn test_profile_ron_defaults() {
        let profile: DetonationProfile =
            ron::from_str("(radius: 1.9, damage_kind: Bomb)").unwrap();
        assert_eq!(profile.stability, 1.1);
        assert!(profile.damages_explosion_cell_neighbors);
        assert!(profile.pre_spawn.is_none());
        assert!(profile.visual_effect.is_none());
    }
}
