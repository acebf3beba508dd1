//! Damage descriptors
//!
//! What a single application of damage looks like when the host resolves
//! a hit against an entity or item.

use serde::{Deserialize, Serialize};

/// Damage models the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageKind {
    Blunt,
    Cut,
    Pierce,
    Burn,
    Bomb,
    Flame,
    /// Ambient wear from age and weather
    Deterioration,
}

impl DamageKind {
    /// Whether this kind counts as external violence done to the target.
    /// Deterioration is ambient wear and never carries the flag.
    pub fn is_external_violence(&self) -> bool {
        !matches!(self, DamageKind::Deterioration)
    }

    pub fn name(&self) -> &'static str {
        match self {
            DamageKind::Blunt => "Blunt",
            DamageKind::Cut => "Cut",
            DamageKind::Pierce => "Pierce",
            DamageKind::Burn => "Burn",
            DamageKind::Bomb => "Bomb",
            DamageKind::Flame => "Flame",
            DamageKind::Deterioration => "Deterioration",
        }
    }
}

/// A single incoming damage application
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageInfo {
    /// Which damage model applies
    pub kind: DamageKind,
    /// How much damage is being applied
    pub amount: i32,
    /// Whether this is external violence (weapon hits, explosions) as
    /// opposed to ambient wear. Instigator is ignored by design.
    pub external_violence: bool,
}

impl DamageInfo {
    pub fn new(kind: DamageKind, amount: i32) -> Self {
        Self {
            kind,
            amount,
            external_violence: kind.is_external_violence(),
        }
    }

    /// Build a damage application that is explicitly not external violence
    /// (deterioration, environmental decay)
    pub fn ambient(kind: DamageKind, amount: i32) -> Self {
        Self {
            kind,
            amount,
            external_violence: false,
        }
    }
}
