//! Item templates
//!
//! Per-type item definitions. A template carries the immutable detonation
//! profile for explosive types plus the tag lists the dangerous-tag
//! registry works on.

use serde::{Deserialize, Serialize};

use crate::combat::DamageKind;
use crate::explosives::profile::{DetonationProfile, SpawnSpec};
use crate::items::equipment::EquipSlot;

/// One item type definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemTemplate {
    /// Stable id used for lookups and spawning
    pub id: String,
    /// Display name
    pub name: String,
    /// Slot this item is worn in, if wearable
    #[serde(default)]
    pub equip_slot: Option<EquipSlot>,
    /// Hit points of a freshly spawned instance
    pub max_durability: i32,
    /// Max stack size
    #[serde(default = "default_max_stack")]
    pub max_stack: u32,
    /// Classification tags (encounter generation reads these)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Extra tags merged in while dangerous spawning is enabled
    #[serde(default)]
    pub dangerous_tags: Vec<String>,
    /// Detonation profile, present only for explosive types
    #[serde(default)]
    pub detonation: Option<DetonationProfile>,
}

fn default_max_stack() -> u32 {
    1
}

impl ItemTemplate {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_explosive(&self) -> bool {
        self.detonation.is_some()
    }
}

/// All loaded item templates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemTemplates {
    pub templates: Vec<ItemTemplate>,
}

impl ItemTemplates {
    /// Find a template by id
    pub fn find(&self, id: &str) -> Option<&ItemTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut ItemTemplate> {
        self.templates.iter_mut().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemTemplate> {
        self.templates.iter()
    }
}

/// Built-in item templates used when no data files are present
pub fn default_item_templates() -> ItemTemplates {
    ItemTemplates {
        templates: vec![
            ItemTemplate {
                id: "suicide_vest".to_string(),
                name: "Suicide Vest".to_string(),
                equip_slot: Some(EquipSlot::Torso),
                max_durability: 100,
                max_stack: 1,
                tags: vec!["WearableExplosive".to_string()],
                dangerous_tags: vec!["RaidGear".to_string(), "Desperate".to_string()],
                detonation: Some(DetonationProfile {
                    radius: 1.9,
                    radius_growth_per_extra_unit: 0.0,
                    damage_kind: DamageKind::Bomb,
                    pre_spawn: None,
                    post_spawn: None,
                    damages_explosion_cell_neighbors: true,
                    visual_effect: Some("blast_flash".to_string()),
                    stability: 1.1,
                }),
            },
            ItemTemplate {
                id: "powder_sash".to_string(),
                name: "Powder Sash".to_string(),
                equip_slot: Some(EquipSlot::Waist),
                max_durability: 60,
                max_stack: 1,
                tags: vec!["WearableExplosive".to_string()],
                dangerous_tags: vec!["RaidGear".to_string()],
                detonation: Some(DetonationProfile {
                    radius: 1.2,
                    radius_growth_per_extra_unit: 0.0,
                    damage_kind: DamageKind::Flame,
                    pre_spawn: None,
                    post_spawn: Some(SpawnSpec {
                        entity_kind: "fire_puddle".to_string(),
                        chance: 0.4,
                        count: 1,
                    }),
                    damages_explosion_cell_neighbors: true,
                    visual_effect: None,
                    stability: 0.5,
                }),
            },
            ItemTemplate {
                id: "blasting_charge".to_string(),
                name: "Blasting Charge".to_string(),
                equip_slot: None,
                max_durability: 50,
                max_stack: 25,
                tags: vec![],
                dangerous_tags: vec![],
                detonation: Some(DetonationProfile {
                    radius: 2.6,
                    radius_growth_per_extra_unit: 0.8,
                    damage_kind: DamageKind::Bomb,
                    pre_spawn: Some(SpawnSpec {
                        entity_kind: "smoke".to_string(),
                        chance: 0.6,
                        count: 1,
                    }),
                    post_spawn: None,
                    damages_explosion_cell_neighbors: true,
                    visual_effect: None,
                    stability: 1.1,
                }),
            },
            ItemTemplate {
                id: "tattered_cloak".to_string(),
                name: "Tattered Cloak".to_string(),
                equip_slot: Some(EquipSlot::Torso),
                max_durability: 40,
                max_stack: 1,
                tags: vec![],
                dangerous_tags: vec![],
                detonation: None,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_contain_vest() {
        let templates = default_item_templates();
        let vest = templates.find("suicide_vest").unwrap();
        assert!(vest.is_explosive());
        assert!(vest.has_tag("WearableExplosive"));
        assert_eq!(vest.detonation.as_ref().unwrap().stability, 1.1);
    }

    #[test]
    fn test_templates_round_trip_through_ron() {
        let templates = default_item_templates();
        let text = ron::ser::to_string_pretty(&templates, ron::ser::PrettyConfig::default()).unwrap();
        let reloaded: ItemTemplates = ron::from_str(&text).unwrap();
        assert_eq!(reloaded.templates.len(), templates.templates.len());
        assert_eq!(
            reloaded.find("blasting_charge").unwrap().detonation,
            templates.find("blasting_charge").unwrap().detonation
        );
    }
}
