//! Dangerous-tag registry
//!
//! Bulk reclassification of explosive apparel for encounter generation.
//! Built once over the loaded templates, then run as an idempotent
//! apply/remove pass whenever the dangerous-spawning setting changes.

use crate::data::templates::ItemTemplates;

/// Tag marking an item type as a wearable explosive
pub const WEARABLE_EXPLOSIVE_TAG: &str = "WearableExplosive";

/// Knows which item types are flagged dangerous and what extra tags they
/// gain while dangerous spawning is enabled.
#[derive(Debug, Clone)]
pub struct DangerousTagRegistry {
    /// Ids of explosive templates that carry extra dangerous tags
    explosive_ids: Vec<String>,
}

impl DangerousTagRegistry {
    /// Scan the templates for wearable explosives with dangerous tags
    pub fn new(templates: &ItemTemplates) -> Self {
        let explosive_ids = templates
            .iter()
            .filter(|t| t.has_tag(WEARABLE_EXPLOSIVE_TAG) && !t.dangerous_tags.is_empty())
            .map(|t| t.id.clone())
            .collect();
        Self { explosive_ids }
    }

    /// Item type ids this registry manages
    pub fn explosive_ids(&self) -> &[String] {
        &self.explosive_ids
    }

    /// Merge each managed template's dangerous tags into its tag list.
    /// Idempotent: tags already present are left alone.
    pub fn apply_tags(&self, templates: &mut ItemTemplates) {
        for id in &self.explosive_ids {
            let Some(template) = templates.find_mut(id) else {
                continue;
            };
            log::info!("Adding raid tags to explosive: {}", template.id);
            let extra: Vec<String> = template
                .dangerous_tags
                .iter()
                .filter(|tag| !template.tags.contains(*tag))
                .cloned()
                .collect();
            template.tags.extend(extra);
        }
    }

    /// Strip each managed template's dangerous tags from its tag list.
    /// Idempotent: absent tags are ignored.
    pub fn remove_tags(&self, templates: &mut ItemTemplates) {
        for id in &self.explosive_ids {
            let Some(template) = templates.find_mut(id) else {
                continue;
            };
            log::info!("Removing raid tags from explosive: {}", template.id);
            let dangerous = template.dangerous_tags.clone();
            template.tags.retain(|tag| !dangerous.contains(tag));
        }
    }

    /// Apply or remove the tags according to the setting, as one pass.
    pub fn apply_setting(&self, dangerous_spawning: bool, templates: &mut ItemTemplates) {
        if dangerous_spawning {
            self.apply_tags(templates);
        } else {
            self.remove_tags(templates);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::templates::default_item_templates;

    #[test]
    fn test_registry_finds_tagged_explosives() {
        let templates = default_item_templates();
        let registry = DangerousTagRegistry::new(&templates);
        assert!(registry.explosive_ids().contains(&"suicide_vest".to_string()));
        // stacked charges are explosive but not apparel-tagged
        assert!(!registry.explosive_ids().contains(&"blasting_charge".to_string()));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut templates = default_item_templates();
        let registry = DangerousTagRegistry::new(&templates);

        registry.apply_tags(&mut templates);
        let once = templates.find("suicide_vest").unwrap().tags.clone();
        assert!(once.contains(&"RaidGear".to_string()));

        registry.apply_tags(&mut templates);
        assert_eq!(templates.find("suicide_vest").unwrap().tags, once);
    }

    #[test]
    fn test_remove_restores_original_tags() {
        let mut templates = default_item_templates();
        let original = templates.find("suicide_vest").unwrap().tags.clone();
        let registry = DangerousTagRegistry::new(&templates);

        registry.apply_setting(true, &mut templates);
        registry.apply_setting(false, &mut templates);
        assert_eq!(templates.find("suicide_vest").unwrap().tags, original);

        // removing again is harmless
        registry.remove_tags(&mut templates);
        assert_eq!(templates.find("suicide_vest").unwrap().tags, original);
    }
}
