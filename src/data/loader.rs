//! RON data loader
//!
//! Loads item templates from external RON files, with fallback to the
//! hardcoded defaults. Spawning goes through here so every instance of an
//! explosive type shares one detonation profile.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use hecs::{Entity, World};
use thiserror::Error;

use super::templates::{default_item_templates, ItemTemplates};
use crate::ecs::Position;
use crate::explosives::component::DetonationComponent;
use crate::explosives::profile::DetonationProfile;
use crate::items::holder::Holder;
use crate::items::item::{Durability, Item};

/// Errors from the data-loading layer
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Manages all external game data
#[derive(Debug, Clone)]
pub struct DataManager {
    /// Item templates
    pub items: ItemTemplates,
    /// One shared profile per explosive type
    profiles: HashMap<String, Arc<DetonationProfile>>,
}

impl DataManager {
    /// Create a new DataManager, loading from files or using defaults
    pub fn new() -> Self {
        let items = match load_templates(Path::new("assets/data/items.ron")) {
            Ok(items) => items,
            Err(e) => {
                log::warn!("{}. Using default item templates.", e);
                default_item_templates()
            }
        };
        Self::from_templates(items)
    }

    /// Build a manager around already-loaded templates
    pub fn from_templates(items: ItemTemplates) -> Self {
        let profiles = items
            .iter()
            .filter_map(|t| {
                t.detonation
                    .as_ref()
                    .map(|p| (t.id.clone(), Arc::new(p.clone())))
            })
            .collect();
        Self { items, profiles }
    }

    /// Shared detonation profile for an item type, if it has one
    pub fn profile(&self, template_id: &str) -> Option<Arc<DetonationProfile>> {
        self.profiles.get(template_id).cloned()
    }

    /// Spawn an item instance from a template.
    ///
    /// Explosive types get a detonation component wired to the type's
    /// shared profile. Items spawned without a position stay unplaced
    /// until the host puts them somewhere.
    pub fn spawn_item(&self, world: &mut World, template_id: &str, pos: Option<Position>) -> Option<Entity> {
        let template = self.items.find(template_id)?;
        let item = world.spawn((
            Item {
                template_id: template.id.clone(),
                name: template.name.clone(),
                stack_count: 1,
                max_stack: template.max_stack,
            },
            Durability::new(template.max_durability),
            Holder::Loose,
        ));
        if let Some(pos) = pos {
            let _ = world.insert_one(item, pos);
        }
        if let Some(profile) = self.profile(template_id) {
            let _ = world.insert_one(item, DetonationComponent::new(profile));
        }
        Some(item)
    }
}

impl Default for DataManager {
    fn default() -> Self {
        Self::from_templates(default_item_templates())
    }
}

/// Load item templates from a RON file
pub fn load_templates(path: &Path) -> Result<ItemTemplates, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    ron::from_str(&content).map_err(|source| DataError::Parse {
        path: path.display().to_string(),
        source,
    })
}
