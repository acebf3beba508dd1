//! Cindervest - damage-triggered wearable explosives
//!
//! A simulation component for turn-based worlds: items that, when struck,
//! may detonate in an area-effect blast instead of absorbing the hit.

pub mod ecs;
pub mod world;
pub mod items;
pub mod combat;
pub mod explosives;
pub mod data;
pub mod settings;

// Re-export commonly used types
pub use ecs::components::*;
pub use world::map::Map;
pub use explosives::{DamageResponse, DetonationComponent, DetonationProfile, ExplosionHost};
