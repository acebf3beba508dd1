//! Wearable explosives
//!
//! The detonation core: per-type profiles, the per-item component that
//! intercepts incoming damage, the detonation procedure, the manual
//! trigger command, and the dangerous-tag registry.

pub mod profile;
pub mod component;
pub mod effect;
pub mod command;
pub mod registry;

pub use profile::{DetonationProfile, SpawnSpec};
pub use component::{
    detonate, evaluate_trigger, handle_damage, would_detonate, DamageResponse, DetonationComponent,
};
pub use effect::{AreaEffectRequest, EffectHandle, ExplosionHost, RecordingHost};
pub use command::{run_command, worn_commands, CommandAction, OperatorCommand};
pub use registry::{DangerousTagRegistry, WEARABLE_EXPLOSIVE_TAG};
