//! Combat types

pub mod damage;

pub use damage::{DamageInfo, DamageKind};
