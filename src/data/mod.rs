//! Data loading and external content
//!
//! Item templates (including detonation profiles) come from external RON
//! files with hardcoded defaults as fallback.

pub mod loader;
pub mod templates;

pub use loader::{DataError, DataManager};
pub use templates::{default_item_templates, ItemTemplate, ItemTemplates};
