//! Entity-component definitions

pub mod components;

pub use components::*;
