//! Data-driven combat content and loaders.
//!
//! This crate provides loaders for the RON/TOML files that configure the
//! combat engine:
//! - Engine tunables and difficulty presets (TOML)
//! - Elemental chart and player ability catalog (RON)
//! - Status effect template overrides (RON)
//! - Boss definitions and environmental hazards (RON)
//!
//! All loaders deserialize straight into `combat-core` types and validate
//! what they read before handing it to the engine.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    AbilityLoader, BossContent, BossLoader, ConfigLoader, ContentBundle, ContentFactory,
    DifficultyLoader, DifficultyPresets, ElementLoader, HazardLoader, LoadResult, StatusLoader,
};
