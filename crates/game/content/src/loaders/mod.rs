//! Content loaders for reading combat data from files.
//!
//! Catalogs (elements, abilities, status templates, bosses, hazards) are RON;
//! engine tunables and difficulty presets are TOML. Every loader validates
//! what it reads so the engine never sees a malformed table.

pub mod abilities;
pub mod bosses;
pub mod config;
pub mod difficulty;
pub mod elements;
pub mod factory;
pub mod hazards;
pub mod status;

pub use abilities::AbilityLoader;
pub use bosses::{BossContent, BossLoader};
pub use config::ConfigLoader;
pub use difficulty::{DifficultyLoader, DifficultyPresets};
pub use elements::ElementLoader;
pub use factory::{ContentBundle, ContentFactory};
pub use hazards::HazardLoader;
pub use status::StatusLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Reads and parses a RON file, naming `what` in any error.
pub(crate) fn read_ron<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> LoadResult<T> {
    let content = read_file(path)?;
    ron::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {} RON at {}: {}", what, path.display(), e))
}

/// Reads and parses a TOML file, naming `what` in any error.
pub(crate) fn read_toml<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> LoadResult<T> {
    let content = read_file(path)?;
    toml::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {} TOML at {}: {}", what, path.display(), e))
}

fn is_probability(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}
