//! Difficulty preset loader.
//!
//! ```toml
//! default = "normal"
//!
//! [presets.hard]
//! player_damage = 0.9
//! enemy_damage = 1.25
//! enemy_crit_chance = 0.05
//! flee_chance = -0.1
//! xp = 1.25
//! ```
//!
//! Preset names parse case-insensitively. Presets absent from the file keep
//! their built-in values.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::ensure;
use combat_core::{Difficulty, DifficultyTable};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_toml};

#[derive(Debug, Deserialize)]
struct DifficultyFile {
    #[serde(default)]
    default: Option<String>,
    #[serde(default)]
    presets: BTreeMap<String, DifficultyTable>,
}

/// Scaling tables for every difficulty preset.
#[derive(Clone, Debug, PartialEq)]
pub struct DifficultyPresets {
    default: Difficulty,
    presets: BTreeMap<Difficulty, DifficultyTable>,
}

impl DifficultyPresets {
    /// Built-in tables, Normal by default.
    pub fn builtin() -> Self {
        use strum::IntoEnumIterator;

        Self {
            default: Difficulty::default(),
            presets: Difficulty::iter()
                .map(|d| (d, DifficultyTable::preset(d)))
                .collect(),
        }
    }

    pub fn default_difficulty(&self) -> Difficulty {
        self.default
    }

    pub fn get(&self, difficulty: Difficulty) -> DifficultyTable {
        self.presets
            .get(&difficulty)
            .copied()
            .unwrap_or_else(|| DifficultyTable::preset(difficulty))
    }
}

impl Default for DifficultyPresets {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Loader for [`DifficultyPresets`] from TOML files.
pub struct DifficultyLoader;

impl DifficultyLoader {
    pub fn load(path: &Path) -> LoadResult<DifficultyPresets> {
        let file: DifficultyFile = read_toml(path, "difficulty")?;
        let presets = Self::build(file)?;
        tracing::debug!(
            path = %path.display(),
            default = %presets.default,
            "Loaded difficulty presets"
        );
        Ok(presets)
    }

    pub fn parse(content: &str) -> LoadResult<DifficultyPresets> {
        let file: DifficultyFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse difficulty TOML: {}", e))?;
        Self::build(file)
    }

    fn build(file: DifficultyFile) -> LoadResult<DifficultyPresets> {
        let mut presets = DifficultyPresets::builtin();

        if let Some(name) = file.default {
            presets.default = parse_difficulty(&name)?;
        }

        for (name, table) in file.presets {
            let difficulty = parse_difficulty(&name)?;
            ensure!(
                table.player_damage >= 0.0 && table.enemy_damage >= 0.0 && table.xp >= 0.0,
                "difficulty '{name}' has a negative multiplier"
            );
            presets.presets.insert(difficulty, table);
        }
        Ok(presets)
    }
}

fn parse_difficulty(name: &str) -> LoadResult<Difficulty> {
    name.parse()
        .map_err(|_| anyhow::anyhow!("Unknown difficulty preset '{}'", name))
}
