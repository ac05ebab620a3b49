//! Content factory for loading a full combat data directory.

use std::path::{Path, PathBuf};

use combat_core::{
    AbilityTable, BossAbilityTable, BossCatalog, BossEncounters, CombatConfig, ElementChart,
    HazardCatalog, StatusEffectEngine, StatusTemplates,
};

use crate::loaders::{
    AbilityLoader, BossLoader, ConfigLoader, DifficultyLoader, DifficultyPresets, ElementLoader,
    HazardLoader, LoadResult, StatusLoader,
};

/// Everything a combat session needs, loaded from one directory.
#[derive(Clone, Debug)]
pub struct ContentBundle {
    pub config: CombatConfig,
    pub difficulty: DifficultyPresets,
    pub elements: ElementChart,
    pub abilities: AbilityTable,
    pub status_templates: StatusTemplates,
    pub bosses: BossCatalog,
    pub boss_abilities: BossAbilityTable,
    pub hazards: HazardCatalog,
}

impl ContentBundle {
    /// Status engine seeded with the loaded templates.
    pub fn status_engine(&self) -> StatusEffectEngine {
        StatusEffectEngine::new(self.status_templates.clone())
    }

    /// Boss state machine over the loaded catalog and tables.
    pub fn boss_encounters(&self) -> BossEncounters<BossCatalog> {
        BossEncounters::new(
            self.bosses.clone(),
            self.boss_abilities.clone(),
            self.hazards.clone(),
            self.config.boss,
        )
    }
}

/// Content factory for loading combat data from a directory.
///
/// Expected layout:
///
/// ```text
/// data/
/// ├── config.toml       # engine tunables
/// ├── difficulty.toml   # difficulty presets
/// ├── elements.ron      # elemental chart
/// ├── abilities.ron     # player ability catalog
/// ├── status.ron        # status template overrides
/// ├── bosses.ron        # boss definitions
/// └── hazards.ron       # environmental hazards
/// ```
///
/// `config.toml`, `difficulty.toml` and `status.ron` are optional; built-in
/// values are used when they are absent.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(CombatConfig::default());
        }
        ConfigLoader::load(&path)
    }

    pub fn load_difficulty(&self) -> LoadResult<DifficultyPresets> {
        let path = self.data_dir.join("difficulty.toml");
        if !path.exists() {
            return Ok(DifficultyPresets::builtin());
        }
        DifficultyLoader::load(&path)
    }

    pub fn load_elements(&self) -> LoadResult<ElementChart> {
        ElementLoader::load(&self.data_dir.join("elements.ron"))
    }

    pub fn load_abilities(&self) -> LoadResult<AbilityTable> {
        AbilityLoader::load(&self.data_dir.join("abilities.ron"))
    }

    pub fn load_status_templates(&self) -> LoadResult<StatusTemplates> {
        let path = self.data_dir.join("status.ron");
        if !path.exists() {
            return Ok(StatusTemplates::standard());
        }
        StatusLoader::load(&path)
    }

    pub fn load_bosses(&self) -> LoadResult<(BossCatalog, BossAbilityTable)> {
        let content = BossLoader::load(&self.data_dir.join("bosses.ron"))?;
        Ok((content.catalog, content.abilities))
    }

    pub fn load_hazards(&self) -> LoadResult<HazardCatalog> {
        HazardLoader::load(&self.data_dir.join("hazards.ron"))
    }

    /// Loads every file into one bundle.
    pub fn load_bundle(&self) -> LoadResult<ContentBundle> {
        let (bosses, boss_abilities) = self.load_bosses()?;
        let bundle = ContentBundle {
            config: self.load_config()?,
            difficulty: self.load_difficulty()?,
            elements: self.load_elements()?,
            abilities: self.load_abilities()?,
            status_templates: self.load_status_templates()?,
            bosses,
            boss_abilities,
            hazards: self.load_hazards()?,
        };
        tracing::info!(
            data_dir = %self.data_dir.display(),
            bosses = bundle.bosses.len(),
            abilities = bundle.abilities.len(),
            "Loaded combat content"
        );
        Ok(bundle)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
