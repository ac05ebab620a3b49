//! Boss catalog loader.
//!
//! RON format:
//!
//! ```ron
//! (
//!     bosses: [
//!         (
//!             id: "frost_queen",
//!             name: "The Frost Queen",
//!             stats: (strength: 18, agility: 6, magic_power: 22),
//!             max_health: 400,
//!             court: Frost,
//!             phases: [
//!                 (phase: Phase1, health_threshold: 1.0, abilities: [LifeDrain]),
//!             ],
//!         ),
//!     ],
//!     // Optional behavior overrides layered over the standard table.
//!     abilities: { Shield: Shield(turns: 3) },
//! )
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::{Context, ensure};
use combat_core::{
    AbilityBehavior, BossAbility, BossAbilityTable, BossCatalog, BossDefinition, BossPhase,
};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_ron};

#[derive(Debug, Deserialize)]
struct BossFile {
    bosses: Vec<BossDefinition>,
    #[serde(default)]
    abilities: BTreeMap<BossAbility, AbilityBehavior>,
}

/// Bosses plus the ability table they resolve against.
#[derive(Clone, Debug, PartialEq)]
pub struct BossContent {
    pub catalog: BossCatalog,
    pub abilities: BossAbilityTable,
}

/// Loader for boss definitions from RON files.
pub struct BossLoader;

impl BossLoader {
    pub fn load(path: &Path) -> LoadResult<BossContent> {
        let file: BossFile = read_ron(path, "boss catalog")?;

        let mut seen = BTreeSet::new();
        for boss in &file.bosses {
            validate(boss).with_context(|| format!("invalid boss in {}", path.display()))?;
            ensure!(seen.insert(boss.id.clone()), "boss '{}' is defined twice", boss.id);
        }

        let mut abilities = BossAbilityTable::standard();
        for (ability, behavior) in file.abilities {
            abilities.insert(ability, behavior);
        }

        let catalog = BossCatalog::new(file.bosses);
        tracing::debug!(path = %path.display(), bosses = catalog.len(), "Loaded boss catalog");
        Ok(BossContent { catalog, abilities })
    }
}

fn validate(boss: &BossDefinition) -> LoadResult<()> {
    ensure!(!boss.id.is_empty(), "boss id must not be empty");
    ensure!(boss.max_health > 0, "boss '{}' has zero max health", boss.id);
    ensure!(
        boss.phase(BossPhase::Phase1).is_some(),
        "boss '{}' has no Phase1 configuration",
        boss.id
    );

    let mut phases = BTreeSet::new();
    for config in &boss.phases {
        ensure!(
            phases.insert(config.phase),
            "boss '{}' configures {} twice",
            boss.id,
            config.phase
        );
        ensure!(
            (0.0..=1.0).contains(&config.health_threshold),
            "boss '{}' {} threshold {} is outside [0, 1]",
            boss.id,
            config.phase,
            config.health_threshold
        );
        ensure!(
            config.damage_multiplier >= 0.0,
            "boss '{}' {} has a negative damage multiplier",
            boss.id,
            config.phase
        );
    }

    let mut ordered: Vec<_> = boss.phases.iter().collect();
    ordered.sort_by_key(|config| config.phase);
    for pair in ordered.windows(2) {
        let (milder, severer) = (pair[0], pair[1]);
        ensure!(
            severer.health_threshold <= milder.health_threshold,
            "boss '{}' {} threshold {} is above {} threshold {}",
            boss.id,
            severer.phase,
            severer.health_threshold,
            milder.phase,
            milder.health_threshold
        );
    }
    Ok(())
}
