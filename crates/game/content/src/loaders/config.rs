//! Engine configuration loader.

use std::path::Path;

use anyhow::ensure;
use combat_core::CombatConfig;

use crate::loaders::{LoadResult, is_probability, read_toml};

/// Loader for [`CombatConfig`] from TOML files.
///
/// Every field is optional; missing ones keep their defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let config: CombatConfig = read_toml(path, "combat config")?;
        Self::validate(&config)?;
        tracing::debug!(path = %path.display(), "Loaded combat config");
        Ok(config)
    }

    /// Parses config from an in-memory TOML string.
    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse combat config TOML: {}", e))?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &CombatConfig) -> LoadResult<()> {
        let combo = &config.combo;
        ensure!(combo.max_combo >= 1, "combo.max_combo must be at least 1");
        ensure!(
            combo.per_hit_bonus >= 0.0 && combo.cascade_bonus >= 0.0,
            "combo bonuses must not be negative"
        );

        let damage = &config.damage;
        for (name, value) in [
            ("crit_chance", damage.crit_chance),
            ("max_dodge_chance", damage.max_dodge_chance),
            ("bleed_chance", damage.bleed_chance),
            ("magic_status_chance", damage.magic_status_chance),
            ("base_flee_chance", damage.base_flee_chance),
        ] {
            ensure!(is_probability(value), "damage.{name} must be within [0, 1], got {value}");
        }
        ensure!(
            damage.variance_min > 0.0 && damage.variance_min <= damage.variance_max,
            "damage variance range [{}, {}] is invalid",
            damage.variance_min,
            damage.variance_max
        );
        ensure!(damage.crit_multiplier >= 1.0, "damage.crit_multiplier must be at least 1");

        ensure!(
            config.boss.ultimate_charge_threshold >= 1,
            "boss.ultimate_charge_threshold must be at least 1"
        );
        Ok(())
    }
}
