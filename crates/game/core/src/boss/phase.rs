//! Boss definitions and per-phase configuration.
//!
//! Definitions are authored as data and looked up by [`BossId`] through the
//! [`BossOracle`] contract. They are never mutated once loaded.

use std::collections::BTreeMap;

use crate::env::Court;
use crate::state::{BossId, EffectiveStats};

use super::ability::BossAbility;

/// Behavior tier. Ordered by severity; an encounter only ever moves forward.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum BossPhase {
    #[default]
    Phase1,
    Phase2,
    Phase3,
    Enraged,
}

/// Minions called in when a phase begins.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinionSummon {
    pub count: u32,
    /// Catalog id of the minion the caller should spawn.
    pub minion: String,
}

/// Immutable catalog entry for one phase of one boss.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossPhaseConfig {
    pub phase: BossPhase,
    /// The phase is entered once the health fraction drops to or below this.
    pub health_threshold: f32,
    #[cfg_attr(feature = "serde", serde(default = "one"))]
    pub damage_multiplier: f64,
    #[cfg_attr(feature = "serde", serde(default = "one"))]
    pub attack_speed_multiplier: f64,
    pub abilities: Vec<BossAbility>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub minions: Option<MinionSummon>,
    /// Whether entering this phase activates one new environmental hazard.
    #[cfg_attr(feature = "serde", serde(default))]
    pub activates_hazard: bool,
    /// Invulnerability window opened on entry; zero for none.
    #[cfg_attr(feature = "serde", serde(default))]
    pub invulnerable_turns: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub narration: String,
}

#[cfg(feature = "serde")]
fn one() -> f64 {
    1.0
}

impl BossPhaseConfig {
    pub fn new(phase: BossPhase, health_threshold: f32) -> Self {
        Self {
            phase,
            health_threshold,
            damage_multiplier: 1.0,
            attack_speed_multiplier: 1.0,
            abilities: Vec::new(),
            minions: None,
            activates_hazard: false,
            invulnerable_turns: 0,
            narration: String::new(),
        }
    }

    #[must_use]
    pub fn with_multipliers(mut self, damage: f64, attack_speed: f64) -> Self {
        self.damage_multiplier = damage;
        self.attack_speed_multiplier = attack_speed;
        self
    }

    #[must_use]
    pub fn with_abilities(mut self, abilities: impl IntoIterator<Item = BossAbility>) -> Self {
        self.abilities = abilities.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_minions(mut self, count: u32, minion: impl Into<String>) -> Self {
        self.minions = Some(MinionSummon {
            count,
            minion: minion.into(),
        });
        self
    }

    #[must_use]
    pub fn with_hazard(mut self) -> Self {
        self.activates_hazard = true;
        self
    }

    #[must_use]
    pub fn with_invulnerability(mut self, turns: u32) -> Self {
        self.invulnerable_turns = turns;
        self
    }

    #[must_use]
    pub fn with_narration(mut self, narration: impl Into<String>) -> Self {
        self.narration = narration.into();
        self
    }

    /// True once `health_fraction` is at or below this phase's threshold.
    pub fn is_crossed(&self, health_fraction: f32) -> bool {
        health_fraction <= self.health_threshold
    }
}

/// A boss as authored in the catalog.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossDefinition {
    pub id: BossId,
    pub name: String,
    pub stats: EffectiveStats,
    pub max_health: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub court: Court,
    #[cfg_attr(feature = "serde", serde(default))]
    pub experience: u32,
    /// Phase entries; kept sorted by severity.
    pub phases: Vec<BossPhaseConfig>,
}

impl BossDefinition {
    pub fn new(
        id: impl Into<BossId>,
        name: impl Into<String>,
        stats: EffectiveStats,
        max_health: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stats,
            max_health,
            court: Court::Neutral,
            experience: 0,
            phases: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_court(mut self, court: Court) -> Self {
        self.court = court;
        self
    }

    #[must_use]
    pub fn with_experience(mut self, experience: u32) -> Self {
        self.experience = experience;
        self
    }

    #[must_use]
    pub fn with_phase(mut self, config: BossPhaseConfig) -> Self {
        self.phases.push(config);
        self.sort_phases();
        self
    }

    fn sort_phases(&mut self) {
        self.phases.sort_by_key(|config| config.phase);
    }

    pub fn phase(&self, phase: BossPhase) -> Option<&BossPhaseConfig> {
        self.phases.iter().find(|config| config.phase == phase)
    }
}

/// Lookup-by-id contract for boss definitions.
pub trait BossOracle {
    fn definition(&self, id: &BossId) -> Option<&BossDefinition>;

    /// Returns all boss ids this oracle can provide.
    fn all_ids(&self) -> Vec<BossId> {
        Vec::new()
    }
}

/// In-memory boss catalog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BossCatalog {
    bosses: BTreeMap<BossId, BossDefinition>,
}

impl BossCatalog {
    pub fn new(definitions: impl IntoIterator<Item = BossDefinition>) -> Self {
        let mut catalog = Self::default();
        for definition in definitions {
            catalog.insert(definition);
        }
        catalog
    }

    /// Adds or replaces a definition, sorting its phases by severity.
    pub fn insert(&mut self, mut definition: BossDefinition) {
        definition.sort_phases();
        self.bosses.insert(definition.id.clone(), definition);
    }

    pub fn len(&self) -> usize {
        self.bosses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bosses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BossDefinition> {
        self.bosses.values()
    }
}

impl BossOracle for BossCatalog {
    fn definition(&self, id: &BossId) -> Option<&BossDefinition> {
        self.bosses.get(id)
    }

    fn all_ids(&self) -> Vec<BossId> {
        self.bosses.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_are_kept_in_severity_order() {
        let boss = BossDefinition::new("wyrm", "Wyrm", EffectiveStats::default(), 100)
            .with_phase(BossPhaseConfig::new(BossPhase::Phase3, 0.33))
            .with_phase(BossPhaseConfig::new(BossPhase::Phase1, 1.0))
            .with_phase(BossPhaseConfig::new(BossPhase::Phase2, 0.66));
        let order: Vec<_> = boss.phases.iter().map(|p| p.phase).collect();
        assert_eq!(
            order,
            vec![BossPhase::Phase1, BossPhase::Phase2, BossPhase::Phase3]
        );
    }

    #[test]
    fn catalog_lookup() {
        let catalog = BossCatalog::new([BossDefinition::new(
            "wyrm",
            "Wyrm",
            EffectiveStats::default(),
            100,
        )]);
        assert!(catalog.definition(&BossId::from("wyrm")).is_some());
        assert!(catalog.definition(&BossId::from("lich")).is_none());
        assert_eq!(catalog.all_ids(), vec![BossId::from("wyrm")]);
    }

    #[test]
    fn threshold_is_inclusive() {
        let config = BossPhaseConfig::new(BossPhase::Phase2, 0.66);
        assert!(!config.is_crossed(0.70));
        assert!(config.is_crossed(0.66));
        assert!(config.is_crossed(0.60));
    }
}
