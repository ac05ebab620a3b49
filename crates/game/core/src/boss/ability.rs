//! Boss abilities and their data-driven behaviors.
//!
//! Dispatch matches on [`AbilityBehavior`], never on the ability tag, so a new
//! ability is a table entry rather than a new match arm.

use std::collections::BTreeMap;

use crate::status::{StatusApplication, StatusEffectKind};

/// Abilities a boss can use.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum BossAbility {
    LifeDrain,
    AreaOfEffect,
    StatusCurse,
    EnrageMode,
    Shield,
    UltimateAttack,
    Teleport,
    SummonMinions,
    EnvironmentalHazard,
}

/// What an ability does when executed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityBehavior {
    /// Removes `fraction` of the target's max health.
    PercentMaxHealth {
        fraction: f64,
        /// Spends the accumulated ultimate charge.
        #[cfg_attr(feature = "serde", serde(default))]
        consumes_charge: bool,
    },
    /// Party-wide damage, delegated to the caller.
    PartyDamage { fraction: f64 },
    /// Curse-category status, delegated to the caller.
    Curse(StatusApplication),
    Enrage,
    /// Opens an invulnerability window.
    Shield { turns: u32 },
    Teleport,
    Summon { count: u32 },
    /// Activates one more environmental hazard.
    Hazard,
}

/// Side effect the caller must carry out after an ability resolves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BossSignal {
    PartyDamage { fraction: f64 },
    ApplyCurse(StatusApplication),
    SummonMinions { count: u32 },
}

/// Result of [`BossEncounters::execute_ability`](super::BossEncounters::execute_ability).
#[derive(Clone, Debug, PartialEq)]
pub struct BossAbilityOutcome {
    pub ability: BossAbility,
    pub description: String,
    /// Damage dealt directly to the target.
    pub damage: u32,
    pub signal: Option<BossSignal>,
}

impl BossAbilityOutcome {
    pub fn new(ability: BossAbility, description: impl Into<String>) -> Self {
        Self {
            ability,
            description: description.into(),
            damage: 0,
            signal: None,
        }
    }

    #[must_use]
    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage = damage;
        self
    }

    #[must_use]
    pub fn with_signal(mut self, signal: BossSignal) -> Self {
        self.signal = Some(signal);
        self
    }
}

/// Ability → behavior lookup table.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BossAbilityTable {
    behaviors: BTreeMap<BossAbility, AbilityBehavior>,
}

impl BossAbilityTable {
    pub fn standard() -> Self {
        use AbilityBehavior::*;
        use BossAbility as A;

        let behaviors = BTreeMap::from([
            (
                A::LifeDrain,
                PercentMaxHealth {
                    fraction: 0.15,
                    consumes_charge: false,
                },
            ),
            (A::AreaOfEffect, PartyDamage { fraction: 0.10 }),
            (
                A::StatusCurse,
                Curse(StatusApplication::new(StatusEffectKind::Cursed, 3, 1)),
            ),
            (A::EnrageMode, Enrage),
            (A::Shield, Shield { turns: 2 }),
            (
                A::UltimateAttack,
                PercentMaxHealth {
                    fraction: 0.40,
                    consumes_charge: true,
                },
            ),
            (A::Teleport, Teleport),
            (A::SummonMinions, Summon { count: 2 }),
            (A::EnvironmentalHazard, Hazard),
        ]);

        Self { behaviors }
    }

    pub fn behavior(&self, ability: BossAbility) -> Option<AbilityBehavior> {
        self.behaviors.get(&ability).copied()
    }

    pub fn insert(&mut self, ability: BossAbility, behavior: AbilityBehavior) {
        self.behaviors.insert(ability, behavior);
    }

    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn standard_table_covers_every_ability() {
        let table = BossAbilityTable::standard();
        for ability in BossAbility::iter() {
            assert!(table.behavior(ability).is_some(), "missing {ability}");
        }
    }

    #[test]
    fn ultimate_consumes_charge() {
        let table = BossAbilityTable::standard();
        assert_eq!(
            table.behavior(BossAbility::UltimateAttack),
            Some(AbilityBehavior::PercentMaxHealth {
                fraction: 0.40,
                consumes_charge: true
            })
        );
    }
}
