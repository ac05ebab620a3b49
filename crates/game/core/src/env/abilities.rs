//! Magic ability catalog.
//!
//! Each ability maps to an [`AbilityProfile`] describing its mana cost,
//! damage factor, and the status effect it may attach on hit. The table is
//! built once and consulted by lookup, so adding an ability is a data change.

use std::collections::BTreeMap;

use crate::status::{StatusApplication, StatusEffectKind};

/// Magic abilities a participant can know.
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
pub enum AbilityKind {
    Fireball,
    FrostBolt,
    LightningStrike,
    EarthShatter,
    ThornLash,
    ShadowBolt,
    HolySmite,
    MindControl,
    Shield,
    Heal,
}

/// Resolution data for one ability.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityProfile {
    pub mana_cost: u32,
    /// Factor applied to the caster's magic power (0.0 = deals no damage).
    pub damage_multiplier: f64,
    /// Status effect offered to the caller on a successful roll.
    #[cfg_attr(feature = "serde", serde(default))]
    pub on_hit: Option<StatusApplication>,
}

impl AbilityProfile {
    pub const fn new(mana_cost: u32, damage_multiplier: f64) -> Self {
        Self {
            mana_cost,
            damage_multiplier,
            on_hit: None,
        }
    }

    #[must_use]
    pub const fn with_on_hit(
        mut self,
        kind: StatusEffectKind,
        duration: u32,
        potency: u32,
    ) -> Self {
        self.on_hit = Some(StatusApplication::new(kind, duration, potency));
        self
    }

    pub fn deals_damage(&self) -> bool {
        self.damage_multiplier > 0.0
    }
}

/// Oracle providing ability profiles.
pub trait AbilityOracle {
    fn profile(&self, ability: AbilityKind) -> Option<AbilityProfile>;
}

/// Table-backed ability oracle.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AbilityTable {
    profiles: BTreeMap<AbilityKind, AbilityProfile>,
}

impl AbilityTable {
    pub fn new(profiles: impl IntoIterator<Item = (AbilityKind, AbilityProfile)>) -> Self {
        Self {
            profiles: profiles.into_iter().collect(),
        }
    }

    /// The table shipped with the engine.
    ///
    /// Elemental offense and mind control hit harder than a plain strike;
    /// shields and healing deal no damage.
    pub fn standard() -> Self {
        use AbilityKind::*;
        use StatusEffectKind as S;

        Self::new([
            (Fireball, AbilityProfile::new(10, 1.5).with_on_hit(S::Burning, 3, 1)),
            (FrostBolt, AbilityProfile::new(10, 1.4).with_on_hit(S::Frozen, 1, 1)),
            (LightningStrike, AbilityProfile::new(12, 1.6).with_on_hit(S::Shocked, 2, 1)),
            (EarthShatter, AbilityProfile::new(12, 1.4).with_on_hit(S::Weakened, 2, 1)),
            (ThornLash, AbilityProfile::new(8, 1.3).with_on_hit(S::Poisoned, 3, 1)),
            (ShadowBolt, AbilityProfile::new(12, 1.5).with_on_hit(S::Cursed, 3, 1)),
            (HolySmite, AbilityProfile::new(12, 1.5).with_on_hit(S::Silenced, 1, 1)),
            (MindControl, AbilityProfile::new(20, 1.75).with_on_hit(S::Stunned, 1, 1)),
            (Shield, AbilityProfile::new(8, 0.0)),
            (Heal, AbilityProfile::new(8, 0.0)),
        ])
    }

    pub fn insert(&mut self, ability: AbilityKind, profile: AbilityProfile) {
        self.profiles.insert(ability, profile);
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl AbilityOracle for AbilityTable {
    fn profile(&self, ability: AbilityKind) -> Option<AbilityProfile> {
        self.profiles.get(&ability).copied()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn standard_table_covers_every_ability() {
        let table = AbilityTable::standard();
        for ability in AbilityKind::iter() {
            assert!(table.profile(ability).is_some(), "missing {ability}");
        }
    }

    #[test]
    fn support_magic_deals_no_damage() {
        let table = AbilityTable::standard();
        assert!(!table.profile(AbilityKind::Shield).unwrap().deals_damage());
        assert!(!table.profile(AbilityKind::Heal).unwrap().deals_damage());
        let fire = table.profile(AbilityKind::Fireball).unwrap();
        assert!(fire.damage_multiplier > 1.0);
        assert_eq!(fire.on_hit.unwrap().kind, StatusEffectKind::Burning);
    }

    #[test]
    fn frost_applies_frozen() {
        let table = AbilityTable::standard();
        let frost = table.profile(AbilityKind::FrostBolt).unwrap();
        assert_eq!(frost.on_hit.unwrap().kind, StatusEffectKind::Frozen);
    }
}
