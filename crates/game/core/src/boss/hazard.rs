//! Environmental hazards active during boss encounters.

use std::collections::BTreeMap;

/// Hazard kinds a boss arena can activate.
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
pub enum HazardKind {
    LavaPools,
    IceStorm,
    LightningField,
    PoisonMist,
    /// Drains mana instead of health.
    ArcaneVortex,
}

/// Which pool a hazard draws from each tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HazardEffect {
    #[default]
    Damage,
    ManaDrain,
}

/// Per-tick behavior of one hazard.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HazardProfile {
    pub kind: HazardKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: HazardEffect,
    /// Inclusive per-tick range.
    pub min: u32,
    pub max: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

impl HazardProfile {
    pub fn new(kind: HazardKind, effect: HazardEffect, min: u32, max: u32) -> Self {
        Self {
            kind,
            effect,
            min,
            max,
            description: String::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Totals from one environmental tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HazardTick {
    pub damage: u32,
    pub mana_drained: u32,
}

impl HazardTick {
    pub fn is_empty(&self) -> bool {
        self.damage == 0 && self.mana_drained == 0
    }
}

/// Kind → profile lookup table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HazardCatalog {
    hazards: BTreeMap<HazardKind, HazardProfile>,
}

impl HazardCatalog {
    pub fn new(profiles: impl IntoIterator<Item = HazardProfile>) -> Self {
        Self {
            hazards: profiles.into_iter().map(|p| (p.kind, p)).collect(),
        }
    }

    pub fn standard() -> Self {
        use HazardEffect::*;
        use HazardKind::*;

        Self::new([
            HazardProfile::new(LavaPools, Damage, 5, 10)
                .with_description("Lava bubbles up from the floor"),
            HazardProfile::new(IceStorm, Damage, 3, 8).with_description("Shards of ice rain down"),
            HazardProfile::new(LightningField, Damage, 4, 9)
                .with_description("Arcs of lightning crackle across the arena"),
            HazardProfile::new(PoisonMist, Damage, 2, 6)
                .with_description("A choking mist seeps in"),
            HazardProfile::new(ArcaneVortex, ManaDrain, 5, 12)
                .with_description("A vortex tears at the party's mana"),
        ])
    }

    pub fn get(&self, kind: HazardKind) -> Option<&HazardProfile> {
        self.hazards.get(&kind)
    }

    /// Registered kinds in stable order.
    pub fn kinds(&self) -> impl Iterator<Item = HazardKind> + '_ {
        self.hazards.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.hazards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hazards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn standard_catalog_covers_every_kind() {
        let catalog = HazardCatalog::standard();
        for kind in HazardKind::iter() {
            let profile = catalog.get(kind).unwrap();
            assert!(profile.min <= profile.max);
        }
    }

    #[test]
    fn only_the_vortex_drains_mana() {
        let catalog = HazardCatalog::standard();
        let draining: Vec<_> = catalog
            .kinds()
            .filter(|k| catalog.get(*k).map(|p| p.effect) == Some(HazardEffect::ManaDrain))
            .collect();
        assert_eq!(draining, vec![HazardKind::ArcaneVortex]);
    }
}
