//! Elemental provider.
//!
//! Maps abilities and courts to elements and scores attack/defend matchups.

use std::collections::BTreeMap;

use super::AbilityKind;

/// Element carried by an attack or associated with a defender.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    #[default]
    Neutral,
    Fire,
    Ice,
    Lightning,
    Earth,
    Nature,
    Shadow,
    Light,
}

/// Court (allegiance) a participant belongs to.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Court {
    #[default]
    Neutral,
    Ember,
    Frost,
    Storm,
    Stone,
    Verdant,
    Unseelie,
    Seelie,
}

/// Oracle providing elemental lookups.
pub trait ElementalOracle {
    fn element_from_ability(&self, ability: AbilityKind) -> Element;

    fn element_from_court(&self, court: Court) -> Element;

    /// Damage factor for an attack of `attack` element against `defend`.
    fn damage_multiplier(&self, attack: Element, defend: Element) -> f64;

    /// Player-facing text describing the matchup; empty for a neutral one.
    fn effectiveness_message(&self, attack: Element, defend: Element) -> String {
        effectiveness_text(self.damage_multiplier(attack, defend)).to_string()
    }
}

/// Canonical text for a matchup multiplier.
pub fn effectiveness_text(multiplier: f64) -> &'static str {
    if multiplier <= 0.0 {
        "It has no effect."
    } else if multiplier >= 1.5 {
        "It's super effective!"
    } else if multiplier > 1.0 {
        "It's effective."
    } else if multiplier < 1.0 {
        "It's not very effective..."
    } else {
        ""
    }
}

/// A single attack/defend pairing.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matchup {
    pub attack: Element,
    pub defend: Element,
    pub multiplier: f64,
}

impl Matchup {
    pub const fn new(attack: Element, defend: Element, multiplier: f64) -> Self {
        Self {
            attack,
            defend,
            multiplier,
        }
    }
}

/// Table-backed elemental provider.
///
/// Pairings absent from `matchups` are neutral (1.0). Abilities and courts
/// absent from their maps resolve to [`Element::Neutral`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementChart {
    pub matchups: Vec<Matchup>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub courts: BTreeMap<Court, Element>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub abilities: BTreeMap<AbilityKind, Element>,
}

impl ElementChart {
    /// The chart shipped with the engine.
    pub fn standard() -> Self {
        use Element::*;

        let matchups = vec![
            Matchup::new(Fire, Ice, 1.5),
            Matchup::new(Fire, Nature, 1.5),
            Matchup::new(Fire, Earth, 0.75),
            Matchup::new(Fire, Fire, 0.5),
            Matchup::new(Ice, Nature, 1.5),
            Matchup::new(Ice, Earth, 1.25),
            Matchup::new(Ice, Fire, 0.5),
            Matchup::new(Ice, Ice, 0.5),
            Matchup::new(Lightning, Ice, 1.25),
            Matchup::new(Lightning, Earth, 0.5),
            Matchup::new(Earth, Lightning, 1.5),
            Matchup::new(Earth, Fire, 1.25),
            Matchup::new(Earth, Nature, 0.75),
            Matchup::new(Nature, Earth, 1.5),
            Matchup::new(Nature, Fire, 0.5),
            Matchup::new(Shadow, Light, 1.5),
            Matchup::new(Shadow, Shadow, 0.5),
            Matchup::new(Light, Shadow, 1.5),
            Matchup::new(Light, Light, 0.5),
        ];

        let courts = BTreeMap::from([
            (Court::Neutral, Neutral),
            (Court::Ember, Fire),
            (Court::Frost, Ice),
            (Court::Storm, Lightning),
            (Court::Stone, Earth),
            (Court::Verdant, Nature),
            (Court::Unseelie, Shadow),
            (Court::Seelie, Light),
        ]);

        let abilities = BTreeMap::from([
            (AbilityKind::Fireball, Fire),
            (AbilityKind::FrostBolt, Ice),
            (AbilityKind::LightningStrike, Lightning),
            (AbilityKind::EarthShatter, Earth),
            (AbilityKind::ThornLash, Nature),
            (AbilityKind::ShadowBolt, Shadow),
            (AbilityKind::HolySmite, Light),
        ]);

        Self {
            matchups,
            courts,
            abilities,
        }
    }
}

impl ElementalOracle for ElementChart {
    fn element_from_ability(&self, ability: AbilityKind) -> Element {
        self.abilities.get(&ability).copied().unwrap_or_default()
    }

    fn element_from_court(&self, court: Court) -> Element {
        self.courts.get(&court).copied().unwrap_or_default()
    }

    fn damage_multiplier(&self, attack: Element, defend: Element) -> f64 {
        self.matchups
            .iter()
            .find(|m| m.attack == attack && m.defend == defend)
            .map(|m| m.multiplier.max(0.0))
            .unwrap_or(1.0)
    }
}
