//! Status effect kinds and their static templates.
//!
//! Every derived field of a [`StatusEffect`](super::StatusEffect) comes from
//! the template registered for its kind. [`StatusTemplates::standard`] holds
//! the shipped values; content files may override individual entries.

use std::collections::BTreeMap;

/// Types of status effects.
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
pub enum StatusEffectKind {
    // ========================================================================
    // Damage over time
    // ========================================================================
    Burning,
    Poisoned,
    Bleeding,
    Shocked,
    Cursed,

    // ========================================================================
    // Crowd control (restricts actions)
    // ========================================================================
    /// Cannot act; takes extra damage.
    Frozen,
    /// Cannot act.
    Stunned,
    /// Cannot use magic.
    Silenced,

    // ========================================================================
    // Stat modifiers
    // ========================================================================
    Weakened,
    Strengthened,
    Shielded,

    // ========================================================================
    // Healing over time
    // ========================================================================
    Regenerating,
}

/// Whether an effect helps or hinders its holder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectClass {
    Buff,
    Debuff,
}

/// Which damage figure a stat modifier scales.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModifierTarget {
    /// Damage the holder deals.
    Outgoing,
    /// Damage the holder takes.
    Incoming,
}

/// Multiplicative stat modifier carried by an effect.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatModifier {
    pub target: ModifierTarget,
    pub multiplier: f64,
}

impl StatModifier {
    pub const fn outgoing(multiplier: f64) -> Self {
        Self {
            target: ModifierTarget::Outgoing,
            multiplier,
        }
    }

    pub const fn incoming(multiplier: f64) -> Self {
        Self {
            target: ModifierTarget::Incoming,
            multiplier,
        }
    }
}

bitflags::bitflags! {
    /// Actions an effect prevents while active.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct Restrictions: u8 {
        /// No action at all.
        const ACTION = 0b0000_0001;
        /// No spellcasting.
        const MAGIC = 0b0000_0010;
    }
}

/// Static data for one status effect kind.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusTemplate {
    /// Per-turn value for potency 1: positive damages, negative heals.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tick_per_potency: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub modifier: Option<StatModifier>,
    pub class: EffectClass,
    #[cfg_attr(feature = "serde", serde(default))]
    pub restrictions: Restrictions,
}

impl StatusTemplate {
    pub const fn debuff() -> Self {
        Self {
            tick_per_potency: 0,
            modifier: None,
            class: EffectClass::Debuff,
            restrictions: Restrictions::empty(),
        }
    }

    pub const fn buff() -> Self {
        Self {
            tick_per_potency: 0,
            modifier: None,
            class: EffectClass::Buff,
            restrictions: Restrictions::empty(),
        }
    }

    #[must_use]
    pub const fn ticking(mut self, per_potency: i32) -> Self {
        self.tick_per_potency = per_potency;
        self
    }

    #[must_use]
    pub const fn modifying(mut self, modifier: StatModifier) -> Self {
        self.modifier = Some(modifier);
        self
    }

    #[must_use]
    pub const fn restricting(mut self, restrictions: Restrictions) -> Self {
        self.restrictions = restrictions;
        self
    }
}

/// Kind → template lookup table.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StatusTemplates {
    templates: BTreeMap<StatusEffectKind, StatusTemplate>,
}

impl StatusTemplates {
    /// The templates shipped with the engine.
    pub fn standard() -> Self {
        use StatusEffectKind::*;

        let templates = BTreeMap::from([
            (Burning, StatusTemplate::debuff().ticking(5)),
            (Poisoned, StatusTemplate::debuff().ticking(3)),
            (Bleeding, StatusTemplate::debuff().ticking(4)),
            (Shocked, StatusTemplate::debuff().ticking(3)),
            (
                Cursed,
                StatusTemplate::debuff()
                    .ticking(2)
                    .modifying(StatModifier::outgoing(0.9)),
            ),
            (
                Frozen,
                StatusTemplate::debuff()
                    .modifying(StatModifier::incoming(1.25))
                    .restricting(Restrictions::ACTION),
            ),
            (
                Stunned,
                StatusTemplate::debuff().restricting(Restrictions::ACTION),
            ),
            (
                Silenced,
                StatusTemplate::debuff().restricting(Restrictions::MAGIC),
            ),
            (
                Weakened,
                StatusTemplate::debuff().modifying(StatModifier::outgoing(0.75)),
            ),
            (
                Strengthened,
                StatusTemplate::buff().modifying(StatModifier::outgoing(1.25)),
            ),
            (
                Shielded,
                StatusTemplate::buff().modifying(StatModifier::incoming(0.5)),
            ),
            (Regenerating, StatusTemplate::buff().ticking(-5)),
        ]);

        Self { templates }
    }

    pub fn get(&self, kind: StatusEffectKind) -> Option<&StatusTemplate> {
        self.templates.get(&kind)
    }

    pub fn insert(&mut self, kind: StatusEffectKind, template: StatusTemplate) {
        self.templates.insert(kind, template);
    }

    /// Overlays `overrides` on top of `self`, replacing matching kinds.
    #[must_use]
    pub fn merged(mut self, overrides: StatusTemplates) -> Self {
        self.templates.extend(overrides.templates);
        self
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn standard_covers_every_kind() {
        let templates = StatusTemplates::standard();
        for kind in StatusEffectKind::iter() {
            assert!(templates.get(kind).is_some(), "missing template for {kind}");
        }
    }

    #[test]
    fn crowd_control_flags() {
        let templates = StatusTemplates::standard();
        let frozen = templates.get(StatusEffectKind::Frozen).unwrap();
        assert!(frozen.restrictions.contains(Restrictions::ACTION));
        let silenced = templates.get(StatusEffectKind::Silenced).unwrap();
        assert_eq!(silenced.restrictions, Restrictions::MAGIC);
        let burning = templates.get(StatusEffectKind::Burning).unwrap();
        assert!(burning.restrictions.is_empty());
    }

    #[test]
    fn overrides_replace_single_entries() {
        let mut overrides = StatusTemplates::default();
        overrides.insert(
            StatusEffectKind::Burning,
            StatusTemplate::debuff().ticking(9),
        );
        let merged = StatusTemplates::standard().merged(overrides);
        assert_eq!(
            merged.get(StatusEffectKind::Burning).unwrap().tick_per_potency,
            9
        );
        assert_eq!(merged.len(), StatusTemplates::standard().len());
    }
}
