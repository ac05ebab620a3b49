//! Outcome of a single resolved action.

use std::fmt;

use crate::env::Element;
use crate::status::StatusApplication;

/// What kind of damage a result carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageKind {
    Physical,
    /// Spell damage tagged with the ability's element.
    Magic(Element),
    /// The action could not be resolved; damage is always zero.
    Invalid,
}

impl fmt::Display for DamageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Physical => f.write_str("physical"),
            Self::Magic(element) => write!(f, "magic ({element})"),
            Self::Invalid => f.write_str("invalid"),
        }
    }
}

bitflags::bitflags! {
    /// Hit annotations surfaced to presentation layers.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct HitFlags: u8 {
        const CRITICAL = 0b0000_0001;
        const DODGED = 0b0000_0010;
        /// An incoming damage modifier on the defender reduced the hit.
        const BLOCKED = 0b0000_0100;
        const EFFECTIVE = 0b0000_1000;
        const RESISTED = 0b0001_0000;
    }
}

/// Transient value produced per action and handed to the orchestrator.
///
/// The resolver never applies damage or status effects itself; the caller
/// feeds `damage` into the defender's damage contract and `applied_status`
/// into the [`StatusEffectEngine`](crate::status::StatusEffectEngine).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatResult {
    pub damage: u32,
    pub kind: DamageKind,
    pub flags: HitFlags,
    pub applied_status: Option<StatusApplication>,
    pub description: String,
}

impl CombatResult {
    pub fn new(damage: u32, kind: DamageKind, description: impl Into<String>) -> Self {
        Self {
            damage,
            kind,
            flags: HitFlags::empty(),
            applied_status: None,
            description: description.into(),
        }
    }

    /// Zero-damage result for an action that could not be resolved.
    pub fn invalid(description: impl Into<String>) -> Self {
        Self::new(0, DamageKind::Invalid, description)
    }

    /// Zero-damage result for an evaded attack.
    pub fn dodged(kind: DamageKind, description: impl Into<String>) -> Self {
        Self::new(0, kind, description).with_flags(HitFlags::DODGED)
    }

    #[must_use]
    pub fn with_flags(mut self, flags: HitFlags) -> Self {
        self.flags |= flags;
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: Option<StatusApplication>) -> Self {
        self.applied_status = status;
        self
    }

    pub fn is_invalid(&self) -> bool {
        self.kind == DamageKind::Invalid
    }

    pub fn is_critical(&self) -> bool {
        self.flags.contains(HitFlags::CRITICAL)
    }

    pub fn was_dodged(&self) -> bool {
        self.flags.contains(HitFlags::DODGED)
    }

    pub fn was_blocked(&self) -> bool {
        self.flags.contains(HitFlags::BLOCKED)
    }

    pub fn is_effective(&self) -> bool {
        self.flags.contains(HitFlags::EFFECTIVE)
    }

    pub fn is_resisted(&self) -> bool {
        self.flags.contains(HitFlags::RESISTED)
    }
}

impl fmt::Display for CombatResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::StatusEffectKind;

    #[test]
    fn invalid_results_carry_no_damage() {
        let result = CombatResult::invalid("nothing happened");
        assert!(result.is_invalid());
        assert_eq!(result.damage, 0);
        assert!(result.flags.is_empty());
    }

    #[test]
    fn flags_accumulate() {
        let result = CombatResult::new(12, DamageKind::Magic(Element::Fire), "hit")
            .with_flags(HitFlags::CRITICAL)
            .with_flags(HitFlags::EFFECTIVE)
            .with_status(Some(StatusApplication::new(StatusEffectKind::Burning, 3, 1)));
        assert!(result.is_critical());
        assert!(result.is_effective());
        assert!(!result.was_dodged());
        assert_eq!(
            result.applied_status.map(|s| s.kind),
            Some(StatusEffectKind::Burning)
        );
    }
}
