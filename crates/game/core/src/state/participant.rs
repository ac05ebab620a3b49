//! Participant contract consumed by the combat core.
//!
//! The game session owns characters and enemies; this crate only reads their
//! effective stats and invokes the mutation contracts below. [`Combatant`] is
//! the in-crate implementation used by the simulator and tests.

use std::collections::BTreeSet;

use crate::env::{AbilityKind, Court};
use crate::error::{CombatError, ErrorSeverity};

use super::{ParticipantId, ResourceMeter};

/// Stats after equipment and bonus adjustments.
///
/// Always present on a participant; there is no "missing stats" state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectiveStats {
    pub strength: u32,
    pub agility: u32,
    pub magic_power: u32,
}

impl EffectiveStats {
    pub const fn new(strength: u32, agility: u32, magic_power: u32) -> Self {
        Self {
            strength,
            agility,
            magic_power,
        }
    }
}

/// Errors raised by participant mutation contracts.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParticipantError {
    /// The participant has no health left and cannot be damaged or healed.
    #[error("{0} is already defeated")]
    Defeated(ParticipantId),

    /// The mana pool cannot cover the requested cost.
    #[error("insufficient mana: {required} required, {available} available")]
    InsufficientMana { required: u32, available: u32 },

    /// The owning session refused the mutation.
    #[error("participant unavailable: {0}")]
    Unavailable(String),
}

impl CombatError for ParticipantError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Defeated(_) => ErrorSeverity::Validation,
            Self::InsufficientMana { .. } => ErrorSeverity::Recoverable,
            Self::Unavailable(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Defeated(_) => "PARTICIPANT_DEFEATED",
            Self::InsufficientMana { .. } => "PARTICIPANT_INSUFFICIENT_MANA",
            Self::Unavailable(_) => "PARTICIPANT_UNAVAILABLE",
        }
    }
}

/// Everything the combat core needs from a character or enemy.
pub trait Participant {
    fn id(&self) -> ParticipantId;

    /// Display name, used only in descriptive text.
    fn name(&self) -> &str;

    fn stats(&self) -> EffectiveStats;

    fn health(&self) -> ResourceMeter;

    /// Applies damage, returning the amount actually removed.
    fn take_damage(&mut self, amount: u32) -> Result<u32, ParticipantError>;

    /// Restores health, returning the amount actually gained.
    fn heal(&mut self, amount: u32) -> Result<u32, ParticipantError>;

    fn current_mana(&self) -> u32;

    fn has_enough_mana(&self, cost: u32) -> bool {
        self.current_mana() >= cost
    }

    /// Deducts `cost` from the mana pool.
    ///
    /// Implementations must be all-or-nothing: on error the pool is untouched.
    fn try_consume_mana(&mut self, cost: u32) -> Result<(), ParticipantError>;

    fn has_ability(&self, ability: AbilityKind) -> bool;

    /// Allegiance tag used for elemental lookup.
    fn court(&self) -> Court;

    fn is_defeated(&self) -> bool {
        self.health().is_empty()
    }
}

/// Concrete participant backed by plain meters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: ParticipantId,
    pub name: String,
    pub stats: EffectiveStats,
    pub health: ResourceMeter,
    pub mana: ResourceMeter,
    pub abilities: BTreeSet<AbilityKind>,
    pub court: Court,
}

impl Combatant {
    pub fn new(id: ParticipantId, name: impl Into<String>, stats: EffectiveStats) -> Self {
        Self {
            id,
            name: name.into(),
            stats,
            health: ResourceMeter::full(100),
            mana: ResourceMeter::full(0),
            abilities: BTreeSet::new(),
            court: Court::Neutral,
        }
    }

    #[must_use]
    pub fn with_health(mut self, maximum: u32) -> Self {
        self.health = ResourceMeter::full(maximum);
        self
    }

    #[must_use]
    pub fn with_mana(mut self, maximum: u32) -> Self {
        self.mana = ResourceMeter::full(maximum);
        self
    }

    #[must_use]
    pub fn with_court(mut self, court: Court) -> Self {
        self.court = court;
        self
    }

    #[must_use]
    pub fn with_abilities(mut self, abilities: impl IntoIterator<Item = AbilityKind>) -> Self {
        self.abilities.extend(abilities);
        self
    }
}

impl Participant for Combatant {
    fn id(&self) -> ParticipantId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn stats(&self) -> EffectiveStats {
        self.stats
    }

    fn health(&self) -> ResourceMeter {
        self.health
    }

    fn take_damage(&mut self, amount: u32) -> Result<u32, ParticipantError> {
        if self.health.is_empty() {
            return Err(ParticipantError::Defeated(self.id));
        }
        Ok(self.health.drain(amount))
    }

    fn heal(&mut self, amount: u32) -> Result<u32, ParticipantError> {
        if self.health.is_empty() {
            return Err(ParticipantError::Defeated(self.id));
        }
        Ok(self.health.restore(amount))
    }

    fn current_mana(&self) -> u32 {
        self.mana.current
    }

    fn try_consume_mana(&mut self, cost: u32) -> Result<(), ParticipantError> {
        if self.mana.current < cost {
            return Err(ParticipantError::InsufficientMana {
                required: cost,
                available: self.mana.current,
            });
        }
        self.mana.current -= cost;
        Ok(())
    }

    fn has_ability(&self, ability: AbilityKind) -> bool {
        self.abilities.contains(&ability)
    }

    fn court(&self) -> Court {
        self.court
    }
}
