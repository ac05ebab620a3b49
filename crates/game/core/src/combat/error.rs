//! Damage resolver errors.
//!
//! These never escape the resolver's public methods: each is logged and
//! folded into a zero-damage [`CombatResult`](super::CombatResult).

use crate::env::{AbilityKind, OracleError};
use crate::error::{CombatError, ErrorSeverity};
use crate::state::{ParticipantError, ParticipantId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The participant's stat block is not initialised (zero max health).
    #[error("{0} has no stat block")]
    Uninitialized(ParticipantId),

    #[error("{0} is already defeated")]
    Defeated(ParticipantId),

    #[error("{caster} does not know {ability}")]
    UnknownAbility {
        caster: ParticipantId,
        ability: AbilityKind,
    },

    #[error("not enough mana for {ability}: {required} required, {available} available")]
    InsufficientMana {
        ability: AbilityKind,
        required: u32,
        available: u32,
    },

    /// The participant refused the mana deduction after the balance check passed.
    #[error("mana consumption failed: {0}")]
    ManaConsumption(#[source] ParticipantError),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl CombatError for ResolveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Uninitialized(_) | Self::Defeated(_) => ErrorSeverity::Validation,
            Self::UnknownAbility { .. } | Self::InsufficientMana { .. } => {
                ErrorSeverity::Recoverable
            }
            Self::ManaConsumption(_) => ErrorSeverity::Internal,
            Self::Oracle(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Uninitialized(_) => "RESOLVE_UNINITIALIZED",
            Self::Defeated(_) => "RESOLVE_DEFEATED",
            Self::UnknownAbility { .. } => "RESOLVE_UNKNOWN_ABILITY",
            Self::InsufficientMana { .. } => "RESOLVE_INSUFFICIENT_MANA",
            Self::ManaConsumption(_) => "RESOLVE_MANA_CONSUMPTION",
            Self::Oracle(err) => err.error_code(),
        }
    }
}
