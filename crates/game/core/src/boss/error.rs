//! Boss state machine errors.
//!
//! Every variant's `Display` text doubles as the descriptive failure message
//! shown to the player.

use crate::error::{CombatError, ErrorSeverity};
use crate::state::{BossId, ParticipantError, ParticipantId};

use super::ability::BossAbility;
use super::phase::BossPhase;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum BossError {
    #[error("boss id is empty")]
    EmptyId,

    #[error("no boss named '{0}' in the catalog")]
    UnknownBoss(BossId),

    #[error("no active encounter for '{0}'")]
    NoActiveEncounter(BossId),

    #[error("health fraction {0} is not a number")]
    InvalidHealthFraction(f32),

    #[error("'{boss}' has no behavior for {ability}")]
    UnknownAbility { boss: BossId, ability: BossAbility },

    #[error("{0} is already defeated")]
    TargetDefeated(ParticipantId),

    /// The catalog entry lacks the phase the encounter is in.
    #[error("'{boss}' has no {phase} configuration")]
    MissingPhase { boss: BossId, phase: BossPhase },

    #[error("target refused the effect: {0}")]
    Participant(#[from] ParticipantError),
}

impl CombatError for BossError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyId | Self::InvalidHealthFraction(_) | Self::TargetDefeated(_) => {
                ErrorSeverity::Validation
            }
            Self::UnknownBoss(_) | Self::NoActiveEncounter(_) | Self::UnknownAbility { .. } => {
                ErrorSeverity::Recoverable
            }
            Self::MissingPhase { .. } | Self::Participant(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyId => "BOSS_EMPTY_ID",
            Self::UnknownBoss(_) => "BOSS_UNKNOWN",
            Self::NoActiveEncounter(_) => "BOSS_NO_ENCOUNTER",
            Self::InvalidHealthFraction(_) => "BOSS_INVALID_HEALTH",
            Self::UnknownAbility { .. } => "BOSS_UNKNOWN_ABILITY",
            Self::TargetDefeated(_) => "BOSS_TARGET_DEFEATED",
            Self::MissingPhase { .. } => "BOSS_MISSING_PHASE",
            Self::Participant(_) => "BOSS_PARTICIPANT",
        }
    }
}
