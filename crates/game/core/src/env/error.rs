//! Oracle access errors.
//!
//! Errors related to provider availability and catalog lookups.

use crate::error::{CombatError, ErrorSeverity};

use super::AbilityKind;

/// Errors that occur when accessing provider data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// DifficultyOracle is not available in the environment.
    #[error("DifficultyOracle not available")]
    DifficultyNotAvailable,

    /// ElementalOracle is not available in the environment.
    #[error("ElementalOracle not available")]
    ElementalNotAvailable,

    /// AbilityOracle is not available in the environment.
    #[error("AbilityOracle not available")]
    AbilitiesNotAvailable,

    /// No profile is registered for the ability.
    #[error("no profile registered for ability {0}")]
    AbilityProfileNotFound(AbilityKind),
}

impl CombatError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            // Missing providers are fatal - the resolver cannot compute a result
            DifficultyNotAvailable | ElementalNotAvailable | AbilitiesNotAvailable => {
                ErrorSeverity::Fatal
            }
            AbilityProfileNotFound(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            DifficultyNotAvailable => "ORACLE_DIFFICULTY_NOT_AVAILABLE",
            ElementalNotAvailable => "ORACLE_ELEMENTAL_NOT_AVAILABLE",
            AbilitiesNotAvailable => "ORACLE_ABILITIES_NOT_AVAILABLE",
            AbilityProfileNotFound(_) => "ORACLE_ABILITY_PROFILE_NOT_FOUND",
        }
    }
}
