//! Traits describing read-only collaborator data.
//!
//! Oracles expose difficulty scaling, elemental matchups, party synergy, and
//! ability profiles. The [`CombatEnv`] aggregate bundles them so the resolver
//! can access everything it needs without hard coupling to concrete
//! implementations.
mod abilities;
mod difficulty;
mod elemental;
mod error;
mod rng;
mod synergy;

pub use abilities::{AbilityKind, AbilityOracle, AbilityProfile, AbilityTable};
pub use difficulty::{Difficulty, DifficultyOracle, DifficultyTable};
pub use elemental::{
    Court, Element, ElementChart, ElementalOracle, Matchup, effectiveness_text,
};
pub use error::OracleError;
pub use rng::{PcgRng, RngOracle, SequenceRng, compute_seed};
pub use synergy::{SynergyBonuses, SynergyCategory, SynergyOracle};

/// Aggregates read-only oracles required by the damage resolver.
#[derive(Clone, Copy)]
pub struct CombatEnv<'a> {
    difficulty: Option<&'a dyn DifficultyOracle>,
    elemental: Option<&'a dyn ElementalOracle>,
    synergy: Option<&'a dyn SynergyOracle>,
    abilities: Option<&'a dyn AbilityOracle>,
}

impl<'a> CombatEnv<'a> {
    pub fn new(
        difficulty: Option<&'a dyn DifficultyOracle>,
        elemental: Option<&'a dyn ElementalOracle>,
        synergy: Option<&'a dyn SynergyOracle>,
        abilities: Option<&'a dyn AbilityOracle>,
    ) -> Self {
        Self {
            difficulty,
            elemental,
            synergy,
            abilities,
        }
    }

    pub fn with_all(
        difficulty: &'a dyn DifficultyOracle,
        elemental: &'a dyn ElementalOracle,
        synergy: &'a dyn SynergyOracle,
        abilities: &'a dyn AbilityOracle,
    ) -> Self {
        Self::new(
            Some(difficulty),
            Some(elemental),
            Some(synergy),
            Some(abilities),
        )
    }

    pub fn empty() -> Self {
        Self {
            difficulty: None,
            elemental: None,
            synergy: None,
            abilities: None,
        }
    }

    /// Returns the DifficultyOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::DifficultyNotAvailable` if no difficulty oracle was provided.
    pub fn difficulty(&self) -> Result<&'a dyn DifficultyOracle, OracleError> {
        self.difficulty.ok_or(OracleError::DifficultyNotAvailable)
    }

    /// Returns the ElementalOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ElementalNotAvailable` if no elemental oracle was provided.
    pub fn elemental(&self) -> Result<&'a dyn ElementalOracle, OracleError> {
        self.elemental.ok_or(OracleError::ElementalNotAvailable)
    }

    /// Returns the AbilityOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::AbilitiesNotAvailable` if no ability oracle was provided.
    pub fn abilities(&self) -> Result<&'a dyn AbilityOracle, OracleError> {
        self.abilities.ok_or(OracleError::AbilitiesNotAvailable)
    }

    /// Synergy is optional: without it no party bonus applies.
    pub fn synergy(&self) -> Option<&'a dyn SynergyOracle> {
        self.synergy
    }

    /// Synergy bonus for `category`, zero when absent or uninitialized.
    pub fn synergy_bonus(&self, category: SynergyCategory) -> f64 {
        self.synergy
            .map(|s| s.effective_bonus(category))
            .unwrap_or(0.0)
    }

    /// Looks up an ability profile.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::AbilitiesNotAvailable` without an ability oracle and
    /// `OracleError::AbilityProfileNotFound` for an unregistered ability.
    pub fn ability_profile(&self, ability: AbilityKind) -> Result<AbilityProfile, OracleError> {
        self.abilities()?
            .profile(ability)
            .ok_or(OracleError::AbilityProfileNotFound(ability))
    }
}

impl core::fmt::Debug for CombatEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CombatEnv")
            .field("difficulty", &self.difficulty.is_some())
            .field("elemental", &self.elemental.is_some())
            .field("synergy", &self.synergy.is_some())
            .field("abilities", &self.abilities.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_env_reports_missing_oracles() {
        let env = CombatEnv::empty();
        assert_eq!(
            env.difficulty().err(),
            Some(OracleError::DifficultyNotAvailable)
        );
        assert_eq!(
            env.ability_profile(AbilityKind::Fireball),
            Err(OracleError::AbilitiesNotAvailable)
        );
        assert_eq!(env.synergy_bonus(SynergyCategory::Damage), 0.0);
    }

    #[test]
    fn unregistered_ability_is_reported() {
        let abilities = AbilityTable::default();
        let env = CombatEnv::new(None, None, None, Some(&abilities));
        assert_eq!(
            env.ability_profile(AbilityKind::Heal),
            Err(OracleError::AbilityProfileNotFound(AbilityKind::Heal))
        );
    }
}
