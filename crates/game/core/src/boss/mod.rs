//! Boss encounters: phases, abilities, hazards, ultimate charge and
//! invulnerability windows.
//!
//! Catalog data (phases, ability behaviors, hazards) is loaded once and only
//! read; [`BossEncounters`] holds the mutable per-encounter records.
mod ability;
mod encounter;
mod error;
mod hazard;
mod machine;
mod phase;

pub use ability::{AbilityBehavior, BossAbility, BossAbilityOutcome, BossAbilityTable, BossSignal};
pub use encounter::BossEncounterState;
pub use error::BossError;
pub use hazard::{HazardCatalog, HazardEffect, HazardKind, HazardProfile, HazardTick};
pub use machine::{BossEncounters, PhaseTransition, PhaseUpdate};
pub use phase::{
    BossCatalog, BossDefinition, BossOracle, BossPhase, BossPhaseConfig, MinionSummon,
};
