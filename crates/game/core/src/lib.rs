//! Turn-based combat resolution shared by game sessions and offline tools.
//!
//! `combat-core` computes what one action does (damage, critical and dodge
//! outcomes, elemental effectiveness, combo escalation, status effects) and
//! tracks boss encounter state across turns. It never owns participants: the
//! orchestrator hands them in through the [`state::Participant`] contract and
//! reads back [`combat::CombatResult`] values and boss outcomes.
//!
//! Every operation is synchronous and single-threaded. Randomness flows only
//! through [`env::RngOracle`], so a seeded generator replays a fight exactly.
pub mod boss;
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod state;
pub mod status;

pub use boss::{
    AbilityBehavior, BossAbility, BossAbilityOutcome, BossAbilityTable, BossCatalog,
    BossDefinition, BossEncounterState, BossEncounters, BossError, BossOracle, BossPhase,
    BossPhaseConfig, BossSignal, HazardCatalog, HazardEffect, HazardKind, HazardProfile,
    HazardTick, MinionSummon, PhaseTransition, PhaseUpdate,
};
pub use combat::{ComboTracker, CombatResult, DamageKind, DamageResolver, HitFlags, ResolveError};
pub use config::{BossConfig, ComboConfig, CombatConfig, DamageConfig};
pub use env::{
    AbilityKind, AbilityOracle, AbilityProfile, AbilityTable, CombatEnv, Court, Difficulty,
    DifficultyOracle, DifficultyTable, Element, ElementChart, ElementalOracle, Matchup,
    OracleError, PcgRng, RngOracle, SequenceRng, SynergyBonuses, SynergyCategory, SynergyOracle,
    compute_seed,
};
pub use error::{CombatError, ErrorSeverity};
pub use state::{
    BossId, Combatant, EffectiveStats, Participant, ParticipantError, ParticipantId,
    ResourceMeter, Side,
};
pub use status::{
    ApplyOutcome, StatusApplication, StatusEffect, StatusEffectEngine, StatusEffectKind,
    StatusError, StatusTemplate, StatusTemplates,
};
