//! Boss encounter state machine.
//!
//! ```text
//! Phase1 ──▶ Phase2 ──▶ Phase3 ──▶ Enraged
//! ```
//!
//! Transitions are forward-only and driven by the health fraction the
//! orchestrator reports after each resolved attack. The enraged flag and the
//! invulnerability window are layered on top of whichever phase is current.
//! Encounters are keyed by [`BossId`]; each key assumes a single writer.

use std::collections::HashMap;

use crate::config::BossConfig;
use crate::env::RngOracle;
use crate::error::log_contained;
use crate::state::{BossId, Participant};

use super::ability::{
    AbilityBehavior, BossAbility, BossAbilityOutcome, BossAbilityTable, BossSignal,
};
use super::encounter::BossEncounterState;
use super::error::BossError;
use super::hazard::{HazardCatalog, HazardEffect, HazardKind, HazardTick};
use super::phase::{
    BossCatalog, BossDefinition, BossOracle, BossPhase, BossPhaseConfig, MinionSummon,
};

/// Side effects fired by a phase transition.
#[derive(Clone, Debug, PartialEq)]
pub struct PhaseTransition {
    pub from: BossPhase,
    pub to: BossPhase,
    pub minions: Option<MinionSummon>,
    pub hazard: Option<HazardKind>,
    /// Invulnerability turns opened by this transition.
    pub invulnerable_turns: u32,
    pub narration: String,
}

/// Result of [`BossEncounters::update_phase`].
#[derive(Clone, Debug, PartialEq)]
pub struct PhaseUpdate {
    /// Configuration of the phase the encounter is now in.
    pub config: BossPhaseConfig,
    /// Present only on the call that crossed into a new phase.
    pub transition: Option<PhaseTransition>,
}

impl PhaseUpdate {
    pub fn phase(&self) -> BossPhase {
        self.config.phase
    }

    pub fn changed(&self) -> bool {
        self.transition.is_some()
    }
}

/// Owns every active boss encounter and the tables that drive them.
#[derive(Clone, Debug)]
pub struct BossEncounters<C: BossOracle = BossCatalog> {
    catalog: C,
    abilities: BossAbilityTable,
    hazards: HazardCatalog,
    config: BossConfig,
    encounters: HashMap<BossId, BossEncounterState>,
}

impl<C: BossOracle> BossEncounters<C> {
    pub fn new(
        catalog: C,
        abilities: BossAbilityTable,
        hazards: HazardCatalog,
        config: BossConfig,
    ) -> Self {
        Self {
            catalog,
            abilities,
            hazards,
            config,
            encounters: HashMap::new(),
        }
    }

    /// Uses the standard ability and hazard tables with default tunables.
    pub fn with_standard_tables(catalog: C) -> Self {
        Self::new(
            catalog,
            BossAbilityTable::standard(),
            HazardCatalog::standard(),
            BossConfig::default(),
        )
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn config(&self) -> &BossConfig {
        &self.config
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Creates a fresh Phase1 encounter, replacing any previous one for `id`.
    ///
    /// # Errors
    ///
    /// Empty ids, ids missing from the catalog, and catalog entries without a
    /// Phase1 configuration are rejected without creating state.
    pub fn start(&mut self, id: &BossId) -> Result<&BossEncounterState, BossError> {
        contained("start_encounter", self.try_start(id))
    }

    fn try_start(&mut self, id: &BossId) -> Result<&BossEncounterState, BossError> {
        let definition = lookup(&self.catalog, id)?;
        if definition.phase(BossPhase::Phase1).is_none() {
            return Err(BossError::MissingPhase {
                boss: id.clone(),
                phase: BossPhase::Phase1,
            });
        }
        if self.encounters.contains_key(id) {
            tracing::warn!(boss = %id, "Restarting an encounter that was never ended");
        }
        tracing::info!(boss = %id, "Boss encounter started: {}", definition.name);

        let state = self
            .encounters
            .entry(id.clone())
            .insert_entry(BossEncounterState::new(id.clone()))
            .into_mut();
        Ok(state)
    }

    /// Discards the encounter, returning its final state.
    pub fn end(&mut self, id: &BossId) -> Option<BossEncounterState> {
        let state = self.encounters.remove(id);
        match &state {
            Some(state) => tracing::info!(
                boss = %id,
                phase = %state.phase,
                transitions = state.transitions,
                "Boss encounter ended"
            ),
            None => tracing::warn!(boss = %id, "No encounter to end"),
        }
        state
    }

    // ========================================================================
    // Phase transitions
    // ========================================================================

    /// Reports the boss's current health fraction.
    ///
    /// Phases are scanned in increasing severity; the first one whose
    /// threshold has been crossed and that is more severe than the current
    /// phase is entered. At most one phase is entered per call and a rising
    /// fraction never moves the encounter back. Entering a phase clears the
    /// hazards of the phase being left. Side effects (narration, minions,
    /// hazard, invulnerability) fire only on the entering call.
    ///
    /// # Errors
    ///
    /// Unknown ids, missing encounters and NaN fractions leave state untouched.
    pub fn update_phase(
        &mut self,
        id: &BossId,
        health_fraction: f32,
        rng: &mut dyn RngOracle,
    ) -> Result<PhaseUpdate, BossError> {
        contained("update_phase", self.try_update_phase(id, health_fraction, rng))
    }

    fn try_update_phase(
        &mut self,
        id: &BossId,
        health_fraction: f32,
        rng: &mut dyn RngOracle,
    ) -> Result<PhaseUpdate, BossError> {
        if health_fraction.is_nan() {
            return Err(BossError::InvalidHealthFraction(health_fraction));
        }
        let fraction = health_fraction.clamp(0.0, 1.0);
        let definition = lookup(&self.catalog, id)?;
        let state = self
            .encounters
            .get_mut(id)
            .ok_or_else(|| BossError::NoActiveEncounter(id.clone()))?;

        let next = definition
            .phases
            .iter()
            .find(|config| config.phase > state.phase && config.is_crossed(fraction));

        let transition = next.map(|config| {
            let from = state.phase;
            state.phase = config.phase;
            state.transitions += 1;
            tracing::info!(
                boss = %id,
                %from,
                to = %config.phase,
                health = fraction,
                "{}",
                if config.narration.is_empty() {
                    "The boss enters a new phase"
                } else {
                    config.narration.as_str()
                }
            );

            if let Some(minions) = &config.minions {
                tracing::info!(
                    boss = %id,
                    count = minions.count,
                    minion = %minions.minion,
                    "Minions summoned"
                );
            }

            let expired = state.hazards.len();
            state.hazards.clear();
            if expired > 0 {
                tracing::debug!(boss = %id, expired, "Previous phase hazards cleared");
            }

            let hazard = if config.activates_hazard {
                activate_hazard(&self.hazards, state, rng)
            } else {
                None
            };

            if config.invulnerable_turns > 0 {
                state.open_invulnerability(config.invulnerable_turns);
                tracing::info!(
                    boss = %id,
                    turns = config.invulnerable_turns,
                    "Boss becomes invulnerable"
                );
            }

            PhaseTransition {
                from,
                to: config.phase,
                minions: config.minions.clone(),
                hazard,
                invulnerable_turns: config.invulnerable_turns,
                narration: config.narration.clone(),
            }
        });

        let config = definition
            .phase(state.phase)
            .cloned()
            .ok_or_else(|| BossError::MissingPhase {
                boss: id.clone(),
                phase: state.phase,
            })?;

        Ok(PhaseUpdate { config, transition })
    }

    // ========================================================================
    // Abilities and hazards
    // ========================================================================

    /// Executes `ability` against `target`.
    ///
    /// Damage-dealing behaviors go through the target's damage contract.
    /// Party damage, curses and summons are returned as a [`BossSignal`] for
    /// the caller to carry out.
    ///
    /// # Errors
    ///
    /// Unknown bosses, missing encounters, abilities without a behavior and
    /// defeated targets produce a descriptive error and no mutation.
    pub fn execute_ability(
        &mut self,
        id: &BossId,
        ability: BossAbility,
        target: &mut dyn Participant,
        rng: &mut dyn RngOracle,
    ) -> Result<BossAbilityOutcome, BossError> {
        contained(
            "execute_ability",
            self.try_execute_ability(id, ability, target, rng),
        )
    }

    fn try_execute_ability(
        &mut self,
        id: &BossId,
        ability: BossAbility,
        target: &mut dyn Participant,
        rng: &mut dyn RngOracle,
    ) -> Result<BossAbilityOutcome, BossError> {
        let definition = lookup(&self.catalog, id)?;
        let state = self
            .encounters
            .get_mut(id)
            .ok_or_else(|| BossError::NoActiveEncounter(id.clone()))?;
        let behavior = self
            .abilities
            .behavior(ability)
            .ok_or_else(|| BossError::UnknownAbility {
                boss: id.clone(),
                ability,
            })?;
        if target.is_defeated() {
            return Err(BossError::TargetDefeated(target.id()));
        }

        let boss = definition.name.as_str();
        let outcome = match behavior {
            AbilityBehavior::PercentMaxHealth {
                fraction,
                consumes_charge,
            } => {
                let amount = percent_of(target.health().maximum, fraction);
                let dealt = target.take_damage(amount)?;
                if consumes_charge {
                    state.ultimate_charge = 0;
                }
                BossAbilityOutcome::new(
                    ability,
                    format!("{boss} uses {ability} on {} for {dealt} damage!", target.name()),
                )
                .with_damage(dealt)
            }
            AbilityBehavior::PartyDamage { fraction } => BossAbilityOutcome::new(
                ability,
                format!("{boss} unleashes a devastating attack on the whole party!"),
            )
            .with_signal(BossSignal::PartyDamage { fraction }),
            AbilityBehavior::Curse(curse) => BossAbilityOutcome::new(
                ability,
                format!("{boss} places a {} curse on {}!", curse.kind, target.name()),
            )
            .with_signal(BossSignal::ApplyCurse(curse)),
            AbilityBehavior::Enrage => {
                state.enraged = true;
                tracing::info!(boss = %id, "Boss is enraged");
                BossAbilityOutcome::new(ability, format!("{boss} flies into a rage!"))
            }
            AbilityBehavior::Shield { turns } => {
                state.open_invulnerability(turns);
                BossAbilityOutcome::new(
                    ability,
                    format!("{boss} raises a shield for {turns} turns!"),
                )
            }
            AbilityBehavior::Teleport => BossAbilityOutcome::new(
                ability,
                format!("{boss} vanishes and reappears across the arena!"),
            ),
            AbilityBehavior::Summon { count } => BossAbilityOutcome::new(
                ability,
                format!("{boss} calls {count} minions to its side!"),
            )
            .with_signal(BossSignal::SummonMinions { count }),
            AbilityBehavior::Hazard => {
                let description = match activate_hazard(&self.hazards, state, rng) {
                    Some(hazard) => format!("{boss} transforms the arena: {hazard}!"),
                    None => format!("{boss} reshapes the arena, but nothing new happens."),
                };
                BossAbilityOutcome::new(ability, description)
            }
        };

        tracing::debug!(boss = %id, %ability, damage = outcome.damage, "{}", outcome.description);
        Ok(outcome)
    }

    /// Applies one tick of every active hazard to `target`.
    ///
    /// Damage hazards go through the damage contract; the vortex drains mana.
    /// A hazard failing against the target is logged and skipped. Hazards stay
    /// active afterwards.
    ///
    /// # Errors
    ///
    /// Unknown encounters and defeated targets are rejected.
    pub fn process_environmental_damage(
        &self,
        id: &BossId,
        target: &mut dyn Participant,
        rng: &mut dyn RngOracle,
    ) -> Result<HazardTick, BossError> {
        contained(
            "process_environmental_damage",
            self.try_environmental_damage(id, target, rng),
        )
    }

    fn try_environmental_damage(
        &self,
        id: &BossId,
        target: &mut dyn Participant,
        rng: &mut dyn RngOracle,
    ) -> Result<HazardTick, BossError> {
        let state = self.active(id)?;
        if target.is_defeated() {
            return Err(BossError::TargetDefeated(target.id()));
        }

        let mut tick = HazardTick::default();
        for kind in &state.hazards {
            let Some(profile) = self.hazards.get(*kind) else {
                tracing::error!(boss = %id, hazard = %kind, "Active hazard missing from catalog");
                continue;
            };
            let amount = rng.range(profile.min, profile.max);
            match profile.effect {
                HazardEffect::Damage => match target.take_damage(amount) {
                    Ok(dealt) => tick.damage = tick.damage.saturating_add(dealt),
                    Err(err) => log_contained("hazard_damage", &BossError::from(err)),
                },
                HazardEffect::ManaDrain => {
                    let drained = amount.min(target.current_mana());
                    if drained == 0 {
                        continue;
                    }
                    match target.try_consume_mana(drained) {
                        Ok(()) => tick.mana_drained = tick.mana_drained.saturating_add(drained),
                        Err(err) => log_contained("hazard_drain", &BossError::from(err)),
                    }
                }
            }
            tracing::debug!(hazard = %kind, amount, "Hazard ticked");
        }
        Ok(tick)
    }

    /// Removes every active hazard, returning how many were cleared.
    pub fn clear_hazards(&mut self, id: &BossId) -> Result<usize, BossError> {
        let state = contained("clear_hazards", self.active_mut(id))?;
        let cleared = state.hazards.len();
        state.hazards.clear();
        Ok(cleared)
    }

    /// Advances per-turn counters: ultimate charge up, invulnerability down.
    pub fn process_boss_turn(&mut self, id: &BossId) -> Result<&BossEncounterState, BossError> {
        let threshold = self.config.ultimate_charge_threshold;
        let state = contained("process_boss_turn", self.active_mut(id))?;

        state.ultimate_charge = state.ultimate_charge.saturating_add(1);
        if state.ultimate_charge == threshold {
            tracing::info!(boss = %id, "Ultimate attack charged");
        }

        if state.invulnerable_turns > 0 {
            state.invulnerable_turns -= 1;
            if state.invulnerable_turns == 0 {
                tracing::info!(boss = %id, "Invulnerability fades");
            }
        }
        Ok(state)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn state(&self, id: &BossId) -> Option<&BossEncounterState> {
        self.encounters.get(id)
    }

    pub fn current_phase(&self, id: &BossId) -> Option<BossPhase> {
        self.state(id).map(BossEncounterState::phase)
    }

    pub fn is_invulnerable(&self, id: &BossId) -> bool {
        self.state(id).is_some_and(BossEncounterState::is_invulnerable)
    }

    /// True once the ultimate charge reaches the configured threshold.
    pub fn can_use_ultimate(&self, id: &BossId) -> bool {
        self.state(id)
            .is_some_and(|s| s.ultimate_charge >= self.config.ultimate_charge_threshold)
    }

    /// Configuration of the encounter's current phase.
    pub fn phase_config(&self, id: &BossId) -> Result<&BossPhaseConfig, BossError> {
        let definition = lookup(&self.catalog, id)?;
        let state = self.active(id)?;
        definition
            .phase(state.phase)
            .ok_or_else(|| BossError::MissingPhase {
                boss: id.clone(),
                phase: state.phase,
            })
    }

    pub fn available_abilities(&self, id: &BossId) -> Result<&[BossAbility], BossError> {
        self.phase_config(id).map(|config| config.abilities.as_slice())
    }

    /// Phase damage multiplier, scaled again while enraged. 1.0 without an
    /// encounter.
    pub fn damage_multiplier(&self, id: &BossId) -> f64 {
        let Ok(config) = self.phase_config(id) else {
            return 1.0;
        };
        let enraged = self.state(id).is_some_and(BossEncounterState::is_enraged);
        if enraged {
            config.damage_multiplier * self.config.enrage_damage_multiplier
        } else {
            config.damage_multiplier
        }
    }

    /// Damage that actually reaches the boss: zero while invulnerable.
    pub fn absorb_damage(&self, id: &BossId, amount: u32) -> u32 {
        if self.is_invulnerable(id) {
            tracing::debug!(boss = %id, amount, "Damage absorbed by invulnerability");
            0
        } else {
            amount
        }
    }

    pub fn active_encounters(&self) -> usize {
        self.encounters.len()
    }

    fn active(&self, id: &BossId) -> Result<&BossEncounterState, BossError> {
        if id.is_empty() {
            return Err(BossError::EmptyId);
        }
        self.encounters
            .get(id)
            .ok_or_else(|| BossError::NoActiveEncounter(id.clone()))
    }

    fn active_mut(&mut self, id: &BossId) -> Result<&mut BossEncounterState, BossError> {
        if id.is_empty() {
            return Err(BossError::EmptyId);
        }
        self.encounters
            .get_mut(id)
            .ok_or_else(|| BossError::NoActiveEncounter(id.clone()))
    }
}

fn lookup<'c, C: BossOracle>(catalog: &'c C, id: &BossId) -> Result<&'c BossDefinition, BossError> {
    if id.is_empty() {
        return Err(BossError::EmptyId);
    }
    catalog
        .definition(id)
        .ok_or_else(|| BossError::UnknownBoss(id.clone()))
}

/// Activates one hazard not yet active, chosen at random.
fn activate_hazard(
    hazards: &HazardCatalog,
    state: &mut BossEncounterState,
    rng: &mut dyn RngOracle,
) -> Option<HazardKind> {
    let candidates: Vec<HazardKind> = hazards
        .kinds()
        .filter(|kind| !state.hazards.contains(kind))
        .collect();
    let Some(kind) = rng.pick_index(candidates.len()).map(|i| candidates[i]) else {
        tracing::debug!(boss = %state.boss, "Every hazard is already active");
        return None;
    };
    state.hazards.insert(kind);
    tracing::info!(boss = %state.boss, hazard = %kind, "Environmental hazard activated");
    Some(kind)
}

fn percent_of(maximum: u32, fraction: f64) -> u32 {
    let amount = (f64::from(maximum) * fraction.max(0.0)).round();
    amount.min(f64::from(u32::MAX)) as u32
}

fn contained<T>(operation: &str, result: Result<T, BossError>) -> Result<T, BossError> {
    if let Err(err) = &result {
        log_contained(operation, err);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::SequenceRng;
    use crate::state::{Combatant, EffectiveStats, ParticipantId};

    fn catalog() -> BossCatalog {
        BossCatalog::new([BossDefinition::new(
            "wyrm",
            "Ancient Wyrm",
            EffectiveStats::new(25, 5, 20),
            500,
        )
        .with_phase(
            BossPhaseConfig::new(BossPhase::Phase1, 1.0)
                .with_abilities([BossAbility::LifeDrain]),
        )
        .with_phase(
            BossPhaseConfig::new(BossPhase::Phase2, 0.66)
                .with_multipliers(1.25, 1.0)
                .with_abilities([BossAbility::LifeDrain, BossAbility::Shield])
                .with_hazard()
                .with_invulnerability(2),
        )])
    }

    fn wyrm() -> BossId {
        BossId::from("wyrm")
    }

    fn hero() -> Combatant {
        Combatant::new(ParticipantId(1), "Hero", EffectiveStats::new(10, 5, 5))
            .with_health(120)
            .with_mana(30)
    }

    #[test]
    fn start_requires_catalog_entry() {
        let mut bosses = BossEncounters::with_standard_tables(catalog());
        assert_eq!(
            bosses.start(&BossId::from("lich")).err(),
            Some(BossError::UnknownBoss(BossId::from("lich")))
        );
        assert_eq!(bosses.start(&BossId::from("  ")).err(), Some(BossError::EmptyId));
        assert_eq!(bosses.start(&wyrm()).unwrap().phase(), BossPhase::Phase1);
        assert_eq!(bosses.active_encounters(), 1);
    }

    #[test]
    fn nan_fraction_is_rejected() {
        let mut bosses = BossEncounters::with_standard_tables(catalog());
        bosses.start(&wyrm()).unwrap();
        assert!(matches!(
            bosses.update_phase(&wyrm(), f32::NAN, &mut SequenceRng::constant(0.0)),
            Err(BossError::InvalidHealthFraction(_))
        ));
    }

    #[test]
    fn enrage_scales_damage_multiplier() {
        let mut bosses = BossEncounters::with_standard_tables(catalog());
        bosses.start(&wyrm()).unwrap();
        let mut rng = SequenceRng::constant(0.0);
        bosses.update_phase(&wyrm(), 0.5, &mut rng).unwrap();
        assert!((bosses.damage_multiplier(&wyrm()) - 1.25).abs() < 1e-9);

        bosses
            .execute_ability(&wyrm(), BossAbility::EnrageMode, &mut hero(), &mut rng)
            .unwrap();
        assert!(bosses.state(&wyrm()).unwrap().is_enraged());
        assert!((bosses.damage_multiplier(&wyrm()) - 1.875).abs() < 1e-9);
    }

    #[test]
    fn shield_opens_window_that_counts_down() {
        let mut bosses = BossEncounters::with_standard_tables(catalog());
        bosses.start(&wyrm()).unwrap();
        bosses
            .execute_ability(
                &wyrm(),
                BossAbility::Shield,
                &mut hero(),
                &mut SequenceRng::constant(0.0),
            )
            .unwrap();
        assert!(bosses.is_invulnerable(&wyrm()));
        assert_eq!(bosses.absorb_damage(&wyrm(), 40), 0);

        bosses.process_boss_turn(&wyrm()).unwrap();
        assert!(bosses.is_invulnerable(&wyrm()));
        bosses.process_boss_turn(&wyrm()).unwrap();
        assert!(!bosses.is_invulnerable(&wyrm()));
        assert_eq!(bosses.absorb_damage(&wyrm(), 40), 40);
    }

    #[test]
    fn delegated_abilities_signal_the_caller() {
        let mut bosses = BossEncounters::with_standard_tables(catalog());
        bosses.start(&wyrm()).unwrap();
        let mut rng = SequenceRng::constant(0.0);
        let mut target = hero();

        let aoe = bosses
            .execute_ability(&wyrm(), BossAbility::AreaOfEffect, &mut target, &mut rng)
            .unwrap();
        assert!(matches!(aoe.signal, Some(BossSignal::PartyDamage { .. })));

        let curse = bosses
            .execute_ability(&wyrm(), BossAbility::StatusCurse, &mut target, &mut rng)
            .unwrap();
        assert!(matches!(curse.signal, Some(BossSignal::ApplyCurse(_))));

        let summon = bosses
            .execute_ability(&wyrm(), BossAbility::SummonMinions, &mut target, &mut rng)
            .unwrap();
        assert_eq!(summon.signal, Some(BossSignal::SummonMinions { count: 2 }));

        let teleport = bosses
            .execute_ability(&wyrm(), BossAbility::Teleport, &mut target, &mut rng)
            .unwrap();
        assert!(teleport.signal.is_none());
        assert_eq!(target.health.current, 120);
    }

    #[test]
    fn hazard_ability_activates_distinct_hazards() {
        let mut bosses = BossEncounters::with_standard_tables(catalog());
        bosses.start(&wyrm()).unwrap();
        let mut rng = SequenceRng::constant(0.0);
        let count = HazardCatalog::standard().len();
        for _ in 0..count + 1 {
            bosses
                .execute_ability(
                    &wyrm(),
                    BossAbility::EnvironmentalHazard,
                    &mut hero(),
                    &mut rng,
                )
                .unwrap();
        }
        assert_eq!(bosses.state(&wyrm()).unwrap().hazards().len(), count);
        assert_eq!(bosses.clear_hazards(&wyrm()), Ok(count));
    }

    #[test]
    fn vortex_drains_mana_without_damage() {
        let catalog = catalog();
        let hazards = HazardCatalog::new([crate::boss::HazardProfile::new(
            HazardKind::ArcaneVortex,
            HazardEffect::ManaDrain,
            10,
            10,
        )]);
        let mut bosses = BossEncounters::new(
            catalog,
            BossAbilityTable::standard(),
            hazards,
            BossConfig::default(),
        );
        bosses.start(&wyrm()).unwrap();
        let mut rng = SequenceRng::constant(0.0);
        bosses.update_phase(&wyrm(), 0.5, &mut rng).unwrap();

        let mut target = hero();
        let tick = bosses
            .process_environmental_damage(&wyrm(), &mut target, &mut rng)
            .unwrap();
        assert_eq!(tick, HazardTick { damage: 0, mana_drained: 10 });
        assert_eq!(target.mana.current, 20);
        assert_eq!(target.health.current, 120);
        assert_eq!(bosses.state(&wyrm()).unwrap().hazards().len(), 1);
    }

    #[test]
    fn defeated_target_is_a_descriptive_failure() {
        let mut bosses = BossEncounters::with_standard_tables(catalog());
        bosses.start(&wyrm()).unwrap();
        let mut target = hero();
        target.health.current = 0;
        let err = bosses
            .execute_ability(
                &wyrm(),
                BossAbility::LifeDrain,
                &mut target,
                &mut SequenceRng::constant(0.0),
            )
            .unwrap_err();
        assert_eq!(err, BossError::TargetDefeated(ParticipantId(1)));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn end_discards_state() {
        let mut bosses = BossEncounters::with_standard_tables(catalog());
        bosses.start(&wyrm()).unwrap();
        assert!(bosses.end(&wyrm()).is_some());
        assert!(bosses.state(&wyrm()).is_none());
        assert!(bosses.end(&wyrm()).is_none());
        assert_eq!(
            bosses.process_boss_turn(&wyrm()).err(),
            Some(BossError::NoActiveEncounter(wyrm()))
        );
    }
}
