//! Player-versus-boss turn loop.
//!
//! Each round runs, in order: status ticks, the player's action, the boss
//! phase check, the boss's action, environmental hazards and the boss turn
//! counters. The loop owns every participant and hands them to the engine
//! one call at a time.

use anyhow::{Context, Result};
use combat_content::ContentBundle;
use combat_core::{
    AbilityKind, AbilityOracle, BossAbility, BossEncounters, BossId, BossOracle, BossSignal,
    CombatEnv, CombatResult, Combatant, ComboTracker, DamageResolver, Difficulty,
    DifficultyTable, EffectiveStats, ElementalOracle, Participant, ParticipantId, PcgRng,
    PhaseTransition, RngOracle, Side, StatusApplication, StatusEffectEngine, SynergyBonuses,
    compute_seed,
};

use crate::summary::{Outcome, Summary};

const BOSS: ParticipantId = ParticipantId(1);

/// Health fraction below which the hero spends a turn healing.
const HEAL_BELOW: f32 = 0.35;
/// Health fraction below which the hero tries to run when no heal is left.
const FLEE_BELOW: f32 = 0.15;

/// Read-only tables the damage resolver borrows.
struct Rules {
    bundle: ContentBundle,
    difficulty: DifficultyTable,
    synergy: SynergyBonuses,
}

impl Rules {
    fn resolver<'a>(&'a self, statuses: &'a StatusEffectEngine) -> DamageResolver<'a> {
        let env = CombatEnv::with_all(
            &self.difficulty,
            &self.bundle.elements,
            &self.synergy,
            &self.bundle.abilities,
        );
        DamageResolver::new(env, &self.bundle.config).with_status_effects(statuses)
    }

    fn mana_cost(&self, ability: AbilityKind) -> u32 {
        self.bundle
            .abilities
            .profile(ability)
            .map_or(0, |profile| profile.mana_cost)
    }
}

pub struct Simulation {
    rules: Rules,
    encounters: BossEncounters,
    statuses: StatusEffectEngine,
    combo: ComboTracker,
    rng: PcgRng,
    boss_id: BossId,
    experience: u32,
    player: Combatant,
    boss: Combatant,
    summary: Summary,
}

impl Simulation {
    pub fn new(
        bundle: ContentBundle,
        boss_id: BossId,
        difficulty: Difficulty,
        seed: u64,
        synergy: bool,
    ) -> Result<Self> {
        let definition = bundle
            .bosses
            .definition(&boss_id)
            .cloned()
            .with_context(|| format!("boss '{boss_id}' is not in the catalog"))?;

        let player = Combatant::new(ParticipantId::PLAYER, "Hero", EffectiveStats::new(20, 12, 18))
            .with_health(240)
            .with_mana(80)
            .with_abilities([
                AbilityKind::Fireball,
                AbilityKind::FrostBolt,
                AbilityKind::LightningStrike,
                AbilityKind::HolySmite,
                AbilityKind::Heal,
            ]);
        let boss = Combatant::new(BOSS, definition.name.clone(), definition.stats)
            .with_health(definition.max_health)
            .with_court(definition.court);

        let synergy = if synergy {
            SynergyBonuses::new(0.10, 0.05, 0.10, 0.10)
        } else {
            SynergyBonuses::uninitialized()
        };

        Ok(Self {
            encounters: bundle.boss_encounters(),
            statuses: bundle.status_engine(),
            combo: ComboTracker::new(bundle.config.combo),
            rng: PcgRng::new(compute_seed(seed, 0, 0)),
            boss_id,
            experience: definition.experience,
            player,
            boss,
            summary: Summary::new(definition.name, difficulty, seed),
            rules: Rules {
                difficulty: bundle.difficulty.get(difficulty),
                bundle,
                synergy,
            },
        })
    }

    /// Plays rounds until someone falls, the hero escapes or `max_rounds`
    /// is reached, then tears the encounter down.
    pub fn run(&mut self, max_rounds: u32) -> Result<Summary> {
        let state = self.encounters.start(&self.boss_id)?;
        tracing::info!(boss = %state.boss(), phase = %state.phase(), "Encounter started");

        let mut round = 0;
        let outcome = loop {
            if round >= max_rounds {
                break Outcome::RoundLimit;
            }
            round += 1;
            if let Some(outcome) = self.play_round(round)? {
                break outcome;
            }
        };

        if let Some(state) = self.encounters.end(&self.boss_id) {
            self.summary.final_phase = state.phase();
            self.summary.hazards = state.hazards().len();
        }
        self.statuses.clear_all_effects();

        if outcome == Outcome::Victory {
            self.summary.experience = self
                .rules
                .resolver(&self.statuses)
                .experience_reward(self.experience);
        }

        tracing::info!(%outcome, round, "Encounter ended");
        self.summary.outcome = outcome;
        self.summary.rounds = round;
        self.summary.player_health = self.player.health();
        self.summary.boss_health = self.boss.health();
        Ok(self.summary.clone())
    }

    fn play_round(&mut self, round: u32) -> Result<Option<Outcome>> {
        let span = tracing::info_span!("round", round);
        let _enter = span.enter();

        let ticked = self.statuses.process_turn_start(&mut self.player);
        self.summary.status_damage += ticked;
        self.summary.damage_taken += ticked;
        let boss_ticked = self.statuses.process_turn_start(&mut self.boss);
        self.summary.damage_dealt += boss_ticked;
        if let Some(outcome) = self.check_defeat() {
            return Ok(Some(outcome));
        }

        if self.statuses.can_act(self.player.id) {
            if self.player_turn() {
                return Ok(Some(Outcome::Fled));
            }
        } else {
            tracing::info!("{} cannot act this turn", self.player.name);
        }
        if let Some(outcome) = self.check_defeat() {
            return Ok(Some(outcome));
        }

        let update = self.encounters.update_phase(
            &self.boss_id,
            self.boss.health().fraction(),
            &mut self.rng,
        )?;
        if let Some(transition) = update.transition {
            self.record_transition(&transition);
        }

        if self.statuses.can_act(BOSS) {
            self.boss_turn()?;
        } else {
            tracing::info!("{} cannot act this turn", self.boss.name);
        }
        if let Some(outcome) = self.check_defeat() {
            return Ok(Some(outcome));
        }

        let tick = self.encounters.process_environmental_damage(
            &self.boss_id,
            &mut self.player,
            &mut self.rng,
        )?;
        self.summary.damage_taken += tick.damage;
        self.summary.mana_drained += tick.mana_drained;
        if let Some(outcome) = self.check_defeat() {
            return Ok(Some(outcome));
        }

        self.encounters.process_boss_turn(&self.boss_id)?;
        Ok(None)
    }

    /// Returns true when the hero escaped.
    fn player_turn(&mut self) -> bool {
        let health = self.player.health().fraction();
        let heal_cost = self.rules.mana_cost(AbilityKind::Heal);
        let can_heal =
            self.statuses.can_use_magic(self.player.id) && self.player.has_enough_mana(heal_cost);

        if health < HEAL_BELOW && can_heal {
            let result = self.rules.resolver(&self.statuses).magic_attack(
                &mut self.combo,
                &mut self.rng,
                &mut self.player,
                &self.boss,
                AbilityKind::Heal,
                Side::Player,
            );
            if !result.is_invalid() {
                match self.player.heal(self.player.stats.magic_power * 2) {
                    Ok(restored) => {
                        tracing::info!("{} recovers {} health", self.player.name, restored)
                    }
                    Err(err) => tracing::warn!(%err, "Heal failed"),
                }
            }
            return false;
        }

        if health < FLEE_BELOW {
            let escaped = self.rules.resolver(&self.statuses).attempt_flee(
                &mut self.combo,
                &mut self.rng,
                Side::Player,
            );
            if escaped {
                tracing::info!("{} escapes the fight", self.player.name);
            } else {
                tracing::info!("{} fails to escape", self.player.name);
            }
            return escaped;
        }

        let resolver = self.rules.resolver(&self.statuses);
        let result = match self.pick_spell(heal_cost) {
            Some(ability) => resolver.magic_attack(
                &mut self.combo,
                &mut self.rng,
                &mut self.player,
                &self.boss,
                ability,
                Side::Player,
            ),
            None => resolver.physical_attack(
                &mut self.combo,
                &mut self.rng,
                &self.player,
                &self.boss,
                Side::Player,
            ),
        };
        self.land_on_boss(result);
        false
    }

    /// Strongest affordable damage spell against the boss's element, keeping
    /// enough mana in reserve for one heal.
    fn pick_spell(&self, reserve: u32) -> Option<AbilityKind> {
        if !self.statuses.can_use_magic(self.player.id) {
            return None;
        }

        let chart = &self.rules.bundle.elements;
        let defend = chart.element_from_court(self.boss.court);
        self.player
            .abilities
            .iter()
            .copied()
            .filter_map(|ability| {
                let profile = self.rules.bundle.abilities.profile(ability)?;
                let affordable = self
                    .player
                    .has_enough_mana(profile.mana_cost.saturating_add(reserve));
                (profile.deals_damage() && affordable).then(|| {
                    let matchup =
                        chart.damage_multiplier(chart.element_from_ability(ability), defend);
                    (ability, profile.damage_multiplier * matchup)
                })
            })
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(ability, _)| ability)
    }

    fn land_on_boss(&mut self, result: CombatResult) {
        tracing::info!("{result}");
        self.summary.best_combo = self.summary.best_combo.max(self.combo.streak());
        if self.combo.is_cascade() {
            self.summary.cascades += 1;
        }
        if result.is_invalid() || result.was_dodged() {
            return;
        }

        let amount = self.encounters.absorb_damage(&self.boss_id, result.damage);
        if amount < result.damage {
            tracing::info!("{} is shielded from harm", self.boss.name);
        }
        match self.boss.take_damage(amount) {
            Ok(dealt) => self.summary.damage_dealt += dealt,
            Err(err) => tracing::warn!(%err, "Boss could not take damage"),
        }

        if let Some(application) = result.applied_status {
            self.apply_status(BOSS, application);
        }
    }

    fn boss_turn(&mut self) -> Result<()> {
        let ability = self.choose_boss_ability()?;

        let Some(ability) = ability else {
            let result = self.rules.resolver(&self.statuses).physical_attack(
                &mut self.combo,
                &mut self.rng,
                &self.boss,
                &self.player,
                Side::Enemy,
            );
            self.land_on_player(result);
            return Ok(());
        };

        let Ok(outcome) =
            self.encounters
                .execute_ability(&self.boss_id, ability, &mut self.player, &mut self.rng)
        else {
            return Ok(());
        };
        tracing::info!("{}", outcome.description);
        self.summary.damage_taken += outcome.damage;

        match outcome.signal {
            Some(BossSignal::PartyDamage { fraction }) => {
                let scale = self.encounters.damage_multiplier(&self.boss_id);
                let amount =
                    (f64::from(self.player.health().maximum) * fraction * scale).round() as u32;
                match self.player.take_damage(amount) {
                    Ok(dealt) => self.summary.damage_taken += dealt,
                    Err(err) => tracing::warn!(%err, "Party damage missed"),
                }
            }
            Some(BossSignal::ApplyCurse(application)) => {
                self.apply_status(self.player.id, application);
            }
            Some(BossSignal::SummonMinions { count }) => self.summary.minions += count,
            None => {}
        }
        Ok(())
    }

    /// The ultimate once charged, otherwise a random phase ability or a
    /// plain attack.
    fn choose_boss_ability(&mut self) -> Result<Option<BossAbility>> {
        let abilities = self.encounters.available_abilities(&self.boss_id)?;
        if self.encounters.can_use_ultimate(&self.boss_id)
            && abilities.contains(&BossAbility::UltimateAttack)
        {
            return Ok(Some(BossAbility::UltimateAttack));
        }

        let pool: Vec<_> = abilities
            .iter()
            .copied()
            .filter(|ability| *ability != BossAbility::UltimateAttack)
            .collect();
        Ok(self
            .rng
            .pick_index(pool.len() + 1)
            .and_then(|index| pool.get(index).copied()))
    }

    fn land_on_player(&mut self, result: CombatResult) {
        tracing::info!("{result}");
        if result.is_invalid() || result.was_dodged() {
            return;
        }

        let scale = self.encounters.damage_multiplier(&self.boss_id);
        let amount = (f64::from(result.damage) * scale).round() as u32;
        match self.player.take_damage(amount) {
            Ok(dealt) => self.summary.damage_taken += dealt,
            Err(err) => tracing::warn!(%err, "Hero could not take damage"),
        }

        if let Some(application) = result.applied_status {
            self.apply_status(self.player.id, application);
        }
    }

    fn apply_status(&mut self, holder: ParticipantId, application: StatusApplication) {
        if let Ok(outcome) = self.statuses.apply_effect(
            holder,
            application.kind,
            application.duration,
            application.potency,
        ) {
            tracing::info!(%holder, kind = %application.kind, ?outcome, "Status effect applied");
        }
    }

    fn record_transition(&mut self, transition: &PhaseTransition) {
        if !transition.narration.is_empty() {
            tracing::info!("{}", transition.narration);
        }
        if let Some(minions) = &transition.minions {
            self.summary.minions += minions.count;
        }
        self.summary
            .transitions
            .push((transition.from, transition.to));
    }

    fn check_defeat(&self) -> Option<Outcome> {
        if self.player.is_defeated() {
            Some(Outcome::Defeat)
        } else if self.boss.is_defeated() {
            Some(Outcome::Victory)
        } else {
            None
        }
    }
}
