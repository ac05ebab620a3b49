//! Physical and magic attack resolution.
//!
//! # Physical pipeline
//!
//! ```text
//! base      = strength × side difficulty (× 1 + Damage synergy for the party)
//! critical  = roll(crit_chance + side modifiers)      → × crit_multiplier
//! dodge     = roll(min(agility × per_agility, cap))    → reset combo, 0 damage
//! combo     = × tracker multiplier for the attacker
//! statuses  = × outgoing(attacker) × incoming(defender)
//! defense   = × (1 − Defense synergy) when an enemy hits the party
//! variance  = × uniform[variance_min, variance_max]
//! ```
//!
//! Magic follows the same skeleton with magic power as the base, after a
//! known-ability check and an atomic mana deduction, plus the ability's damage
//! factor and the elemental matchup.
//!
//! Rolls are drawn in a fixed order (critical, dodge, variance, then the
//! status roll) so a replayed [`RngOracle`] reproduces a fight exactly.

use crate::config::{CombatConfig, DamageConfig};
use crate::env::{
    AbilityKind, AbilityProfile, CombatEnv, DifficultyOracle, RngOracle, SynergyCategory,
};
use crate::error::log_contained;
use crate::state::{Participant, Side};
use crate::status::{StatusApplication, StatusEffectEngine, StatusEffectKind};

use super::combo::ComboTracker;
use super::error::ResolveError;
use super::result::{CombatResult, DamageKind, HitFlags};

/// Multipliers shared by both attack kinds once the base is known.
struct Roll {
    damage: f64,
    flags: HitFlags,
}

/// Resolves single actions against the configured providers.
///
/// The resolver holds only shared references; combo state and randomness are
/// passed per call so independent fights never interfere.
#[derive(Clone, Copy, Debug)]
pub struct DamageResolver<'a> {
    env: CombatEnv<'a>,
    config: &'a CombatConfig,
    statuses: Option<&'a StatusEffectEngine>,
}

impl<'a> DamageResolver<'a> {
    pub fn new(env: CombatEnv<'a>, config: &'a CombatConfig) -> Self {
        Self {
            env,
            config,
            statuses: None,
        }
    }

    /// Applies outgoing and incoming status modifiers from `statuses`.
    #[must_use]
    pub fn with_status_effects(mut self, statuses: &'a StatusEffectEngine) -> Self {
        self.statuses = Some(statuses);
        self
    }

    pub fn env(&self) -> &CombatEnv<'a> {
        &self.env
    }

    fn tunables(&self) -> &DamageConfig {
        &self.config.damage
    }

    /// Resolves a weapon attack. Never fails: unresolvable attacks produce a
    /// zero-damage result tagged [`DamageKind::Invalid`].
    pub fn physical_attack(
        &self,
        combo: &mut ComboTracker,
        rng: &mut dyn RngOracle,
        attacker: &dyn Participant,
        defender: &dyn Participant,
        side: Side,
    ) -> CombatResult {
        self.try_physical(combo, rng, attacker, defender, side)
            .unwrap_or_else(|err| failed("physical_attack", attacker, defender, &err))
    }

    fn try_physical(
        &self,
        combo: &mut ComboTracker,
        rng: &mut dyn RngOracle,
        attacker: &dyn Participant,
        defender: &dyn Participant,
        side: Side,
    ) -> Result<CombatResult, ResolveError> {
        check_participants(attacker, defender)?;
        let difficulty = self.env.difficulty()?;

        let mut base = f64::from(attacker.stats().strength) * side_multiplier(difficulty, side);
        if side.is_player() {
            base *= 1.0 + self.env.synergy_bonus(SynergyCategory::Damage);
        }

        let Some(roll) = self.roll_hit(
            combo,
            rng,
            attacker,
            defender,
            side,
            difficulty,
            base,
            DamageKind::Physical,
        ) else {
            return Ok(dodged(DamageKind::Physical, attacker, defender));
        };

        let damage = round_damage(roll.damage);
        let mut description = format!(
            "{} hits {} for {} damage.",
            attacker.name(),
            defender.name(),
            damage
        );
        annotate(&mut description, combo, roll.flags);

        let mut result =
            CombatResult::new(damage, DamageKind::Physical, description).with_flags(roll.flags);

        if result.is_critical() && rng.roll_chance(self.tunables().bleed_chance) {
            let bleed = StatusApplication::new(
                StatusEffectKind::Bleeding,
                self.tunables().bleed_duration,
                self.tunables().bleed_potency,
            );
            result.description.push_str(" The wound bleeds!");
            result = result.with_status(Some(bleed));
        }

        tracing::debug!(
            attacker = %attacker.id(),
            defender = %defender.id(),
            damage = result.damage,
            flags = ?result.flags,
            "Physical attack resolved"
        );
        Ok(result)
    }

    /// Resolves a spell cast by `caster` at `target`.
    ///
    /// Mana is deducted only once every lookup has succeeded, and only in
    /// full. Support abilities (shield, heal) spend mana but deal no damage.
    pub fn magic_attack(
        &self,
        combo: &mut ComboTracker,
        rng: &mut dyn RngOracle,
        caster: &mut dyn Participant,
        target: &dyn Participant,
        ability: AbilityKind,
        side: Side,
    ) -> CombatResult {
        match self.try_magic(combo, rng, caster, target, ability, side) {
            Ok(result) => result,
            Err(err) => failed("magic_attack", caster, target, &err),
        }
    }

    fn try_magic(
        &self,
        combo: &mut ComboTracker,
        rng: &mut dyn RngOracle,
        caster: &mut dyn Participant,
        target: &dyn Participant,
        ability: AbilityKind,
        side: Side,
    ) -> Result<CombatResult, ResolveError> {
        if !caster.has_ability(ability) {
            return Err(ResolveError::UnknownAbility {
                caster: caster.id(),
                ability,
            });
        }
        check_participants(caster, target)?;

        let profile = self.env.ability_profile(ability)?;
        let difficulty = self.env.difficulty()?;
        let elemental = self.env.elemental()?;

        spend_mana(caster, ability, &profile)?;

        let element = elemental.element_from_ability(ability);
        let kind = DamageKind::Magic(element);
        if !profile.deals_damage() {
            tracing::debug!(caster = %caster.id(), %ability, "Support spell cast");
            return Ok(CombatResult::new(
                0,
                kind,
                format!("{} casts {}.", caster.name(), ability),
            ));
        }

        let defend = elemental.element_from_court(target.court());
        let matchup = elemental.damage_multiplier(element, defend);

        let mut base = f64::from(caster.stats().magic_power) * side_multiplier(difficulty, side);
        if side.is_player() {
            base *= 1.0 + self.env.synergy_bonus(SynergyCategory::MagicPower);
        }
        base *= profile.damage_multiplier * matchup;

        let Some(mut roll) =
            self.roll_hit(combo, rng, &*caster, target, side, difficulty, base, kind)
        else {
            return Ok(dodged(kind, &*caster, target));
        };
        roll.flags |= matchup_flags(matchup);

        let damage = round_damage(roll.damage);
        let mut description = format!(
            "{} casts {} at {} for {} damage.",
            caster.name(),
            ability,
            target.name(),
            damage
        );
        let message = elemental.effectiveness_message(element, defend);
        if !message.is_empty() {
            description.push(' ');
            description.push_str(&message);
        }
        annotate(&mut description, combo, roll.flags);

        let mut result = CombatResult::new(damage, kind, description).with_flags(roll.flags);

        if let Some(on_hit) = profile.on_hit
            && rng.roll_chance(self.tunables().magic_status_chance)
        {
            result
                .description
                .push_str(&format!(" {} is afflicted with {}!", target.name(), on_hit.kind));
            result = result.with_status(Some(on_hit));
        }

        tracing::debug!(
            caster = %caster.id(),
            target = %target.id(),
            %ability,
            %element,
            matchup,
            damage = result.damage,
            flags = ?result.flags,
            "Magic attack resolved"
        );
        Ok(result)
    }

    /// Critical, dodge, combo, status, defense and variance steps.
    ///
    /// Returns `None` when the defender dodged; the combo is already reset.
    #[allow(clippy::too_many_arguments)]
    fn roll_hit(
        &self,
        combo: &mut ComboTracker,
        rng: &mut dyn RngOracle,
        attacker: &dyn Participant,
        defender: &dyn Participant,
        side: Side,
        difficulty: &dyn DifficultyOracle,
        base: f64,
        kind: DamageKind,
    ) -> Option<Roll> {
        let tunables = self.tunables();
        let mut damage = base;
        let mut flags = HitFlags::empty();

        let crit_chance = match side {
            Side::Player => {
                tunables.crit_chance + self.env.synergy_bonus(SynergyCategory::CriticalRate)
            }
            Side::Enemy => tunables.crit_chance + difficulty.enemy_crit_chance_modifier(),
        };
        if rng.roll_chance(crit_chance) {
            damage *= tunables.crit_multiplier;
            flags |= HitFlags::CRITICAL;
        }
        tracing::debug!(
            chance = crit_chance,
            critical = flags.contains(HitFlags::CRITICAL),
            "Critical roll"
        );

        let dodge_chance = (f64::from(defender.stats().agility) * tunables.dodge_per_agility)
            .min(tunables.max_dodge_chance);
        if rng.roll_chance(dodge_chance) {
            combo.reset();
            tracing::debug!(
                chance = dodge_chance,
                %kind,
                defender = %defender.id(),
                "Attack dodged"
            );
            return None;
        }

        damage *= combo.multiplier(attacker.id());

        if let Some(statuses) = self.statuses {
            damage *= statuses.damage_modifier(attacker.id());
            let incoming = statuses.damage_taken_modifier(defender.id());
            if incoming < 1.0 {
                flags |= HitFlags::BLOCKED;
            }
            damage *= incoming;
        }

        if side == Side::Enemy {
            damage *= (1.0 - self.env.synergy_bonus(SynergyCategory::Defense)).max(0.0);
        }

        let variance = rng.range_f64(tunables.variance_min, tunables.variance_max);
        damage *= variance;
        tracing::debug!(variance, "Variance roll");

        combo.update(attacker.id());

        Some(Roll { damage, flags })
    }

    /// Rolls an escape attempt. Success resets the combo.
    pub fn attempt_flee(
        &self,
        combo: &mut ComboTracker,
        rng: &mut dyn RngOracle,
        side: Side,
    ) -> bool {
        let modifier = self
            .env
            .difficulty()
            .map(|d| d.flee_chance_modifier())
            .unwrap_or_else(|err| {
                log_contained("attempt_flee", &err);
                0.0
            });
        let chance = (self.tunables().base_flee_chance + modifier).clamp(0.0, 1.0);
        let escaped = rng.roll_chance(chance);
        if escaped {
            combo.reset();
        }
        tracing::debug!(?side, chance, escaped, "Flee attempt");
        escaped
    }

    /// Scales a base experience award by the difficulty XP multiplier.
    pub fn experience_reward(&self, base: u32) -> u32 {
        let multiplier = self
            .env
            .difficulty()
            .map(|d| d.xp_multiplier())
            .unwrap_or_else(|err| {
                log_contained("experience_reward", &err);
                1.0
            });
        round_damage(f64::from(base) * multiplier)
    }
}

fn side_multiplier(difficulty: &dyn DifficultyOracle, side: Side) -> f64 {
    match side {
        Side::Player => difficulty.player_damage_multiplier(),
        Side::Enemy => difficulty.enemy_damage_multiplier(),
    }
}

fn check_participants(
    attacker: &dyn Participant,
    defender: &dyn Participant,
) -> Result<(), ResolveError> {
    for participant in [attacker, defender] {
        if participant.health().maximum == 0 {
            return Err(ResolveError::Uninitialized(participant.id()));
        }
    }
    if defender.is_defeated() {
        return Err(ResolveError::Defeated(defender.id()));
    }
    Ok(())
}

fn spend_mana(
    caster: &mut dyn Participant,
    ability: AbilityKind,
    profile: &AbilityProfile,
) -> Result<(), ResolveError> {
    let required = profile.mana_cost;
    if !caster.has_enough_mana(required) {
        return Err(ResolveError::InsufficientMana {
            ability,
            required,
            available: caster.current_mana(),
        });
    }
    caster
        .try_consume_mana(required)
        .map_err(ResolveError::ManaConsumption)?;
    tracing::debug!(caster = %caster.id(), %ability, cost = required, "Mana consumed");
    Ok(())
}

fn matchup_flags(multiplier: f64) -> HitFlags {
    if multiplier > 1.0 {
        HitFlags::EFFECTIVE
    } else if multiplier < 1.0 {
        HitFlags::RESISTED
    } else {
        HitFlags::empty()
    }
}

fn annotate(description: &mut String, combo: &ComboTracker, flags: HitFlags) {
    if flags.contains(HitFlags::CRITICAL) {
        description.push_str(" Critical hit!");
    }
    if flags.contains(HitFlags::BLOCKED) {
        description.push_str(" Partially blocked.");
    }
    if combo.streak() > 1 {
        description.push_str(&format!(" Combo x{}!", combo.streak()));
    }
    if combo.is_cascade() {
        description.push_str(" CASCADE!");
    }
}

fn dodged(
    kind: DamageKind,
    attacker: &dyn Participant,
    defender: &dyn Participant,
) -> CombatResult {
    CombatResult::dodged(
        kind,
        format!("{} dodges {}'s attack!", defender.name(), attacker.name()),
    )
}

fn failed(
    operation: &str,
    attacker: &dyn Participant,
    defender: &dyn Participant,
    err: &ResolveError,
) -> CombatResult {
    let _span =
        tracing::info_span!("contained", attacker = %attacker.id(), defender = %defender.id())
            .entered();
    log_contained(operation, err);
    CombatResult::invalid(format!("{} fails to act: {}", attacker.name(), err))
}

fn round_damage(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round().min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}
