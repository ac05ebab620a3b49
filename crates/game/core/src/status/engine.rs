//! Per-holder status effect bookkeeping.
//!
//! The engine owns every holder's active-effect list. At most one effect per
//! (holder, kind) exists; reapplying refreshes it. Turn processing applies
//! each effect's tick through the participant contract and never aborts
//! because one effect failed.

use std::collections::HashMap;

use crate::error::log_contained;
use crate::state::{Participant, ParticipantId};

use super::effect::StatusEffect;
use super::error::StatusError;
use super::kind::{ModifierTarget, StatusEffectKind, StatusTemplates};

/// Result of a successful [`StatusEffectEngine::apply_effect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// A new effect was added to the holder.
    Applied,
    /// An existing effect of the same kind was extended.
    Refreshed,
}

/// Owns the active status effects of every holder.
#[derive(Clone, Debug, Default)]
pub struct StatusEffectEngine {
    templates: StatusTemplates,
    holders: HashMap<ParticipantId, Vec<StatusEffect>>,
}

impl StatusEffectEngine {
    pub fn new(templates: StatusTemplates) -> Self {
        Self {
            templates,
            holders: HashMap::new(),
        }
    }

    /// Engine using [`StatusTemplates::standard`].
    pub fn standard() -> Self {
        Self::new(StatusTemplates::standard())
    }

    pub fn templates(&self) -> &StatusTemplates {
        &self.templates
    }

    /// Applies `kind` to `holder`, or refreshes it if already present.
    ///
    /// A refresh keeps the larger of the old and new duration and potency.
    ///
    /// # Errors
    ///
    /// Zero duration or potency and unregistered kinds are rejected and logged;
    /// the holder's effects are left untouched.
    pub fn apply_effect(
        &mut self,
        holder: ParticipantId,
        kind: StatusEffectKind,
        duration: u32,
        potency: u32,
    ) -> Result<ApplyOutcome, StatusError> {
        let result = self.try_apply(holder, kind, duration, potency);
        if let Err(err) = &result {
            log_contained("apply_effect", err);
        }
        result
    }

    fn try_apply(
        &mut self,
        holder: ParticipantId,
        kind: StatusEffectKind,
        duration: u32,
        potency: u32,
    ) -> Result<ApplyOutcome, StatusError> {
        if duration == 0 {
            return Err(StatusError::ZeroDuration { holder, kind });
        }
        if potency == 0 {
            return Err(StatusError::ZeroPotency { holder, kind });
        }
        let template = self
            .templates
            .get(kind)
            .ok_or(StatusError::TemplateNotFound(kind))?;

        let effects = self.holders.entry(holder).or_default();
        if let Some(existing) = effects.iter_mut().find(|e| e.kind() == kind) {
            existing.refresh(template, duration, potency);
            tracing::debug!(
                "Refreshed {} on {} ({} turns, potency {})",
                kind,
                holder,
                existing.remaining(),
                existing.potency()
            );
            return Ok(ApplyOutcome::Refreshed);
        }

        effects.push(StatusEffect::from_template(kind, template, duration, potency));
        tracing::debug!(
            "Applied {} to {} ({} turns, potency {})",
            kind,
            holder,
            duration,
            potency
        );
        Ok(ApplyOutcome::Applied)
    }

    /// Ticks every effect on `holder` once.
    ///
    /// Positive tick values go through `take_damage`, negative ones through
    /// `heal`. Each effect then loses one turn; effects reaching zero are
    /// removed after the pass. An effect whose tick fails is logged and
    /// dropped while the remaining effects still process.
    ///
    /// Returns the total damage applied this tick.
    pub fn process_turn_start(&mut self, holder: &mut dyn Participant) -> u32 {
        let id = holder.id();
        let Some(effects) = self.holders.get_mut(&id) else {
            return 0;
        };

        let mut total_damage = 0u32;
        effects.retain_mut(|effect| {
            match tick(effect, holder) {
                Ok(dealt) => total_damage = total_damage.saturating_add(dealt),
                Err(err) => {
                    log_contained("process_turn_start", &err);
                    return false;
                }
            }
            if effect.elapse_turn() {
                tracing::debug!("{} expired on {}", effect.kind(), id);
                return false;
            }
            true
        });

        if effects.is_empty() {
            self.holders.remove(&id);
        }
        total_damage
    }

    /// False while any effect prevents acting (Frozen, Stunned).
    pub fn can_act(&self, holder: ParticipantId) -> bool {
        !self.effects(holder).iter().any(StatusEffect::prevents_action)
    }

    /// False while any effect prevents acting or casting (adds Silenced).
    pub fn can_use_magic(&self, holder: ParticipantId) -> bool {
        !self.effects(holder).iter().any(StatusEffect::prevents_magic)
    }

    /// Combined factor on damage `holder` deals.
    pub fn damage_modifier(&self, holder: ParticipantId) -> f64 {
        self.combined_multiplier(holder, ModifierTarget::Outgoing)
    }

    /// Combined factor on damage `holder` takes.
    pub fn damage_taken_modifier(&self, holder: ParticipantId) -> f64 {
        self.combined_multiplier(holder, ModifierTarget::Incoming)
    }

    fn combined_multiplier(&self, holder: ParticipantId, target: ModifierTarget) -> f64 {
        self.effects(holder)
            .iter()
            .map(|e| e.multiplier_for(target))
            .product()
    }

    /// Active effects on `holder`, empty if none.
    pub fn effects(&self, holder: ParticipantId) -> &[StatusEffect] {
        self.holders.get(&holder).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn effect(&self, holder: ParticipantId, kind: StatusEffectKind) -> Option<&StatusEffect> {
        self.effects(holder).iter().find(|e| e.kind() == kind)
    }

    pub fn has_effect(&self, holder: ParticipantId, kind: StatusEffectKind) -> bool {
        self.effect(holder, kind).is_some()
    }

    /// Removes one effect; returns whether it was present.
    pub fn remove_effect(&mut self, holder: ParticipantId, kind: StatusEffectKind) -> bool {
        self.remove_where(holder, |e| e.kind() == kind) > 0
    }

    /// Removes every debuff on `holder`, returning how many were removed.
    pub fn clear_debuffs(&mut self, holder: ParticipantId) -> usize {
        self.remove_where(holder, StatusEffect::is_debuff)
    }

    /// Removes every buff on `holder`, returning how many were removed.
    pub fn clear_buffs(&mut self, holder: ParticipantId) -> usize {
        self.remove_where(holder, StatusEffect::is_buff)
    }

    /// Removes every effect on one holder.
    pub fn clear_holder(&mut self, holder: ParticipantId) -> usize {
        self.holders.remove(&holder).map_or(0, |effects| effects.len())
    }

    /// Global reset at combat end.
    pub fn clear_all_effects(&mut self) {
        let holders = self.holders.len();
        self.holders.clear();
        tracing::debug!("Cleared status effects on {} holders", holders);
    }

    fn remove_where(
        &mut self,
        holder: ParticipantId,
        predicate: impl Fn(&StatusEffect) -> bool,
    ) -> usize {
        let Some(effects) = self.holders.get_mut(&holder) else {
            return 0;
        };
        let before = effects.len();
        effects.retain(|e| !predicate(e));
        let removed = before - effects.len();
        if effects.is_empty() {
            self.holders.remove(&holder);
        }
        if removed > 0 {
            tracing::debug!("Removed {} effects from {}", removed, holder);
        }
        removed
    }
}

/// Applies one effect's tick to its holder, returning damage dealt.
fn tick(effect: &StatusEffect, holder: &mut dyn Participant) -> Result<u32, StatusError> {
    let value = effect.tick_value();
    let amount = u32::try_from(value.unsigned_abs()).unwrap_or(u32::MAX);
    let holder_id = holder.id();
    let wrap = |source| StatusError::TickFailed {
        holder: holder_id,
        kind: effect.kind(),
        source,
    };

    if value > 0 {
        let dealt = holder.take_damage(amount).map_err(wrap)?;
        tracing::debug!("{} deals {} to {}", effect.kind(), dealt, holder.name());
        Ok(dealt)
    } else if value < 0 {
        let healed = holder.heal(amount).map_err(wrap)?;
        tracing::debug!("{} heals {} for {}", effect.kind(), holder.name(), healed);
        Ok(0)
    } else {
        Ok(0)
    }
}
