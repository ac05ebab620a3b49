use super::kind::{
    EffectClass, ModifierTarget, Restrictions, StatModifier, StatusEffectKind, StatusTemplate,
};

/// Request to apply a status effect, as produced by the resolver and abilities.
///
/// The combat core only attaches these to results; the caller decides whether
/// to hand them to the [`StatusEffectEngine`](super::StatusEffectEngine).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusApplication {
    pub kind: StatusEffectKind,
    pub duration: u32,
    pub potency: u32,
}

impl StatusApplication {
    pub const fn new(kind: StatusEffectKind, duration: u32, potency: u32) -> Self {
        Self {
            kind,
            duration,
            potency,
        }
    }
}

/// An active status effect on one holder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatusEffect {
    kind: StatusEffectKind,
    remaining: u32,
    potency: u32,
    // Derived from the template at creation and on refresh.
    tick_value: i64,
    modifier: Option<StatModifier>,
    class: EffectClass,
    restrictions: Restrictions,
}

impl StatusEffect {
    pub fn from_template(
        kind: StatusEffectKind,
        template: &StatusTemplate,
        duration: u32,
        potency: u32,
    ) -> Self {
        Self {
            kind,
            remaining: duration,
            potency,
            tick_value: i64::from(template.tick_per_potency) * i64::from(potency),
            modifier: template.modifier,
            class: template.class,
            restrictions: template.restrictions,
        }
    }

    /// Extends to the larger duration and potency, recomputing the tick value.
    pub fn refresh(&mut self, template: &StatusTemplate, duration: u32, potency: u32) {
        self.remaining = self.remaining.max(duration);
        self.potency = self.potency.max(potency);
        self.tick_value = i64::from(template.tick_per_potency) * i64::from(self.potency);
    }

    pub fn kind(&self) -> StatusEffectKind {
        self.kind
    }

    /// Whole turns left.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn potency(&self) -> u32 {
        self.potency
    }

    /// Per-turn value: positive damages the holder, negative heals it.
    pub fn tick_value(&self) -> i64 {
        self.tick_value
    }

    pub fn class(&self) -> EffectClass {
        self.class
    }

    pub fn is_debuff(&self) -> bool {
        self.class == EffectClass::Debuff
    }

    pub fn is_buff(&self) -> bool {
        self.class == EffectClass::Buff
    }

    pub fn prevents_action(&self) -> bool {
        self.restrictions.contains(Restrictions::ACTION)
    }

    pub fn prevents_magic(&self) -> bool {
        self.prevents_action() || self.restrictions.contains(Restrictions::MAGIC)
    }

    /// Multiplier this effect contributes to `target`, 1.0 if none.
    pub fn multiplier_for(&self, target: ModifierTarget) -> f64 {
        match self.modifier {
            Some(modifier) if modifier.target == target => modifier.multiplier,
            _ => 1.0,
        }
    }

    /// Counts down one turn; returns true once the effect has run out.
    pub(crate) fn elapse_turn(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }
}
