//! Timed status effects: application, ticking, expiry and action gating.
//!
//! Effects are keyed by [`ParticipantId`](crate::state::ParticipantId) and
//! built from a [`StatusTemplates`] table, so balance changes are data edits.
mod effect;
mod engine;
mod error;
mod kind;

pub use effect::{StatusApplication, StatusEffect};
pub use engine::{ApplyOutcome, StatusEffectEngine};
pub use error::StatusError;
pub use kind::{
    EffectClass, ModifierTarget, Restrictions, StatModifier, StatusEffectKind, StatusTemplate,
    StatusTemplates,
};
