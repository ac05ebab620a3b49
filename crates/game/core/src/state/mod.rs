//! Participant-facing state types.
//!
//! Identifiers, resource meters, and the participant contract through which
//! the combat core reads stats and applies damage, healing, and mana costs.
//! The game session owns participant lifetime; this crate never does.
mod common;
mod participant;

pub use common::{BossId, ParticipantId, ResourceMeter, Side};
pub use participant::{Combatant, EffectiveStats, Participant, ParticipantError};
