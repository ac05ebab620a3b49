//! Combat resolution.
//!
//! [`DamageResolver`] turns one chosen action into a [`CombatResult`]. It
//! reads providers through [`CombatEnv`](crate::env::CombatEnv), escalates
//! damage through a caller-owned [`ComboTracker`], and never lets an error
//! cross its public methods.
//!
//! # Core Functions
//!
//! - `physical_attack`: strength-based attack with critical, dodge and bleed
//! - `magic_attack`: ability cast with mana, elemental matchup and on-hit status
//! - `attempt_flee`: escape roll scaled by difficulty
//! - `experience_reward`: difficulty-scaled XP

pub mod combo;
mod error;
pub mod resolver;
pub mod result;

pub use combo::ComboTracker;
pub use error::ResolveError;
pub use resolver::DamageResolver;
pub use result::{CombatResult, DamageKind, HitFlags};
