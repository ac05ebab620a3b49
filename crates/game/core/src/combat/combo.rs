//! Consecutive-hit tracking.
//!
//! A [`ComboTracker`] is owned by whoever drives a fight and passed into the
//! resolver, so independent fights (and tests) never share combo state.
//! Attribution is by [`ParticipantId`]. Resolve one attack fully before the
//! next; the tracker assumes a single writer.

use crate::config::ComboConfig;
use crate::state::ParticipantId;

/// Streak state for the attacker currently on a run.
#[derive(Clone, Debug, PartialEq)]
pub struct ComboTracker {
    config: ComboConfig,
    last_attacker: Option<ParticipantId>,
    streak: u32,
    total_hits: u32,
    cascade: bool,
}

impl ComboTracker {
    pub fn new(config: ComboConfig) -> Self {
        Self {
            config,
            last_attacker: None,
            streak: 0,
            total_hits: 0,
            cascade: false,
        }
    }

    pub fn config(&self) -> &ComboConfig {
        &self.config
    }

    pub fn last_attacker(&self) -> Option<ParticipantId> {
        self.last_attacker
    }

    /// Current streak, capped at `max_combo`.
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Hits landed by the tracked attacker since the streak began.
    pub fn total_hits(&self) -> u32 {
        self.total_hits
    }

    pub fn is_cascade(&self) -> bool {
        self.cascade
    }

    fn is_on_streak(&self, attacker: ParticipantId) -> bool {
        self.last_attacker == Some(attacker) && self.streak > 0
    }

    /// Records a landed hit by `attacker`.
    pub fn update(&mut self, attacker: ParticipantId) {
        if !self.is_on_streak(attacker) {
            self.last_attacker = Some(attacker);
            self.streak = 1;
            self.total_hits = 1;
            self.cascade = false;
            tracing::debug!("Combo started by {}", attacker);
            return;
        }

        self.streak = (self.streak + 1).min(self.config.max_combo.max(1));
        self.total_hits += 1;

        let threshold = self.config.cascade_threshold;
        self.cascade = threshold > 0 && self.total_hits % threshold == 0;
        if self.cascade {
            tracing::info!(
                attacker = %attacker,
                total_hits = self.total_hits,
                "Cascade triggered after {} consecutive hits",
                self.total_hits
            );
        } else {
            tracing::debug!(
                "Combo {} for {} ({} total hits)",
                self.streak,
                attacker,
                self.total_hits
            );
        }
    }

    /// Damage factor for `attacker`'s next hit.
    ///
    /// `1 + streak × per_hit_bonus (+ cascade_bonus)` while `attacker` holds
    /// the streak, otherwise `1.0`.
    pub fn multiplier(&self, attacker: ParticipantId) -> f64 {
        if !self.is_on_streak(attacker) {
            return 1.0;
        }
        let mut multiplier = 1.0 + f64::from(self.streak) * self.config.per_hit_bonus;
        if self.cascade {
            multiplier += self.config.cascade_bonus;
        }
        multiplier
    }

    /// Clears all fields (dodge, flee, turn or encounter boundary).
    pub fn reset(&mut self) {
        if self.streak > 0 {
            tracing::debug!("Combo reset after {} hits", self.total_hits);
        }
        self.last_attacker = None;
        self.streak = 0;
        self.total_hits = 0;
        self.cascade = false;
    }
}

impl Default for ComboTracker {
    fn default() -> Self {
        Self::new(ComboConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HERO: ParticipantId = ParticipantId(1);
    const ROGUE: ParticipantId = ParticipantId(2);

    fn tracker(max_combo: u32) -> ComboTracker {
        ComboTracker::new(ComboConfig {
            max_combo,
            ..ComboConfig::default()
        })
    }

    #[test]
    fn fresh_tracker_is_neutral() {
        let combo = ComboTracker::default();
        assert_eq!(combo.multiplier(HERO), 1.0);
        assert_eq!(combo.streak(), 0);
        assert_eq!(combo.last_attacker(), None);
    }

    #[test]
    fn streak_caps_but_total_keeps_counting() {
        let mut combo = tracker(3);
        for _ in 0..7 {
            combo.update(HERO);
        }
        assert_eq!(combo.streak(), 3);
        assert_eq!(combo.total_hits(), 7);
    }

    #[test]
    fn multiplier_grows_per_hit() {
        let mut combo = ComboTracker::default();
        combo.update(HERO);
        assert!((combo.multiplier(HERO) - 1.1).abs() < 1e-9);
        combo.update(HERO);
        assert!((combo.multiplier(HERO) - 1.2).abs() < 1e-9);
        assert_eq!(combo.multiplier(ROGUE), 1.0);
    }

    #[test]
    fn cascade_fires_on_every_threshold_multiple() {
        let mut combo = ComboTracker::default();
        for hit in 1..=11 {
            combo.update(HERO);
            assert_eq!(combo.is_cascade(), hit % 5 == 0, "hit {hit}");
        }
    }

    #[test]
    fn cascade_adds_bonus() {
        let mut combo = ComboTracker::default();
        for _ in 0..5 {
            combo.update(HERO);
        }
        assert!(combo.is_cascade());
        assert!((combo.multiplier(HERO) - (1.0 + 0.5 + 0.25)).abs() < 1e-9);
    }

    #[test]
    fn attacker_change_restarts_streak() {
        let mut combo = ComboTracker::default();
        combo.update(HERO);
        combo.update(HERO);
        combo.update(ROGUE);
        assert_eq!(combo.last_attacker(), Some(ROGUE));
        assert_eq!(combo.streak(), 1);
        assert_eq!(combo.total_hits(), 1);
        assert!(!combo.is_cascade());
    }

    #[test]
    fn reset_clears_everything() {
        let mut combo = ComboTracker::default();
        for _ in 0..5 {
            combo.update(HERO);
        }
        combo.reset();
        assert_eq!(combo, ComboTracker::default());
    }
}
