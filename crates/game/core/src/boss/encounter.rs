use std::collections::BTreeSet;

use crate::state::BossId;

use super::hazard::HazardKind;
use super::phase::BossPhase;

/// Mutable record of one active boss encounter.
///
/// Created by [`BossEncounters::start`](super::BossEncounters::start) and
/// discarded by `end`. The phase never moves backwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BossEncounterState {
    pub(crate) boss: BossId,
    pub(crate) phase: BossPhase,
    pub(crate) transitions: u32,
    pub(crate) enraged: bool,
    pub(crate) hazards: BTreeSet<HazardKind>,
    pub(crate) ultimate_charge: u32,
    pub(crate) invulnerable_turns: u32,
}

impl BossEncounterState {
    pub(crate) fn new(boss: BossId) -> Self {
        Self {
            boss,
            phase: BossPhase::Phase1,
            transitions: 0,
            enraged: false,
            hazards: BTreeSet::new(),
            ultimate_charge: 0,
            invulnerable_turns: 0,
        }
    }

    pub fn boss(&self) -> &BossId {
        &self.boss
    }

    pub fn phase(&self) -> BossPhase {
        self.phase
    }

    /// Number of phase transitions so far.
    pub fn transitions(&self) -> u32 {
        self.transitions
    }

    pub fn is_enraged(&self) -> bool {
        self.enraged
    }

    pub fn hazards(&self) -> &BTreeSet<HazardKind> {
        &self.hazards
    }

    pub fn ultimate_charge(&self) -> u32 {
        self.ultimate_charge
    }

    pub fn invulnerable_turns(&self) -> u32 {
        self.invulnerable_turns
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_turns > 0
    }

    /// Opens or extends an invulnerability window; never shortens one.
    pub(crate) fn open_invulnerability(&mut self, turns: u32) {
        self.invulnerable_turns = self.invulnerable_turns.max(turns);
    }
}
