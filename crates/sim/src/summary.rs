//! End-of-fight report.

use std::fmt;

use combat_core::{BossPhase, Difficulty, ResourceMeter};

/// How the encounter ended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Outcome {
    Victory,
    Defeat,
    Fled,
    #[default]
    RoundLimit,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Victory => "victory",
            Self::Defeat => "defeat",
            Self::Fled => "fled",
            Self::RoundLimit => "round limit reached",
        };
        f.write_str(text)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Summary {
    pub boss: String,
    pub difficulty: Difficulty,
    pub seed: u64,
    pub outcome: Outcome,
    pub rounds: u32,
    pub damage_dealt: u32,
    pub damage_taken: u32,
    pub status_damage: u32,
    pub mana_drained: u32,
    pub best_combo: u32,
    pub cascades: u32,
    pub transitions: Vec<(BossPhase, BossPhase)>,
    pub final_phase: BossPhase,
    pub hazards: usize,
    pub minions: u32,
    pub experience: u32,
    pub player_health: ResourceMeter,
    pub boss_health: ResourceMeter,
}

impl Summary {
    pub fn new(boss: impl Into<String>, difficulty: Difficulty, seed: u64) -> Self {
        Self {
            boss: boss.into(),
            difficulty,
            seed,
            ..Self::default()
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ({}, seed {}) ===", self.boss, self.difficulty, self.seed)?;
        writeln!(f, "Outcome:        {} after {} rounds", self.outcome, self.rounds)?;
        writeln!(
            f,
            "Hero health:    {}/{}",
            self.player_health.current, self.player_health.maximum
        )?;
        writeln!(
            f,
            "Boss health:    {}/{}",
            self.boss_health.current, self.boss_health.maximum
        )?;
        writeln!(f, "Damage dealt:   {}", self.damage_dealt)?;
        writeln!(
            f,
            "Damage taken:   {} ({} from status effects)",
            self.damage_taken, self.status_damage
        )?;
        writeln!(f, "Mana drained:   {}", self.mana_drained)?;
        writeln!(f, "Best combo:     x{} ({} cascades)", self.best_combo, self.cascades)?;

        let path = self
            .transitions
            .iter()
            .map(|(from, to)| format!("{from} -> {to}"))
            .collect::<Vec<_>>();
        if path.is_empty() {
            writeln!(f, "Phases:         stayed in {}", self.final_phase)?;
        } else {
            writeln!(f, "Phases:         {}", path.join(", "))?;
        }
        writeln!(f, "Hazards:        {}", self.hazards)?;
        writeln!(f, "Minions:        {}", self.minions)?;
        write!(f, "Experience:     {}", self.experience)
    }
}
