//! Difficulty provider.

/// Named difficulty presets.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    Story,
    #[default]
    Normal,
    Hard,
    Nightmare,
}

/// Oracle providing difficulty scaling.
///
/// Multipliers are plain factors (1.0 = unchanged); modifiers are additive
/// probabilities.
pub trait DifficultyOracle {
    fn player_damage_multiplier(&self) -> f64;
    fn enemy_damage_multiplier(&self) -> f64;
    fn enemy_crit_chance_modifier(&self) -> f64;
    fn flee_chance_modifier(&self) -> f64;
    fn xp_multiplier(&self) -> f64;
}

/// One row of difficulty scaling values.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DifficultyTable {
    pub player_damage: f64,
    pub enemy_damage: f64,
    pub enemy_crit_chance: f64,
    pub flee_chance: f64,
    pub xp: f64,
}

impl DifficultyTable {
    pub const fn new(
        player_damage: f64,
        enemy_damage: f64,
        enemy_crit_chance: f64,
        flee_chance: f64,
        xp: f64,
    ) -> Self {
        Self {
            player_damage,
            enemy_damage,
            enemy_crit_chance,
            flee_chance,
            xp,
        }
    }

    /// Built-in scaling for a preset.
    pub const fn preset(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Story => Self::new(1.5, 0.5, -0.05, 0.25, 0.75),
            Difficulty::Normal => Self::new(1.0, 1.0, 0.0, 0.0, 1.0),
            Difficulty::Hard => Self::new(0.9, 1.25, 0.05, -0.1, 1.25),
            Difficulty::Nightmare => Self::new(0.75, 1.6, 0.1, -0.25, 1.6),
        }
    }
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self::preset(Difficulty::Normal)
    }
}

impl DifficultyOracle for DifficultyTable {
    fn player_damage_multiplier(&self) -> f64 {
        self.player_damage
    }

    fn enemy_damage_multiplier(&self) -> f64 {
        self.enemy_damage
    }

    fn enemy_crit_chance_modifier(&self) -> f64 {
        self.enemy_crit_chance
    }

    fn flee_chance_modifier(&self) -> f64 {
        self.flee_chance
    }

    fn xp_multiplier(&self) -> f64 {
        self.xp
    }
}
