/// Combo streak tunables.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ComboConfig {
    /// Streak cap; further hits still count toward the cumulative total.
    pub max_combo: u32,
    /// Multiplier gained per streak step (0.10 = +10% per hit).
    pub per_hit_bonus: f64,
    /// Every Nth cumulative hit triggers a cascade.
    pub cascade_threshold: u32,
    /// Extra multiplier while the cascade flag is set.
    pub cascade_bonus: f64,
}

impl ComboConfig {
    pub const DEFAULT_MAX_COMBO: u32 = 10;
    pub const DEFAULT_PER_HIT_BONUS: f64 = 0.10;
    pub const DEFAULT_CASCADE_THRESHOLD: u32 = 5;
    pub const DEFAULT_CASCADE_BONUS: f64 = 0.25;
}

impl Default for ComboConfig {
    fn default() -> Self {
        Self {
            max_combo: Self::DEFAULT_MAX_COMBO,
            per_hit_bonus: Self::DEFAULT_PER_HIT_BONUS,
            cascade_threshold: Self::DEFAULT_CASCADE_THRESHOLD,
            cascade_bonus: Self::DEFAULT_CASCADE_BONUS,
        }
    }
}

/// Damage pipeline tunables.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DamageConfig {
    pub crit_chance: f64,
    pub crit_multiplier: f64,
    /// Dodge chance granted per point of effective agility.
    pub dodge_per_agility: f64,
    pub max_dodge_chance: f64,
    pub variance_min: f64,
    pub variance_max: f64,
    /// Chance a physical critical hit offers Bleeding.
    pub bleed_chance: f64,
    pub bleed_duration: u32,
    pub bleed_potency: u32,
    /// Chance a landed spell offers its ability-specific status effect.
    pub magic_status_chance: f64,
    pub base_flee_chance: f64,
}

impl Default for DamageConfig {
    fn default() -> Self {
        Self {
            crit_chance: 0.10,
            crit_multiplier: 1.5,
            dodge_per_agility: 0.01,
            max_dodge_chance: 0.40,
            variance_min: 0.8,
            variance_max: 1.2,
            bleed_chance: 0.30,
            bleed_duration: 3,
            bleed_potency: 1,
            magic_status_chance: 0.25,
            base_flee_chance: 0.50,
        }
    }
}

/// Boss encounter tunables.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BossConfig {
    /// Boss turns needed before the ultimate becomes available.
    pub ultimate_charge_threshold: u32,
    /// Outgoing damage factor while enraged.
    pub enrage_damage_multiplier: f64,
}

impl Default for BossConfig {
    fn default() -> Self {
        Self {
            ultimate_charge_threshold: 5,
            enrage_damage_multiplier: 1.5,
        }
    }
}

/// Combat configuration constants and tunable parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    pub combo: ComboConfig,
    pub damage: DamageConfig,
    pub boss: BossConfig,
}

impl CombatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_combo(mut self, combo: ComboConfig) -> Self {
        self.combo = combo;
        self
    }

    #[must_use]
    pub fn with_damage(mut self, damage: DamageConfig) -> Self {
        self.damage = damage;
        self
    }

    #[must_use]
    pub fn with_boss(mut self, boss: BossConfig) -> Self {
        self.boss = boss;
        self
    }
}
