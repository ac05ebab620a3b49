//! Party synergy provider.

/// Category a synergy bonus applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SynergyCategory {
    Damage,
    CriticalRate,
    MagicPower,
    Defense,
}

/// Oracle providing party-composition bonuses.
pub trait SynergyOracle {
    /// False until the party composition has been evaluated.
    fn is_initialized(&self) -> bool;

    /// Bonus as a fraction (0.1 = +10%) for the category.
    fn bonus(&self, category: SynergyCategory) -> f64;

    /// Bonus for the category, or zero while uninitialized.
    fn effective_bonus(&self, category: SynergyCategory) -> f64 {
        if self.is_initialized() {
            self.bonus(category)
        } else {
            0.0
        }
    }
}

/// Fixed synergy bonuses.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SynergyBonuses {
    pub initialized: bool,
    pub damage: f64,
    pub critical_rate: f64,
    pub magic_power: f64,
    pub defense: f64,
}

impl SynergyBonuses {
    /// Bonuses that are not yet evaluated and contribute nothing.
    pub fn uninitialized() -> Self {
        Self::default()
    }

    pub fn new(damage: f64, critical_rate: f64, magic_power: f64, defense: f64) -> Self {
        Self {
            initialized: true,
            damage,
            critical_rate,
            magic_power,
            defense,
        }
    }
}

impl SynergyOracle for SynergyBonuses {
    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn bonus(&self, category: SynergyCategory) -> f64 {
        match category {
            SynergyCategory::Damage => self.damage,
            SynergyCategory::CriticalRate => self.critical_rate,
            SynergyCategory::MagicPower => self.magic_power,
            SynergyCategory::Defense => self.defense,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uninitialized_contributes_nothing() {
        let mut bonuses = SynergyBonuses::uninitialized();
        bonuses.damage = 0.5;
        assert_eq!(bonuses.effective_bonus(SynergyCategory::Damage), 0.0);
    }

    #[test]
    fn initialized_reports_per_category() {
        let bonuses = SynergyBonuses::new(0.1, 0.05, 0.2, 0.15);
        assert_eq!(bonuses.effective_bonus(SynergyCategory::MagicPower), 0.2);
        assert_eq!(bonuses.effective_bonus(SynergyCategory::Defense), 0.15);
    }
}
