//! Per-champion base stat growth.

/// Highest champion level; levels above it are clamped.
pub const MAX_LEVEL: u32 = 18;

/// Linear base-stat growth for one champion.
///
/// `stat(level) = base + per_level × (clamp(level, 1, 18) − 1)`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChampionStatCurve {
    pub base_hp: f64,
    pub hp_per_level: f64,
    pub base_armor: f64,
    pub armor_per_level: f64,
    pub base_mr: f64,
    pub mr_per_level: f64,
}

impl ChampionStatCurve {
    /// Curve used for champions missing from the catalog.
    ///
    /// Undatabased champions are a known source of error: their real HP can
    /// differ from this by several hundred points late in the game.
    pub const DEFAULT: Self = Self {
        base_hp: 580.0,
        hp_per_level: 95.0,
        base_armor: 28.0,
        armor_per_level: 4.0,
        base_mr: 32.0,
        mr_per_level: 1.5,
    };

    pub fn at_level(&self, level: u32) -> BaseStats {
        let steps = f64::from(level.clamp(1, MAX_LEVEL) - 1);
        BaseStats {
            hp: self.base_hp + self.hp_per_level * steps,
            armor: self.base_armor + self.armor_per_level * steps,
            mr: self.base_mr + self.mr_per_level * steps,
        }
    }

    pub fn base_hp(&self, level: u32) -> f64 {
        self.at_level(level).hp
    }
}

impl Default for ChampionStatCurve {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Base stats at a specific level, before items.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BaseStats {
    pub hp: f64,
    pub armor: f64,
    pub mr: f64,
}
