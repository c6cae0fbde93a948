//! Player snapshot produced fresh every tick by the stats source.

use std::collections::BTreeMap;

use crate::ids::{ChampionId, ItemId, SpellSlot};

/// The local player's computable combat stats at one instant.
///
/// Any field the source could not fill stays at its zero default and simply
/// contributes nothing to the damage model.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerSnapshot {
    pub champion: ChampionId,
    pub level: u32,
    /// Total attack damage.
    pub attack_damage: f64,
    pub bonus_attack_damage: f64,
    pub ability_power: f64,
    pub hp_current: f64,
    pub hp_max: f64,
    /// Equipped items in slot order; duplicates are legal.
    pub items: Vec<ItemId>,
    pub spell_ranks: BTreeMap<SpellSlot, u8>,
    pub lethality: f64,
    /// Percent armor penetration in `[0, 1]`.
    pub armor_pen_percent: f64,
    pub magic_pen_flat: f64,
}

impl PlayerSnapshot {
    /// Own health fraction in `[0, 1]`. An unreported maximum reads as full health.
    pub fn hp_fraction(&self) -> f64 {
        if !(self.hp_max > 0.0 && self.hp_max.is_finite()) || !self.hp_current.is_finite() {
            return 1.0;
        }
        (self.hp_current / self.hp_max).clamp(0.0, 1.0)
    }

    /// Rank of the given spell, zero when unlearned or unreported.
    pub fn rank(&self, slot: SpellSlot) -> u8 {
        self.spell_ranks.get(&slot).copied().unwrap_or(0)
    }
}
