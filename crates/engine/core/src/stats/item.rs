//! Item stat deltas and the traits that matter for kill estimates.

use crate::combo::DamageType;

/// Behaviour an item can add on top of raw stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemTag {
    /// Grants a shield (passive or active) not modelled in effective HP.
    Shield,
    /// Can revive the holder.
    Revive,
    /// Delays part of incoming damage.
    DamageDelay,
    /// Has a defensive proc on a cooldown we cannot observe.
    CooldownUnknown,
}

/// Flat damage an item's active adds to the holder's combo.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveDamage {
    pub amount: f64,
    pub damage_type: DamageType,
}

/// Stat deltas granted by one copy of an item.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemModifier {
    pub hp_bonus: f64,
    pub armor_bonus: f64,
    pub mr_bonus: f64,
    pub active: Option<ActiveDamage>,
    pub tags: Vec<ItemTag>,
}

impl ItemModifier {
    /// Record used for items missing from the catalog: contributes nothing.
    pub const NONE: Self = Self {
        hp_bonus: 0.0,
        armor_bonus: 0.0,
        mr_bonus: 0.0,
        active: None,
        tags: Vec::new(),
    };

    pub fn has_tag(&self, tag: ItemTag) -> bool {
        self.tags.contains(&tag)
    }
}
