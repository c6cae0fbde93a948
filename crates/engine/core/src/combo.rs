//! Combo database records and the per-step damage formula.
//!
//! A combo is an ordered list of [`ComboStep`]s. Each step's raw amount is
//!
//! ```text
//! (base(rank) + Σ coefficient × stat) × Π multiplier of holding modifiers
//! ```
//!
//! Champion-specific behaviour (isolation bonuses, execute thresholds,
//! mana-gated abilities) is expressed as data through [`StepCondition`], so the
//! damage model never branches on a champion id.

use std::sync::LazyLock;

use crate::ids::SpellSlot;
use crate::stats::PlayerSnapshot;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageType {
    Physical,
    Magic,
    True,
}

/// Quantity a scaling coefficient multiplies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalingStat {
    AttackDamage,
    BonusAttackDamage,
    AbilityPower,
    Level,
    TargetMaxHp,
    TargetMissingHpFraction,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scaling {
    pub stat: ScalingStat,
    pub coefficient: f64,
}

impl Scaling {
    pub const fn new(stat: ScalingStat, coefficient: f64) -> Self {
        Self { stat, coefficient }
    }
}

/// Predicate over the engagement, evaluated once per step.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepCondition {
    /// No ally of the target nearby. Proximity is not observable, so this
    /// reads the configured isolation assumption.
    TargetIsolated,
    /// The target's mana is known (live or buffered).
    EnemyManaKnown,
    /// Target health fraction strictly below the given value.
    TargetBelowHpFraction(f64),
}

impl StepCondition {
    pub fn holds(&self, ctx: &EngagementContext<'_>) -> bool {
        match *self {
            Self::TargetIsolated => ctx.isolated,
            Self::EnemyManaKnown => ctx.target.mana_fraction.is_some(),
            Self::TargetBelowHpFraction(limit) => ctx.target.hp_fraction < limit,
        }
    }
}

/// Multiplier applied to a step's amount while its condition holds.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionalModifier {
    pub when: StepCondition,
    pub multiplier: f64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ComboStep {
    pub label: String,
    pub damage_type: DamageType,
    /// Base amount per rank, rank 1 first. Ranks beyond the table use the last
    /// entry.
    pub base: Vec<f64>,
    /// Spell whose rank selects `base`; `None` for autos and passives.
    pub rank_slot: Option<SpellSlot>,
    pub scaling: Vec<Scaling>,
    /// Every condition must hold or the step contributes nothing.
    pub requires: Vec<StepCondition>,
    pub modifiers: Vec<ConditionalModifier>,
}

impl Default for ComboStep {
    fn default() -> Self {
        Self {
            label: String::new(),
            damage_type: DamageType::Physical,
            base: Vec::new(),
            rank_slot: None,
            scaling: Vec::new(),
            requires: Vec::new(),
            modifiers: Vec::new(),
        }
    }
}

impl ComboStep {
    /// Base amount for the player's current rank, or `None` if the spell is
    /// unlearned.
    fn base_amount(&self, player: &PlayerSnapshot) -> Option<f64> {
        let index = match self.rank_slot {
            None => 0,
            Some(slot) => match player.rank(slot) {
                0 => return None,
                rank => usize::from(rank - 1),
            },
        };
        let last = self.base.len().checked_sub(1)?;
        self.base.get(index.min(last)).copied()
    }

    /// Raw (pre-mitigation) amount, or `None` when the step does not apply.
    pub fn raw_amount(&self, ctx: &EngagementContext<'_>) -> Option<f64> {
        if !self.requires.iter().all(|c| c.holds(ctx)) {
            return None;
        }
        let base = match self.base_amount(ctx.player) {
            Some(base) => base,
            None if self.rank_slot.is_none() => 0.0,
            None => return None,
        };
        let scaled: f64 = self
            .scaling
            .iter()
            .map(|s| s.coefficient * ctx.stat(s.stat))
            .sum();
        let multiplier: f64 = self
            .modifiers
            .iter()
            .filter(|m| m.when.holds(ctx))
            .map(|m| m.multiplier)
            .product();
        Some((base + scaled) * multiplier)
    }
}

/// A champion's full burst rotation.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Combo {
    pub label: String,
    /// Human-readable cast order, e.g. `"E > Q > AA > W > Q"`.
    pub spell_order: String,
    pub steps: Vec<ComboStep>,
}

static FALLBACK_COMBO: LazyLock<Combo> = LazyLock::new(|| Combo {
    label: "Full combo".into(),
    spell_order: "Spell1 > Spell2 > AA".into(),
    steps: vec![ComboStep {
        label: "Estimated combo".into(),
        damage_type: DamageType::Physical,
        base: vec![300.0],
        rank_slot: None,
        scaling: vec![Scaling::new(ScalingStat::AttackDamage, 2.5)],
        ..ComboStep::default()
    }],
});

impl Combo {
    /// Combo used for champions without a database entry.
    pub fn fallback<'a>() -> &'a Combo {
        &FALLBACK_COMBO
    }
}

/// What the damage model may know about the target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetView {
    pub level: u32,
    pub max_hp: f64,
    pub hp_fraction: f64,
    pub mana_fraction: Option<f64>,
    pub armor: f64,
    pub mr: f64,
}

/// Immutable (player, target) pair every step formula and predicate reads.
#[derive(Clone, Copy, Debug)]
pub struct EngagementContext<'a> {
    pub player: &'a PlayerSnapshot,
    pub target: TargetView,
    pub isolated: bool,
}

impl EngagementContext<'_> {
    pub fn stat(&self, stat: ScalingStat) -> f64 {
        match stat {
            ScalingStat::AttackDamage => self.player.attack_damage,
            ScalingStat::BonusAttackDamage => self.player.bonus_attack_damage,
            ScalingStat::AbilityPower => self.player.ability_power,
            ScalingStat::Level => f64::from(self.player.level),
            ScalingStat::TargetMaxHp => self.target.max_hp,
            ScalingStat::TargetMissingHpFraction => 1.0 - self.target.hp_fraction,
        }
    }
}
