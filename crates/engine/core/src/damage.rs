//! Damage model: per-step mitigation and enemy effective health.

use crate::combo::{Combo, DamageType, EngagementContext};
use crate::ids::ItemId;
use crate::stats::{ChampionStatCurve, ItemModifier, MAX_LEVEL, PlayerSnapshot};

/// `100 / (100 + resistance)`, with negative resistance clamped to zero.
pub fn mitigation_multiplier(resistance: f64) -> f64 {
    100.0 / (100.0 + resistance.max(0.0))
}

/// Target resistances after the player's penetration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EffectiveResistances {
    pub armor: f64,
    pub mr: f64,
}

impl EffectiveResistances {
    /// Percent armor pen applies before lethality; lethality scales with the
    /// attacker's level.
    pub fn against(player: &PlayerSnapshot, armor: f64, mr: f64) -> Self {
        let level = f64::from(player.level.clamp(1, MAX_LEVEL));
        let flat_pen = player.lethality * (0.6 + 0.4 * level / f64::from(MAX_LEVEL));
        let percent_pen = player.armor_pen_percent.clamp(0.0, 1.0);
        Self {
            armor: (armor * (1.0 - percent_pen) - flat_pen).max(0.0),
            mr: (mr - player.magic_pen_flat).max(0.0),
        }
    }

    pub fn multiplier(&self, damage_type: DamageType) -> f64 {
        match damage_type {
            DamageType::Physical => mitigation_multiplier(self.armor),
            DamageType::Magic => mitigation_multiplier(self.mr),
            DamageType::True => 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StepDamage {
    pub label: String,
    pub damage_type: DamageType,
    pub raw: f64,
    pub effective: f64,
}

/// Ordered per-step damage, one entry per applicable step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DamageBreakdown {
    pub steps: Vec<StepDamage>,
}

impl DamageBreakdown {
    pub fn total_raw(&self) -> f64 {
        self.steps.iter().fold(0.0, |acc, s| acc + s.raw)
    }

    pub fn total_effective(&self) -> f64 {
        self.steps.iter().fold(0.0, |acc, s| acc + s.effective)
    }

    pub fn effective_by_type(&self, damage_type: DamageType) -> f64 {
        self.steps
            .iter()
            .filter(|s| s.damage_type == damage_type)
            .fold(0.0, |acc, s| acc + s.effective)
    }

    fn push(
        &mut self,
        label: &str,
        damage_type: DamageType,
        raw: f64,
        resist: &EffectiveResistances,
    ) {
        let raw = raw.max(0.0);
        self.steps.push(StepDamage {
            label: label.to_owned(),
            damage_type,
            raw,
            effective: raw * resist.multiplier(damage_type),
        });
    }
}

/// Expected burst of `combo` plus any damaging item actives the player holds.
///
/// Steps that do not apply (unlearned spell, unmet requirement) are omitted.
pub fn compute_expected_damage(
    combo: &Combo,
    player_items: &[(&ItemId, &ItemModifier)],
    ctx: &EngagementContext<'_>,
    resistances: &EffectiveResistances,
) -> DamageBreakdown {
    let mut breakdown = DamageBreakdown::default();
    for step in &combo.steps {
        if let Some(raw) = step.raw_amount(ctx) {
            breakdown.push(&step.label, step.damage_type, raw, resistances);
        }
    }
    for (id, modifier) in player_items {
        if let Some(active) = modifier.active {
            breakdown.push(id.as_str(), active.damage_type, active.amount, resistances);
        }
    }
    breakdown
}

/// `(base_hp(level) + Σ item hp) × hp_fraction`.
pub fn compute_enemy_effective_hp<'a>(
    curve: &ChampionStatCurve,
    level: u32,
    hp_fraction: f64,
    items: impl IntoIterator<Item = &'a ItemModifier>,
) -> f64 {
    let bonus: f64 = items.into_iter().map(|m| m.hp_bonus).sum();
    (curve.base_hp(level) + bonus) * hp_fraction
}
