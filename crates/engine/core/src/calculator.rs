//! Kill calculator: player snapshot + resolved enemy state → capped verdict.

use crate::catalog::StatsCatalog;
use crate::combo::{EngagementContext, TargetView};
use crate::confidence::{Classification, ConfidenceResult, compute_confidence};
use crate::config::CalculatorConfig;
use crate::damage::{
    DamageBreakdown, EffectiveResistances, compute_enemy_effective_hp, compute_expected_damage,
};
use crate::error::InvariantViolation;
use crate::ids::{ChampionId, ItemId};
use crate::observation::ResolvedEnemyState;
use crate::stats::{EnemyProfile, ItemModifier, PlayerSnapshot};
use crate::threat::ThreatFlags;

/// Why a result was forced to PAUSED.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PauseReason {
    PlayerDown,
    TargetDead,
    PreGame,
    LateGame,
}

impl PauseReason {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PlayerDown => "player is down",
            Self::TargetDead => "target is dead",
            Self::PreGame => "game has not started",
            Self::LateGame => "late game",
        }
    }
}

/// Everything one tick computed for the locked target.
#[derive(Clone, Debug, PartialEq)]
pub struct KillAssessment {
    pub target: ChampionId,
    pub result: ConfidenceResult,
    pub pause_reason: Option<PauseReason>,
    pub damage: DamageBreakdown,
    pub enemy_effective_hp: f64,
    /// Catalog max HP at the enemy's level, items included.
    pub enemy_max_hp: f64,
    pub hp_fraction: f64,
    pub mana_fraction: Option<f64>,
    /// Enemy armor and MR before penetration.
    pub armor: f64,
    pub mr: f64,
    pub resistances: EffectiveResistances,
    /// Uncapped damage / effective HP; infinite for a degenerate target.
    pub kill_ratio: f64,
    pub threats: ThreatFlags,
    pub combo_label: String,
    pub spell_order: String,
}

impl KillAssessment {
    pub fn percent(&self) -> u8 {
        self.result.percent
    }

    pub fn classification(&self) -> Classification {
        self.result.classification
    }
}

pub struct KillCalculator<'a, C: StatsCatalog + ?Sized> {
    catalog: &'a C,
    config: CalculatorConfig,
}

impl<'a, C: StatsCatalog + ?Sized> KillCalculator<'a, C> {
    pub fn new(catalog: &'a C, config: CalculatorConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Assesses one engagement.
    ///
    /// Never fails on missing data; an `Err` means a computed value left its
    /// legal range and the result must not be shown.
    pub fn assess(
        &self,
        player: &PlayerSnapshot,
        enemy: &EnemyProfile,
        resolved: &ResolvedEnemyState,
        game_time_secs: f64,
    ) -> Result<KillAssessment, InvariantViolation> {
        let hp_fraction = resolved.hp_fraction;
        if !(0.0..=1.0).contains(&hp_fraction) {
            return Err(InvariantViolation::HpFractionOutOfRange(hp_fraction));
        }

        let curve = self.catalog.lookup_champion(&enemy.champion);
        let enemy_items: Vec<&ItemModifier> = enemy
            .items
            .iter()
            .map(|id| self.catalog.lookup_item(id))
            .collect();
        let base = curve.at_level(enemy.level);
        let armor = base.armor + enemy_items.iter().map(|m| m.armor_bonus).sum::<f64>();
        let mr = base.mr + enemy_items.iter().map(|m| m.mr_bonus).sum::<f64>();
        let enemy_max_hp = base.hp + enemy_items.iter().map(|m| m.hp_bonus).sum::<f64>();
        let resistances = EffectiveResistances::against(player, armor, mr);

        let isolated = self.config.assume_isolated;
        let ctx = EngagementContext {
            player,
            target: TargetView {
                level: enemy.level,
                max_hp: enemy_max_hp,
                hp_fraction,
                mana_fraction: resolved.mana.fraction,
                armor,
                mr,
            },
            isolated,
        };
        let combo = self.catalog.lookup_combo(&player.champion);
        let player_items: Vec<(&ItemId, &ItemModifier)> = player
            .items
            .iter()
            .map(|id| (id, self.catalog.lookup_item(id)))
            .collect();
        let damage = compute_expected_damage(combo, &player_items, &ctx, &resistances);

        let total = damage.total_effective();
        if !total.is_finite() || total < 0.0 {
            return Err(InvariantViolation::InvalidDamage(total));
        }
        let enemy_effective_hp = compute_enemy_effective_hp(
            curve,
            enemy.level,
            hp_fraction,
            enemy_items.iter().copied(),
        );
        if !enemy_effective_hp.is_finite() {
            return Err(InvariantViolation::InvalidEffectiveHp(enemy_effective_hp));
        }

        let percent = compute_confidence(total, enemy_effective_hp);
        let player_hp_fraction = player.hp_fraction();
        let pause_reason = self.pause_reason(player_hp_fraction, enemy, game_time_secs);
        let classification = match pause_reason {
            Some(_) => Classification::Paused,
            None => self.config.thresholds().classify(percent, player_hp_fraction),
        };
        let result = ConfidenceResult {
            percent,
            classification,
            enemy_source: resolved.source,
        };
        result.validate()?;

        let kill_ratio = if enemy_effective_hp > 0.0 {
            total / enemy_effective_hp
        } else {
            f64::INFINITY
        };

        Ok(KillAssessment {
            target: enemy.champion.clone(),
            result,
            pause_reason,
            damage,
            enemy_effective_hp,
            enemy_max_hp,
            hp_fraction,
            mana_fraction: resolved.mana.fraction,
            armor,
            mr,
            resistances,
            kill_ratio,
            threats: ThreatFlags::for_enemy(enemy, enemy_items.iter().copied(), isolated),
            combo_label: combo.label.clone(),
            spell_order: combo.spell_order.clone(),
        })
    }

    /// Player HP first; the game-time window only applies once the clock is
    /// known.
    fn pause_reason(
        &self,
        player_hp_fraction: f64,
        enemy: &EnemyProfile,
        game_time_secs: f64,
    ) -> Option<PauseReason> {
        let window = &self.config.engagement_window;
        if player_hp_fraction == 0.0 {
            Some(PauseReason::PlayerDown)
        } else if enemy.is_dead {
            Some(PauseReason::TargetDead)
        } else if game_time_secs > 0.0 && game_time_secs < window.min_game_time_secs {
            Some(PauseReason::PreGame)
        } else if game_time_secs > window.max_game_time_secs {
            Some(PauseReason::LateGame)
        } else {
            None
        }
    }
}
