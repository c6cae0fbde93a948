//! Capped kill confidence and its classification.

use strum::{Display, IntoStaticStr};

use crate::error::InvariantViolation;
use crate::observation::EnemySource;

/// Hard ceiling for the displayed percent. Represents execution uncertainty
/// that no input can remove; applied after all other arithmetic.
pub const CONFIDENCE_CAP: u8 = 97;

/// Percent of the enemy's effective HP the expected burst removes, capped.
///
/// Non-positive effective HP is a degenerate (already dead) target and reads
/// as the cap. Non-finite or negative ratios read as zero.
pub fn compute_confidence(total_expected_damage: f64, enemy_effective_hp: f64) -> u8 {
    if enemy_effective_hp <= 0.0 {
        return CONFIDENCE_CAP;
    }
    let ratio = total_expected_damage / enemy_effective_hp;
    if !ratio.is_finite() || ratio <= 0.0 {
        return 0;
    }
    let percent = (ratio * 100.0).round();
    if percent >= f64::from(CONFIDENCE_CAP) {
        CONFIDENCE_CAP
    } else {
        percent as u8
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Classification {
    #[strum(to_string = "GO")]
    Go,
    #[strum(to_string = "RISKY")]
    Risky,
    #[strum(to_string = "NO GO")]
    NoGo,
    #[strum(to_string = "PAUSED")]
    Paused,
}

/// Lower bounds (inclusive) for GO and RISKY.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Thresholds {
    pub go: u8,
    pub risky: u8,
}

impl Thresholds {
    pub const fn new(go: u8, risky: u8) -> Self {
        Self { go, risky }
    }

    /// A player HP fraction of exactly zero pauses regardless of percent.
    pub fn classify(&self, percent: u8, player_hp_fraction: f64) -> Classification {
        if player_hp_fraction == 0.0 {
            Classification::Paused
        } else if percent >= self.go {
            Classification::Go
        } else if percent >= self.risky {
            Classification::Risky
        } else {
            Classification::NoGo
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new(75, 50)
    }
}

/// [`Thresholds::classify`] with the default 75/50 bounds.
pub fn classify(percent: u8, player_hp_fraction: f64) -> Classification {
    Thresholds::default().classify(percent, player_hp_fraction)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfidenceResult {
    pub percent: u8,
    pub classification: Classification,
    pub enemy_source: EnemySource,
}

impl ConfidenceResult {
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        if self.percent > CONFIDENCE_CAP {
            return Err(InvariantViolation::PercentOutOfRange {
                percent: self.percent,
                cap: CONFIDENCE_CAP,
            });
        }
        Ok(())
    }
}
