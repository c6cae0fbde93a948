//! Calculator tunables.
//!
//! Loaded from `config.toml` by engine-content; every field has a default so a
//! partial or missing file is fine. The confidence cap is not part of this
//! struct: it is a fixed constant in [`crate::confidence`].

use crate::confidence::Thresholds;

/// Game-time range in which assessments are meaningful.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngagementWindow {
    /// Before this many seconds of game time the result is PAUSED.
    pub min_game_time_secs: f64,
    /// After this many seconds of game time the result is PAUSED.
    pub max_game_time_secs: f64,
}

impl EngagementWindow {
    pub const fn new(min_game_time_secs: f64, max_game_time_secs: f64) -> Self {
        Self {
            min_game_time_secs,
            max_game_time_secs,
        }
    }
}

impl Default for EngagementWindow {
    fn default() -> Self {
        Self::new(10.0, 2_700.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalculatorConfig {
    /// Lowest percent classified GO.
    pub go_threshold: u8,
    /// Lowest percent classified RISKY.
    pub risky_threshold: u8,
    /// Whether steps gated on target isolation count. No ally/minion
    /// detection exists, so this is an assumption rather than an observation.
    pub assume_isolated: bool,
    pub engagement_window: EngagementWindow,
}

impl CalculatorConfig {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(self.go_threshold, self.risky_threshold)
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        let thresholds = Thresholds::default();
        Self {
            go_threshold: thresholds.go,
            risky_threshold: thresholds.risky,
            assume_isolated: true,
            engagement_window: EngagementWindow::default(),
        }
    }
}
