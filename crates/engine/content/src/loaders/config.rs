//! Calculator configuration loader.

use std::path::Path;

use engine_core::CalculatorConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for calculator configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys take their defaults. Thresholds must satisfy
    /// `risky <= go <= 97`.
    pub fn load(path: &Path) -> LoadResult<CalculatorConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<CalculatorConfig> {
        let config: CalculatorConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.risky_threshold > config.go_threshold
            || config.go_threshold > engine_core::CONFIDENCE_CAP
        {
            anyhow::bail!(
                "Invalid thresholds: risky {} / go {} (cap {})",
                config.risky_threshold,
                config.go_threshold,
                engine_core::CONFIDENCE_CAP
            );
        }
        let window = &config.engagement_window;
        if window.min_game_time_secs > window.max_game_time_secs {
            anyhow::bail!(
                "Engagement window starts after it ends ({} > {})",
                window.min_game_time_secs,
                window.max_game_time_secs
            );
        }
        Ok(config)
    }
}
