//! Champion stat curve loader.

use std::path::Path;

use engine_core::{ChampionId, ChampionStatCurve};

use crate::loaders::{LoadResult, keyed, read_file};

/// Loader for champion stat curves from RON files.
pub struct ChampionLoader;

impl ChampionLoader {
    /// Load champion curves from a RON file.
    ///
    /// RON format: `Vec<(String, ChampionStatCurve)>`
    pub fn load(path: &Path) -> LoadResult<Vec<(ChampionId, ChampionStatCurve)>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<(ChampionId, ChampionStatCurve)>> {
        let raw: Vec<(String, ChampionStatCurve)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse champion catalog RON: {}", e))?;

        let entries = keyed("champion", raw, ChampionId::new, ChampionId::is_empty)?;
        for (id, curve) in &entries {
            if !(curve.base_hp > 0.0) || curve.hp_per_level < 0.0 {
                anyhow::bail!("Champion '{}' has a non-positive HP curve", id);
            }
        }
        Ok(entries)
    }
}
