//! Champion combo loader.

use std::path::Path;

use engine_core::{ChampionId, Combo};

use crate::loaders::{LoadResult, keyed, read_file};

/// Loader for champion combos from RON files.
pub struct ComboLoader;

impl ComboLoader {
    /// Load combos from a RON file.
    ///
    /// RON format: `Vec<(String, Combo)>`
    ///
    /// A ranked step with an empty base table could never contribute damage
    /// and is rejected as a data error.
    pub fn load(path: &Path) -> LoadResult<Vec<(ChampionId, Combo)>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<(ChampionId, Combo)>> {
        let raw: Vec<(String, Combo)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse combo catalog RON: {}", e))?;

        let entries = keyed("combo", raw, ChampionId::new, ChampionId::is_empty)?;
        for (id, combo) in &entries {
            if let Some(step) = combo
                .steps
                .iter()
                .find(|s| s.rank_slot.is_some() && s.base.is_empty())
            {
                anyhow::bail!("Combo '{}' step '{}' has no base damage table", id, step.label);
            }
        }
        Ok(entries)
    }
}
