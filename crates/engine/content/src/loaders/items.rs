//! Item catalog loader.

use std::path::Path;

use engine_core::{ItemId, ItemModifier};

use crate::loaders::{LoadResult, keyed, read_file};

/// Loader for item modifiers from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item modifiers from a RON file.
    ///
    /// RON format: `Vec<(String, ItemModifier)>`, keyed by display name.
    pub fn load(path: &Path) -> LoadResult<Vec<(ItemId, ItemModifier)>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<(ItemId, ItemModifier)>> {
        let raw: Vec<(String, ItemModifier)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        keyed("item", raw, ItemId::new, ItemId::is_empty)
    }
}
