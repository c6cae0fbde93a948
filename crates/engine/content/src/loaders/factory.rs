//! Content factory for building the catalog from data files.

use std::path::{Path, PathBuf};

use engine_core::{CalculatorConfig, StaticCatalog};

use crate::loaders::{ChampionLoader, ComboLoader, ConfigLoader, ItemLoader, LoadResult};

/// Content factory that loads all catalog content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml      (optional)
/// ├── champions.ron
/// ├── items.ron
/// └── combos.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(crate::bundled_data_dir())
    }

    /// Load calculator configuration from `config.toml`, or defaults when the
    /// file does not exist.
    pub fn load_config(&self) -> LoadResult<CalculatorConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::info!(
                target: "content::loader",
                path = %path.display(),
                "no config file, using defaults"
            );
            return Ok(CalculatorConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load `champions.ron`, `items.ron`, and `combos.ron` into one catalog.
    pub fn load_catalog(&self) -> LoadResult<StaticCatalog> {
        let mut catalog = StaticCatalog::new();

        for (id, curve) in ChampionLoader::load(&self.data_dir.join("champions.ron"))? {
            catalog.insert_champion(id, curve);
        }
        for (id, modifier) in ItemLoader::load(&self.data_dir.join("items.ron"))? {
            catalog.insert_item(id, modifier);
        }
        for (id, combo) in ComboLoader::load(&self.data_dir.join("combos.ron"))? {
            catalog.insert_combo(id, combo);
        }

        tracing::info!(
            target: "content::loader",
            champions = catalog.champion_count(),
            items = catalog.item_count(),
            combos = catalog.combo_count(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_config_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ContentFactory::new(dir.path()).load_config().unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn missing_catalog_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContentFactory::new(dir.path()).load_catalog().unwrap_err();
        assert!(err.to_string().contains("champions.ron"));
    }
}
