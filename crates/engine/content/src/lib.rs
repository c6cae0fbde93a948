//! Data-driven catalog content and loaders.
//!
//! This crate ships the static champion/item/combo databases and the
//! calculator configuration, and provides loaders for their RON/TOML files:
//! - Champion stat curves (`champions.ron`)
//! - Item stat deltas, actives, and threat tags (`items.ron`)
//! - Champion combos (`combos.ron`)
//! - Calculator tunables (`config.toml`)
//!
//! Entries are keyed by display name in the files; loaders normalize keys
//! through the engine-core id newtypes so lookups match game API spellings.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ChampionLoader, ComboLoader, ConfigLoader, ContentFactory, ItemLoader};

/// Directory holding the data files shipped with this crate.
pub fn bundled_data_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}
