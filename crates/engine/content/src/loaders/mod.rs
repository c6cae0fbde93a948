//! Content loaders for reading catalog data from files.
//!
//! RON catalogs are lists of `(name, record)` pairs. Names are normalized into
//! [`engine_core::ChampionId`]/[`engine_core::ItemId`] keys; a name that
//! normalizes to an empty key or appears twice is a load error.

pub mod champions;
pub mod combos;
pub mod config;
pub mod factory;
pub mod items;

pub use champions::ChampionLoader;
pub use combos::ComboLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use items::ItemLoader;

use std::collections::HashSet;
use std::hash::Hash;
use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Normalizes `(name, record)` pairs into keyed entries, rejecting empty and
/// duplicate keys.
pub(crate) fn keyed<K, V>(
    kind: &str,
    raw: Vec<(String, V)>,
    key: impl Fn(&str) -> K,
    is_empty: impl Fn(&K) -> bool,
) -> LoadResult<Vec<(K, V)>>
where
    K: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(raw.len());
    for (name, value) in raw {
        let id = key(&name);
        if is_empty(&id) {
            anyhow::bail!("{} entry '{}' has an empty key", kind, name);
        }
        if !seen.insert(id.clone()) {
            anyhow::bail!("Duplicate {} entry '{}'", kind, name);
        }
        entries.push((id, value));
    }
    Ok(entries)
}
