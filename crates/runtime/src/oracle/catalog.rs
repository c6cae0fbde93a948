//! [`StatsCatalog`] implementation that counts unknown ids.
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use engine_core::{
    ChampionId, ChampionStatCurve, Combo, ItemId, ItemModifier, StaticCatalog, StatsCatalog,
};

/// Miss counters since startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnknownEntityCounts {
    pub champions: u64,
    pub items: u64,
    pub combos: u64,
}

/// Shared, read-only catalog used by the tick worker.
///
/// Every miss is counted; each distinct unknown id is logged once.
pub struct CatalogOracle {
    catalog: StaticCatalog,
    champion_misses: AtomicU64,
    item_misses: AtomicU64,
    combo_misses: AtomicU64,
    reported: Mutex<HashSet<String>>,
}

impl CatalogOracle {
    pub fn new(catalog: StaticCatalog) -> Self {
        Self {
            catalog,
            champion_misses: AtomicU64::new(0),
            item_misses: AtomicU64::new(0),
            combo_misses: AtomicU64::new(0),
            reported: Mutex::new(HashSet::new()),
        }
    }

    pub fn unknown_counts(&self) -> UnknownEntityCounts {
        UnknownEntityCounts {
            champions: self.champion_misses.load(Ordering::Relaxed),
            items: self.item_misses.load(Ordering::Relaxed),
            combos: self.combo_misses.load(Ordering::Relaxed),
        }
    }

    pub fn inner(&self) -> &StaticCatalog {
        &self.catalog
    }

    fn miss(&self, counter: &AtomicU64, kind: &'static str, id: &str) {
        counter.fetch_add(1, Ordering::Relaxed);
        // Empty ids are unreported slots, not database gaps.
        if id.is_empty() {
            return;
        }
        let first = match self.reported.lock() {
            Ok(mut reported) => reported.insert(format!("{kind}:{id}")),
            Err(_) => false,
        };
        if first {
            tracing::debug!(
                target: "runtime::catalog",
                kind,
                id,
                code = "UNKNOWN_ENTITY",
                "not in catalog, using default record"
            );
        }
    }
}

impl StatsCatalog for CatalogOracle {
    fn champion(&self, id: &ChampionId) -> Option<&ChampionStatCurve> {
        let found = self.catalog.champion(id);
        if found.is_none() {
            self.miss(&self.champion_misses, "champion", id.as_str());
        }
        found
    }

    fn item(&self, id: &ItemId) -> Option<&ItemModifier> {
        let found = self.catalog.item(id);
        if found.is_none() {
            self.miss(&self.item_misses, "item", id.as_str());
        }
        found
    }

    fn combo(&self, id: &ChampionId) -> Option<&Combo> {
        let found = self.catalog.combo(id);
        if found.is_none() {
            self.miss(&self.combo_misses, "combo", id.as_str());
        }
        found
    }
}
