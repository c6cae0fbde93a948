//! Read-only access to champion curves, item modifiers, and combos.
//!
//! Lookups never fail: an absent id resolves to a documented default record.
//! Implementations that want to count misses (for database expansion) do so in
//! the `champion`/`item`/`combo` hooks; the `lookup_*` helpers add the fallback.

use std::collections::HashMap;

use crate::combo::Combo;
use crate::ids::{ChampionId, ItemId};
use crate::stats::{ChampionStatCurve, ItemModifier};

static NO_ITEM: ItemModifier = ItemModifier::NONE;
static DEFAULT_CURVE: ChampionStatCurve = ChampionStatCurve::DEFAULT;

/// Immutable key → record lookup shared across ticks.
pub trait StatsCatalog: Send + Sync {
    fn champion(&self, id: &ChampionId) -> Option<&ChampionStatCurve>;

    fn item(&self, id: &ItemId) -> Option<&ItemModifier>;

    fn combo(&self, id: &ChampionId) -> Option<&Combo>;

    fn lookup_champion(&self, id: &ChampionId) -> &ChampionStatCurve {
        self.champion(id).unwrap_or(&DEFAULT_CURVE)
    }

    fn lookup_item(&self, id: &ItemId) -> &ItemModifier {
        self.item(id).unwrap_or(&NO_ITEM)
    }

    fn lookup_combo(&self, id: &ChampionId) -> &Combo {
        self.combo(id).unwrap_or_else(Combo::fallback)
    }
}

/// In-memory catalog built once at startup.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    champions: HashMap<ChampionId, ChampionStatCurve>,
    items: HashMap<ItemId, ItemModifier>,
    combos: HashMap<ChampionId, Combo>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_champion(&mut self, id: ChampionId, curve: ChampionStatCurve) {
        self.champions.insert(id, curve);
    }

    pub fn insert_item(&mut self, id: ItemId, modifier: ItemModifier) {
        self.items.insert(id, modifier);
    }

    pub fn insert_combo(&mut self, id: ChampionId, combo: Combo) {
        self.combos.insert(id, combo);
    }

    pub fn with_champion(mut self, id: impl Into<ChampionId>, curve: ChampionStatCurve) -> Self {
        self.insert_champion(id.into(), curve);
        self
    }

    pub fn with_item(mut self, id: impl Into<ItemId>, modifier: ItemModifier) -> Self {
        self.insert_item(id.into(), modifier);
        self
    }

    pub fn with_combo(mut self, id: impl Into<ChampionId>, combo: Combo) -> Self {
        self.insert_combo(id.into(), combo);
        self
    }

    pub fn champion_count(&self) -> usize {
        self.champions.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn combo_count(&self) -> usize {
        self.combos.len()
    }
}

impl StatsCatalog for StaticCatalog {
    fn champion(&self, id: &ChampionId) -> Option<&ChampionStatCurve> {
        self.champions.get(id)
    }

    fn item(&self, id: &ItemId) -> Option<&ItemModifier> {
        self.items.get(id)
    }

    fn combo(&self, id: &ChampionId) -> Option<&Combo> {
        self.combos.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_ids_resolve_to_defaults() {
        let catalog = StaticCatalog::new();
        assert_eq!(
            *catalog.lookup_champion(&ChampionId::new("Nobody")),
            ChampionStatCurve::DEFAULT
        );
        assert_eq!(*catalog.lookup_item(&ItemId::new("mystery")), ItemModifier::NONE);
        assert_eq!(catalog.lookup_combo(&ChampionId::new("Nobody")), Combo::fallback());
    }

    #[test]
    fn lookups_use_normalized_keys() {
        let curve = ChampionStatCurve {
            base_hp: 640.0,
            ..ChampionStatCurve::DEFAULT
        };
        let catalog = StaticCatalog::new().with_champion("Kha'Zix", curve);
        assert_eq!(catalog.lookup_champion(&ChampionId::new("khazix")).base_hp, 640.0);
        assert_eq!(catalog.champion_count(), 1);
    }
}
