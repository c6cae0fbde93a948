//! Identifier newtypes and the millisecond timestamp used by the buffer.
//!
//! Champion and item names arrive in display form ("Kha'Zix", "Death's Dance")
//! from the game API and in key form from the catalog files. Both newtypes
//! normalize on construction so lookups never depend on the caller's spelling.
use core::fmt;

use strum::{Display, EnumIter, IntoStaticStr};

/// Normalized champion key (`"Kha'Zix"` → `khazix`, `"Jarvan IV"` → `jarvaniv`).
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub struct ChampionId(String);

impl ChampionId {
    pub fn new(raw: &str) -> Self {
        Self(normalize_champion_key(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ChampionId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ChampionId {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<ChampionId> for String {
    fn from(id: ChampionId) -> Self {
        id.0
    }
}

impl fmt::Display for ChampionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalized item key (`"Death's Dance"` → `deaths_dance`).
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub struct ItemId(String);

impl ItemId {
    pub fn new(raw: &str) -> Self {
        Self(normalize_item_key(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ItemId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ItemId {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lowercase, drop apostrophes, spaces, and dots.
pub fn normalize_champion_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, '\'' | ' ' | '.'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Lowercase, drop apostrophes, map spaces and hyphens to underscores.
pub fn normalize_item_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| *c != '\'')
        .map(|c| if matches!(c, ' ' | '-') { '_' } else { c })
        .flat_map(char::to_lowercase)
        .collect()
}

/// Ability slot whose rank scales a combo step.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpellSlot {
    Q,
    W,
    E,
    R,
}

impl SpellSlot {
    /// Parses `"q"`, `"Q"`, etc. Returns `None` for passives and unknown keys.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "Q" | "q" => Some(Self::Q),
            "W" | "w" => Some(Self::W),
            "E" | "e" => Some(Self::E),
            "R" | "r" => Some(Self::R),
            _ => None,
        }
    }
}

/// Milliseconds on a monotonic clock owned by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(u64);

impl Timestamp {
    pub const ZERO: Self = Self(0);

    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Elapsed milliseconds since `earlier`, saturating at zero.
    pub const fn millis_since(self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}
