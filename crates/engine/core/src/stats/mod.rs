//! Stat records: static curves and item deltas from the catalog, plus the
//! per-tick player and roster snapshots produced by the stats source.
//!
//! ```text
//! [ ChampionStatCurve ] --at_level--> [ BaseStats ]
//!                                          + Σ ItemModifier deltas
//!                                          = enemy HP / armor / MR
//! ```
//!
//! Snapshots are values: the core reads them and never mutates them.

pub mod curve;
pub mod enemy;
pub mod item;
pub mod player;

pub use curve::{BaseStats, ChampionStatCurve, MAX_LEVEL};
pub use enemy::{EnemyProfile, GameSnapshot};
pub use item::{ActiveDamage, ItemModifier, ItemTag};
pub use player::PlayerSnapshot;
