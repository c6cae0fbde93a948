//! Enemy roster entries reported alongside the player snapshot.

use crate::ids::{ChampionId, ItemId};
use crate::stats::player::PlayerSnapshot;

/// What the game API reports about one enemy: identity and build, never HP.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnemyProfile {
    pub champion: ChampionId,
    pub level: u32,
    pub items: Vec<ItemId>,
    /// Raw summoner spell names as reported by the API.
    pub summoner_spells: Vec<String>,
    pub is_dead: bool,
}

impl EnemyProfile {
    pub fn new(champion: ChampionId, level: u32) -> Self {
        Self {
            champion,
            level,
            ..Self::default()
        }
    }
}

/// Everything the stats source produces for one tick.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameSnapshot {
    pub player: PlayerSnapshot,
    /// Enemies in the order the API lists them.
    pub enemies: Vec<EnemyProfile>,
    /// Seconds since game start; zero when unknown.
    pub game_time_secs: f64,
}

impl GameSnapshot {
    pub fn enemy(&self, champion: &ChampionId) -> Option<&EnemyProfile> {
        self.enemies.iter().find(|e| &e.champion == champion)
    }
}
