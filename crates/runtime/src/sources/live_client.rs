//! Live Client Data API adapter.
//!
//! The game exposes `activeplayer`, `playerlist`, and `gamestats` as JSON on
//! a local endpoint while a match runs. The HTTP transport is external; this
//! module owns only the payload shapes and their mapping to a
//! [`GameSnapshot`].

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Deserialize;

use engine_core::{ChampionId, EnemyProfile, GameSnapshot, ItemId, PlayerSnapshot, SpellSlot};

use crate::api::{PlayerStatsSource, SourceError};

const SOURCE_NAME: &str = "live client";

const SLOTS: [SpellSlot; 4] = [SpellSlot::Q, SpellSlot::W, SpellSlot::E, SpellSlot::R];

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActivePlayer {
    pub summoner_name: String,
    pub level: u32,
    pub champion_stats: ChampionStats,
    pub abilities: BTreeMap<String, Ability>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChampionStats {
    pub current_health: f64,
    pub max_health: f64,
    pub attack_damage: f64,
    pub bonus_attack_damage: f64,
    pub ability_power: f64,
    /// Lethality.
    pub armor_penetration_flat: f64,
    /// Multiplier form: `1.0` means no penetration, `0.7` means 30%.
    pub armor_penetration_percent: Option<f64>,
    pub magic_penetration_flat: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ability {
    pub ability_level: u8,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerEntry {
    pub summoner_name: String,
    pub champion_name: String,
    pub level: u32,
    pub team: String,
    pub items: Vec<ItemEntry>,
    pub is_dead: bool,
    pub summoner_spells: SummonerSpells,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemEntry {
    pub display_name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SummonerSpells {
    pub summoner_spell_one: SummonerSpell,
    pub summoner_spell_two: SummonerSpell,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SummonerSpell {
    pub raw_display_name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameStats {
    pub game_time: f64,
}

/// Builds a snapshot from the three payloads.
///
/// The local player is found in the player list by summoner name; enemies
/// are every entry on the other team. If the player is missing from the
/// list, champion and items stay empty and nobody is treated as an enemy.
pub fn map_snapshot(
    active: &ActivePlayer,
    players: &[PlayerEntry],
    stats: Option<&GameStats>,
) -> GameSnapshot {
    let me = players
        .iter()
        .find(|p| !active.summoner_name.is_empty() && p.summoner_name == active.summoner_name);

    let champion_stats = &active.champion_stats;
    let spell_ranks = SLOTS
        .iter()
        .filter_map(|slot| {
            let key: &'static str = (*slot).into();
            active
                .abilities
                .get(key)
                .map(|ability| (*slot, ability.ability_level))
        })
        .collect();

    let player = PlayerSnapshot {
        champion: me.map(|p| ChampionId::new(&p.champion_name)).unwrap_or_default(),
        level: active.level,
        attack_damage: champion_stats.attack_damage,
        bonus_attack_damage: champion_stats.bonus_attack_damage,
        ability_power: champion_stats.ability_power,
        hp_current: champion_stats.current_health,
        hp_max: champion_stats.max_health,
        items: me.map(|p| item_ids(&p.items)).unwrap_or_default(),
        spell_ranks,
        lethality: champion_stats.armor_penetration_flat,
        armor_pen_percent: champion_stats
            .armor_penetration_percent
            .map_or(0.0, |multiplier| (1.0 - multiplier).clamp(0.0, 1.0)),
        magic_pen_flat: champion_stats.magic_penetration_flat,
    };

    let enemies = match me {
        Some(me) => players
            .iter()
            .filter(|p| p.team != me.team)
            .map(|p| EnemyProfile {
                champion: ChampionId::new(&p.champion_name),
                level: p.level,
                items: item_ids(&p.items),
                summoner_spells: vec![
                    p.summoner_spells.summoner_spell_one.raw_display_name.clone(),
                    p.summoner_spells.summoner_spell_two.raw_display_name.clone(),
                ],
                is_dead: p.is_dead,
            })
            .collect(),
        None => Vec::new(),
    };

    GameSnapshot {
        player,
        enemies,
        game_time_secs: stats.map_or(0.0, |s| s.game_time),
    }
}

fn item_ids(items: &[ItemEntry]) -> Vec<ItemId> {
    items
        .iter()
        .filter(|i| !i.display_name.is_empty())
        .map(|i| ItemId::new(&i.display_name))
        .collect()
}

/// Fetches one endpoint of the local game API.
#[async_trait]
pub trait LiveClientTransport: Send + Sync {
    /// Raw JSON body, or `Ok(None)` when no game is running.
    async fn get(&self, endpoint: &str) -> Result<Option<String>, SourceError>;
}

/// [`PlayerStatsSource`] backed by the Live Client Data API.
pub struct LiveClientSource<T> {
    transport: T,
}

impl<T: LiveClientTransport> LiveClientSource<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    async fn fetch<P: for<'de> Deserialize<'de>>(
        &self,
        endpoint: &'static str,
    ) -> Result<Option<P>, SourceError> {
        let Some(body) = self.transport.get(endpoint).await? else {
            return Ok(None);
        };
        serde_json::from_str(&body)
            .map(Some)
            .map_err(|source| SourceError::Malformed {
                source_name: SOURCE_NAME,
                endpoint,
                source,
            })
    }
}

#[async_trait]
impl<T: LiveClientTransport> PlayerStatsSource for LiveClientSource<T> {
    async fn snapshot(&self) -> Result<Option<GameSnapshot>, SourceError> {
        let Some(active) = self.fetch::<ActivePlayer>("activeplayer").await? else {
            return Ok(None);
        };
        let Some(players) = self.fetch::<Vec<PlayerEntry>>("playerlist").await? else {
            return Ok(None);
        };
        // Game time only drives the engagement window; missing stats are fine.
        let stats = self.fetch::<GameStats>("gamestats").await.ok().flatten();

        Ok(Some(map_snapshot(&active, &players, stats.as_ref())))
    }
}
