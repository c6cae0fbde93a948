use crate::error::ObservationError;
use crate::ids::{ChampionId, Timestamp};
use crate::observation::{EnemySource, ObservationBuffer, PanelReading};

/// Mana after its own pass through the fallback chain.
///
/// An `Assumed` mana source carries no fraction: unknown mana disables
/// mana-gated combo steps rather than guessing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedMana {
    pub fraction: Option<f64>,
    pub source: EnemySource,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedEnemyState {
    pub champion: ChampionId,
    pub hp_fraction: f64,
    pub source: EnemySource,
    pub mana: ResolvedMana,
    /// Max HP the panel last showed, if it showed numbers.
    pub observed_hp_max: Option<u32>,
    /// Set when this tick's reading was discarded by validation.
    pub rejected: Option<ObservationError>,
}

/// Owns the observation buffer and applies the fallback order.
#[derive(Clone, Debug, Default)]
pub struct EnemyStateResolver {
    buffer: ObservationBuffer,
}

impl EnemyStateResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &ObservationBuffer {
        &self.buffer
    }

    /// Resolves `champion` for this tick.
    ///
    /// `live` is this tick's panel reading for the champion, if any. A valid
    /// live reading always wins and is recorded; otherwise the buffered
    /// fraction is used as-is, and with no history full health is assumed.
    pub fn resolve(
        &mut self,
        champion: &ChampionId,
        live: Option<PanelReading>,
        now: Timestamp,
    ) -> ResolvedEnemyState {
        let mut rejected = None;
        let mut live_mana = false;

        if let Some(reading) = live {
            match self.buffer.record(champion, reading, now) {
                Ok(_) => live_mana = reading.mana.is_some(),
                Err(err) => rejected = Some(err),
            }
        }

        let Some(entry) = self.buffer.get(champion) else {
            return ResolvedEnemyState {
                champion: champion.clone(),
                hp_fraction: 1.0,
                source: EnemySource::Assumed,
                mana: ResolvedMana {
                    fraction: None,
                    source: EnemySource::Assumed,
                },
                observed_hp_max: None,
                rejected,
            };
        };

        let live_health = rejected.is_none() && live.is_some();
        let source = if live_health {
            EnemySource::Live
        } else {
            EnemySource::Cached {
                staleness_ms: now.millis_since(entry.observed_at),
            }
        };
        let mana = match entry.mana {
            Some(sample) if live_mana => ResolvedMana {
                fraction: Some(sample.reading.fraction()),
                source: EnemySource::Live,
            },
            Some(sample) => ResolvedMana {
                fraction: Some(sample.reading.fraction()),
                source: EnemySource::Cached {
                    staleness_ms: now.millis_since(sample.observed_at),
                },
            },
            None => ResolvedMana {
                fraction: None,
                source: EnemySource::Assumed,
            },
        };

        ResolvedEnemyState {
            champion: champion.clone(),
            hp_fraction: entry.hp_fraction(),
            source,
            mana,
            observed_hp_max: entry.health.max(),
            rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ms: u64) -> Timestamp {
        Timestamp::from_millis(ms)
    }

    #[test]
    fn never_observed_is_assumed_full() {
        let mut resolver = EnemyStateResolver::new();
        let state = resolver.resolve(&ChampionId::new("Lux"), None, at(0));
        assert_eq!(state.source, EnemySource::Assumed);
        assert_eq!(state.hp_fraction, 1.0);
        assert_eq!(state.mana.fraction, None);
    }

    #[test]
    fn live_reading_wins_over_cache() {
        let mut resolver = EnemyStateResolver::new();
        let lux = ChampionId::new("Lux");
        resolver.resolve(&lux, Some(PanelReading::exact(900, 1000)), at(100));
        let state = resolver.resolve(&lux, Some(PanelReading::exact(200, 1000)), at(400));
        assert_eq!(state.source, EnemySource::Live);
        assert_eq!(state.hp_fraction, 0.2);
        assert_eq!(state.observed_hp_max, Some(1000));
    }

    #[test]
    fn missing_reading_falls_back_to_cache_without_decay() {
        let mut resolver = EnemyStateResolver::new();
        let lux = ChampionId::new("Lux");
        resolver.resolve(&lux, Some(PanelReading::exact(400, 1000)), at(100));
        let state = resolver.resolve(&lux, None, at(60_100));
        assert_eq!(state.source, EnemySource::Cached { staleness_ms: 60_000 });
        assert_eq!(state.hp_fraction, 0.4);
    }

    #[test]
    fn rejected_reading_behaves_like_no_reading() {
        let mut resolver = EnemyStateResolver::new();
        let lux = ChampionId::new("Lux");

        let state = resolver.resolve(&lux, Some(PanelReading::exact(1200, 1000)), at(0));
        assert_eq!(state.source, EnemySource::Assumed);
        assert!(state.rejected.is_some());

        resolver.resolve(&lux, Some(PanelReading::exact(500, 1000)), at(100));
        let state = resolver.resolve(&lux, Some(PanelReading::exact(1200, 1000)), at(300));
        assert_eq!(state.source, EnemySource::Cached { staleness_ms: 200 });
        assert_eq!(state.hp_fraction, 0.5);
    }

    #[test]
    fn mana_falls_back_independently() {
        let mut resolver = EnemyStateResolver::new();
        let ahri = ChampionId::new("Ahri");
        resolver.resolve(
            &ahri,
            Some(PanelReading::exact(500, 1000).with_mana(100, 400)),
            at(100),
        );
        let state = resolver.resolve(&ahri, Some(PanelReading::exact(450, 1000)), at(300));

        assert_eq!(state.source, EnemySource::Live);
        assert_eq!(state.mana.fraction, Some(0.25));
        assert_eq!(state.mana.source, EnemySource::Cached { staleness_ms: 200 });
    }
}
