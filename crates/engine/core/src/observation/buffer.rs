//! Last successful observation per enemy.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::error::ObservationError;
use crate::ids::{ChampionId, Timestamp};
use crate::observation::{HealthReading, ManaReading, PanelReading};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ManaSample {
    pub reading: ManaReading,
    pub observed_at: Timestamp,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnemyObservation {
    pub champion: ChampionId,
    pub health: HealthReading,
    /// Last mana seen. Kept across health-only reads so mana falls back
    /// independently of health.
    pub mana: Option<ManaSample>,
    pub observed_at: Timestamp,
}

impl EnemyObservation {
    pub fn hp_fraction(&self) -> f64 {
        self.health.fraction()
    }
}

/// Per-champion store of validated readings. Only the resolver writes here.
#[derive(Clone, Debug, Default)]
pub struct ObservationBuffer {
    entries: HashMap<ChampionId, EnemyObservation>,
}

impl ObservationBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the stored observation for `champion`.
    ///
    /// Rejects readings that fail validation; the previous entry is left
    /// untouched in that case.
    pub fn record(
        &mut self,
        champion: &ChampionId,
        reading: PanelReading,
        now: Timestamp,
    ) -> Result<&EnemyObservation, ObservationError> {
        reading.validate()?;

        let observation = |previous_mana: Option<ManaSample>| EnemyObservation {
            champion: champion.clone(),
            health: reading.health,
            mana: reading
                .mana
                .map(|mana| ManaSample {
                    reading: mana,
                    observed_at: now,
                })
                .or(previous_mana),
            observed_at: now,
        };
        let stored = match self.entries.entry(champion.clone()) {
            Entry::Occupied(mut slot) => {
                let previous_mana = slot.get().mana;
                slot.insert(observation(previous_mana));
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(observation(None)),
        };
        Ok(stored)
    }

    pub fn get(&self, champion: &ChampionId) -> Option<&EnemyObservation> {
        self.entries.get(champion)
    }

    /// Milliseconds since the last successful reading, if any.
    pub fn staleness(&self, champion: &ChampionId, now: Timestamp) -> Option<u64> {
        self.get(champion).map(|e| now.millis_since(e.observed_at))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_overwrites_and_tracks_staleness() {
        let mut buffer = ObservationBuffer::new();
        let zed = ChampionId::new("Zed");
        buffer
            .record(&zed, PanelReading::exact(800, 1000), Timestamp::from_millis(100))
            .unwrap();
        buffer
            .record(&zed, PanelReading::exact(300, 1000), Timestamp::from_millis(400))
            .unwrap();

        let entry = buffer.get(&zed).unwrap();
        assert_eq!(entry.hp_fraction(), 0.3);
        assert_eq!(buffer.staleness(&zed, Timestamp::from_millis(1_000)), Some(600));
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn invalid_reading_keeps_previous_entry() {
        let mut buffer = ObservationBuffer::new();
        let zed = ChampionId::new("Zed");
        buffer
            .record(&zed, PanelReading::exact(500, 1000), Timestamp::from_millis(100))
            .unwrap();
        let rejected =
            buffer.record(&zed, PanelReading::exact(1500, 1000), Timestamp::from_millis(200));

        assert!(rejected.is_err());
        assert_eq!(buffer.get(&zed).unwrap().observed_at, Timestamp::from_millis(100));
    }

    #[test]
    fn health_only_read_keeps_last_mana() {
        let mut buffer = ObservationBuffer::new();
        let ahri = ChampionId::new("Ahri");
        buffer
            .record(
                &ahri,
                PanelReading::exact(500, 1000).with_mana(200, 400),
                Timestamp::from_millis(100),
            )
            .unwrap();
        buffer
            .record(&ahri, PanelReading::exact(450, 1000), Timestamp::from_millis(300))
            .unwrap();

        let mana = buffer.get(&ahri).unwrap().mana.unwrap();
        assert_eq!(mana.reading.fraction(), 0.5);
        assert_eq!(mana.observed_at, Timestamp::from_millis(100));
    }
}
