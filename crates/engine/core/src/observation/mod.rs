//! Enemy health/mana observations and the LIVE → CACHED → ASSUMED fallback.
//!
//! Raw panel readings are validated before they reach the buffer; a reading
//! that fails validation behaves exactly like no reading at all.

pub mod buffer;
pub mod resolver;

pub use buffer::{EnemyObservation, ManaSample, ObservationBuffer};
pub use resolver::{EnemyStateResolver, ResolvedEnemyState, ResolvedMana};

use crate::error::ObservationError;

/// Which tier of the fallback chain produced a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnemySource {
    /// Read this tick.
    Live,
    /// Reused from a prior reading, `staleness_ms` old. Not decayed.
    Cached { staleness_ms: u64 },
    /// Never observed; full resources assumed.
    Assumed,
}

impl EnemySource {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Live => "LIVE",
            Self::Cached { .. } => "CACHED",
            Self::Assumed => "ASSUMED",
        }
    }
}

/// Enemy health as the panel reports it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealthReading {
    /// Both numbers legible.
    Exact { current: u32, max: u32 },
    /// Only a bar fill ratio was readable.
    Ratio(f64),
}

impl HealthReading {
    pub fn validate(&self) -> Result<(), ObservationError> {
        match *self {
            Self::Exact { max: 0, .. } => Err(ObservationError::ZeroMaxHealth),
            Self::Exact { current, max } if current > max => {
                Err(ObservationError::HealthExceedsMax { current, max })
            }
            Self::Ratio(ratio) if !(0.0..=1.0).contains(&ratio) => {
                Err(ObservationError::RatioOutOfRange(ratio))
            }
            _ => Ok(()),
        }
    }

    /// Health fraction; only meaningful after [`validate`](Self::validate).
    pub fn fraction(&self) -> f64 {
        match *self {
            Self::Exact { current, max } if max > 0 => f64::from(current) / f64::from(max),
            Self::Exact { .. } => 0.0,
            Self::Ratio(ratio) => ratio,
        }
    }

    pub fn max(&self) -> Option<u32> {
        match *self {
            Self::Exact { max, .. } => Some(max),
            Self::Ratio(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManaReading {
    pub current: u32,
    pub max: u32,
}

impl ManaReading {
    pub fn validate(&self) -> Result<(), ObservationError> {
        if self.current > self.max {
            return Err(ObservationError::ManaExceedsMax {
                current: self.current,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Manaless champions (max 0) read as full.
    pub fn fraction(&self) -> f64 {
        if self.max == 0 {
            return 1.0;
        }
        f64::from(self.current) / f64::from(self.max)
    }
}

/// One successful panel read for the locked target.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelReading {
    pub health: HealthReading,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mana: Option<ManaReading>,
}

impl PanelReading {
    pub fn exact(current: u32, max: u32) -> Self {
        Self {
            health: HealthReading::Exact { current, max },
            mana: None,
        }
    }

    pub fn with_mana(mut self, current: u32, max: u32) -> Self {
        self.mana = Some(ManaReading { current, max });
        self
    }

    /// Health must be valid. Invalid mana is an error too: a garbled mana
    /// line usually means the whole panel crop was wrong.
    pub fn validate(&self) -> Result<(), ObservationError> {
        self.health.validate()?;
        if let Some(mana) = &self.mana {
            mana.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_reading_bounds() {
        assert!(HealthReading::Exact { current: 0, max: 900 }.validate().is_ok());
        assert!(HealthReading::Exact { current: 900, max: 900 }.validate().is_ok());
        assert_eq!(
            HealthReading::Exact { current: 901, max: 900 }.validate(),
            Err(ObservationError::HealthExceedsMax { current: 901, max: 900 })
        );
        assert_eq!(
            HealthReading::Exact { current: 0, max: 0 }.validate(),
            Err(ObservationError::ZeroMaxHealth)
        );
    }

    #[test]
    fn ratio_reading_bounds() {
        assert!(HealthReading::Ratio(0.25).validate().is_ok());
        assert!(HealthReading::Ratio(1.5).validate().is_err());
        assert!(HealthReading::Ratio(f64::NAN).validate().is_err());
    }

    #[test]
    fn panel_with_bad_mana_is_rejected() {
        let reading = PanelReading::exact(400, 800).with_mana(500, 300);
        assert!(matches!(
            reading.validate(),
            Err(ObservationError::ManaExceedsMax { .. })
        ));
    }

    #[test]
    fn fractions() {
        assert_eq!(PanelReading::exact(400, 800).health.fraction(), 0.5);
        assert_eq!(ManaReading { current: 0, max: 0 }.fraction(), 1.0);
    }
}
