//! Common error infrastructure for engine-core.
//!
//! Errors are sorted by how the tick should react to them:
//!
//! - **Transient**: missing or unusable input for one tick. Recovered by the
//!   fallback chain or by skipping the tick. Never shown to the user.
//! - **UnknownEntity**: an id absent from the catalog. Recovered with a default
//!   record, counted for database expansion.
//! - **Invariant**: a computed value escaped its legal range. The tick's result
//!   is discarded and the next tick retries. Indicates a logic defect.

/// Severity level of an error, used for categorization and log routing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Missing data for a single tick (no OCR reading, no live snapshot).
    Transient,

    /// Champion or item id not present in the catalog.
    UnknownEntity,

    /// Logic defect; the affected result must not be displayed.
    Invariant,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Transient => "transient",
            Self::UnknownEntity => "unknown-entity",
            Self::Invariant => "invariant",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_defect(&self) -> bool {
        matches!(self, Self::Invariant)
    }
}

/// Common trait for all engine-core errors.
///
/// - All error enums implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by how the tick recovers, not by impact
pub trait CalcError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for log filtering and tests.
    fn error_code(&self) -> &'static str;
}

/// A raw panel reading that failed validation and must not enter the buffer.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ObservationError {
    #[error("maximum health must be positive")]
    ZeroMaxHealth,

    #[error("health {current} exceeds maximum {max}")]
    HealthExceedsMax { current: u32, max: u32 },

    #[error("health ratio {0} is outside [0, 1]")]
    RatioOutOfRange(f64),

    #[error("mana {current} exceeds maximum {max}")]
    ManaExceedsMax { current: u32, max: u32 },
}

impl CalcError for ObservationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Transient
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroMaxHealth => "OBSERVATION_ZERO_MAX_HEALTH",
            Self::HealthExceedsMax { .. } => "OBSERVATION_HEALTH_EXCEEDS_MAX",
            Self::RatioOutOfRange(_) => "OBSERVATION_RATIO_OUT_OF_RANGE",
            Self::ManaExceedsMax { .. } => "OBSERVATION_MANA_EXCEEDS_MAX",
        }
    }
}

/// A computed value escaped its legal range; the tick result is discarded.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("confidence percent {percent} is outside [0, {cap}]")]
    PercentOutOfRange { percent: u8, cap: u8 },

    #[error("resolved hp fraction {0} is outside [0, 1]")]
    HpFractionOutOfRange(f64),

    #[error("expected damage {0} is not a finite non-negative number")]
    InvalidDamage(f64),

    #[error("enemy effective hp {0} is not finite")]
    InvalidEffectiveHp(f64),
}

impl CalcError for InvariantViolation {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Invariant
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::PercentOutOfRange { .. } => "INVARIANT_PERCENT_OUT_OF_RANGE",
            Self::HpFractionOutOfRange(_) => "INVARIANT_HP_FRACTION_OUT_OF_RANGE",
            Self::InvalidDamage(_) => "INVARIANT_INVALID_DAMAGE",
            Self::InvalidEffectiveHp(_) => "INVARIANT_INVALID_EFFECTIVE_HP",
        }
    }
}
