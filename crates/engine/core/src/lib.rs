//! Deterministic kill-confidence logic shared by the runtime and offline tools.
//!
//! `engine-core` owns the three pieces that turn unreliable inputs into one
//! stable signal:
//! - [`lock::TargetLockManager`] decides which enemy is evaluated
//! - [`observation::EnemyStateResolver`] turns live/buffered/absent readings
//!   into a tagged enemy state
//! - [`calculator::KillCalculator`] runs the damage model and classifies the
//!   capped confidence
//!
//! Static data is reached only through the [`catalog::StatsCatalog`] trait.
//! Nothing in this crate performs I/O or reads a clock; timestamps are passed in.
pub mod calculator;
pub mod catalog;
pub mod combo;
pub mod confidence;
pub mod config;
pub mod damage;
pub mod error;
pub mod ids;
pub mod lock;
pub mod observation;
pub mod stats;
pub mod threat;

pub use calculator::{KillAssessment, KillCalculator, PauseReason};
pub use catalog::{StaticCatalog, StatsCatalog};
pub use combo::{
    Combo, ComboStep, ConditionalModifier, DamageType, EngagementContext, Scaling, ScalingStat,
    StepCondition, TargetView,
};
pub use confidence::{
    CONFIDENCE_CAP, Classification, ConfidenceResult, Thresholds, classify, compute_confidence,
};
pub use config::{CalculatorConfig, EngagementWindow};
pub use damage::{
    DamageBreakdown, EffectiveResistances, StepDamage, compute_enemy_effective_hp,
    compute_expected_damage, mitigation_multiplier,
};
pub use error::{CalcError, ErrorSeverity, InvariantViolation, ObservationError};
pub use ids::{ChampionId, ItemId, SpellSlot, Timestamp};
pub use lock::{TargetLockManager, TargetLockState};
pub use observation::{
    EnemyObservation, EnemySource, EnemyStateResolver, HealthReading, ManaReading,
    ObservationBuffer, PanelReading, ResolvedEnemyState, ResolvedMana,
};
pub use stats::{
    ActiveDamage, BaseStats, ChampionStatCurve, EnemyProfile, GameSnapshot, ItemModifier, ItemTag,
    PlayerSnapshot,
};
pub use threat::ThreatFlags;
