//! Events broadcast by the tick worker.
//!
//! Every tick produces exactly one of `Assessed`, `Skipped`, or `Discarded`.
//! Command effects (`TargetChanged`, `EnabledChanged`) are emitted when the
//! command is applied, between ticks.

mod types;

pub use types::{SkipReason, TickEvent};
