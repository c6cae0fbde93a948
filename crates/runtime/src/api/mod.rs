//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! other layers can stay focused on orchestration, workers, or adapters.

pub mod commands;
pub mod errors;
pub mod handle;
pub mod sources;

pub use commands::Command;
pub use errors::{Result, RuntimeError, SourceError};
pub use handle::RuntimeHandle;
pub use sources::{NoPanel, NullRenderer, OverlayRenderer, PanelOcrSource, PlayerStatsSource};
