//! Runtime orchestration for the kill confidence engine.
//!
//! This crate wires the external collaborators (stats source, panel OCR,
//! overlay renderer) around the pure `engine-core` logic and drives it on a
//! fixed tick. Consumers embed [`Runtime`] to run the loop and interact with it
//! through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the collaborator traits, commands, handle, and errors
//! - [`events`] defines what each tick broadcasts
//! - [`oracle`] wraps the static catalog with unknown-entity accounting
//! - [`sources`] adapts OCR text, Live Client payloads, and replay files
//! - [`format`] renders an assessment as text
//! - [`workers`] holds the tick worker that owns all mutable state
pub mod api;
pub mod events;
pub mod format;
pub mod oracle;
pub mod runtime;
pub mod sources;

mod workers;

pub use api::{
    Command, NoPanel, NullRenderer, OverlayRenderer, PanelOcrSource, PlayerStatsSource, Result,
    RuntimeError, RuntimeHandle, SourceError,
};
pub use events::{SkipReason, TickEvent};
pub use format::{format_assessment, slot_line};
pub use oracle::{CatalogOracle, UnknownEntityCounts};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use sources::{
    LiveClientSource, LiveClientTransport, OcrPanelSource, PanelRegion, ReplaySource, Scenario,
    ScenarioFrame, TextRecognizer,
};
pub use workers::TickWorker;
