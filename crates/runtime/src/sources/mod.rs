//! Adapters that turn raw collaborator output into engine inputs.
//!
//! - [`panel`]: validates OCR text from the target panel
//! - [`live_client`]: maps the local game API payloads to a snapshot
//! - [`replay`]: plays back recorded frames from a RON scenario

pub mod live_client;
pub mod panel;
pub mod replay;

pub use live_client::{LiveClientSource, LiveClientTransport, map_snapshot};
pub use panel::{OcrPanelSource, PanelRegion, TextRecognizer, parse_pair};
pub use replay::{ReplaySource, Scenario, ScenarioFrame};
