//! Shared bootstrap utilities for client front-ends.
//!
//! Provides environment configuration, logging setup, and runtime assembly
//! from catalog content and a replay scenario.
pub mod builder;
pub mod config;
pub mod logging;

pub use builder::{RuntimeBuilder, RuntimeSetup, bundled_scenario};
pub use config::ClientConfig;
pub use logging::setup_logging;
