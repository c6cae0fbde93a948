//! High-level runtime orchestrator.
//!
//! The runtime owns the tick worker, wires up command/event channels, and
//! exposes a builder-based API for clients to assemble the collaborators.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use engine_core::{CalculatorConfig, StaticCatalog};

use crate::api::{
    Command, NoPanel, NullRenderer, OverlayRenderer, PanelOcrSource, PlayerStatsSource, Result,
    RuntimeError, RuntimeHandle,
};
use crate::events::TickEvent;
use crate::oracle::CatalogOracle;
use crate::workers::TickWorker;

/// Runtime configuration shared across the orchestrator and the worker.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub tick_period: Duration,
    /// Upper bound for each external read; must be shorter than the tick.
    pub source_timeout: Duration,
    pub command_buffer_size: usize,
    pub event_buffer_size: usize,
    /// Whether assessments run before the first toggle.
    pub start_enabled: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick_period: Duration::from_millis(300),
            source_timeout: Duration::from_millis(150),
            command_buffer_size: 32,
            event_buffer_size: 64,
            start_enabled: true,
        }
    }
}

impl RuntimeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.tick_period.is_zero() {
            return Err(RuntimeError::InvalidConfig(
                "tick period must be positive".to_owned(),
            ));
        }
        if self.source_timeout >= self.tick_period {
            return Err(RuntimeError::InvalidConfig(format!(
                "source timeout {:?} must be shorter than the tick period {:?}",
                self.source_timeout, self.tick_period
            )));
        }
        if self.command_buffer_size == 0 || self.event_buffer_size == 0 {
            return Err(RuntimeError::InvalidConfig(
                "channel buffers must be non-empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Main runtime that drives the tick loop.
///
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribe to tick events
    pub fn subscribe(&self) -> broadcast::Receiver<TickEvent> {
        self.handle.subscribe()
    }

    /// Wait until the worker stops (after [`Command::Quit`]).
    pub async fn wait(self) -> Result<()> {
        let Self {
            handle,
            worker_handle,
        } = self;
        // Keep the command channel open so only Quit ends the loop.
        let _handle = handle;
        worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }

    /// Stop the worker and wait for it to finish.
    pub async fn shutdown(self) -> Result<()> {
        // A closed channel means the worker already stopped.
        let _ = self.handle.send(Command::Quit).await;
        drop(self.handle);

        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    calculator_config: CalculatorConfig,
    catalog: Option<Arc<CatalogOracle>>,
    stats: Option<Box<dyn PlayerStatsSource>>,
    panel: Option<Box<dyn PanelOcrSource>>,
    renderer: Option<Box<dyn OverlayRenderer>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            calculator_config: CalculatorConfig::default(),
            catalog: None,
            stats: None,
            panel: None,
            renderer: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Override thresholds, isolation assumption, and engagement window
    pub fn calculator_config(mut self, config: CalculatorConfig) -> Self {
        self.calculator_config = config;
        self
    }

    /// Set the required static catalog
    pub fn catalog(mut self, catalog: StaticCatalog) -> Self {
        self.catalog = Some(Arc::new(CatalogOracle::new(catalog)));
        self
    }

    /// Share an existing catalog oracle (keeps its miss counters visible)
    pub fn catalog_oracle(mut self, oracle: Arc<CatalogOracle>) -> Self {
        self.catalog = Some(oracle);
        self
    }

    /// Set the required player stats source
    pub fn stats_source(mut self, source: impl PlayerStatsSource + 'static) -> Self {
        self.stats = Some(Box::new(source));
        self
    }

    /// Set the panel OCR source (optional, defaults to no panel)
    pub fn panel_source(mut self, source: impl PanelOcrSource + 'static) -> Self {
        self.panel = Some(Box::new(source));
        self
    }

    /// Set the renderer (optional, events are broadcast regardless)
    pub fn renderer(mut self, renderer: impl OverlayRenderer + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Build a worker without spawning it, for callers that drive ticks
    /// themselves.
    pub fn build_worker(self) -> Result<TickWorker> {
        self.config.validate()?;
        let (event_tx, _event_rx) = broadcast::channel::<TickEvent>(self.config.event_buffer_size);
        self.into_worker(event_tx)
    }

    /// Build the runtime and spawn its tick worker
    pub async fn build(self) -> Result<Runtime> {
        self.config.validate()?;

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let (event_tx, _event_rx) = broadcast::channel::<TickEvent>(self.config.event_buffer_size);
        let handle = RuntimeHandle::new(command_tx, event_tx.clone());

        let period = self.config.tick_period;
        let worker = self.into_worker(event_tx)?;

        tracing::info!(
            target: "runtime::tick",
            period_ms = u64::try_from(period.as_millis()).unwrap_or(u64::MAX),
            "tick worker starting"
        );
        let worker_handle = tokio::spawn(async move {
            worker.run(command_rx, period).await;
        });

        Ok(Runtime {
            handle,
            worker_handle,
        })
    }

    fn into_worker(self, event_tx: broadcast::Sender<TickEvent>) -> Result<TickWorker> {
        let catalog = self
            .catalog
            .ok_or(RuntimeError::MissingComponent("catalog"))?;
        let stats = self
            .stats
            .ok_or(RuntimeError::MissingComponent("player stats source"))?;
        let panel = self.panel.unwrap_or_else(|| Box::new(NoPanel));
        let renderer = self.renderer.unwrap_or_else(|| Box::new(NullRenderer));

        Ok(TickWorker::new(
            catalog,
            self.calculator_config,
            stats,
            panel,
            renderer,
            event_tx,
            self.config.source_timeout,
            self.config.start_enabled,
        ))
    }
}
