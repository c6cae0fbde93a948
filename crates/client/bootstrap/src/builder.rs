//! Builds the runtime, catalog, and replay source used by front-ends.
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use engine_content::ContentFactory;
use runtime::{
    CatalogOracle, NullRenderer, OverlayRenderer, ReplaySource, Runtime, RuntimeConfig, Scenario,
};

use crate::config::ClientConfig;

/// Demo scenario shipped with this crate.
pub fn bundled_scenario() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/teamfight.ron"))
}

/// Builder that assembles catalog content, a replay source, and the runtime.
pub struct RuntimeBuilder {
    config: ClientConfig,
    renderer: Box<dyn OverlayRenderer>,
}

impl RuntimeBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            renderer: Box::new(NullRenderer),
        }
    }

    /// Provide the renderer the tick worker draws with.
    pub fn renderer(mut self, renderer: impl OverlayRenderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub async fn build(self) -> Result<RuntimeSetup> {
        let factory = match &self.config.data_dir {
            Some(dir) => ContentFactory::new(dir),
            None => ContentFactory::bundled(),
        };
        let calculator_config = factory
            .load_config()
            .with_context(|| format!("loading config from {}", factory.data_dir().display()))?;
        let catalog = factory
            .load_catalog()
            .with_context(|| format!("loading catalog from {}", factory.data_dir().display()))?;
        let catalog = Arc::new(CatalogOracle::new(catalog));

        let scenario_path = self.config.scenario.clone().unwrap_or_else(bundled_scenario);
        let scenario = Scenario::load(&scenario_path)?;
        tracing::info!(
            path = %scenario_path.display(),
            frames = scenario.len(),
            "replay scenario loaded"
        );
        let replay = ReplaySource::new(scenario);

        // Frames must not advance before the replay can forward its commands,
        // so the worker starts disabled and is enabled once attached.
        let start_enabled = self.config.runtime.start_enabled;
        let runtime = Runtime::builder()
            .config(RuntimeConfig {
                start_enabled: false,
                ..self.config.runtime.clone()
            })
            .calculator_config(calculator_config)
            .catalog_oracle(Arc::clone(&catalog))
            .stats_source(replay.clone())
            .panel_source(replay.clone())
            .renderer(self.renderer)
            .build()
            .await?;

        replay.attach(runtime.handle());
        if start_enabled {
            runtime.handle().toggle().await?;
        }

        Ok(RuntimeSetup {
            config: self.config,
            catalog,
            replay,
            runtime,
        })
    }
}

pub struct RuntimeSetup {
    pub config: ClientConfig,
    pub catalog: Arc<CatalogOracle>,
    pub replay: ReplaySource,
    pub runtime: Runtime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use runtime::{SkipReason, TickEvent};

    fn fast() -> ClientConfig {
        ClientConfig {
            runtime: RuntimeConfig {
                tick_period: Duration::from_millis(20),
                source_timeout: Duration::from_millis(10),
                ..RuntimeConfig::default()
            },
            ..ClientConfig::default()
        }
    }

    #[tokio::test]
    async fn bundled_demo_plays_to_the_end() {
        let setup = RuntimeBuilder::new(fast()).build().await.unwrap();
        let mut events = setup.runtime.subscribe();

        let assessed = tokio::time::timeout(Duration::from_secs(5), async {
            let mut assessed = 0;
            loop {
                match events.recv().await.unwrap() {
                    TickEvent::Assessed { .. } => assessed += 1,
                    TickEvent::Skipped {
                        reason: SkipReason::NoGame,
                        ..
                    } => return assessed,
                    _ => {}
                }
            }
        })
        .await
        .unwrap();

        assert!(assessed > 0);
        assert_eq!(setup.replay.remaining(), 0);
        setup.runtime.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn missing_scenario_fails_the_build() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig {
            scenario: Some(dir.path().join("nope.ron")),
            ..fast()
        };
        assert!(RuntimeBuilder::new(config).build().await.is_err());
    }
}
