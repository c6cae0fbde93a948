//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use runtime::RuntimeConfig;

/// Configuration required to bootstrap the runtime and terminal renderer.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub runtime: RuntimeConfig,
    pub session_id: Option<String>,
    /// Catalog directory; the bundled data when unset.
    pub data_dir: Option<PathBuf>,
    /// Replay scenario; the bundled demo when unset.
    pub scenario: Option<PathBuf>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `KILLCALC_TICK_MS` - Tick period in milliseconds (default: 300)
    /// - `KILLCALC_SOURCE_TIMEOUT_MS` - Per-read timeout (default: 150)
    /// - `KILLCALC_DATA_DIR` - Catalog data directory (default: bundled data)
    /// - `KILLCALC_SCENARIO` - Replay scenario file (default: bundled demo)
    /// - `KILLCALC_SESSION_ID` - Log session name (default: timestamp)
    /// - `KILLCALC_START_DISABLED` - Start with assessments off (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(millis) = read_env::<u64>("KILLCALC_TICK_MS") {
            config.runtime.tick_period = Duration::from_millis(millis.max(1));
        }
        if let Some(millis) = read_env::<u64>("KILLCALC_SOURCE_TIMEOUT_MS") {
            config.runtime.source_timeout = Duration::from_millis(millis);
        }

        if let Some(disabled) = read_env::<bool>("KILLCALC_START_DISABLED") {
            config.runtime.start_enabled = !disabled;
        } else if env::var("KILLCALC_START_DISABLED").is_ok() {
            // A bare variable counts as "true".
            config.runtime.start_enabled = false;
        }

        config.session_id = env::var("KILLCALC_SESSION_ID").ok();
        config.data_dir = env::var("KILLCALC_DATA_DIR").ok().map(PathBuf::from);
        config.scenario = env::var("KILLCALC_SCENARIO").ok().map(PathBuf::from);

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
