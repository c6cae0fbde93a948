//! Recorded scenarios played back through the collaborator traits.
//!
//! A scenario is a RON file of frames. Each stats read advances to the next
//! frame; the panel read in the same tick returns that frame's panel. Once the
//! frames run out the source reports no game.

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use engine_core::{GameSnapshot, PanelReading};

use crate::api::{
    Command, PanelOcrSource, PlayerStatsSource, Result, RuntimeError, RuntimeHandle, SourceError,
};

/// One tick worth of recorded input.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioFrame {
    pub snapshot: GameSnapshot,
    pub panel: Option<PanelReading>,
    /// Queued after this frame's tick, so they affect the next frame.
    pub commands: Vec<Command>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub frames: Vec<ScenarioFrame>,
}

impl Scenario {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| RuntimeError::ScenarioRead {
            path: path.to_path_buf(),
            source,
        })?;
        let scenario = ron::from_str(&content).map_err(|source| RuntimeError::ScenarioParse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(scenario)
    }

    pub fn parse(content: &str) -> std::result::Result<Self, ron::error::SpannedError> {
        ron::from_str(content)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[derive(Default)]
struct Cursor {
    next: usize,
    panel: Option<PanelReading>,
    commands: Option<RuntimeHandle>,
}

/// Replays a [`Scenario`]. Cloning shares the cursor, so one clone can serve
/// as the stats source and another as the panel source.
#[derive(Clone)]
pub struct ReplaySource {
    scenario: Arc<Scenario>,
    cursor: Arc<Mutex<Cursor>>,
}

impl ReplaySource {
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario: Arc::new(scenario),
            cursor: Arc::default(),
        }
    }

    /// Forwards frame commands to a running runtime.
    ///
    /// Without a handle the commands in the scenario are ignored.
    pub fn attach(&self, handle: RuntimeHandle) {
        self.with_cursor(|cursor| cursor.commands = Some(handle));
    }

    /// Frames not yet played.
    pub fn remaining(&self) -> usize {
        let next = self.with_cursor(|cursor| cursor.next);
        self.scenario.len().saturating_sub(next)
    }

    fn with_cursor<T>(&self, f: impl FnOnce(&mut Cursor) -> T) -> T {
        // The cursor holds no invariants a panicking reader could break.
        let mut cursor = self.cursor.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cursor)
    }
}

#[async_trait]
impl PlayerStatsSource for ReplaySource {
    async fn snapshot(&self) -> std::result::Result<Option<GameSnapshot>, SourceError> {
        let scenario = Arc::clone(&self.scenario);
        Ok(self.with_cursor(|cursor| {
            let Some(frame) = scenario.frames.get(cursor.next) else {
                cursor.panel = None;
                return None;
            };
            cursor.next += 1;
            cursor.panel = frame.panel;

            if let Some(handle) = &cursor.commands {
                for command in &frame.commands {
                    if let Err(err) = handle.try_send(*command) {
                        tracing::warn!(
                            target: "runtime::source",
                            ?command,
                            error = %err,
                            "replay command dropped"
                        );
                    }
                }
            }
            Some(frame.snapshot.clone())
        }))
    }
}

#[async_trait]
impl PanelOcrSource for ReplaySource {
    async fn read_panel(&self) -> std::result::Result<Option<PanelReading>, SourceError> {
        Ok(self.with_cursor(|cursor| cursor.panel))
    }
}
