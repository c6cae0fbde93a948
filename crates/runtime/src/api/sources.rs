//! Abstractions for the collaborators the tick talks to.
//!
//! Runtime users plug in implementations so the loop can run against the live
//! game, recorded scenarios, or scripted test fixtures.
use async_trait::async_trait;
use engine_core::{GameSnapshot, KillAssessment, PanelReading, TargetLockState};

use super::errors::SourceError;
use crate::events::SkipReason;

/// Produces the player snapshot (with the enemy roster) once per tick.
#[async_trait]
pub trait PlayerStatsSource: Send + Sync {
    /// `Ok(None)` means no game is running; the tick is skipped and no stale
    /// snapshot is reused.
    async fn snapshot(&self) -> std::result::Result<Option<GameSnapshot>, SourceError>;
}

/// Reads the selected-target panel once per tick.
#[async_trait]
pub trait PanelOcrSource: Send + Sync {
    /// `Ok(None)` is the normal outcome when the panel is not visible.
    async fn read_panel(&self) -> std::result::Result<Option<PanelReading>, SourceError>;
}

/// Displays tick results. Called on the tick worker; must not block.
pub trait OverlayRenderer: Send + Sync {
    fn show(&mut self, assessment: &KillAssessment, lock: &TargetLockState);

    fn notice(&mut self, _reason: &SkipReason) {}

    fn hide(&mut self) {}
}

impl<R: OverlayRenderer + ?Sized> OverlayRenderer for Box<R> {
    fn show(&mut self, assessment: &KillAssessment, lock: &TargetLockState) {
        (**self).show(assessment, lock);
    }

    fn notice(&mut self, reason: &SkipReason) {
        (**self).notice(reason);
    }

    fn hide(&mut self) {
        (**self).hide();
    }
}

/// Panel source for setups without screen capture.
pub struct NoPanel;

#[async_trait]
impl PanelOcrSource for NoPanel {
    async fn read_panel(&self) -> std::result::Result<Option<PanelReading>, SourceError> {
        Ok(None)
    }
}

/// Renderer that discards everything; events are still broadcast.
pub struct NullRenderer;

impl OverlayRenderer for NullRenderer {
    fn show(&mut self, _assessment: &KillAssessment, _lock: &TargetLockState) {}
}
