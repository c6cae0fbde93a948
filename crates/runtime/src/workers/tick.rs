//! Tick worker that owns the target lock and the enemy observation buffer.
//!
//! Each tick runs strictly in order: player snapshot → panel reading →
//! resolve → assess → render. External reads are bounded by the source
//! timeout so a hung collaborator costs one tick, never the loop.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, error, info, trace};

use engine_core::{
    CalcError, CalculatorConfig, EnemyProfile, EnemyStateResolver, GameSnapshot, KillCalculator,
    PanelReading, TargetLockManager, TargetLockState, Timestamp,
};

use crate::api::{Command, OverlayRenderer, PanelOcrSource, PlayerStatsSource, SourceError};
use crate::events::{SkipReason, TickEvent};
use crate::oracle::CatalogOracle;

/// Background task that evaluates the locked target once per tick.
pub struct TickWorker {
    catalog: Arc<CatalogOracle>,
    calculator_config: CalculatorConfig,
    stats: Box<dyn PlayerStatsSource>,
    panel: Box<dyn PanelOcrSource>,
    renderer: Box<dyn OverlayRenderer>,
    event_tx: broadcast::Sender<TickEvent>,
    source_timeout: Duration,

    lock: TargetLockManager,
    resolver: EnemyStateResolver,
    enabled: bool,
    ticks: u64,
}

impl TickWorker {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        catalog: Arc<CatalogOracle>,
        calculator_config: CalculatorConfig,
        stats: Box<dyn PlayerStatsSource>,
        panel: Box<dyn PanelOcrSource>,
        renderer: Box<dyn OverlayRenderer>,
        event_tx: broadcast::Sender<TickEvent>,
        source_timeout: Duration,
        start_enabled: bool,
    ) -> Self {
        Self {
            catalog,
            calculator_config,
            stats,
            panel,
            renderer,
            event_tx,
            source_timeout,
            lock: TargetLockManager::new(),
            resolver: EnemyStateResolver::new(),
            enabled: start_enabled,
            ticks: 0,
        }
    }

    /// Main worker loop.
    ///
    /// Commands are drained between ticks. The loop ends on
    /// [`Command::Quit`] or when every handle has been dropped.
    pub(crate) async fn run(mut self, mut command_rx: mpsc::Receiver<Command>, period: Duration) {
        let started = Instant::now();
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                command = command_rx.recv() => match command {
                    Some(command) => {
                        if self.apply(command).is_break() {
                            break;
                        }
                    }
                    None => {
                        debug!(target: "runtime::tick", "command channel closed");
                        break;
                    }
                },
                _ = interval.tick() => {
                    let elapsed = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
                    self.tick(Timestamp::from_millis(elapsed)).await;
                }
            }
        }

        self.renderer.hide();
        info!(target: "runtime::tick", ticks = self.ticks, "tick worker stopped");
    }

    /// Subscribe to the events this worker broadcasts.
    pub fn subscribe(&self) -> broadcast::Receiver<TickEvent> {
        self.event_tx.subscribe()
    }

    pub fn lock_state(&self) -> &TargetLockState {
        self.lock.state()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn catalog(&self) -> &CatalogOracle {
        &self.catalog
    }

    /// Applies one command. Returns `Break` for [`Command::Quit`].
    pub fn apply(&mut self, command: Command) -> ControlFlow<()> {
        match command {
            Command::Toggle => {
                self.enabled = !self.enabled;
                info!(target: "runtime::tick", enabled = self.enabled, "toggled");
                if !self.enabled {
                    self.renderer.hide();
                }
                self.publish(TickEvent::EnabledChanged {
                    enabled: self.enabled,
                });
            }
            Command::CycleTarget => {
                let target = self.lock.cycle_target().cloned();
                info!(target: "runtime::tick", champion = ?target, "target cycled");
                self.publish(TickEvent::TargetChanged { target });
            }
            Command::Quit => {
                info!(target: "runtime::tick", "quit requested");
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    /// Runs one tick at `now` and returns the event it broadcast.
    pub async fn tick(&mut self, now: Timestamp) -> TickEvent {
        self.ticks += 1;
        let tick = self.ticks;
        let event = self.evaluate(tick, now).await;

        match &event {
            TickEvent::Assessed {
                assessment, lock, ..
            } => self.renderer.show(assessment, lock),
            TickEvent::Skipped { reason, .. } => self.renderer.notice(reason),
            TickEvent::Discarded { .. } => self.renderer.hide(),
            TickEvent::TargetChanged { .. } | TickEvent::EnabledChanged { .. } => {}
        }
        self.publish(event.clone());
        event
    }

    async fn evaluate(&mut self, tick: u64, now: Timestamp) -> TickEvent {
        if !self.enabled {
            return TickEvent::Skipped {
                tick,
                reason: SkipReason::Disabled,
            };
        }

        let snapshot = match self.fetch_snapshot().await {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => {
                trace!(target: "runtime::source", tick, "no active game");
                return TickEvent::Skipped {
                    tick,
                    reason: SkipReason::NoGame,
                };
            }
            Err(err) => {
                debug!(
                    target: "runtime::source",
                    tick,
                    code = err.error_code(),
                    error = %err,
                    "stats source unavailable"
                );
                return TickEvent::Skipped {
                    tick,
                    reason: SkipReason::SourceUnavailable(err.to_string()),
                };
            }
        };

        self.register_enemies(&snapshot);
        let Some(target) = self.lock.current_target().cloned() else {
            return TickEvent::Skipped {
                tick,
                reason: SkipReason::NoTarget,
            };
        };

        let live = self.fetch_panel().await;
        let resolved = self.resolver.resolve(&target, live, now);
        if let Some(rejected) = &resolved.rejected {
            debug!(
                target: "runtime::source",
                tick,
                code = rejected.error_code(),
                error = %rejected,
                "panel reading rejected"
            );
        }

        // A locked enemy missing from this snapshot's roster is assessed at
        // the player's level with no items.
        let enemy = snapshot
            .enemy(&target)
            .cloned()
            .unwrap_or_else(|| EnemyProfile::new(target.clone(), snapshot.player.level));

        let calculator = KillCalculator::new(&*self.catalog, self.calculator_config);
        match calculator.assess(&snapshot.player, &enemy, &resolved, snapshot.game_time_secs) {
            Ok(assessment) => {
                trace!(
                    target: "runtime::tick",
                    tick,
                    champion = %assessment.target,
                    percent = assessment.percent(),
                    verdict = %assessment.classification(),
                    source = assessment.result.enemy_source.label(),
                    "assessed"
                );
                TickEvent::Assessed {
                    tick,
                    assessment: Box::new(assessment),
                    lock: self.lock.state().clone(),
                }
            }
            Err(violation) => {
                error!(
                    target: "runtime::tick",
                    tick,
                    code = violation.error_code(),
                    severity = violation.severity().as_str(),
                    error = %violation,
                    "invariant violation, result discarded"
                );
                TickEvent::Discarded { tick, violation }
            }
        }
    }

    async fn fetch_snapshot(&self) -> Result<Option<GameSnapshot>, SourceError> {
        match tokio::time::timeout(self.source_timeout, self.stats.snapshot()).await {
            Ok(result) => result,
            Err(_) => Err(SourceError::Timeout {
                source_name: "stats source",
                timeout_ms: timeout_millis(self.source_timeout),
            }),
        }
    }

    /// Any failure here is just "no live reading this tick".
    async fn fetch_panel(&self) -> Option<PanelReading> {
        match tokio::time::timeout(self.source_timeout, self.panel.read_panel()).await {
            Ok(Ok(reading)) => reading,
            Ok(Err(err)) => {
                trace!(target: "runtime::source", error = %err, "panel read failed");
                None
            }
            Err(_) => {
                trace!(target: "runtime::source", "panel read timed out");
                None
            }
        }
    }

    fn register_enemies(&mut self, snapshot: &GameSnapshot) {
        for enemy in &snapshot.enemies {
            if self.lock.register_detected_enemy(enemy.champion.clone()) {
                info!(target: "runtime::tick", champion = %enemy.champion, "target locked");
                self.publish(TickEvent::TargetChanged {
                    target: Some(enemy.champion.clone()),
                });
            }
        }
    }

    fn publish(&self, event: TickEvent) {
        // No subscribers is fine.
        let _ = self.event_tx.send(event);
    }
}

fn timeout_millis(timeout: Duration) -> u64 {
    u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX)
}
