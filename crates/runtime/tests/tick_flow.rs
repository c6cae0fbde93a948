//! Tick worker behavior against scripted collaborators.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use engine_content::ContentFactory;
use engine_core::{
    ChampionId, Classification, EnemyProfile, EnemySource, GameSnapshot, InvariantViolation,
    KillAssessment, PanelReading, PlayerSnapshot, SpellSlot, TargetLockState, Timestamp,
};
use runtime::{
    Command, OverlayRenderer, PanelOcrSource, PlayerStatsSource, Runtime, RuntimeConfig,
    SkipReason, SourceError, TickEvent, TickWorker,
};

/// Returns whatever the test last stored.
#[derive(Clone, Default)]
struct ScriptedStats(Arc<Mutex<Option<Result<GameSnapshot, String>>>>);

impl ScriptedStats {
    fn set(&self, snapshot: Option<GameSnapshot>) {
        *self.0.lock().unwrap() = snapshot.map(Ok);
    }

    fn fail(&self, message: &str) {
        *self.0.lock().unwrap() = Some(Err(message.to_owned()));
    }
}

#[async_trait]
impl PlayerStatsSource for ScriptedStats {
    async fn snapshot(&self) -> Result<Option<GameSnapshot>, SourceError> {
        match self.0.lock().unwrap().clone() {
            Some(Ok(snapshot)) => Ok(Some(snapshot)),
            Some(Err(message)) => Err(SourceError::Transport {
                source_name: "scripted",
                message,
            }),
            None => Ok(None),
        }
    }
}

#[derive(Clone, Default)]
struct ScriptedPanel(Arc<Mutex<Option<PanelReading>>>);

impl ScriptedPanel {
    fn set(&self, reading: Option<PanelReading>) {
        *self.0.lock().unwrap() = reading;
    }
}

#[async_trait]
impl PanelOcrSource for ScriptedPanel {
    async fn read_panel(&self) -> Result<Option<PanelReading>, SourceError> {
        Ok(*self.0.lock().unwrap())
    }
}

struct HangingStats;

#[async_trait]
impl PlayerStatsSource for HangingStats {
    async fn snapshot(&self) -> Result<Option<GameSnapshot>, SourceError> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(None)
    }
}

/// Records which renderer calls the worker made.
#[derive(Clone, Default)]
struct RecordingRenderer(Arc<Mutex<Vec<&'static str>>>);

impl RecordingRenderer {
    fn calls(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }
}

impl OverlayRenderer for RecordingRenderer {
    fn show(&mut self, _assessment: &KillAssessment, _lock: &TargetLockState) {
        self.0.lock().unwrap().push("show");
    }

    fn notice(&mut self, _reason: &SkipReason) {
        self.0.lock().unwrap().push("notice");
    }

    fn hide(&mut self) {
        self.0.lock().unwrap().push("hide");
    }
}

fn snapshot(enemies: &[&str]) -> GameSnapshot {
    GameSnapshot {
        player: PlayerSnapshot {
            champion: ChampionId::new("Kha'Zix"),
            level: 9,
            attack_damage: 190.0,
            bonus_attack_damage: 90.0,
            hp_current: 1200.0,
            hp_max: 1500.0,
            spell_ranks: BTreeMap::from([
                (SpellSlot::Q, 5),
                (SpellSlot::W, 2),
                (SpellSlot::E, 2),
                (SpellSlot::R, 1),
            ]),
            ..PlayerSnapshot::default()
        },
        enemies: enemies
            .iter()
            .map(|name| EnemyProfile::new(ChampionId::new(name), 9))
            .collect(),
        game_time_secs: 900.0,
    }
}

fn worker(stats: ScriptedStats, panel: ScriptedPanel) -> TickWorker {
    let catalog = ContentFactory::bundled().load_catalog().unwrap();
    Runtime::builder()
        .catalog(catalog)
        .stats_source(stats)
        .panel_source(panel)
        .build_worker()
        .unwrap()
}

fn at(millis: u64) -> Timestamp {
    Timestamp::from_millis(millis)
}

#[tokio::test]
async fn first_detected_enemy_is_locked_and_assessed_live() {
    let stats = ScriptedStats::default();
    let panel = ScriptedPanel::default();
    stats.set(Some(snapshot(&["Lux", "Zed"])));
    panel.set(Some(PanelReading::exact(300, 600)));

    let mut worker = worker(stats, panel);
    let mut events = worker.subscribe();

    let event = worker.tick(at(0)).await;
    let assessment = event.assessment().expect("assessed");
    assert_eq!(assessment.target, ChampionId::new("Lux"));
    assert_eq!(assessment.result.enemy_source, EnemySource::Live);
    assert_eq!(assessment.hp_fraction, 0.5);
    assert!(assessment.percent() <= 97);

    assert_eq!(
        events.recv().await.unwrap(),
        TickEvent::TargetChanged {
            target: Some(ChampionId::new("Lux"))
        }
    );
    assert!(matches!(
        events.recv().await.unwrap(),
        TickEvent::Assessed { tick: 1, .. }
    ));
}

#[tokio::test]
async fn fallback_chain_goes_live_cached_assumed() {
    let stats = ScriptedStats::default();
    let panel = ScriptedPanel::default();
    stats.set(Some(snapshot(&["Lux", "Zed"])));
    panel.set(Some(PanelReading::exact(300, 600)));
    let mut worker = worker(stats, panel.clone());

    let live = worker.tick(at(1_000)).await;
    assert_eq!(
        live.assessment().unwrap().result.enemy_source,
        EnemySource::Live
    );

    panel.set(None);
    let cached = worker.tick(at(1_600)).await;
    let cached = cached.assessment().unwrap();
    assert_eq!(
        cached.result.enemy_source,
        EnemySource::Cached { staleness_ms: 600 }
    );
    assert_eq!(cached.hp_fraction, 0.5);

    assert!(worker.apply(Command::CycleTarget).is_continue());
    let assumed = worker.tick(at(1_900)).await;
    let assumed = assumed.assessment().unwrap();
    assert_eq!(assumed.target, ChampionId::new("Zed"));
    assert_eq!(assumed.result.enemy_source, EnemySource::Assumed);
    assert_eq!(assumed.hp_fraction, 1.0);
}

#[tokio::test]
async fn cached_value_never_moves_to_another_target() {
    let stats = ScriptedStats::default();
    let panel = ScriptedPanel::default();
    stats.set(Some(snapshot(&["Lux", "Zed"])));
    panel.set(Some(PanelReading::exact(100, 600)));
    let mut worker = worker(stats, panel.clone());
    worker.tick(at(0)).await;

    panel.set(None);
    let _ = worker.apply(Command::CycleTarget);
    let _ = worker.apply(Command::CycleTarget);
    let back = worker.tick(at(300)).await;
    let back = back.assessment().unwrap();
    assert_eq!(back.target, ChampionId::new("Lux"));
    assert_eq!(
        back.result.enemy_source,
        EnemySource::Cached { staleness_ms: 300 }
    );
}

#[tokio::test]
async fn toggle_skips_ticks_until_reenabled() {
    let stats = ScriptedStats::default();
    stats.set(Some(snapshot(&["Lux"])));
    let mut worker = worker(stats, ScriptedPanel::default());

    let _ = worker.apply(Command::Toggle);
    assert!(!worker.is_enabled());
    assert_eq!(
        worker.tick(at(0)).await,
        TickEvent::Skipped {
            tick: 1,
            reason: SkipReason::Disabled
        }
    );

    let _ = worker.apply(Command::Toggle);
    assert!(worker.tick(at(300)).await.assessment().is_some());
}

#[tokio::test]
async fn quit_breaks_the_loop() {
    let mut worker = worker(ScriptedStats::default(), ScriptedPanel::default());
    assert!(worker.apply(Command::Quit).is_break());
}

#[tokio::test]
async fn missing_game_and_failing_source_skip() {
    let stats = ScriptedStats::default();
    let mut worker = worker(stats.clone(), ScriptedPanel::default());

    assert_eq!(
        worker.tick(at(0)).await,
        TickEvent::Skipped {
            tick: 1,
            reason: SkipReason::NoGame
        }
    );

    stats.fail("connection refused");
    let event = worker.tick(at(300)).await;
    assert!(matches!(
        event,
        TickEvent::Skipped {
            reason: SkipReason::SourceUnavailable(ref message),
            ..
        } if message.contains("connection refused")
    ));

    stats.set(Some(snapshot(&[])));
    assert_eq!(
        worker.tick(at(600)).await,
        TickEvent::Skipped {
            tick: 3,
            reason: SkipReason::NoTarget
        }
    );
}

#[tokio::test]
async fn rejected_panel_reading_falls_back() {
    let stats = ScriptedStats::default();
    let panel = ScriptedPanel::default();
    stats.set(Some(snapshot(&["Lux"])));
    panel.set(Some(PanelReading::exact(900, 600)));
    let mut worker = worker(stats, panel);

    let event = worker.tick(at(0)).await;
    let assessment = event.assessment().unwrap();
    assert_eq!(assessment.result.enemy_source, EnemySource::Assumed);
    assert_eq!(assessment.hp_fraction, 1.0);
}

#[tokio::test]
async fn hung_stats_source_costs_one_tick() {
    let catalog = ContentFactory::bundled().load_catalog().unwrap();
    let mut worker = Runtime::builder()
        .config(RuntimeConfig {
            tick_period: Duration::from_millis(100),
            source_timeout: Duration::from_millis(20),
            ..RuntimeConfig::default()
        })
        .catalog(catalog)
        .stats_source(HangingStats)
        .build_worker()
        .unwrap();

    let started = std::time::Instant::now();
    let event = worker.tick(at(0)).await;
    assert!(started.elapsed() < Duration::from_secs(2));
    assert!(matches!(
        event,
        TickEvent::Skipped {
            reason: SkipReason::SourceUnavailable(_),
            ..
        }
    ));
}

#[tokio::test]
async fn dead_target_is_paused() {
    let stats = ScriptedStats::default();
    let mut game = snapshot(&["Lux"]);
    game.enemies[0].is_dead = true;
    stats.set(Some(game));
    let mut worker = worker(stats, ScriptedPanel::default());

    let event = worker.tick(at(0)).await;
    assert_eq!(
        event.assessment().unwrap().classification(),
        Classification::Paused
    );
}

#[tokio::test]
async fn spawned_runtime_broadcasts_and_quits() {
    let stats = ScriptedStats::default();
    stats.set(Some(snapshot(&["Lux"])));
    let catalog = ContentFactory::bundled().load_catalog().unwrap();

    let runtime = Runtime::builder()
        .config(RuntimeConfig {
            tick_period: Duration::from_millis(20),
            source_timeout: Duration::from_millis(10),
            ..RuntimeConfig::default()
        })
        .catalog(catalog)
        .stats_source(stats)
        .build()
        .await
        .unwrap();

    let handle = runtime.handle();
    let mut events = runtime.subscribe();
    let assessed = tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            if let TickEvent::Assessed { assessment, .. } = events.recv().await.unwrap() {
                return assessment;
            }
        }
    })
    .await
    .unwrap();
    assert_eq!(assessed.target, ChampionId::new("Lux"));

    handle.quit().await.unwrap();
    tokio::time::timeout(Duration::from_secs(2), runtime.wait())
        .await
        .unwrap()
        .unwrap();
    assert!(handle.toggle().await.is_err());
}

#[tokio::test]
async fn non_finite_damage_is_discarded_and_never_shown() {
    let stats = ScriptedStats::default();
    let mut overflowing = snapshot(&["Lux"]);
    overflowing.player.attack_damage = f64::MAX;
    stats.set(Some(overflowing));
    let renderer = RecordingRenderer::default();

    let mut worker = Runtime::builder()
        .catalog(ContentFactory::bundled().load_catalog().unwrap())
        .stats_source(stats)
        .renderer(renderer.clone())
        .build_worker()
        .unwrap();

    let event = worker.tick(at(0)).await;
    match event {
        TickEvent::Discarded {
            tick: 1,
            violation: InvariantViolation::InvalidDamage(total),
        } => assert!(!total.is_finite()),
        other => panic!("expected a discarded tick, got {other:?}"),
    }
    assert!(!renderer.calls().contains(&"show"));
    assert!(worker.lock_state().is_locked_on(&ChampionId::new("Lux")));
}
