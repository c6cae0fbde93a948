//! A recorded scenario driven through a spawned runtime.

use std::time::Duration;

use engine_content::ContentFactory;
use engine_core::{ChampionId, EnemySource};
use runtime::{ReplaySource, Runtime, RuntimeConfig, Scenario, SkipReason, TickEvent};

const SCENARIO: &str = r#"(
    frames: [
        (
            snapshot: (
                player: (
                    champion: "Zed",
                    level: 11,
                    attack_damage: 210.0,
                    bonus_attack_damage: 110.0,
                    hp_current: 900.0,
                    hp_max: 1400.0,
                    spell_ranks: {Q: 5, W: 2, E: 3, R: 2},
                    lethality: 18.0,
                ),
                enemies: [
                    (champion: "Lux", level: 10, summoner_spells: ["SummonerBarrier", "SummonerFlash"]),
                    (champion: "Jinx", level: 11),
                ],
                game_time_secs: 1210.0,
            ),
            panel: Some((health: Exact(current: 420, max: 1500), mana: Some((current: 200, max: 900)))),
            commands: [CycleTarget],
        ),
        (
            snapshot: (
                player: (champion: "Zed", level: 11, attack_damage: 210.0, hp_current: 900.0, hp_max: 1400.0),
                enemies: [(champion: "Lux", level: 10), (champion: "Jinx", level: 11)],
                game_time_secs: 1210.3,
            ),
        ),
    ],
)"#;

#[tokio::test]
async fn scenario_frames_and_commands_drive_the_loop() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("teamfight.ron");
    std::fs::write(&path, SCENARIO).unwrap();

    let replay = ReplaySource::new(Scenario::load(&path).unwrap());
    let runtime = Runtime::builder()
        .config(RuntimeConfig {
            tick_period: Duration::from_millis(20),
            source_timeout: Duration::from_millis(10),
            start_enabled: false,
            ..RuntimeConfig::default()
        })
        .catalog(ContentFactory::bundled().load_catalog().unwrap())
        .stats_source(replay.clone())
        .panel_source(replay.clone())
        .build()
        .await
        .unwrap();

    // Frames only advance once enabled, after commands can be forwarded.
    let handle = runtime.handle();
    let mut events = runtime.subscribe();
    replay.attach(handle.clone());
    handle.toggle().await.unwrap();

    let mut assessed = Vec::new();
    tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            match events.recv().await.unwrap() {
                TickEvent::Assessed { assessment, .. } => assessed.push(*assessment),
                TickEvent::Skipped {
                    reason: SkipReason::NoGame,
                    ..
                } => break,
                _ => {}
            }
        }
    })
    .await
    .unwrap();

    assert_eq!(assessed.len(), 2);
    assert_eq!(assessed[0].target, ChampionId::new("Lux"));
    assert_eq!(assessed[0].result.enemy_source, EnemySource::Live);
    assert_eq!(assessed[0].hp_fraction, 0.28);
    assert_eq!(assessed[0].mana_fraction, Some(200.0 / 900.0));
    assert!(!assessed[0].threats.is_empty());

    assert_eq!(assessed[1].target, ChampionId::new("Jinx"));
    assert_eq!(assessed[1].result.enemy_source, EnemySource::Assumed);
    assert_eq!(replay.remaining(), 0);

    handle.quit().await.unwrap();
    runtime.wait().await.unwrap();
}
