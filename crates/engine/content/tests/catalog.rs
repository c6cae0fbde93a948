//! Loads the shipped data files and checks them against the calculator.

use engine_content::{ChampionLoader, ComboLoader, ConfigLoader, ContentFactory, ItemLoader};
use engine_core::{
    CalculatorConfig, ChampionId, Classification, DamageType, EnemyProfile, EnemySource, ItemId,
    KillCalculator, PlayerSnapshot, ResolvedEnemyState, ResolvedMana, SpellSlot, StatsCatalog,
    ThreatFlags,
};

#[test]
fn bundled_catalog_loads() {
    let catalog = ContentFactory::bundled().load_catalog().unwrap();
    assert!(catalog.champion_count() >= 20);
    assert_eq!(catalog.combo_count(), 7);

    let khazix = catalog.champion(&ChampionId::new("Kha'Zix")).unwrap();
    assert_eq!(khazix.base_hp, 585.0);

    let steraks = catalog.item(&ItemId::new("Sterak's Gage")).unwrap();
    assert_eq!(steraks.hp_bonus, 400.0);

    let belt = catalog.item(&ItemId::new("Hextech Rocketbelt")).unwrap();
    assert_eq!(belt.active.map(|a| a.damage_type), Some(DamageType::Magic));
}

#[test]
fn bundled_config_matches_defaults() {
    let config = ContentFactory::bundled().load_config().unwrap();
    assert_eq!(config, CalculatorConfig::default());
}

#[test]
fn display_names_and_api_names_share_keys() {
    let catalog = ContentFactory::bundled().load_catalog().unwrap();
    assert!(catalog.combo(&ChampionId::new("JarvanIV")).is_some());
    assert!(catalog.combo(&ChampionId::new("MasterYi")).is_some());
    assert!(catalog.item(&ItemId::new("randuins omen")).is_some());
}

#[test]
fn duplicate_keys_are_rejected() {
    let content = r#"[
        ("Kha'Zix", (base_hp: 585.0, hp_per_level: 100.0, base_armor: 21.0,
                     armor_per_level: 4.2, base_mr: 32.0, mr_per_level: 2.05)),
        ("khazix", (base_hp: 585.0, hp_per_level: 100.0, base_armor: 21.0,
                    armor_per_level: 4.2, base_mr: 32.0, mr_per_level: 2.05)),
    ]"#;
    let err = ChampionLoader::parse(content).unwrap_err();
    assert!(err.to_string().contains("Duplicate"));
}

#[test]
fn item_fields_default_when_omitted() {
    let items = ItemLoader::parse(r#"[("Long Sword", (hp_bonus: 0.0))]"#).unwrap();
    assert_eq!(items[0].0.as_str(), "long_sword");
    assert!(items[0].1.active.is_none());
    assert!(items[0].1.tags.is_empty());
}

#[test]
fn ranked_step_without_base_is_rejected() {
    let content = r#"[
        ("Vi", (label: "broken", steps: [(label: "Q", damage_type: Physical, rank_slot: Some(Q))])),
    ]"#;
    assert!(ComboLoader::parse(content).is_err());
}

#[test]
fn inverted_thresholds_are_rejected() {
    assert!(ConfigLoader::parse("go_threshold = 40\nrisky_threshold = 60\n").is_err());
    assert!(ConfigLoader::parse("go_threshold = 99\n").is_err());

    let partial = ConfigLoader::parse("assume_isolated = false\n").unwrap();
    assert!(!partial.assume_isolated);
    assert_eq!(partial.go_threshold, 75);
}

#[test]
fn config_file_round_trips_through_the_factory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "go_threshold = 80\n[engagement_window]\nmin_game_time_secs = 60.0\n",
    )
    .unwrap();

    let config = ContentFactory::new(dir.path()).load_config().unwrap();
    assert_eq!(config.go_threshold, 80);
    assert_eq!(config.engagement_window.min_game_time_secs, 60.0);
    assert_eq!(config.engagement_window.max_game_time_secs, 2_700.0);
}

#[test]
fn khazix_isolation_bonus_shows_in_the_verdict() {
    let catalog = ContentFactory::bundled().load_catalog().unwrap();
    let mut player = PlayerSnapshot {
        champion: ChampionId::new("Kha'Zix"),
        level: 9,
        attack_damage: 150.0,
        hp_current: 1_000.0,
        hp_max: 1_400.0,
        ..PlayerSnapshot::default()
    };
    player.spell_ranks.insert(SpellSlot::Q, 5);
    player.spell_ranks.insert(SpellSlot::W, 2);
    player.spell_ranks.insert(SpellSlot::E, 2);

    let enemy = EnemyProfile::new(ChampionId::new("Veigar"), 9);
    let state = ResolvedEnemyState {
        champion: enemy.champion.clone(),
        hp_fraction: 0.5,
        source: EnemySource::Live,
        mana: ResolvedMana {
            fraction: None,
            source: EnemySource::Assumed,
        },
        observed_hp_max: None,
        rejected: None,
    };

    let isolated = KillCalculator::new(&catalog, CalculatorConfig::default())
        .assess(&player, &enemy, &state, 600.0)
        .unwrap();
    let grouped = KillCalculator::new(
        &catalog,
        CalculatorConfig {
            assume_isolated: false,
            ..CalculatorConfig::default()
        },
    )
    .assess(&player, &enemy, &state, 600.0)
    .unwrap();

    assert!(isolated.damage.total_raw() > grouped.damage.total_raw());
    assert!(isolated.threats.contains(ThreatFlags::SOLO_ENGAGE));
    assert_eq!(isolated.classification(), Classification::Go);
}
