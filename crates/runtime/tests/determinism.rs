use std::path::PathBuf;

use tactics_content::ContentFactory;
use tactics_core::{DamageVariance, PcgRandom, RandomProvider, Side};
use tactics_runtime::{
    BattleReport, Controller, EventBus, EventLog, GameEngine, Player, RecordedEvent,
    TacticalAiStrategy,
};

fn bundled_data() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

/// Runs the bundled outpost level with AI on both sides.
fn simulate(seed: u64) -> (Option<BattleReport>, Vec<RecordedEvent>) {
    let factory = ContentFactory::new(bundled_data());
    let (config, setup) = factory.load_battle("outpost", "vanguard").unwrap();
    let config = config.with_damage_variance(DamageVariance::Scatter { percent: 25 });

    let bus = EventBus::new();
    let log = EventLog::attach(&bus);
    let human_name = setup.state.human().name().to_string();
    let ai_name = setup.state.ai().name().to_string();

    let mut engine = GameEngine::builder()
        .state(setup.state)
        .win_condition(setup.win_condition)
        .config(config)
        .human(Player::new(
            human_name,
            Side::Human,
            Controller::Ai(Box::new(TacticalAiStrategy::new())),
        ))
        .ai(Player::ai(ai_name, TacticalAiStrategy::new()))
        .seed(seed)
        .bus(bus)
        .build()
        .unwrap();

    let report = engine.run().ok();
    (report, log.events())
}

#[test]
fn identically_seeded_providers_agree() {
    let mut a = PcgRandom::new(2024);
    let mut b = PcgRandom::new(2024);
    for _ in 0..100 {
        assert_eq!(a.next_int(20), b.next_int(20));
        assert_eq!(a.next_double().to_bits(), b.next_double().to_bits());
    }
}

#[test]
fn identically_seeded_battles_emit_identical_events() {
    let (first_report, first_events) = simulate(7);
    let (second_report, second_events) = simulate(7);

    assert!(!first_events.is_empty());
    assert_eq!(first_report, second_report);
    assert_eq!(first_events, second_events);
}

#[test]
fn recorded_battles_start_and_end_cleanly() {
    let (report, events) = simulate(11);
    assert!(matches!(events.first(), Some(RecordedEvent::BattleStarted(_))));
    assert!(report.is_some(), "seed 11 should finish");
    assert!(matches!(events.last(), Some(RecordedEvent::BattleEnded(_))));
}
