//! Battle assembly and execution for the terminal client.
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tactics_content::ContentFactory;
use tactics_core::Side;
use tactics_runtime::{BattleReport, Controller, EventBus, GameEngine, JsonlRecorder, Player};

use crate::config::{CliConfig, HumanMode};
use crate::input::LineInput;
use crate::logging::{Session, unix_seconds};

/// Result of one client run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub report: BattleReport,
    pub seed: u64,
    pub events_file: PathBuf,
    pub events_written: usize,
}

/// Loads the configured battle, plays it and records every event.
pub fn run(config: &CliConfig, session: &Session) -> Result<RunSummary> {
    let factory = ContentFactory::new(&config.data_dir);
    let (game_config, setup) = factory.load_battle(&config.level, &config.party)?;
    let seed = config.seed.unwrap_or_else(unix_seconds);

    let events_file = config
        .events_file
        .clone()
        .unwrap_or_else(|| session.dir.join("events.jsonl"));
    let file = File::create(&events_file)
        .with_context(|| format!("Failed to create event log: {}", events_file.display()))?;

    let bus = EventBus::new();
    let recorder = JsonlRecorder::attach(&bus, BufWriter::new(file));

    let human_name = setup.state.human().name().to_string();
    let ai_name = setup.state.ai().name().to_string();
    let human = match config.human {
        HumanMode::Stdin => Player::human(
            human_name,
            LineInput::new(io::stdin().lock(), io::stdout()),
        ),
        HumanMode::Auto => Player::new(
            human_name,
            Side::Human,
            Controller::Ai(config.ai.strategy()),
        ),
    };
    let ai = Player::new(ai_name, Side::Ai, Controller::Ai(config.ai.strategy()));

    tracing::info!(
        level_file = %config.level,
        party = %config.party,
        seed,
        human = %config.human,
        ai = %config.ai,
        "Battle assembled"
    );

    let mut engine = GameEngine::builder()
        .state(setup.state)
        .win_condition(setup.win_condition)
        .config(game_config)
        .seed(seed)
        .human(human)
        .ai(ai)
        .bus(bus)
        .build()?;

    let result = engine.run();
    recorder.detach();
    let report = result?;

    Ok(RunSummary {
        report,
        seed,
        events_file,
        events_written: recorder.written(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AiKind;
    use tactics_runtime::{BattlePhase, RecordedEvent};

    #[test]
    fn auto_battle_records_every_event() {
        let root = tempfile::tempdir().unwrap();
        let config = CliConfig {
            data_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data"),
            seed: Some(3),
            human: HumanMode::Auto,
            ai: AiKind::Simple,
            session_id: Some("auto".into()),
            log_dir: Some(root.path().to_path_buf()),
            ..CliConfig::default()
        };
        let session = Session::create(&config).unwrap();

        let summary = run(&config, &session).unwrap();
        assert!(matches!(
            summary.report.outcome,
            BattlePhase::Won | BattlePhase::Lost
        ));
        assert_eq!(summary.seed, 3);

        let text = std::fs::read_to_string(&summary.events_file).unwrap();
        let events: Vec<RecordedEvent> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(events.len(), summary.events_written);
        assert!(matches!(events.first(), Some(RecordedEvent::BattleStarted(_))));
        assert!(matches!(events.last(), Some(RecordedEvent::BattleEnded(_))));
    }
}
