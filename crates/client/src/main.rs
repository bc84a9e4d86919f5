//! Tactics client binary.
//!
//! # Examples
//!
//! ```bash
//! # Play the default level from the terminal
//! cargo run -p tactics-cli
//!
//! # Let the tactical AI play both sides with a fixed seed
//! TACTICS_HUMAN=auto TACTICS_SEED=7 cargo run -p tactics-cli
//! ```

use anyhow::Result;
use tactics_cli::{CliConfig, Session, run, setup_logging};
use tactics_runtime::BattlePhase;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env();
    let session = Session::create(&config)?;
    let _guard = setup_logging(&session)?;

    tracing::info!("Starting tactics client");
    tracing::debug!(config = ?config, "Configuration loaded");

    let summary = run(&config, &session)?;
    let report = summary.report;

    let verdict = match report.outcome {
        BattlePhase::Won => "Victory",
        _ => "Defeat",
    };
    println!(
        "{verdict} after {} rounds ({} turns). Winner: {}",
        report.rounds,
        report.turns,
        report.winner
    );
    println!("Seed: {}", summary.seed);
    println!(
        "Events: {} ({} recorded)",
        summary.events_file.display(),
        summary.events_written
    );

    tracing::info!("Client shutdown complete");
    Ok(())
}
