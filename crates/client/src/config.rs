//! CLI configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use strum::{Display, EnumString};
use tactics_runtime::{AiStrategy, SimpleAiStrategy, TacticalAiStrategy};

/// Configuration required to set up and play one battle.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub level: String,
    pub party: String,
    /// Random seed; derived from the clock when unset.
    pub seed: Option<u64>,
    pub human: HumanMode,
    pub ai: AiKind,
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
    /// Telemetry output; defaults to `events.jsonl` in the session directory.
    pub events_file: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            level: String::from("outpost"),
            party: String::from("vanguard"),
            seed: None,
            human: HumanMode::Stdin,
            ai: AiKind::Tactical,
            session_id: None,
            log_dir: None,
            events_file: None,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TACTICS_DATA_DIR` - Content directory (default: `data`)
    /// - `TACTICS_LEVEL` - Level file name under `levels/` (default: `outpost`)
    /// - `TACTICS_PARTY` - Party file name under `parties/` (default: `vanguard`)
    /// - `TACTICS_SEED` - Random seed (default: derived from the clock)
    /// - `TACTICS_HUMAN` - `stdin` or `auto` (default: `stdin`)
    /// - `TACTICS_AI` - `simple` or `tactical` (default: `tactical`)
    /// - `TACTICS_SESSION_ID` - Session identifier (default: auto-generated)
    /// - `TACTICS_LOG_DIR` - Log root directory (default: platform-specific)
    /// - `TACTICS_EVENTS_FILE` - JSON-lines event log path
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("TACTICS_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(level) = env::var("TACTICS_LEVEL") {
            config.level = level;
        }
        if let Ok(party) = env::var("TACTICS_PARTY") {
            config.party = party;
        }
        config.seed = read_env::<u64>("TACTICS_SEED");

        if let Some(mode) = read_env::<HumanMode>("TACTICS_HUMAN") {
            config.human = mode;
        }
        if let Some(kind) = read_env::<AiKind>("TACTICS_AI") {
            config.ai = kind;
        }

        config.session_id = env::var("TACTICS_SESSION_ID").ok();
        config.log_dir = env::var("TACTICS_LOG_DIR").ok().map(PathBuf::from);
        config.events_file = env::var("TACTICS_EVENTS_FILE").ok().map(PathBuf::from);

        config
    }
}

/// Who controls the human side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HumanMode {
    /// Choices are read from standard input.
    Stdin,
    /// The configured AI strategy plays the human side too.
    Auto,
}

/// AI policy used by AI-controlled sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AiKind {
    Simple,
    Tactical,
}

impl AiKind {
    pub fn strategy(self) -> Box<dyn AiStrategy> {
        match self {
            AiKind::Simple => Box::new(SimpleAiStrategy::new()),
            AiKind::Tactical => Box::new(TacticalAiStrategy::new()),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_parse_case_insensitively() {
        assert_eq!("auto".parse::<HumanMode>(), Ok(HumanMode::Auto));
        assert_eq!("STDIN".parse::<HumanMode>(), Ok(HumanMode::Stdin));
        assert_eq!("Simple".parse::<AiKind>(), Ok(AiKind::Simple));
        assert!("random".parse::<AiKind>().is_err());
        assert_eq!(AiKind::Tactical.to_string(), "tactical");
    }

    #[test]
    fn strategies_match_their_kind() {
        assert_eq!(AiKind::Simple.strategy().name(), "simple");
        assert_eq!(AiKind::Tactical.strategy().name(), "tactical");
    }
}
