//! Terminal client for tactical battles.
//!
//! The binary is the composition root: it reads configuration from the
//! environment, installs logging, loads content, wires a stdin or AI
//! controller for the human side and records every battle event to a
//! JSON-lines file.

pub mod app;
pub mod config;
pub mod input;
pub mod logging;

pub use app::{RunSummary, run};
pub use config::{AiKind, CliConfig, HumanMode};
pub use input::{InputError, LineInput, parse_choice};
pub use logging::{Session, setup_logging};
