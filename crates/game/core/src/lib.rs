//! Deterministic battle rules and data types shared across crates.
//!
//! `tactics-core` defines the canonical rules (stats, characters, actions,
//! damage, win conditions) and exposes pure APIs with no I/O and no logging.
//! Orchestration (turn loop, players, events) lives in `tactics-runtime`, and
//! content loading lives in `tactics-content`; both depend on the types
//! re-exported here.
pub mod action;
pub mod combat;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;
pub mod win;

pub use action::{
    AbilityAction, Action, ActionContext, ActionEffect, ActionError, ActionKind, ActionOutcome,
    ActionTransition, AttackAction, DefendAction, InvalidReason, MoveAction,
};
pub use config::{DamageVariance, GameConfig};
pub use error::{ErrorSeverity, GameError};
pub use rng::{PcgRandom, RandomProvider};
pub use state::{
    Ability, AbilityEffect, BattleState, Board, Character, CharacterId, DamageReport, Position,
    SetupError, Side, StatBlock, Team,
};
pub use win::WinCondition;
