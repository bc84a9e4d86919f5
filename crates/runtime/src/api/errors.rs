//! Error types surfaced by the runtime API.
//!
//! Turn-level failures (`StrategyError`, `ActionError`) never escape the turn
//! loop: the engine logs them and treats the turn as a no-op. Only
//! [`EngineError`] reaches callers.
use std::fmt;

use tactics_core::{ErrorSeverity, GameError, SetupError, Side};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine requires {component} to be configured before building")]
    MissingComponent { component: Component },

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error("player '{player}' is registered for the {expected} side but plays {actual}")]
    PlayerSideMismatch {
        player: String,
        expected: Side,
        actual: Side,
    },

    #[error("battle already finished: {winner} side won")]
    BattleFinished { winner: Side },

    #[error("battle did not finish within {limit} rounds")]
    RoundLimitReached { limit: u32 },
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingComponent { .. } | Self::PlayerSideMismatch { .. } => {
                ErrorSeverity::Fatal
            }
            Self::Setup(err) => err.severity(),
            Self::BattleFinished { .. } => ErrorSeverity::Validation,
            Self::RoundLimitReached { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingComponent { .. } => "ENGINE_MISSING_COMPONENT",
            Self::Setup(err) => err.error_code(),
            Self::PlayerSideMismatch { .. } => "ENGINE_PLAYER_SIDE_MISMATCH",
            Self::BattleFinished { .. } => "ENGINE_BATTLE_FINISHED",
            Self::RoundLimitReached { .. } => "ENGINE_ROUND_LIMIT_REACHED",
        }
    }
}

/// Builder inputs the engine cannot run without.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Component {
    State,
    HumanPlayer,
    AiPlayer,
    WinCondition,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Component::State => "battle state",
            Component::HumanPlayer => "human player",
            Component::AiPlayer => "ai player",
            Component::WinCondition => "win condition",
        };
        write!(f, "{}", label)
    }
}

/// Failure while a player decides on an action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    /// The strategy hit an unexpected condition.
    #[error("strategy failed: {reason}")]
    StrategyFailure { reason: String },

    /// A human choice referenced a roster slot or ability that does not exist.
    #[error("invalid selection: {detail}")]
    InvalidSelection { detail: String },

    /// The input collaborator could not produce a choice.
    #[error("input unavailable: {0}")]
    Input(String),
}

impl StrategyError {
    pub fn failure(reason: impl Into<String>) -> Self {
        Self::StrategyFailure {
            reason: reason.into(),
        }
    }

    pub fn invalid_selection(detail: impl Into<String>) -> Self {
        Self::InvalidSelection {
            detail: detail.into(),
        }
    }
}

impl GameError for StrategyError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::StrategyFailure { .. } => ErrorSeverity::Internal,
            Self::InvalidSelection { .. } => ErrorSeverity::Validation,
            Self::Input(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::StrategyFailure { .. } => "STRATEGY_FAILURE",
            Self::InvalidSelection { .. } => "STRATEGY_INVALID_SELECTION",
            Self::Input(_) => "STRATEGY_INPUT",
        }
    }
}
