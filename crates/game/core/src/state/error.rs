//! Errors raised while constructing a battle.

use crate::error::{ErrorSeverity, GameError};

use super::{CharacterId, Position, Side};

/// Configuration errors detected before the first turn.
///
/// Every variant is fatal: a battle never starts with unresolved content.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SetupError {
    #[error("unknown character type '{0}'")]
    UnknownCharacterType(String),

    #[error("unknown ability '{0}'")]
    UnknownAbility(String),

    #[error("unknown win condition type '{0}'")]
    UnknownWinConditionType(String),

    #[error("win condition '{condition}' is missing parameter '{parameter}'")]
    MissingWinConditionParameter {
        condition: String,
        parameter: &'static str,
    },

    #[error("character '{name}' not found on the {side} team")]
    UnknownCharacterName { name: String, side: Side },

    #[error("character id {0} is used more than once")]
    DuplicateCharacterId(CharacterId),

    #[error("character {character} placed outside the board at {position}")]
    PositionOutOfBounds {
        character: CharacterId,
        position: Position,
    },

    #[error("characters {first} and {second} share position {position}")]
    PositionOccupied {
        first: CharacterId,
        second: CharacterId,
        position: Position,
    },

    #[error("the {0} team has no characters")]
    EmptyTeam(Side),

    #[error("character {0} has zero max hp")]
    InvalidStats(CharacterId),
}

impl GameError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use SetupError::*;
        match self {
            UnknownCharacterType(_) => "SETUP_UNKNOWN_CHARACTER_TYPE",
            UnknownAbility(_) => "SETUP_UNKNOWN_ABILITY",
            UnknownWinConditionType(_) => "SETUP_UNKNOWN_WIN_CONDITION_TYPE",
            MissingWinConditionParameter { .. } => "SETUP_MISSING_WIN_CONDITION_PARAMETER",
            UnknownCharacterName { .. } => "SETUP_UNKNOWN_CHARACTER_NAME",
            DuplicateCharacterId(_) => "SETUP_DUPLICATE_CHARACTER_ID",
            PositionOutOfBounds { .. } => "SETUP_POSITION_OUT_OF_BOUNDS",
            PositionOccupied { .. } => "SETUP_POSITION_OCCUPIED",
            EmptyTeam(_) => "SETUP_EMPTY_TEAM",
            InvalidStats(_) => "SETUP_INVALID_STATS",
        }
    }
}
