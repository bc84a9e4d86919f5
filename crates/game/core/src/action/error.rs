//! Action execution errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{CharacterId, Position};

/// Errors that can occur while executing a character action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// The action breaks a game rule.
    #[error("invalid action: {reason}")]
    InvalidAction { reason: InvalidReason },

    /// Actor or target is defeated.
    #[error("character {character} is defeated")]
    DeadCharacter { character: CharacterId },

    /// Actor or target does not exist in this battle.
    #[error("character {character} not found")]
    CharacterNotFound { character: CharacterId },
}

impl ActionError {
    pub fn invalid(reason: InvalidReason) -> Self {
        Self::InvalidAction { reason }
    }
}

/// Why an action was rejected as illegal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidReason {
    #[error("target {target} is not an opponent")]
    NotAnOpponent { target: CharacterId },

    #[error("target {target} is not an ally")]
    NotAnAlly { target: CharacterId },

    #[error("actor {actor} does not fight for the acting side")]
    NotOnActingSide { actor: CharacterId },

    #[error("ability '{ability}' is not unlocked")]
    AbilityNotUnlocked { ability: String },

    #[error("destination {position} is outside the board")]
    OutOfBounds { position: Position },

    #[error("destination {position} is occupied")]
    Occupied { position: Position },

    #[error("destination {position} is {distance} tiles away (limit {limit})")]
    OutOfReach {
        position: Position,
        distance: u32,
        limit: u32,
    },
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidAction { .. } => ErrorSeverity::Validation,
            Self::DeadCharacter { .. } => ErrorSeverity::Recoverable,
            Self::CharacterNotFound { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAction { reason } => match reason {
                InvalidReason::NotAnOpponent { .. } => "ACTION_NOT_AN_OPPONENT",
                InvalidReason::NotAnAlly { .. } => "ACTION_NOT_AN_ALLY",
                InvalidReason::NotOnActingSide { .. } => "ACTION_NOT_ON_ACTING_SIDE",
                InvalidReason::AbilityNotUnlocked { .. } => "ACTION_ABILITY_NOT_UNLOCKED",
                InvalidReason::OutOfBounds { .. } => "ACTION_OUT_OF_BOUNDS",
                InvalidReason::Occupied { .. } => "ACTION_OCCUPIED",
                InvalidReason::OutOfReach { .. } => "ACTION_OUT_OF_REACH",
            },
            Self::DeadCharacter { .. } => "ACTION_DEAD_CHARACTER",
            Self::CharacterNotFound { .. } => "ACTION_CHARACTER_NOT_FOUND",
        }
    }
}
