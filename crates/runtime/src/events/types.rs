//! Battle events published on the [`EventBus`](super::EventBus).
//!
//! Every event is an immutable record created when something happens and
//! consumed synchronously by subscribers. The engine keeps no copy.

use serde::{Deserialize, Serialize};
use tactics_core::{ActionOutcome, CharacterId, Side};

/// The first turn is about to start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleStarted {
    pub human: String,
    pub ai: String,
}

/// A player was granted its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnStarted {
    /// Zero-based index of the round this turn belongs to.
    pub round: u32,
    pub side: Side,
}

/// An action executed successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResolved {
    pub side: Side,
    pub outcome: ActionOutcome,
}

/// A turn ended without an action being applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSkipped {
    pub side: Side,
    pub reason: String,
    /// Stable error code, absent when the player simply passed.
    pub error_code: Option<String>,
}

/// A character's alive flag flipped to false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterKilled {
    pub victim: CharacterId,
    pub victim_name: String,
    pub killer: CharacterId,
    pub killer_name: String,
}

/// The battle reached a terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleEnded {
    pub winner: Side,
    pub loser: Side,
    pub winner_name: String,
    pub loser_name: String,
    /// Rounds completed when the battle ended.
    pub rounds: u32,
}
