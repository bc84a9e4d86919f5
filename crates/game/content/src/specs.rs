//! Data shapes for levels and parties as they appear in content files.

use tactics_core::{Board, Position};

/// One character to place on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitSpec {
    /// Character type name ("Warrior", "Archer", ...).
    pub kind: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    pub x: i32,
    pub y: i32,
    /// Ability names replacing the type's defaults.
    #[cfg_attr(feature = "serde", serde(default))]
    pub abilities: Option<Vec<String>>,
}

impl UnitSpec {
    pub fn new(kind: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            kind: kind.into(),
            name: None,
            x,
            y,
            abilities: None,
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Win condition reference by type string plus its parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WinConditionSpec {
    /// "EliminateAllEnemies", "SurviveRounds" or "DefeatLeader".
    pub kind: String,
    /// Required by "SurviveRounds".
    #[cfg_attr(feature = "serde", serde(default))]
    pub rounds: Option<u32>,
    /// Name of an enemy character. Required by "DefeatLeader".
    #[cfg_attr(feature = "serde", serde(default))]
    pub leader: Option<String>,
}

impl WinConditionSpec {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            rounds: None,
            leader: None,
        }
    }
}

impl Default for WinConditionSpec {
    fn default() -> Self {
        Self::new("EliminateAllEnemies")
    }
}

/// The opposing side of one battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelSpec {
    pub name: String,
    /// Falls back to the configured board when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub board: Option<Board>,
    pub enemies: Vec<UnitSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub win_condition: WinConditionSpec,
}

/// The human-controlled side of one battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartySpec {
    pub name: String,
    pub members: Vec<UnitSpec>,
}
