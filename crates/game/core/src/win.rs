//! Win conditions.
//!
//! A win condition is a stateless predicate pair evaluated fresh against the
//! live battle state after every turn. Nothing is cached between evaluations.

use crate::state::{BattleState, CharacterId, Side};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WinCondition {
    /// Human side wins once every AI character is defeated.
    #[default]
    EliminateAllEnemies,
    /// Human side wins by keeping someone alive for `rounds` completed rounds.
    SurviveRounds { rounds: u32 },
    /// Human side wins once the given AI character is defeated.
    DefeatLeader { leader: CharacterId },
}

impl WinCondition {
    /// Type string used by level files ("EliminateAllEnemies", ...).
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::EliminateAllEnemies => "EliminateAllEnemies",
            Self::SurviveRounds { .. } => "SurviveRounds",
            Self::DefeatLeader { .. } => "DefeatLeader",
        }
    }

    pub fn is_win(&self, state: &BattleState) -> bool {
        match *self {
            Self::EliminateAllEnemies => state.ai().is_defeated(),
            Self::SurviveRounds { rounds } => {
                !state.human().is_defeated() && state.round() >= rounds
            }
            Self::DefeatLeader { leader } => state
                .ai()
                .get(leader)
                .is_some_and(|character| !character.is_alive()),
        }
    }

    /// Every variant loses when the whole human team is defeated.
    pub fn is_loss(&self, state: &BattleState) -> bool {
        state.human().is_defeated()
    }

    /// Winning side if the battle is decided. A win takes precedence over a
    /// simultaneous loss.
    pub fn winner(&self, state: &BattleState) -> Option<Side> {
        if self.is_win(state) {
            Some(Side::Human)
        } else if self.is_loss(state) {
            Some(Side::Ai)
        } else {
            None
        }
    }
}
