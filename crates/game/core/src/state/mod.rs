//! Battle state: both teams, the board and the round counter.
//!
//! [`BattleState`] is validated once at construction and afterwards only
//! changes through actions and the engine's turn bookkeeping.

mod ability;
mod board;
mod character;
mod common;
mod error;
mod stats;
mod team;

pub use ability::{Ability, AbilityEffect};
pub use board::Board;
pub use character::{Character, DamageReport};
pub use common::{CharacterId, Position, Side};
pub use error::SetupError;
pub use stats::StatBlock;
pub use team::Team;

use std::collections::{HashMap, HashSet};

/// Complete mutable state of one battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    board: Board,
    human: Team,
    ai: Team,
    round: u32,
}

impl BattleState {
    /// Validates the rosters and board, then builds the state.
    ///
    /// # Errors
    ///
    /// - `EmptyTeam` if either side fields nobody
    /// - `DuplicateCharacterId` if an id appears twice across both teams
    /// - `InvalidStats` if a character starts with zero max hp
    /// - `PositionOutOfBounds` / `PositionOccupied` for bad placements
    pub fn new(board: Board, human: Team, ai: Team) -> Result<Self, SetupError> {
        if human.is_empty() {
            return Err(SetupError::EmptyTeam(Side::Human));
        }
        if ai.is_empty() {
            return Err(SetupError::EmptyTeam(Side::Ai));
        }

        let mut ids = HashSet::new();
        let mut tiles: HashMap<Position, CharacterId> = HashMap::new();
        for character in human.members().iter().chain(ai.members()) {
            if !ids.insert(character.id()) {
                return Err(SetupError::DuplicateCharacterId(character.id()));
            }
            if character.stats().max_hp() == 0 {
                return Err(SetupError::InvalidStats(character.id()));
            }
            if !board.contains(character.position()) {
                return Err(SetupError::PositionOutOfBounds {
                    character: character.id(),
                    position: character.position(),
                });
            }
            if let Some(&first) = tiles.get(&character.position()) {
                return Err(SetupError::PositionOccupied {
                    first,
                    second: character.id(),
                    position: character.position(),
                });
            }
            tiles.insert(character.position(), character.id());
        }

        Ok(Self {
            board,
            human,
            ai,
            round: 0,
        })
    }

    pub fn board(&self) -> Board {
        self.board
    }

    /// Number of completed rounds (one human turn plus one AI turn each).
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn advance_round(&mut self) {
        self.round += 1;
    }

    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::Human => &self.human,
            Side::Ai => &self.ai,
        }
    }

    pub(crate) fn team_mut(&mut self, side: Side) -> &mut Team {
        match side {
            Side::Human => &mut self.human,
            Side::Ai => &mut self.ai,
        }
    }

    pub fn human(&self) -> &Team {
        &self.human
    }

    pub fn ai(&self) -> &Team {
        &self.ai
    }

    /// Finds a character on either team.
    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.human.get(id).or_else(|| self.ai.get(id))
    }

    pub(crate) fn character_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        if self.human.contains(id) {
            self.human.get_mut(id)
        } else {
            self.ai.get_mut(id)
        }
    }

    pub fn side_of(&self, id: CharacterId) -> Option<Side> {
        self.character(id).map(Character::side)
    }

    /// Alive character standing on `position`, if any.
    pub fn occupant(&self, position: Position) -> Option<&Character> {
        self.human
            .alive()
            .chain(self.ai.alive())
            .find(|c| c.position() == position)
    }

    /// A tile is occupied only by alive characters.
    pub fn is_occupied(&self, position: Position) -> bool {
        self.occupant(position).is_some()
    }

    /// Ids of every alive character, human team first.
    pub fn alive_ids(&self) -> Vec<CharacterId> {
        self.human
            .alive()
            .chain(self.ai.alive())
            .map(Character::id)
            .collect()
    }

    /// Clears expiring modifiers for every alive member of `side`.
    pub fn reset_turn_modifiers(&mut self, side: Side) {
        self.team_mut(side).reset_turn_modifiers();
    }

    /// Borrows two distinct characters mutably, regardless of their teams.
    pub(crate) fn pair_mut(
        &mut self,
        first: CharacterId,
        second: CharacterId,
    ) -> Option<(&mut Character, &mut Character)> {
        if first == second {
            return None;
        }
        let first_side = self.side_of(first)?;
        let second_side = self.side_of(second)?;

        if first_side == second_side {
            let team = self.team_mut(first_side);
            let i = team.index_of(first)?;
            let j = team.index_of(second)?;
            return team.pair_mut(i, j);
        }

        let Self { human, ai, .. } = self;
        let (first_team, second_team) = match first_side {
            Side::Human => (human, ai),
            Side::Ai => (ai, human),
        };
        Some((first_team.get_mut(first)?, second_team.get_mut(second)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(id: u32, x: i32, y: i32) -> Character {
        Character::new(
            CharacterId(id),
            format!("unit-{id}"),
            Side::Human,
            Position::new(x, y),
            StatBlock::new(10, 3, 1, 2),
        )
    }

    fn teams() -> (Team, Team) {
        (
            Team::new("heroes", Side::Human).with_member(unit(1, 0, 0)),
            Team::new("raiders", Side::Ai).with_member(unit(2, 3, 3)),
        )
    }

    #[test]
    fn builds_valid_state() {
        let (human, ai) = teams();
        let state = BattleState::new(Board::new(4, 4), human, ai).unwrap();
        assert_eq!(state.round(), 0);
        assert_eq!(state.side_of(CharacterId(2)), Some(Side::Ai));
        assert_eq!(state.alive_ids(), vec![CharacterId(1), CharacterId(2)]);
    }

    #[test]
    fn rejects_empty_team() {
        let (human, _) = teams();
        let err = BattleState::new(Board::new(4, 4), human, Team::new("none", Side::Ai));
        assert_eq!(err, Err(SetupError::EmptyTeam(Side::Ai)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let human = Team::new("heroes", Side::Human).with_member(unit(1, 0, 0));
        let ai = Team::new("raiders", Side::Ai).with_member(unit(1, 2, 2));
        let err = BattleState::new(Board::new(4, 4), human, ai);
        assert_eq!(err, Err(SetupError::DuplicateCharacterId(CharacterId(1))));
    }

    #[test]
    fn rejects_out_of_bounds_and_overlap() {
        let (human, _) = teams();
        let far = Team::new("raiders", Side::Ai).with_member(unit(2, 9, 9));
        assert!(matches!(
            BattleState::new(Board::new(4, 4), human.clone(), far),
            Err(SetupError::PositionOutOfBounds { .. })
        ));

        let stacked = Team::new("raiders", Side::Ai).with_member(unit(2, 0, 0));
        assert!(matches!(
            BattleState::new(Board::new(4, 4), human, stacked),
            Err(SetupError::PositionOccupied { .. })
        ));
    }

    #[test]
    fn defeated_characters_free_their_tile() {
        let (human, ai) = teams();
        let mut state = BattleState::new(Board::new(4, 4), human, ai).unwrap();
        assert!(state.is_occupied(Position::new(3, 3)));

        state.character_mut(CharacterId(2)).unwrap().apply_damage(100);
        assert!(!state.is_occupied(Position::new(3, 3)));
    }

    #[test]
    fn pair_mut_across_teams() {
        let (human, ai) = teams();
        let mut state = BattleState::new(Board::new(4, 4), human, ai).unwrap();
        let (a, b) = state.pair_mut(CharacterId(2), CharacterId(1)).unwrap();
        assert_eq!(a.side(), Side::Ai);
        assert_eq!(b.side(), Side::Human);
        assert!(state.pair_mut(CharacterId(1), CharacterId(1)).is_none());
    }
}
