//! Battle assembly from level and party specs.

use tactics_core::{BattleState, GameConfig, SetupError, Side, Team, WinCondition};

use crate::characters::CharacterFactory;
use crate::specs::{LevelSpec, PartySpec, UnitSpec};
use crate::win::WinConditionFactory;

/// A validated battle ready to hand to the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleSetup {
    pub state: BattleState,
    pub win_condition: WinCondition,
}

impl BattleSetup {
    /// Builds both teams, validates the board and resolves the win condition.
    ///
    /// The party is built first, so human characters receive the lowest ids.
    ///
    /// # Errors
    ///
    /// Any unresolved type string or invalid placement is returned as a
    /// fatal [`SetupError`].
    pub fn assemble(
        level: &LevelSpec,
        party: &PartySpec,
        config: &GameConfig,
    ) -> Result<Self, SetupError> {
        let mut factory = CharacterFactory::new();
        let human = build_team(&mut factory, &party.name, Side::Human, &party.members)?;
        let ai = build_team(&mut factory, &level.name, Side::Ai, &level.enemies)?;

        let win_condition = WinConditionFactory::create(&level.win_condition, &ai)?;
        let board = level.board.unwrap_or(config.board);
        let state = BattleState::new(board, human, ai)?;

        Ok(Self {
            state,
            win_condition,
        })
    }
}

fn build_team(
    factory: &mut CharacterFactory,
    name: &str,
    side: Side,
    units: &[UnitSpec],
) -> Result<Team, SetupError> {
    let mut team = Team::new(name, side);
    for unit in units {
        team.push(factory.create_unit(unit, side)?);
    }
    Ok(team)
}
