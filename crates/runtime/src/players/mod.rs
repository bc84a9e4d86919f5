//! Participants of a battle.
//!
//! A [`Player`] owns no characters: it references its side's [`Team`] inside
//! the engine's [`BattleState`] and carries the capability that picks the
//! side's action each turn, either a [`HumanController`] or an [`AiStrategy`].

mod human;

pub use human::{HumanChoice, HumanController, HumanInput, Rosters, ScriptedInput};

use tactics_core::{Action, BattleState, RandomProvider, Side, Team};

use crate::api::StrategyError;
use crate::strategies::AiStrategy;

/// Turn-taking capability of a player.
pub enum Controller {
    Human(HumanController),
    Ai(Box<dyn AiStrategy>),
}

impl Controller {
    /// Label used in logs: "human" or the strategy name.
    pub fn label(&self) -> &'static str {
        match self {
            Controller::Human(_) => "human",
            Controller::Ai(strategy) => strategy.name(),
        }
    }
}

pub struct Player {
    name: String,
    side: Side,
    controller: Controller,
}

impl Player {
    pub fn new(name: impl Into<String>, side: Side, controller: Controller) -> Self {
        Self {
            name: name.into(),
            side,
            controller,
        }
    }

    /// Human side player driven by `input`.
    pub fn human(name: impl Into<String>, input: impl HumanInput + 'static) -> Self {
        Self::new(
            name,
            Side::Human,
            Controller::Human(HumanController::new(input)),
        )
    }

    /// AI side player driven by `strategy`.
    pub fn ai(name: impl Into<String>, strategy: impl AiStrategy + 'static) -> Self {
        Self::new(name, Side::Ai, Controller::Ai(Box::new(strategy)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn is_human(&self) -> bool {
        matches!(self.controller, Controller::Human(_))
    }

    /// This player's team in `state`.
    pub fn team<'a>(&self, state: &'a BattleState) -> &'a Team {
        state.team(self.side)
    }

    /// Picks this player's action for the current turn.
    ///
    /// `Ok(None)` means the player passes.
    pub fn take_turn(
        &mut self,
        state: &BattleState,
        rng: &mut dyn RandomProvider,
    ) -> Result<Option<Action>, StrategyError> {
        match &mut self.controller {
            Controller::Human(controller) => controller.decide(state, self.side),
            Controller::Ai(strategy) => strategy.choose_action(state, self.side, rng),
        }
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("side", &self.side)
            .field("controller", &self.controller.label())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::SimpleAiStrategy;
    use tactics_core::{Board, Character, CharacterId, PcgRandom, Position, StatBlock};

    fn state() -> BattleState {
        let unit = |id: u32, x: i32| {
            Character::new(
                CharacterId(id),
                format!("unit-{id}"),
                Side::Human,
                Position::new(x, 0),
                StatBlock::new(10, 4, 0, 2),
            )
        };
        BattleState::new(
            Board::new(4, 1),
            Team::new("heroes", Side::Human).with_member(unit(1, 0)),
            Team::new("raiders", Side::Ai).with_member(unit(2, 3)),
        )
        .unwrap()
    }

    #[test]
    fn players_act_for_their_own_side() {
        let state = state();
        let mut rng = PcgRandom::new(0);

        let mut ai = Player::ai("Raiders", SimpleAiStrategy);
        assert_eq!(ai.side(), Side::Ai);
        assert_eq!(ai.team(&state).name(), "raiders");
        assert_eq!(
            ai.take_turn(&state, &mut rng),
            Ok(Some(Action::attack(CharacterId(2), CharacterId(1))))
        );

        let mut human = Player::human(
            "Heroes",
            ScriptedInput::new([HumanChoice::Defend { actor: 0 }]),
        );
        assert!(human.is_human());
        assert_eq!(
            human.take_turn(&state, &mut rng),
            Ok(Some(Action::defend(CharacterId(1))))
        );
        assert_eq!(human.take_turn(&state, &mut rng), Ok(None));
    }

    #[test]
    fn ai_controller_can_drive_the_human_side() {
        let state = state();
        let mut autopilot = Player::new(
            "Autopilot",
            Side::Human,
            Controller::Ai(Box::new(SimpleAiStrategy)),
        );
        assert!(!autopilot.is_human());
        assert_eq!(autopilot.controller().label(), "simple");
        assert_eq!(
            autopilot.take_turn(&state, &mut PcgRandom::new(0)),
            Ok(Some(Action::attack(CharacterId(1), CharacterId(2))))
        );
    }
}
