use tactics_core::{Action, BattleState, RandomProvider, Side};

use super::AiStrategy;
use crate::api::StrategyError;

/// Baseline policy.
///
/// The first alive character of the acting team attacks the alive opponent
/// with the lowest current hp. Ties go to the opponent listed first.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleAiStrategy;

impl SimpleAiStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl AiStrategy for SimpleAiStrategy {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn choose_action(
        &mut self,
        state: &BattleState,
        side: Side,
        _rng: &mut dyn RandomProvider,
    ) -> Result<Option<Action>, StrategyError> {
        let Some(actor) = state.team(side).first_alive() else {
            tracing::debug!(target: "tactics::ai", side = %side, "No alive actor");
            return Ok(None);
        };
        let Some(target) = state.team(side.opponent()).weakest_alive() else {
            tracing::debug!(target: "tactics::ai", side = %side, "No alive target");
            return Ok(None);
        };

        tracing::debug!(
            target: "tactics::ai",
            actor = %actor.id(),
            target = %target.id(),
            target_hp = target.hp(),
            "SimpleAi selected Attack"
        );
        Ok(Some(Action::attack(actor.id(), target.id())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactics_core::{Board, Character, CharacterId, PcgRandom, Position, StatBlock, Team};

    fn unit(id: u32, x: i32, hp: u32) -> Character {
        Character::new(
            CharacterId(id),
            format!("unit-{id}"),
            Side::Human,
            Position::new(x, 0),
            StatBlock::new(30, 5, 0, 2).with_hp(hp),
        )
    }

    fn choose(state: &BattleState, side: Side) -> Option<Action> {
        SimpleAiStrategy
            .choose_action(state, side, &mut PcgRandom::new(0))
            .unwrap()
    }

    #[test]
    fn first_alive_actor_hits_lowest_hp_target() {
        let human = Team::new("A", Side::Human)
            .with_member(unit(1, 0, 30))
            .with_member(unit(2, 1, 12))
            .with_member(unit(3, 2, 12));
        let ai = Team::new("B", Side::Ai)
            .with_member(unit(4, 5, 0))
            .with_member(unit(5, 6, 30));
        let state = BattleState::new(Board::new(8, 1), human, ai).unwrap();

        // Unit 4 starts defeated, so unit 5 acts.
        assert_eq!(
            choose(&state, Side::Ai),
            Some(Action::attack(CharacterId(5), CharacterId(2)))
        );
        assert_eq!(
            choose(&state, Side::Human),
            Some(Action::attack(CharacterId(1), CharacterId(5)))
        );
    }

    #[test]
    fn no_alive_actor_is_a_no_op() {
        let human = Team::new("A", Side::Human).with_member(unit(1, 0, 30));
        let ai = Team::new("B", Side::Ai).with_member(unit(2, 1, 0));
        let state = BattleState::new(Board::new(2, 1), human, ai).unwrap();

        assert_eq!(choose(&state, Side::Ai), None);
        assert_eq!(choose(&state, Side::Human), None);
    }
}
