use crate::state::{BattleState, CharacterId};

use super::{
    ActionContext, ActionEffect, ActionError, ActionKind, ActionOutcome, ActionTransition, living,
};

/// Brace for incoming attacks, raising defense until the actor's next turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefendAction {
    pub actor: CharacterId,
}

impl DefendAction {
    pub fn new(actor: CharacterId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for DefendAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Defend
    }

    fn actor(&self) -> CharacterId {
        self.actor
    }

    fn pre_validate(
        &self,
        state: &BattleState,
        _ctx: &ActionContext<'_>,
    ) -> Result<(), ActionError> {
        living(state, self.actor).map(|_| ())
    }

    fn apply(
        &self,
        state: &mut BattleState,
        ctx: &mut ActionContext<'_>,
    ) -> Result<ActionOutcome, ActionError> {
        let actor = state
            .character_mut(self.actor)
            .ok_or(ActionError::CharacterNotFound {
                character: self.actor,
            })?;
        let bonus = ctx.config.defend_bonus;
        actor.add_temporary_defense(bonus);

        Ok(ActionOutcome {
            kind: ActionKind::Defend,
            actor: self.actor,
            target: None,
            ability: None,
            effect: ActionEffect::Fortified {
                bonus,
                effective_defense: actor.stats().effective_defense(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::config::GameConfig;
    use crate::rng::PcgRandom;
    use crate::state::{Board, Character, Position, Side, StatBlock, Team};

    fn state() -> BattleState {
        let human = Team::new("A", Side::Human).with_member(Character::new(
            CharacterId(1),
            "Knight",
            Side::Human,
            Position::new(0, 0),
            StatBlock::new(40, 7, 4, 2),
        ));
        let ai = Team::new("B", Side::Ai).with_member(Character::new(
            CharacterId(2),
            "Warrior",
            Side::Ai,
            Position::new(1, 0),
            StatBlock::new(30, 10, 2, 3),
        ));
        BattleState::new(Board::new(4, 4), human, ai).unwrap()
    }

    #[test]
    fn defend_adds_exactly_the_configured_bonus() {
        let mut state = state();
        let config = GameConfig::default();
        let mut rng = PcgRandom::new(0);
        let mut ctx = ActionContext::new(&config, &mut rng);

        let outcome = Action::defend(CharacterId(1))
            .execute(&mut state, &mut ctx)
            .unwrap();
        assert_eq!(
            outcome.effect,
            ActionEffect::Fortified {
                bonus: 5,
                effective_defense: 9
            }
        );

        // The bonus absorbs damage for the rest of the round.
        Action::attack(CharacterId(2), CharacterId(1))
            .execute(&mut state, &mut ctx)
            .unwrap();
        assert_eq!(state.character(CharacterId(1)).unwrap().hp(), 39);

        state.reset_turn_modifiers(Side::Human);
        let knight = state.character(CharacterId(1)).unwrap();
        assert_eq!(knight.stats().temp_defense_bonus(), 0);
        assert_eq!(knight.stats().effective_defense(), 4);
    }

    #[test]
    fn defeated_character_cannot_defend() {
        let mut state = state();
        state.character_mut(CharacterId(1)).unwrap().apply_damage(1000);
        let config = GameConfig::default();
        let mut rng = PcgRandom::new(0);
        let mut ctx = ActionContext::new(&config, &mut rng);

        let err = Action::defend(CharacterId(1))
            .execute(&mut state, &mut ctx)
            .unwrap_err();
        assert!(matches!(err, ActionError::DeadCharacter { .. }));
    }
}
