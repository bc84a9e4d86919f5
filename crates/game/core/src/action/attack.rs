use crate::state::{BattleState, CharacterId};

use super::{
    ActionContext, ActionEffect, ActionError, ActionKind, ActionOutcome, ActionTransition,
    InvalidReason, living,
};

/// Basic attack against an opposing character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackAction {
    pub actor: CharacterId,
    pub target: CharacterId,
}

impl AttackAction {
    pub fn new(actor: CharacterId, target: CharacterId) -> Self {
        Self { actor, target }
    }
}

impl ActionTransition for AttackAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Attack
    }

    fn actor(&self) -> CharacterId {
        self.actor
    }

    fn pre_validate(
        &self,
        state: &BattleState,
        _ctx: &ActionContext<'_>,
    ) -> Result<(), ActionError> {
        let actor = living(state, self.actor)?;
        let target = living(state, self.target)?;
        if actor.side() == target.side() {
            return Err(ActionError::invalid(InvalidReason::NotAnOpponent {
                target: self.target,
            }));
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut BattleState,
        ctx: &mut ActionContext<'_>,
    ) -> Result<ActionOutcome, ActionError> {
        let (actor, target) = state
            .pair_mut(self.actor, self.target)
            .ok_or(ActionError::CharacterNotFound {
                character: self.target,
            })?;
        let report = actor.attack(target, ctx)?;

        Ok(ActionOutcome {
            kind: ActionKind::Attack,
            actor: self.actor,
            target: Some(self.target),
            ability: None,
            effect: ActionEffect::Damage(report),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::config::{DamageVariance, GameConfig};
    use crate::rng::PcgRandom;
    use crate::state::{Board, Character, Position, Side, StatBlock, Team};

    fn duel() -> BattleState {
        let human = Team::new("A", Side::Human).with_member(
            Character::new(
                CharacterId(1),
                "Warrior",
                Side::Human,
                Position::new(0, 0),
                StatBlock::new(30, 10, 2, 3),
            )
            .with_kind("Warrior"),
        );
        let ai = Team::new("B", Side::Ai).with_member(
            Character::new(
                CharacterId(2),
                "Archer",
                Side::Ai,
                Position::new(5, 0),
                StatBlock::new(20, 8, 1, 4),
            )
            .with_kind("Archer"),
        );
        BattleState::new(Board::new(8, 8), human, ai).unwrap()
    }

    #[test]
    fn reference_exchange() {
        let mut state = duel();
        let config = GameConfig::default();
        let mut rng = PcgRandom::new(0);
        let mut ctx = ActionContext::new(&config, &mut rng);

        Action::attack(CharacterId(1), CharacterId(2))
            .execute(&mut state, &mut ctx)
            .unwrap();
        assert_eq!(state.character(CharacterId(2)).unwrap().hp(), 11);

        Action::attack(CharacterId(2), CharacterId(1))
            .execute(&mut state, &mut ctx)
            .unwrap();
        assert_eq!(state.character(CharacterId(1)).unwrap().hp(), 24);

        let second = Action::attack(CharacterId(1), CharacterId(2))
            .execute(&mut state, &mut ctx)
            .unwrap();
        assert!(!second.defeated_target());
        assert_eq!(state.character(CharacterId(2)).unwrap().hp(), 2);

        let third = Action::attack(CharacterId(1), CharacterId(2))
            .execute(&mut state, &mut ctx)
            .unwrap();
        assert!(third.defeated_target());
        assert!(!state.character(CharacterId(2)).unwrap().is_alive());
    }

    #[test]
    fn attacking_a_defeated_target_changes_nothing() {
        let mut state = duel();
        let config = GameConfig::default();
        let mut rng = PcgRandom::new(0);
        let mut ctx = ActionContext::new(&config, &mut rng);

        for _ in 0..3 {
            Action::attack(CharacterId(1), CharacterId(2))
                .execute(&mut state, &mut ctx)
                .unwrap();
        }
        let before = state.clone();

        let err = Action::attack(CharacterId(1), CharacterId(2))
            .execute(&mut state, &mut ctx)
            .unwrap_err();
        assert_eq!(
            err,
            ActionError::DeadCharacter {
                character: CharacterId(2)
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn defeated_attacker_cannot_act() {
        let mut state = duel();
        state.character_mut(CharacterId(1)).unwrap().apply_damage(1000);
        let config = GameConfig::default();
        let mut rng = PcgRandom::new(0);
        let mut ctx = ActionContext::new(&config, &mut rng);

        let err = Action::attack(CharacterId(1), CharacterId(2))
            .execute(&mut state, &mut ctx)
            .unwrap_err();
        assert!(matches!(err, ActionError::DeadCharacter { .. }));
        assert_eq!(state.character(CharacterId(2)).unwrap().hp(), 20);
    }

    #[test]
    fn self_attack_is_invalid() {
        let mut state = duel();
        let config = GameConfig::default();
        let mut rng = PcgRandom::new(0);
        let mut ctx = ActionContext::new(&config, &mut rng);

        let err = Action::attack(CharacterId(1), CharacterId(1))
            .execute(&mut state, &mut ctx)
            .unwrap_err();
        assert!(matches!(err, ActionError::InvalidAction { .. }));
    }

    #[test]
    fn unknown_target_is_reported() {
        let mut state = duel();
        let config = GameConfig::default();
        let mut rng = PcgRandom::new(0);
        let mut ctx = ActionContext::new(&config, &mut rng);

        let err = Action::attack(CharacterId(1), CharacterId(99))
            .execute(&mut state, &mut ctx)
            .unwrap_err();
        assert_eq!(
            err,
            ActionError::CharacterNotFound {
                character: CharacterId(99)
            }
        );
    }

    #[test]
    fn identical_rng_state_gives_identical_results() {
        let config =
            GameConfig::default().with_damage_variance(DamageVariance::Scatter { percent: 40 });

        let run = |seed| {
            let mut state = duel();
            let mut rng = PcgRandom::new(seed);
            let mut ctx = ActionContext::new(&config, &mut rng);
            Action::attack(CharacterId(1), CharacterId(2))
                .execute(&mut state, &mut ctx)
                .unwrap()
        };

        assert_eq!(run(77), run(77));
    }
}
