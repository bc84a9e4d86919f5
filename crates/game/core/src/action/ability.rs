use crate::state::{Ability, AbilityEffect, BattleState, CharacterId};

use super::{
    ActionContext, ActionEffect, ActionError, ActionKind, ActionOutcome, ActionTransition,
    InvalidReason, living,
};

/// Use one of the actor's unlocked abilities on a target.
///
/// Strikes must target an opponent. Heals and fortifications must target the
/// actor or an ally.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityAction {
    pub actor: CharacterId,
    pub ability: String,
    pub target: CharacterId,
}

impl AbilityAction {
    pub fn new(actor: CharacterId, ability: impl Into<String>, target: CharacterId) -> Self {
        Self {
            actor,
            ability: ability.into(),
            target,
        }
    }

    fn effect(&self, state: &BattleState) -> Result<AbilityEffect, ActionError> {
        let actor = living(state, self.actor)?;
        actor
            .ability(&self.ability)
            .map(Ability::effect)
            .ok_or_else(|| {
                ActionError::invalid(InvalidReason::AbilityNotUnlocked {
                    ability: self.ability.clone(),
                })
            })
    }
}

impl ActionTransition for AbilityAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Ability
    }

    fn actor(&self) -> CharacterId {
        self.actor
    }

    fn pre_validate(
        &self,
        state: &BattleState,
        _ctx: &ActionContext<'_>,
    ) -> Result<(), ActionError> {
        let effect = self.effect(state)?;
        let actor = living(state, self.actor)?;
        let target = living(state, self.target)?;

        if effect.targets_opponent() {
            if actor.side() == target.side() {
                return Err(ActionError::invalid(InvalidReason::NotAnOpponent {
                    target: self.target,
                }));
            }
        } else if actor.side() != target.side() {
            return Err(ActionError::invalid(InvalidReason::NotAnAlly {
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
        let effect = match self.effect(state)? {
            AbilityEffect::Strike { power } => {
                let (actor, target) = state
                    .pair_mut(self.actor, self.target)
                    .ok_or(ActionError::CharacterNotFound {
                        character: self.target,
                    })?;
                ActionEffect::Damage(actor.strike(target, power, ctx)?)
            }
            AbilityEffect::Heal { amount } => {
                let target = state
                    .character_mut(self.target)
                    .ok_or(ActionError::CharacterNotFound {
                        character: self.target,
                    })?;
                let restored = target.heal(amount);
                ActionEffect::Healed {
                    amount: restored,
                    hp: target.hp(),
                }
            }
            AbilityEffect::Fortify { defense } => {
                let target = state
                    .character_mut(self.target)
                    .ok_or(ActionError::CharacterNotFound {
                        character: self.target,
                    })?;
                target.add_temporary_defense(defense);
                ActionEffect::Fortified {
                    bonus: defense,
                    effective_defense: target.stats().effective_defense(),
                }
            }
        };

        Ok(ActionOutcome {
            kind: ActionKind::Ability,
            actor: self.actor,
            target: Some(self.target),
            ability: Some(self.ability.clone()),
            effect,
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
        let mage = Character::new(
            CharacterId(1),
            "Mage",
            Side::Human,
            Position::new(0, 0),
            StatBlock::new(18, 12, 0, 3),
        )
        .with_abilities([
            Ability::new("Fireball", AbilityEffect::Strike { power: 6 }),
            Ability::new("Heal", AbilityEffect::Heal { amount: 8 }),
            Ability::new("ShieldWall", AbilityEffect::Fortify { defense: 4 }),
        ]);
        let knight = Character::new(
            CharacterId(2),
            "Knight",
            Side::Human,
            Position::new(1, 0),
            StatBlock::new(40, 7, 4, 2).with_hp(30),
        );
        let warrior = Character::new(
            CharacterId(3),
            "Warrior",
            Side::Ai,
            Position::new(3, 3),
            StatBlock::new(30, 10, 2, 3),
        );
        let human = Team::new("A", Side::Human)
            .with_member(mage)
            .with_member(knight);
        let ai = Team::new("B", Side::Ai).with_member(warrior);
        BattleState::new(Board::new(4, 4), human, ai).unwrap()
    }

    fn execute(state: &mut BattleState, action: Action) -> Result<ActionOutcome, ActionError> {
        let config = GameConfig::default();
        let mut rng = PcgRandom::new(0);
        let mut ctx = ActionContext::new(&config, &mut rng);
        action.execute(state, &mut ctx)
    }

    #[test]
    fn strike_adds_power_to_attack() {
        let mut state = state();
        let fireball = Action::ability(CharacterId(1), "Fireball", CharacterId(3));
        let outcome = execute(&mut state, fireball).unwrap();
        // (12 + 6) - 2 = 16
        assert_eq!(state.character(CharacterId(3)).unwrap().hp(), 14);
        assert_eq!(outcome.ability.as_deref(), Some("Fireball"));
    }

    #[test]
    fn heal_targets_allies_and_caps() {
        let mut state = state();
        let outcome =
            execute(&mut state, Action::ability(CharacterId(1), "Heal", CharacterId(2))).unwrap();
        assert_eq!(outcome.effect, ActionEffect::Healed { amount: 8, hp: 38 });

        let capped =
            execute(&mut state, Action::ability(CharacterId(1), "Heal", CharacterId(2))).unwrap();
        assert_eq!(capped.effect, ActionEffect::Healed { amount: 2, hp: 40 });
    }

    #[test]
    fn fortify_self_is_allowed() {
        let mut state = state();
        execute(&mut state, Action::ability(CharacterId(1), "ShieldWall", CharacterId(1))).unwrap();
        let mage = state.character(CharacterId(1)).unwrap();
        assert_eq!(mage.stats().effective_defense(), 4);
    }

    #[test]
    fn missing_ability_is_invalid() {
        let mut state = state();
        let err = execute(&mut state, Action::ability(CharacterId(2), "Fireball", CharacterId(3)))
            .unwrap_err();
        assert_eq!(
            err,
            ActionError::invalid(InvalidReason::AbilityNotUnlocked {
                ability: "Fireball".into()
            })
        );
    }

    #[test]
    fn targeting_rules_follow_effect() {
        let mut state = state();
        let heal_enemy = execute(
            &mut state,
            Action::ability(CharacterId(1), "Heal", CharacterId(3)),
        );
        assert!(matches!(
            heal_enemy,
            Err(ActionError::InvalidAction {
                reason: InvalidReason::NotAnAlly { .. }
            })
        ));

        let strike_ally =
            execute(&mut state, Action::ability(CharacterId(1), "Fireball", CharacterId(2)));
        assert!(matches!(
            strike_ally,
            Err(ActionError::InvalidAction {
                reason: InvalidReason::NotAnOpponent { .. }
            })
        ));
    }
}
