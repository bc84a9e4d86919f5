//! Human-driven turns.
//!
//! The engine never reads input itself. A [`HumanInput`] collaborator is
//! handed the alive rosters and answers with a [`HumanChoice`] made of roster
//! indices; [`HumanController`] turns that choice into an [`Action`].

use std::collections::VecDeque;

use tactics_core::{AbilityEffect, Action, BattleState, Character, Position, Side};

use crate::api::StrategyError;

/// Alive characters of both sides at the start of a human turn.
#[derive(Debug, Clone)]
pub struct Rosters<'a> {
    pub allies: Vec<&'a Character>,
    pub enemies: Vec<&'a Character>,
    /// Completed rounds so far.
    pub round: u32,
}

impl<'a> Rosters<'a> {
    pub fn new(state: &'a BattleState, side: Side) -> Self {
        Self {
            allies: state.team(side).alive().collect(),
            enemies: state.team(side.opponent()).alive().collect(),
            round: state.round(),
        }
    }
}

/// Decision returned by the input collaborator.
///
/// Character references are indices into [`Rosters::allies`] and
/// [`Rosters::enemies`]. An ability target indexes the enemy roster for
/// damaging abilities and the ally roster otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HumanChoice {
    Attack { attacker: usize, target: usize },
    Defend { actor: usize },
    Ability { actor: usize, ability: String, target: usize },
    Move { actor: usize, x: i32, y: i32 },
    Pass,
}

/// Source of human decisions (terminal, UI, script).
pub trait HumanInput {
    fn choose(&mut self, rosters: &Rosters<'_>) -> Result<HumanChoice, StrategyError>;
}

impl<I: HumanInput + ?Sized> HumanInput for Box<I> {
    fn choose(&mut self, rosters: &Rosters<'_>) -> Result<HumanChoice, StrategyError> {
        (**self).choose(rosters)
    }
}

/// Replays a fixed queue of choices, then passes.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    choices: VecDeque<HumanChoice>,
}

impl ScriptedInput {
    pub fn new(choices: impl IntoIterator<Item = HumanChoice>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.choices.len()
    }
}

impl HumanInput for ScriptedInput {
    fn choose(&mut self, _rosters: &Rosters<'_>) -> Result<HumanChoice, StrategyError> {
        Ok(self.choices.pop_front().unwrap_or(HumanChoice::Pass))
    }
}

/// Resolves roster indices from a [`HumanInput`] into actions.
pub struct HumanController {
    input: Box<dyn HumanInput>,
}

impl HumanController {
    pub fn new(input: impl HumanInput + 'static) -> Self {
        Self {
            input: Box::new(input),
        }
    }

    /// Asks the input collaborator for `side`'s action.
    ///
    /// Returns `Ok(None)` without prompting when either roster is empty, and
    /// when the input passes.
    pub fn decide(
        &mut self,
        state: &BattleState,
        side: Side,
    ) -> Result<Option<Action>, StrategyError> {
        let rosters = Rosters::new(state, side);
        if rosters.allies.is_empty() || rosters.enemies.is_empty() {
            return Ok(None);
        }

        let choice = self.input.choose(&rosters)?;
        tracing::debug!(
            target: "tactics::input",
            side = %side,
            choice = ?choice,
            "Human choice received"
        );
        resolve(&rosters, choice)
    }
}

fn resolve(rosters: &Rosters<'_>, choice: HumanChoice) -> Result<Option<Action>, StrategyError> {
    let action = match choice {
        HumanChoice::Attack { attacker, target } => Action::attack(
            pick(&rosters.allies, attacker, "attacker")?.id(),
            pick(&rosters.enemies, target, "target")?.id(),
        ),
        HumanChoice::Defend { actor } => {
            Action::defend(pick(&rosters.allies, actor, "actor")?.id())
        }
        HumanChoice::Ability {
            actor,
            ability,
            target,
        } => {
            let caster = pick(&rosters.allies, actor, "actor")?;
            let known = caster.ability(&ability).ok_or_else(|| {
                StrategyError::invalid_selection(format!(
                    "{} does not know ability '{ability}'",
                    caster.name()
                ))
            })?;
            let roster = match known.effect() {
                AbilityEffect::Strike { .. } => &rosters.enemies,
                AbilityEffect::Heal { .. } | AbilityEffect::Fortify { .. } => &rosters.allies,
            };
            let target = pick(roster, target, "target")?.id();
            Action::ability(caster.id(), ability, target)
        }
        HumanChoice::Move { actor, x, y } => Action::move_to(
            pick(&rosters.allies, actor, "actor")?.id(),
            Position::new(x, y),
        ),
        HumanChoice::Pass => return Ok(None),
    };
    Ok(Some(action))
}

fn pick<'a>(
    roster: &[&'a Character],
    index: usize,
    role: &str,
) -> Result<&'a Character, StrategyError> {
    roster.get(index).copied().ok_or_else(|| {
        StrategyError::invalid_selection(format!(
            "{role} index {index} is out of range (0..{})",
            roster.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactics_core::{Ability, Board, CharacterId, StatBlock, Team};

    fn unit(id: u32, x: i32, hp: u32) -> Character {
        Character::new(
            CharacterId(id),
            format!("unit-{id}"),
            Side::Human,
            Position::new(x, 0),
            StatBlock::new(20, 5, 1, 2).with_hp(hp),
        )
    }

    fn state() -> BattleState {
        let human = Team::new("A", Side::Human)
            .with_member(unit(1, 0, 0))
            .with_member(unit(2, 1, 20).with_abilities([
                Ability::new("Heal", AbilityEffect::Heal { amount: 8 }),
                Ability::new("Fireball", AbilityEffect::Strike { power: 6 }),
            ]))
            .with_member(unit(3, 2, 20));
        let ai = Team::new("B", Side::Ai)
            .with_member(unit(4, 6, 20))
            .with_member(unit(5, 7, 20));
        BattleState::new(Board::new(8, 2), human, ai).unwrap()
    }

    fn decide(choice: HumanChoice) -> Result<Option<Action>, StrategyError> {
        HumanController::new(ScriptedInput::new([choice])).decide(&state(), Side::Human)
    }

    #[test]
    fn indices_refer_to_alive_rosters() {
        // unit 1 is defeated, so ally 0 is unit 2.
        assert_eq!(
            decide(HumanChoice::Attack {
                attacker: 0,
                target: 1
            }),
            Ok(Some(Action::attack(CharacterId(2), CharacterId(5))))
        );
        assert_eq!(
            decide(HumanChoice::Move {
                actor: 1,
                x: 2,
                y: 1
            }),
            Ok(Some(Action::move_to(CharacterId(3), Position::new(2, 1))))
        );
    }

    #[test]
    fn ability_targets_follow_the_effect() {
        assert_eq!(
            decide(HumanChoice::Ability {
                actor: 0,
                ability: "Heal".into(),
                target: 1
            }),
            Ok(Some(Action::ability(CharacterId(2), "Heal", CharacterId(3))))
        );
        assert_eq!(
            decide(HumanChoice::Ability {
                actor: 0,
                ability: "Fireball".into(),
                target: 0
            }),
            Ok(Some(Action::ability(
                CharacterId(2),
                "Fireball",
                CharacterId(4)
            )))
        );
    }

    #[test]
    fn bad_selections_are_reported() {
        let out_of_range = decide(HumanChoice::Attack {
            attacker: 0,
            target: 2,
        });
        assert!(matches!(
            out_of_range,
            Err(StrategyError::InvalidSelection { .. })
        ));

        let unknown = decide(HumanChoice::Ability {
            actor: 1,
            ability: "Heal".into(),
            target: 0,
        });
        assert!(matches!(unknown, Err(StrategyError::InvalidSelection { .. })));
    }

    #[test]
    fn exhausted_script_passes() {
        let mut controller = HumanController::new(ScriptedInput::default());
        assert_eq!(controller.decide(&state(), Side::Human), Ok(None));
    }
}
