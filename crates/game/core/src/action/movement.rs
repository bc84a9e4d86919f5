use crate::state::{BattleState, CharacterId, Position};

use super::{
    ActionContext, ActionEffect, ActionError, ActionKind, ActionOutcome, ActionTransition,
    InvalidReason, living,
};

/// Relocate a character to another tile.
///
/// The destination must be on the board, free of alive characters, and within
/// the actor's reach: Manhattan distance in `1..=max(1, speed)`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub actor: CharacterId,
    pub destination: Position,
}

impl MoveAction {
    pub fn new(actor: CharacterId, destination: Position) -> Self {
        Self { actor, destination }
    }
}

impl ActionTransition for MoveAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Move
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

        if !state.board().contains(self.destination) {
            return Err(ActionError::invalid(InvalidReason::OutOfBounds {
                position: self.destination,
            }));
        }

        let distance = actor.position().manhattan_distance(self.destination);
        let limit = actor.stats().speed().max(1);
        if distance == 0 || distance > limit {
            return Err(ActionError::invalid(InvalidReason::OutOfReach {
                position: self.destination,
                distance,
                limit,
            }));
        }

        if state.is_occupied(self.destination) {
            return Err(ActionError::invalid(InvalidReason::Occupied {
                position: self.destination,
            }));
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut BattleState,
        _ctx: &mut ActionContext<'_>,
    ) -> Result<ActionOutcome, ActionError> {
        let actor = state
            .character_mut(self.actor)
            .ok_or(ActionError::CharacterNotFound {
                character: self.actor,
            })?;
        let from = actor.position();
        actor.relocate(self.destination);

        Ok(ActionOutcome {
            kind: ActionKind::Move,
            actor: self.actor,
            target: None,
            ability: None,
            effect: ActionEffect::Moved {
                from,
                to: self.destination,
            },
        })
    }

    fn post_validate(&self, state: &BattleState) -> Result<(), ActionError> {
        let stacked = state
            .occupant(self.destination)
            .is_some_and(|occupant| occupant.id() != self.actor);
        if stacked {
            return Err(ActionError::invalid(InvalidReason::Occupied {
                position: self.destination,
            }));
        }
        Ok(())
    }
}
