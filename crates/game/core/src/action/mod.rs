//! Character actions.
//!
//! Every action is a small command value (`AttackAction`, `DefendAction`, ...)
//! implementing [`ActionTransition`]. The closed [`Action`] enum dispatches by
//! matching on the variant and always runs the same pipeline:
//!
//! ```text
//! pre_validate (read-only) → apply (mutates state) → post_validate (read-only)
//! ```
//!
//! Failures are returned as [`ActionError`] values. An action that fails in
//! `pre_validate` leaves the state and the random stream untouched.

mod ability;
mod attack;
mod defend;
mod error;
mod kind;
mod movement;
mod outcome;

pub use ability::AbilityAction;
pub use attack::AttackAction;
pub use defend::DefendAction;
pub use error::{ActionError, InvalidReason};
pub use kind::ActionKind;
pub use movement::MoveAction;
pub use outcome::{ActionEffect, ActionOutcome};

use crate::config::GameConfig;
use crate::rng::RandomProvider;
use crate::state::{BattleState, Character, CharacterId, Position};

/// Read-only configuration plus the random source an action may draw from.
pub struct ActionContext<'a> {
    pub config: &'a GameConfig,
    pub rng: &'a mut dyn RandomProvider,
}

impl<'a> ActionContext<'a> {
    pub fn new(config: &'a GameConfig, rng: &'a mut dyn RandomProvider) -> Self {
        Self { config, rng }
    }
}

/// Defines how a concrete action variant mutates battle state.
pub trait ActionTransition {
    fn kind(&self) -> ActionKind;

    /// Returns the character performing this action.
    fn actor(&self) -> CharacterId;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(
        &self,
        _state: &BattleState,
        _ctx: &ActionContext<'_>,
    ) -> Result<(), ActionError> {
        Ok(())
    }

    /// Applies the action by mutating the state directly. Implementations may
    /// assume that `pre_validate` has already run successfully.
    fn apply(
        &self,
        state: &mut BattleState,
        ctx: &mut ActionContext<'_>,
    ) -> Result<ActionOutcome, ActionError>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &BattleState) -> Result<(), ActionError> {
        Ok(())
    }
}

/// Closed set of character actions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Attack(AttackAction),
    Defend(DefendAction),
    Ability(AbilityAction),
    Move(MoveAction),
}

impl Action {
    pub fn attack(actor: CharacterId, target: CharacterId) -> Self {
        Self::Attack(AttackAction::new(actor, target))
    }

    pub fn defend(actor: CharacterId) -> Self {
        Self::Defend(DefendAction::new(actor))
    }

    pub fn ability(actor: CharacterId, ability: impl Into<String>, target: CharacterId) -> Self {
        Self::Ability(AbilityAction::new(actor, ability, target))
    }

    pub fn move_to(actor: CharacterId, destination: Position) -> Self {
        Self::Move(MoveAction::new(actor, destination))
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Attack(action) => action.kind(),
            Action::Defend(action) => action.kind(),
            Action::Ability(action) => action.kind(),
            Action::Move(action) => action.kind(),
        }
    }

    /// Short display name ("Attack", "Defend", ...).
    pub fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    pub fn actor(&self) -> CharacterId {
        match self {
            Action::Attack(action) => action.actor(),
            Action::Defend(action) => action.actor(),
            Action::Ability(action) => action.actor(),
            Action::Move(action) => action.actor(),
        }
    }

    /// Character the action is aimed at, if any.
    pub fn target(&self) -> Option<CharacterId> {
        match self {
            Action::Attack(action) => Some(action.target),
            Action::Ability(action) => Some(action.target),
            Action::Defend(_) | Action::Move(_) => None,
        }
    }

    /// Runs the action through the transition pipeline.
    ///
    /// Given the same state, configuration and random-provider state, the
    /// result is always identical.
    pub fn execute(
        &self,
        state: &mut BattleState,
        ctx: &mut ActionContext<'_>,
    ) -> Result<ActionOutcome, ActionError> {
        match self {
            Action::Attack(action) => run_transition(action, state, ctx),
            Action::Defend(action) => run_transition(action, state, ctx),
            Action::Ability(action) => run_transition(action, state, ctx),
            Action::Move(action) => run_transition(action, state, ctx),
        }
    }
}

fn run_transition<T: ActionTransition>(
    action: &T,
    state: &mut BattleState,
    ctx: &mut ActionContext<'_>,
) -> Result<ActionOutcome, ActionError> {
    action.pre_validate(state, ctx)?;
    let outcome = action.apply(state, ctx)?;
    action.post_validate(state)?;
    Ok(outcome)
}

/// Looks up a character that must exist and be alive.
pub(crate) fn living(state: &BattleState, id: CharacterId) -> Result<&Character, ActionError> {
    let character = state
        .character(id)
        .ok_or(ActionError::CharacterNotFound { character: id })?;
    character.ensure_alive()?;
    Ok(character)
}
