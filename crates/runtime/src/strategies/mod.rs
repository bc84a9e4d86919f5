//! Pluggable AI strategies.
//!
//! The engine only knows the [`AiStrategy`] capability; concrete policies
//! live in submodules:
//!
//! - [`SimpleAiStrategy`]: first alive actor attacks the weakest enemy
//! - [`TacticalAiStrategy`]: heals, fortifies and uses abilities before falling
//!   back to the simple policy

mod simple;
mod tactical;

pub use simple::SimpleAiStrategy;
pub use tactical::TacticalAiStrategy;

use tactics_core::{Action, BattleState, Character, RandomProvider, Side};

use crate::api::StrategyError;

/// Chooses an action for every character of one side.
pub trait AiStrategy {
    /// Short identifier used in logs ("simple", "tactical").
    fn name(&self) -> &'static str;

    /// Picks the action for `side`'s turn.
    ///
    /// Returns `Ok(None)` when the side has nothing to do (no alive actor or
    /// no alive opponent); the engine then treats the turn as a no-op. A
    /// returned action must never name a defeated actor or target.
    fn choose_action(
        &mut self,
        state: &BattleState,
        side: Side,
        rng: &mut dyn RandomProvider,
    ) -> Result<Option<Action>, StrategyError>;
}

impl<S: AiStrategy + ?Sized> AiStrategy for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn choose_action(
        &mut self,
        state: &BattleState,
        side: Side,
        rng: &mut dyn RandomProvider,
    ) -> Result<Option<Action>, StrategyError> {
        (**self).choose_action(state, side, rng)
    }
}

/// Current hp as a percentage of max hp (0-100).
pub(crate) fn hp_percent(character: &Character) -> u32 {
    let stats = character.stats();
    if stats.max_hp() == 0 {
        return 0;
    }
    let percent = u64::from(stats.hp()) * 100 / u64::from(stats.max_hp());
    percent as u32
}
