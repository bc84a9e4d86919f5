use std::cmp::Reverse;

use tactics_core::{Ability, AbilityEffect, Action, BattleState, Character, RandomProvider, Side};

use super::{AiStrategy, SimpleAiStrategy, hp_percent};
use crate::api::StrategyError;

/// Priority-based policy that makes use of abilities.
///
/// # Decision Process
///
/// 1. **Support**: an ally below `heal_below` percent hp is healed by the first
///    alive character that knows a Heal ability
/// 2. **Survival**: if the acting character is below `guard_below` percent hp
///    it fortifies itself (Fortify ability) or defends
/// 3. **Offense**: the acting character uses its strongest Strike ability on
///    the weakest enemy
/// 4. **Default**: the [`SimpleAiStrategy`] attack
///
/// The acting character is the first alive member, as in the simple policy.
#[derive(Debug, Clone, Copy)]
pub struct TacticalAiStrategy {
    heal_below: u32,
    guard_below: u32,
}

impl TacticalAiStrategy {
    pub const DEFAULT_HEAL_BELOW: u32 = 50;
    pub const DEFAULT_GUARD_BELOW: u32 = 25;

    pub fn new() -> Self {
        Self {
            heal_below: Self::DEFAULT_HEAL_BELOW,
            guard_below: Self::DEFAULT_GUARD_BELOW,
        }
    }

    #[must_use]
    pub fn with_thresholds(mut self, heal_below: u32, guard_below: u32) -> Self {
        self.heal_below = heal_below;
        self.guard_below = guard_below;
        self
    }

    fn support(&self, state: &BattleState, side: Side) -> Option<Action> {
        let team = state.team(side);
        let wounded = team
            .alive()
            .filter(|ally| hp_percent(ally) < self.heal_below)
            .min_by_key(|ally| hp_percent(ally))?;
        let (healer, heal) = team.alive().find_map(|member| {
            strongest(member, |effect| match effect {
                AbilityEffect::Heal { amount } => Some(amount),
                _ => None,
            })
            .map(|ability| (member, ability))
        })?;

        tracing::debug!(
            target: "tactics::ai",
            healer = %healer.id(),
            wounded = %wounded.id(),
            hp_percent = hp_percent(wounded),
            "TacticalAi: Support"
        );
        Some(Action::ability(healer.id(), heal.name(), wounded.id()))
    }

    fn survival(&self, actor: &Character) -> Option<Action> {
        if hp_percent(actor) >= self.guard_below {
            return None;
        }
        let fortify = strongest(actor, |effect| match effect {
            AbilityEffect::Fortify { defense } => Some(defense),
            _ => None,
        });

        tracing::debug!(
            target: "tactics::ai",
            actor = %actor.id(),
            hp_percent = hp_percent(actor),
            "TacticalAi: Survival"
        );
        Some(match fortify {
            Some(ability) => Action::ability(actor.id(), ability.name(), actor.id()),
            None => Action::defend(actor.id()),
        })
    }

    fn offense(&self, state: &BattleState, side: Side, actor: &Character) -> Option<Action> {
        let strike = strongest(actor, |effect| match effect {
            AbilityEffect::Strike { power } => Some(power),
            _ => None,
        })?;
        let target = state.team(side.opponent()).weakest_alive()?;

        tracing::debug!(
            target: "tactics::ai",
            actor = %actor.id(),
            target = %target.id(),
            ability = strike.name(),
            "TacticalAi: Offense"
        );
        Some(Action::ability(actor.id(), strike.name(), target.id()))
    }
}

impl Default for TacticalAiStrategy {
    fn default() -> Self {
        Self::new()
    }
}

/// Ability with the highest magnitude among those `magnitude` accepts.
/// Ties go to the ability listed first.
fn strongest(
    character: &Character,
    magnitude: impl Fn(AbilityEffect) -> Option<u32>,
) -> Option<&Ability> {
    character
        .abilities()
        .iter()
        .filter_map(|ability| magnitude(ability.effect()).map(|value| (value, ability)))
        .min_by_key(|(value, _)| Reverse(*value))
        .map(|(_, ability)| ability)
}

impl AiStrategy for TacticalAiStrategy {
    fn name(&self) -> &'static str {
        "tactical"
    }

    fn choose_action(
        &mut self,
        state: &BattleState,
        side: Side,
        rng: &mut dyn RandomProvider,
    ) -> Result<Option<Action>, StrategyError> {
        if state.team(side.opponent()).is_defeated() {
            return Ok(None);
        }
        let Some(actor) = state.team(side).first_alive() else {
            return Ok(None);
        };

        // ====================================================================
        // Priority 1-3: Support, Survival, Offense
        // ====================================================================
        let planned = self
            .support(state, side)
            .or_else(|| self.survival(actor))
            .or_else(|| self.offense(state, side, actor));
        if planned.is_some() {
            return Ok(planned);
        }

        // ====================================================================
        // Default: plain attack
        // ====================================================================
        SimpleAiStrategy.choose_action(state, side, rng)
    }
}
