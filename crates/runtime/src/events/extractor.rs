//! Event extraction from state changes.
//!
//! Converts the difference between the alive rosters before and after an
//! action into [`CharacterKilled`] events.

use tactics_core::{BattleState, CharacterId};

use super::types::CharacterKilled;

/// Extract kill events for an action performed by `killer`.
///
/// `alive_before` is [`BattleState::alive_ids`] captured before the action.
/// Events follow that order (human team first, then team order).
pub fn extract_kills(
    alive_before: &[CharacterId],
    after: &BattleState,
    killer: CharacterId,
) -> Vec<CharacterKilled> {
    let killer_name = after
        .character(killer)
        .map(|character| character.name().to_string())
        .unwrap_or_default();

    alive_before
        .iter()
        .filter_map(|&id| after.character(id))
        .filter(|character| !character.is_alive())
        .map(|victim| {
            tracing::debug!(
                target: "tactics::events",
                victim = %victim.id(),
                killer = %killer,
                "CharacterKilled event generated"
            );
            CharacterKilled {
                victim: victim.id(),
                victim_name: victim.name().to_string(),
                killer,
                killer_name: killer_name.clone(),
            }
        })
        .collect()
}
