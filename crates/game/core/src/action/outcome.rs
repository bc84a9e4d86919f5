use crate::state::{CharacterId, DamageReport, Position};

use super::ActionKind;

/// What a successfully executed action did.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOutcome {
    pub kind: ActionKind,
    pub actor: CharacterId,
    pub target: Option<CharacterId>,
    /// Ability name for `ActionKind::Ability`.
    pub ability: Option<String>,
    pub effect: ActionEffect,
}

/// State change produced by an action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionEffect {
    Damage(DamageReport),
    Healed { amount: u32, hp: u32 },
    Fortified { bonus: u32, effective_defense: u32 },
    Moved { from: Position, to: Position },
}

impl ActionOutcome {
    /// True if the action defeated its target.
    pub fn defeated_target(&self) -> bool {
        matches!(self.effect, ActionEffect::Damage(report) if report.defeated)
    }
}
