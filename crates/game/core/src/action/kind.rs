//! Action kind enumeration - all possible action types.

/// Types of actions a character can perform on its turn.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    /// Basic attack against an opponent.
    Attack,

    /// Raise defense until the actor's next turn.
    Defend,

    /// Use an unlocked ability.
    Ability,

    /// Relocate on the board.
    Move,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
