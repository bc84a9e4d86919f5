use crate::state::Board;

/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Temporary defense granted by the Defend action until the actor's next turn.
    pub defend_bonus: u32,

    /// Random scatter applied to raw attack damage.
    pub damage_variance: DamageVariance,

    /// Number of full rounds after which the engine stops with a stall error.
    /// `None` disables the guard.
    pub max_rounds: Option<u32>,

    /// Board used when a level does not specify its own dimensions.
    pub board: Board,
}

impl GameConfig {
    pub const DEFAULT_DEFEND_BONUS: u32 = 5;
    pub const DEFAULT_MAX_ROUNDS: u32 = 500;
    pub const DEFAULT_BOARD_SIZE: u32 = 8;

    pub fn new() -> Self {
        Self {
            defend_bonus: Self::DEFAULT_DEFEND_BONUS,
            damage_variance: DamageVariance::None,
            max_rounds: Some(Self::DEFAULT_MAX_ROUNDS),
            board: Board::new(Self::DEFAULT_BOARD_SIZE, Self::DEFAULT_BOARD_SIZE),
        }
    }

    #[must_use]
    pub fn with_damage_variance(mut self, variance: DamageVariance) -> Self {
        self.damage_variance = variance;
        self
    }

    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: Option<u32>) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// How much randomness an attack roll carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageVariance {
    /// Raw damage equals the attack stat. No random draw is consumed.
    #[default]
    None,

    /// Raw damage is scaled by a uniform roll in `[100 - percent, 100 + percent]`
    /// percent (floored). Exactly one draw is consumed per roll. Percent is capped at 100.
    Scatter { percent: u32 },
}
