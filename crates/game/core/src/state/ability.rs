/// A named special action a character can perform.
///
/// Abilities are shared value definitions: characters hold copies and never
/// mutate them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ability {
    name: String,
    effect: AbilityEffect,
}

impl Ability {
    pub fn new(name: impl Into<String>, effect: AbilityEffect) -> Self {
        Self {
            name: name.into(),
            effect,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn effect(&self) -> AbilityEffect {
        self.effect
    }
}

/// What an ability does to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityEffect {
    /// Attack with `actor.attack + power` raw damage. Targets an opponent.
    Strike { power: u32 },

    /// Restore hp. Targets the actor or an ally.
    Heal { amount: u32 },

    /// Grant temporary defense until the target's next turn. Targets the actor or an ally.
    Fortify { defense: u32 },
}

impl AbilityEffect {
    /// Returns true if the effect must be aimed at the opposing team.
    pub const fn targets_opponent(&self) -> bool {
        matches!(self, Self::Strike { .. })
    }
}
