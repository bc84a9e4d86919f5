//! Ability catalog.
//!
//! Abilities are shared value definitions: the catalog hands out fresh copies
//! and characters never mutate them.

use tactics_core::{Ability, AbilityEffect, SetupError};

/// Every ability the catalog knows about.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
pub enum AbilityName {
    PowerStrike,
    Fireball,
    AimedShot,
    Heal,
    ShieldWall,
    Rally,
}

impl AbilityName {
    pub fn effect(self) -> AbilityEffect {
        match self {
            Self::PowerStrike => AbilityEffect::Strike { power: 4 },
            Self::Fireball => AbilityEffect::Strike { power: 6 },
            Self::AimedShot => AbilityEffect::Strike { power: 3 },
            Self::Heal => AbilityEffect::Heal { amount: 8 },
            Self::ShieldWall => AbilityEffect::Fortify { defense: 4 },
            Self::Rally => AbilityEffect::Fortify { defense: 2 },
        }
    }

    pub fn to_ability(self) -> Ability {
        let name: &'static str = self.into();
        Ability::new(name, self.effect())
    }
}

/// Resolves ability names to definitions.
pub struct AbilityCatalog;

impl AbilityCatalog {
    /// Looks up an ability by its exact, case-sensitive name.
    pub fn resolve(name: &str) -> Result<Ability, SetupError> {
        name.parse::<AbilityName>()
            .map(AbilityName::to_ability)
            .map_err(|_| SetupError::UnknownAbility(name.to_string()))
    }

    /// Resolves every name, failing on the first unknown one.
    pub fn resolve_all<'a>(
        names: impl IntoIterator<Item = &'a str>,
    ) -> Result<Vec<Ability>, SetupError> {
        names.into_iter().map(Self::resolve).collect()
    }
}
