//! Character factory.
//!
//! Maps a type name such as `"Warrior"` to a fully built [`Character`] with
//! default stats and abilities. One factory should build both teams of a
//! battle so that ids stay unique.

use std::collections::HashMap;

use tactics_core::{Ability, Character, CharacterId, Position, SetupError, Side, StatBlock};

use crate::abilities::{AbilityCatalog, AbilityName};
use crate::specs::UnitSpec;

/// Character types the factory can build. Names are case-sensitive.
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
pub enum CharacterType {
    Warrior,
    Archer,
    Mage,
    Knight,
    Ranger,
    Master,
}

/// Default stats and abilities for one character type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharacterTemplate {
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub abilities: &'static [AbilityName],
}

impl CharacterTemplate {
    pub fn stats(&self) -> StatBlock {
        StatBlock::new(self.max_hp, self.attack, self.defense, self.speed)
    }
}

impl CharacterType {
    pub const fn template(self) -> CharacterTemplate {
        use AbilityName::*;
        match self {
            Self::Warrior => CharacterTemplate {
                max_hp: 30,
                attack: 10,
                defense: 2,
                speed: 3,
                abilities: &[PowerStrike],
            },
            Self::Archer => CharacterTemplate {
                max_hp: 20,
                attack: 8,
                defense: 1,
                speed: 4,
                abilities: &[AimedShot],
            },
            Self::Mage => CharacterTemplate {
                max_hp: 18,
                attack: 12,
                defense: 0,
                speed: 3,
                abilities: &[Fireball, Heal],
            },
            Self::Knight => CharacterTemplate {
                max_hp: 40,
                attack: 7,
                defense: 4,
                speed: 2,
                abilities: &[ShieldWall],
            },
            Self::Ranger => CharacterTemplate {
                max_hp: 24,
                attack: 9,
                defense: 1,
                speed: 5,
                abilities: &[AimedShot],
            },
            Self::Master => CharacterTemplate {
                max_hp: 35,
                attack: 11,
                defense: 3,
                speed: 4,
                abilities: &[PowerStrike, Heal, Rally],
            },
        }
    }
}

/// Builds characters with sequential, battle-unique ids.
#[derive(Debug)]
pub struct CharacterFactory {
    next_id: u32,
    per_type: HashMap<CharacterType, u32>,
}

impl CharacterFactory {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Factory whose first character receives `first_id`.
    pub fn starting_at(first_id: u32) -> Self {
        Self {
            next_id: first_id,
            per_type: HashMap::new(),
        }
    }

    /// Builds a character of `type_name`.
    ///
    /// Without an explicit `name` the character is called `"<Type> <n>"`,
    /// where `n` counts characters of that type built by this factory.
    ///
    /// # Errors
    ///
    /// `UnknownCharacterType` if `type_name` names no known type. No id is
    /// consumed in that case.
    pub fn create(
        &mut self,
        type_name: &str,
        side: Side,
        position: Position,
        name: Option<&str>,
    ) -> Result<Character, SetupError> {
        let kind = parse_kind(type_name)?;
        Ok(self.build(kind, side, position, name))
    }

    /// Builds the character described by a content file entry.
    ///
    /// An explicit ability list replaces the type's default abilities.
    ///
    /// # Errors
    ///
    /// `UnknownCharacterType` or `UnknownAbility`. No id is consumed on error.
    pub fn create_unit(&mut self, unit: &UnitSpec, side: Side) -> Result<Character, SetupError> {
        let kind = parse_kind(&unit.kind)?;
        let abilities = match &unit.abilities {
            Some(names) => AbilityCatalog::resolve_all(names.iter().map(String::as_str))?,
            None => default_abilities(kind),
        };
        Ok(self.assign(kind, side, unit.position(), unit.name.as_deref(), abilities))
    }

    pub fn build(
        &mut self,
        kind: CharacterType,
        side: Side,
        position: Position,
        name: Option<&str>,
    ) -> Character {
        self.assign(kind, side, position, name, default_abilities(kind))
    }

    fn assign(
        &mut self,
        kind: CharacterType,
        side: Side,
        position: Position,
        name: Option<&str>,
        abilities: Vec<Ability>,
    ) -> Character {
        let id = CharacterId(self.next_id);
        self.next_id += 1;

        let ordinal = self.per_type.entry(kind).or_insert(0);
        *ordinal += 1;
        let name = match name {
            Some(name) => name.to_string(),
            None => format!("{kind} {ordinal}"),
        };

        Character::new(id, name, side, position, kind.template().stats())
            .with_kind(kind.to_string())
            .with_abilities(abilities)
    }
}

fn parse_kind(type_name: &str) -> Result<CharacterType, SetupError> {
    type_name
        .parse()
        .map_err(|_| SetupError::UnknownCharacterType(type_name.to_string()))
}

fn default_abilities(kind: CharacterType) -> Vec<Ability> {
    kind.template()
        .abilities
        .iter()
        .map(|ability| ability.to_ability())
        .collect()
}

impl Default for CharacterFactory {
    fn default() -> Self {
        Self::new()
    }
}
