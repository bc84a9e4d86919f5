//! Data-driven battle content and loaders.
//!
//! This crate plays the external-collaborator side of battle setup:
//! - Character factory (type name to character with default stats)
//! - Ability catalog
//! - Win-condition factory (type string to [`tactics_core::WinCondition`])
//! - Level and party specs, loaded from RON
//! - Game configuration, loaded from TOML
//!
//! Everything resolves to `tactics-core` types before a battle starts; any
//! unresolved name is a fatal [`tactics_core::SetupError`].

pub mod abilities;
pub mod characters;
pub mod setup;
pub mod specs;
pub mod win;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use abilities::{AbilityCatalog, AbilityName};
pub use characters::{CharacterFactory, CharacterTemplate, CharacterType};
pub use setup::BattleSetup;
pub use specs::{LevelSpec, PartySpec, UnitSpec, WinConditionSpec};
pub use win::{WinConditionFactory, WinConditionType};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LevelLoader, LoadResult, PartyLoader};
