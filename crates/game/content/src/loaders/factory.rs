//! Content factory for building battles from data files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tactics_core::GameConfig;

use crate::loaders::{ConfigLoader, LevelLoader, LoadResult, PartyLoader};
use crate::setup::BattleSetup;
use crate::specs::{LevelSpec, PartySpec};

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── levels/
/// │   ├── outpost.ron
/// │   └── warlord_keep.ron
/// └── parties/
///     └── vanguard.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`, or defaults if the file is absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load a level from `levels/{name}.ron`.
    pub fn load_level(&self, name: &str) -> LoadResult<LevelSpec> {
        let path = self.data_dir.join("levels").join(format!("{}.ron", name));
        LevelLoader::load(&path)
    }

    /// Load a party from `parties/{name}.ron`.
    pub fn load_party(&self, name: &str) -> LoadResult<PartySpec> {
        let path = self.data_dir.join("parties").join(format!("{}.ron", name));
        PartyLoader::load(&path)
    }

    /// Loads config, level and party, then assembles the battle.
    pub fn load_battle(&self, level: &str, party: &str) -> LoadResult<(GameConfig, BattleSetup)> {
        let config = self.load_config()?;
        let level_spec = self.load_level(level)?;
        let party_spec = self.load_party(party)?;
        let setup = BattleSetup::assemble(&level_spec, &party_spec, &config).with_context(|| {
            format!("Failed to assemble level '{level}' with party '{party}'")
        })?;
        Ok((config, setup))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
