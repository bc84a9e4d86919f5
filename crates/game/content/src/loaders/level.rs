//! Level loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::specs::LevelSpec;

/// Loader for level definitions from RON files.
pub struct LevelLoader;

impl LevelLoader {
    /// Load a level from a RON file.
    ///
    /// Type strings are not resolved here; [`crate::BattleSetup::assemble`]
    /// reports unknown character and win-condition types.
    pub fn load(path: &Path) -> LoadResult<LevelSpec> {
        let content = read_file(path)?;
        ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse level RON {}: {}", path.display(), e))
    }
}
