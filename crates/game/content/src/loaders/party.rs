//! Party loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::specs::PartySpec;

/// Loader for the human party from RON files.
pub struct PartyLoader;

impl PartyLoader {
    pub fn load(path: &Path) -> LoadResult<PartySpec> {
        let content = read_file(path)?;
        ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse party RON {}: {}", path.display(), e))
    }
}
