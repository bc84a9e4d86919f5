//! Content loaders for reading battle data from files.
//!
//! Levels and parties are RON files, game configuration is TOML. Every loader
//! returns [`LoadResult`] with the offending file named in the error.

pub mod config;
pub mod factory;
pub mod level;
pub mod party;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use level::LevelLoader;
pub use party::PartyLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
