//! Content loaders for reading client data from files.
//!
//! Each loader is a unit struct with a `load(path)` constructor; paths are
//! resolved by [`ContentFactory`] when loading from a data directory.

pub mod config;
pub mod factory;
pub mod map_policy;
pub mod names;
pub mod scenario;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use map_policy::MapPolicyLoader;
pub use names::SystemNameLoader;
pub use scenario::ScenarioLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
