//! Content factory for loading client data from a directory.

use std::path::{Path, PathBuf};

use game_core::{GameConfig, MapPolicy};

use crate::loaders::{ConfigLoader, LoadResult, MapPolicyLoader, ScenarioLoader, SystemNameLoader};
use crate::scenario::Scenario;

/// Content factory that loads all client content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── game.toml
/// ├── map_policy.toml
/// ├── system_names.txt
/// └── scenarios/
///     └── turn_042.ron
/// ```
///
/// `game.toml` and `map_policy.toml` are optional; defaults are used when
/// they are absent.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load game configuration from `game.toml`, or defaults if absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("game.toml");
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load map policy from `map_policy.toml`, or defaults if absent.
    pub fn load_map_policy(&self) -> LoadResult<MapPolicy> {
        let path = self.data_dir.join("map_policy.toml");
        if !path.exists() {
            return Ok(MapPolicy::default());
        }
        MapPolicyLoader::load(&path)
    }

    /// Load the system name list from `system_names.txt`.
    pub fn load_system_names(&self) -> LoadResult<Vec<String>> {
        SystemNameLoader::load(&self.data_dir.join("system_names.txt"))
    }

    /// Load `scenarios/<name>.ron`.
    pub fn load_scenario(&self, name: &str) -> LoadResult<Scenario> {
        let path = self.data_dir.join("scenarios").join(format!("{name}.ron"));
        ScenarioLoader::load(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());

        assert_eq!(factory.data_dir(), dir.path());
        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
        assert_eq!(factory.load_map_policy().unwrap(), MapPolicy::default());
        assert!(factory.load_system_names().is_err());
    }

    #[test]
    fn loads_files_from_layout() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("game.toml"), "display_year = true\nstart_year = 2400\n")
            .unwrap();
        std::fs::write(dir.path().join("system_names.txt"), "Sol\nVega\n").unwrap();
        std::fs::create_dir(dir.path().join("scenarios")).unwrap();
        std::fs::write(
            dir.path().join("scenarios").join("opening.ron"),
            "Scenario(turn: 1, producers: [])",
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap().start_year, 2400);
        assert_eq!(factory.load_system_names().unwrap(), ["Sol", "Vega"]);
        assert_eq!(factory.load_scenario("opening").unwrap().turn, 1);
    }
}
