//! Resolves and loads everything a digest run reads from disk.
use anyhow::{Context, Result, bail};

use game_content::{
    ConfigLoader, ContentFactory, MapPolicyLoader, Scenario, ScenarioLoader, SystemNameLoader,
};
use game_core::{GameConfig, MapPolicy};

use crate::config::CliConfig;

/// Content for one digest run.
#[derive(Clone, Debug)]
pub struct LoadedContent {
    pub game: GameConfig,
    pub map_policy: MapPolicy,
    pub system_names: Vec<String>,
    pub scenario: Scenario,
}

impl LoadedContent {
    /// Loads content from the configured directory, honoring per-file
    /// overrides.
    pub fn load(config: &CliConfig) -> Result<Self> {
        let factory = ContentFactory::new(&config.content_dir);

        let game = match &config.game_config_path {
            Some(path) => ConfigLoader::load(path)?,
            None => factory.load_config()?,
        };

        let map_policy = match &config.map_policy_path {
            Some(path) => MapPolicyLoader::load(path)?,
            None => factory.load_map_policy()?,
        };

        let system_names = match &config.system_names_path {
            Some(path) => SystemNameLoader::load(path)?,
            None if factory.data_dir().join("system_names.txt").exists() => {
                factory.load_system_names()?
            }
            None => Vec::new(),
        };

        let scenario = match (&config.scenario_path, &config.scenario) {
            (Some(path), _) => ScenarioLoader::load(path)?,
            (None, Some(name)) => factory
                .load_scenario(name)
                .with_context(|| format!("Failed to load scenario '{name}'"))?,
            (None, None) => bail!("No scenario configured; set SCENARIO or SCENARIO_PATH"),
        };

        Ok(Self {
            game,
            map_policy,
            system_names,
            scenario,
        })
    }
}
