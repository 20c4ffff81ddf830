//! Environment-driven configuration for the turn digest.
use std::env;
use std::path::PathBuf;

/// How the digest is written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DigestFormat {
    #[default]
    Text,
    Json,
}

/// Configuration required to load a scenario and deliver its turn.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory holding `game.toml`, `map_policy.toml`, `system_names.txt`
    /// and `scenarios/`.
    pub content_dir: PathBuf,
    /// Scenario name under `content_dir/scenarios/`.
    pub scenario: Option<String>,
    pub scenario_path: Option<PathBuf>,
    pub game_config_path: Option<PathBuf>,
    pub map_policy_path: Option<PathBuf>,
    pub system_names_path: Option<PathBuf>,
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
    /// Mirror logs to stderr in addition to the session log file.
    pub log_to_stderr: bool,
    pub format: DigestFormat,
    pub collector_capacity: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("data"),
            scenario: None,
            scenario_path: None,
            game_config_path: None,
            map_policy_path: None,
            system_names_path: None,
            session_id: None,
            log_dir: None,
            log_to_stderr: true,
            format: DigestFormat::default(),
            collector_capacity: 64,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CONTENT_DIR` - Content directory (default: `data`)
    /// - `SCENARIO` - Scenario name under `CONTENT_DIR/scenarios`
    /// - `SCENARIO_PATH` - Scenario file, overrides `SCENARIO`
    /// - `GAME_CONFIG_PATH`, `MAP_POLICY_PATH`, `SYSTEM_NAMES_PATH` - Per-file overrides
    /// - `GAME_SESSION_ID` - Session identifier for the log directory (default: auto-generated)
    /// - `LOG_DIR` - Log root (default: platform cache directory)
    /// - `LOG_STDERR` - Mirror logs to stderr (default: true, forced off for JSON)
    /// - `DIGEST_FORMAT` - `text` or `json` (default: text)
    /// - `COLLECTOR_CAPACITY` - Producer channel buffer (default: 64)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("CONTENT_DIR") {
            config.content_dir = dir;
        }
        config.scenario = env::var("SCENARIO").ok();
        config.scenario_path = read_env("SCENARIO_PATH");
        config.game_config_path = read_env("GAME_CONFIG_PATH");
        config.map_policy_path = read_env("MAP_POLICY_PATH");
        config.system_names_path = read_env("SYSTEM_NAMES_PATH");
        config.session_id = env::var("GAME_SESSION_ID").ok();
        config.log_dir = read_env("LOG_DIR");

        if let Some(format) = read_env::<DigestFormat>("DIGEST_FORMAT") {
            config.format = format;
        }

        if let Some(enable) = read_env_bool("LOG_STDERR") {
            config.log_to_stderr = enable;
        }
        // stdout carries the JSON document; keep log lines out of it
        if config.format == DigestFormat::Json {
            config.log_to_stderr = false;
        }

        if let Some(capacity) = read_env::<usize>("COLLECTOR_CAPACITY") {
            config.collector_capacity = capacity.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<DigestFormat>().unwrap(), DigestFormat::Json);
        assert_eq!("text".parse::<DigestFormat>().unwrap(), DigestFormat::Text);
        assert!("yaml".parse::<DigestFormat>().is_err());
        assert_eq!(DigestFormat::Json.to_string(), "json");
    }

    #[test]
    fn defaults() {
        let config = CliConfig::default();
        assert_eq!(config.content_dir, PathBuf::from("data"));
        assert_eq!(config.format, DigestFormat::Text);
        assert_eq!(config.collector_capacity, 64);
        assert!(config.log_to_stderr);
    }
}
