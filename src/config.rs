use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use agenda_core::DescriptionJoin;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Journal file used by Save/Read/Clear
    pub database: Option<String>,

    /// Drop the trailing space left on multi-word descriptions
    #[serde(default)]
    pub trim_descriptions: bool,

    /// Print the usage banner when the session starts
    #[serde(default = "default_banner")]
    pub banner: bool,
}

fn default_banner() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database: None,
            trim_descriptions: false,
            banner: default_banner(),
        }
    }
}

impl Config {
    pub fn description_join(&self) -> DescriptionJoin {
        if self.trim_descriptions {
            DescriptionJoin::Trimmed
        } else {
            DescriptionJoin::Legacy
        }
    }

    /// Resolve the journal path: CLI override, then config, then the data dir.
    pub fn database_path(&self, cli_override: Option<&Path>) -> PathBuf {
        if let Some(path) = cli_override {
            return path.to_path_buf();
        }
        if let Some(path) = &self.database {
            return expand_path(path);
        }
        default_database_path()
    }
}

/// Get the config file path (~/.config/agenda/config.toml)
pub fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("agenda");
    Ok(config_dir.join("config.toml"))
}

/// Load config from `path`, or from the default location when `path` is None.
///
/// A missing default config file yields the defaults; a missing explicit one is
/// an error.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let (path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => match config_path() {
            Ok(p) => (p, false),
            Err(_) => return Ok(Config::default()),
        },
    };

    if !path.exists() {
        if required {
            anyhow::bail!("Config file not found at {}", path.display());
        }
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    parse_config(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))
}

fn parse_config(contents: &str) -> Result<Config> {
    Ok(toml::from_str(contents)?)
}

/// Default journal location (~/.local/share/agenda/events.db on Linux).
fn default_database_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("agenda").join("events.db"))
        .unwrap_or_else(|| PathBuf::from("agenda.db"))
}

/// Expand ~ in paths to the home directory
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}
