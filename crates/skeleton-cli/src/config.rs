//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `SKELETON_` prefix, `__` between nested keys,
//!    e.g. `SKELETON_DEMO__INITIAL_VALUE`. Values stay text until a field's
//!    type asks otherwise, so `007` reaches a string field as `007`.
//!    `SKELETON_DEMO__UPDATES` is a comma-separated list.
//! 3. Config file: `--config FILE` (must exist), otherwise
//!    [`AppConfig::config_path`] if present
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::error::CliResult;

/// Prefix of environment variables read by [`AppConfig::load`].
pub const ENV_PREFIX: &str = "SKELETON";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// First line printed by the demo.
    pub greeting: String,
    /// Inputs of the demo run.
    pub demo: DemoConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Left operand of the addition.
    pub lhs: i8,
    /// Right operand of the addition.
    pub rhs: i8,
    /// Value the holder is constructed with.
    pub initial_value: String,
    /// Values set on the holder, in order.
    #[serde(deserialize_with = "list_or_comma_separated")]
    pub updates: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            greeting: "Hello World!".into(),
            demo: DemoConfig {
                lhs: 1,
                rhs: 2,
                initial_value: "Initial value".into(),
                updates: vec!["New value 1".into(), "New value 2".into()],
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::from(Self::config_path()).required(false),
        };

        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize::<Self>()?;

        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.skeleton.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "skeleton", "skeleton")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".skeleton.toml"))
    }
}

/// A list from a config file, or `a,b,c` from the environment.
///
/// An empty string is an empty list.
fn list_or_comma_separated<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Updates {
        List(Vec<String>),
        Joined(String),
    }

    Ok(match Updates::deserialize(deserializer)? {
        Updates::List(values) => values,
        Updates::Joined(joined) if joined.is_empty() => Vec::new(),
        Updates::Joined(joined) => joined.split(',').map(str::to_owned).collect(),
    })
}
