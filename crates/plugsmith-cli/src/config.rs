//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `PLUGSMITH__<SECTION>__<KEY>` environment variables
//! 3. Config file (`--config FILE`, else the platform config dir)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use plugsmith_core::domain::{
    RemoteSource,
    plan::{DEFAULT_PLUGIN_NAME, DEFAULT_REMOTE_BASE, DEFAULT_REMOTE_TAG},
};

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "PLUGSMITH";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Answers used when a prompt is skipped or left empty.
    pub defaults: Defaults,
    /// Where generated plugins fetch a missing model from.
    pub remote: RemoteConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Optional file logging.
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub plugin_name: String,
    pub with_model: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            plugin_name: DEFAULT_PLUGIN_NAME.into(),
            with_model: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Repository host; the model's repository is `<base_url>/<Model>.git`.
    pub base_url: String,
    /// Branch or tag to check out.
    pub tag: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_REMOTE_BASE.into(),
            tag: DEFAULT_REMOTE_TAG.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `human`, `plain` or `json`; used when `--output-format` is `auto`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// When set, logs are also written to `<directory>/plugsmith.log`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path(), false),
        };

        let settings = Config::builder()
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.plugsmith.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "plugsmith", "plugsmith")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".plugsmith.toml"))
    }

    /// Remote-fetch parameters for the generator.
    pub fn remote_source(&self) -> RemoteSource {
        RemoteSource::new(&self.remote.base_url, &self.remote.tag)
    }

    /// Look up a dotted key such as `remote.tag`.
    pub fn get(&self, key: &str) -> Option<String> {
        let tree = serde_json::to_value(self).ok()?;
        let value = key
            .split('.')
            .try_fold(&tree, |node, part| node.get(part))?;

        Some(match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_generator() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.plugin_name, "MyPlugin");
        assert!(cfg.defaults.with_model);
        assert_eq!(cfg.remote_source(), RemoteSource::default());
        assert!(cfg.logging.directory.is_none());
    }

    #[test]
    fn empty_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("empty.toml");
        std::fs::write(&explicit, "").unwrap();
        let cfg = AppConfig::load(Some(&explicit)).unwrap();
        assert_eq!(cfg.defaults, Defaults::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[remote]\nbase_url = \"https://git.example.com/team\"\n\n[defaults]\nwith_model = false\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.remote.base_url, "https://git.example.com/team");
        assert_eq!(cfg.remote.tag, "master");
        assert!(!cfg.defaults.with_model);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[remote\n").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn dotted_lookup() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("remote.tag").as_deref(), Some("master"));
        assert_eq!(cfg.get("defaults.with_model").as_deref(), Some("true"));
        assert_eq!(cfg.get("logging.directory"), None);
        assert_eq!(cfg.get("remote.nope"), None);
        assert_eq!(cfg.get("nope"), None);
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
