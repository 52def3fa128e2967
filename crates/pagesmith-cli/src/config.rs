//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `PAGESMITH_*` environment variables (`PAGESMITH_DEFAULTS__FRAMEWORK=vue`)
//! 3. Config file (`--config`, else `./.pagesmith.toml`, else the global file)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// File name of a project-local configuration.
pub const LOCAL_CONFIG_FILE: &str = ".pagesmith.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default export options.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

/// Export options used when the matching flag is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub framework: Option<String>,
    pub typescript: Option<bool>,
    pub styling: Option<String>,
    pub bundler: Option<String>,
    pub testing: Option<String>,
    pub accessibility: bool,
    pub seo: bool,
    pub performance: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            framework: None,
            typescript: None,
            styling: None,
            bundler: None,
            testing: None,
            accessibility: true,
            seo: true,
            performance: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
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

impl AppConfig {
    /// Load configuration: defaults, then the active file, then environment.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default()).context("encoding built-in defaults")?;
        let mut builder = Config::builder().add_source(defaults);

        let file = match config_file {
            Some(path) if !path.is_file() => {
                anyhow::bail!("config file not found: {}", path.display());
            }
            Some(path) => Some(path.clone()),
            None => Some(Self::config_path()).filter(|path| path.is_file()),
        };
        if let Some(path) = file {
            builder = builder.add_source(File::from(path.as_path()).format(FileFormat::Toml));
        }

        builder
            .add_source(
                Environment::with_prefix("PAGESMITH")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("reading configuration")?
            .try_deserialize()
            .context("invalid configuration")
    }

    /// Path of the configuration file `load(None)` reads and `config set`
    /// writes.
    ///
    /// `./.pagesmith.toml` wins when it exists; otherwise the per-user file
    /// from `directories::ProjectDirs`.
    pub fn config_path() -> PathBuf {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return local;
        }
        Self::global_path()
    }

    /// Per-user configuration file.
    pub fn global_path() -> PathBuf {
        directories::ProjectDirs::from("com", "pagesmith", "pagesmith")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Render as TOML, the format `load` reads back.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("serialising configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn defaults_enable_quality_features() {
        let cfg = AppConfig::default();
        assert!(cfg.defaults.accessibility);
        assert!(cfg.defaults.seo);
        assert!(cfg.defaults.performance);
        assert_eq!(cfg.defaults.framework, None);
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[defaults]\nframework = \"svelte\"\nseo = false").unwrap();

        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.defaults.framework.as_deref(), Some("svelte"));
        assert!(!cfg.defaults.seo);
        assert!(cfg.defaults.accessibility);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = PathBuf::from("/definitely/not/here/pagesmith.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn toml_round_trips() {
        let mut cfg = AppConfig::default();
        cfg.defaults.framework = Some("vue".into());
        let parsed: AppConfig = toml::from_str(&cfg.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
