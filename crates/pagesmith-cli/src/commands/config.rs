//! `pagesmith config`: read and write configuration values.

use std::path::PathBuf;
use std::str::FromStr;

use pagesmith_core::domain::{Bundler, Framework, Styling, Testing};

use crate::{
    cli::{ConfigCommands, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Every key `get` and `set` understand.
const KEYS: &[&str] = &[
    "defaults.framework",
    "defaults.typescript",
    "defaults.styling",
    "defaults.bundler",
    "defaults.testing",
    "defaults.accessibility",
    "defaults.seo",
    "defaults.performance",
    "output.no_color",
    "output.format",
];

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.raw(&value)?;
        }

        ConfigCommands::Set { key, value } => {
            let path = active_path(&global);
            let mut stored = if path.is_file() {
                AppConfig::load(Some(&path)).map_err(|e| config_error("reading", e))?
            } else {
                AppConfig::default()
            };
            set_config_value(&mut stored, &key, &value)?;

            let toml = stored.to_toml().map_err(|e| config_error("serialising", e))?;
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).with_cli_context(|| {
                    format!("Failed to create config directory '{}'", parent.display())
                })?;
            }
            std::fs::write(&path, toml)
                .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;

            output.success(&format!("Set {key} = {value} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised = config.to_toml().map_err(|e| config_error("serialising", e))?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.raw(&active_path(&global).display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// `--config` if given, else the file `AppConfig::load` would read.
fn active_path(global: &GlobalArgs) -> PathBuf {
    global.config.clone().unwrap_or_else(AppConfig::config_path)
}

fn config_error(action: &str, err: anyhow::Error) -> CliError {
    CliError::ConfigError {
        message: format!("{action} configuration failed: {err:#}"),
        source: Some(err.into()),
    }
}

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!("Unknown config key: '{key}' (known: {})", KEYS.join(", ")),
        source: None,
    }
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let d = &config.defaults;
    let opt = |v: &Option<String>| v.clone().unwrap_or_default();
    match key {
        "defaults.framework" => Ok(opt(&d.framework)),
        "defaults.typescript" => Ok(d.typescript.map(|b| b.to_string()).unwrap_or_default()),
        "defaults.styling" => Ok(opt(&d.styling)),
        "defaults.bundler" => Ok(opt(&d.bundler)),
        "defaults.testing" => Ok(opt(&d.testing)),
        "defaults.accessibility" => Ok(d.accessibility.to_string()),
        "defaults.seo" => Ok(d.seo.to_string()),
        "defaults.performance" => Ok(d.performance.to_string()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(unknown_key(key)),
    }
}

/// Validate `value` for `key` and store its canonical spelling.
fn set_config_value(config: &mut AppConfig, key: &str, value: &str) -> CliResult<()> {
    let d = &mut config.defaults;
    match key {
        "defaults.framework" => d.framework = Some(canonical::<Framework>(key, value)?),
        "defaults.typescript" => d.typescript = Some(parse_bool(key, value)?),
        "defaults.styling" => d.styling = Some(canonical::<Styling>(key, value)?),
        "defaults.bundler" => d.bundler = Some(canonical::<Bundler>(key, value)?),
        "defaults.testing" => d.testing = Some(canonical::<Testing>(key, value)?),
        "defaults.accessibility" => d.accessibility = parse_bool(key, value)?,
        "defaults.seo" => d.seo = parse_bool(key, value)?,
        "defaults.performance" => d.performance = parse_bool(key, value)?,
        "output.no_color" => config.output.no_color = parse_bool(key, value)?,
        "output.format" => {
            let format = value.to_ascii_lowercase();
            if !matches!(format.as_str(), "auto" | "human" | "plain" | "json") {
                return Err(invalid_value(key, value, "expected auto, human, plain or json"));
            }
            config.output.format = format;
        }
        _ => return Err(unknown_key(key)),
    }
    Ok(())
}

fn canonical<T>(key: &str, value: &str) -> CliResult<String>
where
    T: FromStr + ToString,
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map(|parsed| parsed.to_string())
        .map_err(|e| invalid_value(key, value, &e.to_string()))
}

fn parse_bool(key: &str, value: &str) -> CliResult<bool> {
    value
        .parse::<bool>()
        .map_err(|_| invalid_value(key, value, "expected true or false"))
}

fn invalid_value(key: &str, value: &str, reason: &str) -> CliError {
    CliError::InvalidInput {
        message: format!("{key} = '{value}': {reason}"),
        source: None,
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "defaults.seo").unwrap(), "true");
        assert_eq!(get_config_value(&cfg, "defaults.framework").unwrap(), "");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn every_key_reads_back() {
        let cfg = AppConfig::default();
        for key in KEYS {
            assert!(get_config_value(&cfg, key).is_ok(), "{key}");
        }
    }

    #[test]
    fn set_stores_canonical_names() {
        let mut cfg = AppConfig::default();
        set_config_value(&mut cfg, "defaults.framework", "Vanilla").unwrap();
        set_config_value(&mut cfg, "defaults.styling", "sass").unwrap();
        set_config_value(&mut cfg, "defaults.typescript", "true").unwrap();
        assert_eq!(cfg.defaults.framework.as_deref(), Some("html"));
        assert_eq!(cfg.defaults.styling.as_deref(), Some("scss"));
        assert_eq!(cfg.defaults.typescript, Some(true));
    }

    #[test]
    fn set_rejects_bad_values() {
        let mut cfg = AppConfig::default();
        assert!(matches!(
            set_config_value(&mut cfg, "defaults.framework", "qwik"),
            Err(CliError::InvalidInput { .. })
        ));
        assert!(set_config_value(&mut cfg, "defaults.seo", "maybe").is_err());
        assert!(set_config_value(&mut cfg, "output.format", "xml").is_err());
        assert!(set_config_value(&mut cfg, "nope", "1").is_err());
    }
}
