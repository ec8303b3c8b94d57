//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `~/.taskaru/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! Only `main` reads configuration; the core never touches the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use thiserror::Error;

use crate::core::state::DEFAULT_TITLE;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TaskaruConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub title: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "taskaru.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub title: String,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.taskaru/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".taskaru").join("config.toml"))
}

/// Load config from `~/.taskaru/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TaskaruConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TaskaruConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, using default config");
        return Ok(TaskaruConfig::default());
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<TaskaruConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(TaskaruConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: TaskaruConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Taskaru Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars.

# [general]
# title = "Taskaru"          # Or set TASKARU_TITLE

# [logging]
# level = "debug"            # off, error, warn, info, debug, trace (TASKARU_LOG_LEVEL)
# file = "taskaru.log"       # Relative to the working directory (TASKARU_LOG_FILE)
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config from the file values and the process environment.
pub fn resolve(config: &TaskaruConfig) -> ResolvedConfig {
    resolve_with(config, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with the environment supplied by `env`.
pub fn resolve_with(config: &TaskaruConfig, env: impl Fn(&str) -> Option<String>) -> ResolvedConfig {
    let title = env("TASKARU_TITLE")
        .or_else(|| config.general.title.clone())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let log_level = env("TASKARU_LOG_LEVEL")
        .or_else(|| config.logging.level.clone())
        .and_then(|level| match level.parse::<LevelFilter>() {
            Ok(filter) => Some(filter),
            Err(_) => {
                warn!("Unknown log level {:?}, using {}", level, DEFAULT_LOG_LEVEL);
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = env("TASKARU_LOG_FILE")
        .or_else(|| config.logging.file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    ResolvedConfig {
        title,
        log_level,
        log_file: PathBuf::from(log_file),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with(&TaskaruConfig::default(), no_env);
        assert_eq!(resolved.title, "Taskaru");
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert_eq!(resolved.log_file, PathBuf::from("taskaru.log"));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = TaskaruConfig {
            general: GeneralConfig {
                title: Some("Chores".to_string()),
            },
            logging: LoggingConfig {
                level: Some("warn".to_string()),
                file: Some("/tmp/chores.log".to_string()),
            },
        };
        let resolved = resolve_with(&config, no_env);
        assert_eq!(resolved.title, "Chores");
        assert_eq!(resolved.log_level, LevelFilter::Warn);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/chores.log"));
    }

    #[test]
    fn test_resolve_env_wins_over_file() {
        let config = TaskaruConfig {
            general: GeneralConfig {
                title: Some("Chores".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve_with(&config, |key| match key {
            "TASKARU_TITLE" => Some("Errands".to_string()),
            "TASKARU_LOG_LEVEL" => Some("trace".to_string()),
            _ => None,
        });
        assert_eq!(resolved.title, "Errands");
        assert_eq!(resolved.log_level, LevelFilter::Trace);
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = TaskaruConfig {
            logging: LoggingConfig {
                level: Some("loud".to_string()),
                file: None,
            },
            ..Default::default()
        };
        let resolved = resolve_with(&config, no_env);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[logging]
level = "info"
"#;
        let config: TaskaruConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.logging.level.as_deref(), Some("info"));
        assert!(config.logging.file.is_none());
        assert!(config.general.title.is_none());
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let path = std::env::temp_dir().join(format!("taskaru-bad-{}.toml", std::process::id()));
        fs::write(&path, "[general\ntitle = ").unwrap();
        let result = load_config_from(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("taskaru-cfg-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = load_config_from(&path).unwrap();
        assert!(config.general.title.is_none());

        // The generated file is all comments, so it parses back to defaults.
        let reloaded = load_config_from(&path).unwrap();
        assert!(reloaded.logging.level.is_none());
        let _ = fs::remove_dir_all(&dir);
    }
}
