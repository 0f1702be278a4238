//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `<config_dir>/terminal-note/config.toml`, outside the
//! vault so it never shows up as a note. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::APP_NAME;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NoteConfig {
    #[serde(default)]
    pub vault: VaultSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VaultSection {
    pub path: Option<String>,
    pub extension: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_VAULT_DIR: &str = ".terminal-note";
pub const DEFAULT_EXTENSION: &str = "md";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

pub const ENV_VAULT: &str = "TERMINAL_NOTE_VAULT";
pub const ENV_LOG_LEVEL: &str = "TERMINAL_NOTE_LOG_LEVEL";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Where the notes live. Built once at startup and handed to the vault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultConfig {
    pub root: PathBuf,
    /// Suffix appended to names typed in the new-note prompt, without the dot.
    pub extension: String,
}

impl VaultConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub vault: VaultConfig,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

/// Values coming from the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub vault: Option<PathBuf>,
    pub log_level: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not determine a home directory; pass --vault or set TERMINAL_NOTE_VAULT")]
    NoHomeDir,
    #[error("unknown log level '{0}'")]
    LogLevel(String),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `<config_dir>/terminal-note/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_NAME).join("config.toml"))
}

/// Load config from the default location.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `NoteConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<NoteConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine config directory, using default config");
        return Ok(NoteConfig::default());
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(NoteConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<NoteConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: NoteConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# terminal-note configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [vault]
# path = "~/.terminal-note"          # Or set TERMINAL_NOTE_VAULT, or pass --vault
# extension = "md"                   # Appended to names typed in the new-note prompt

# [logging]
# level = "info"                     # off, error, warn, info, debug, trace
# file = "~/.cache/terminal-note/terminal-note.log"
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

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &NoteConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    let home = dirs::home_dir();

    // Vault: CLI → env → config → ~/.terminal-note
    let root = match cli
        .vault
        .clone()
        .or_else(|| std::env::var_os(ENV_VAULT).map(PathBuf::from))
        .or_else(|| config.vault.path.as_deref().map(|p| expand_home(p, home.as_deref())))
    {
        Some(path) => path,
        None => home.as_ref().ok_or(ConfigError::NoHomeDir)?.join(DEFAULT_VAULT_DIR),
    };

    let extension = config
        .vault
        .extension
        .as_deref()
        .map(|ext| ext.trim_start_matches('.'))
        .filter(|ext| !ext.is_empty())
        .unwrap_or(DEFAULT_EXTENSION)
        .to_string();

    // Log level: CLI → env → config → default
    let log_level = match cli
        .log_level
        .clone()
        .or_else(|| std::env::var(ENV_LOG_LEVEL).ok())
        .or_else(|| config.logging.level.clone())
    {
        Some(level) => level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::LogLevel(level))?,
        None => DEFAULT_LOG_LEVEL,
    };

    let log_file = config
        .logging
        .file
        .as_deref()
        .map(|p| expand_home(p, home.as_deref()))
        .or_else(default_log_file);

    Ok(ResolvedConfig {
        vault: VaultConfig { root, extension },
        log_level,
        log_file,
    })
}

/// Returns `<cache_dir>/terminal-note/terminal-note.log`.
pub fn default_log_file() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join(APP_NAME).join(format!("{APP_NAME}.log")))
}

/// Expands a leading `~/` against the home directory.
fn expand_home(path: &str, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix("~/"), home) {
        (Some(rest), Some(home)) => home.join(rest),
        _ if path == "~" => home.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from(path)),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli_with_vault(path: &str) -> CliOverrides {
        CliOverrides {
            vault: Some(PathBuf::from(path)),
            log_level: Some("debug".to_string()),
        }
    }

    #[test]
    fn test_default_config_is_empty() {
        let config = NoteConfig::default();
        assert!(config.vault.path.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_cli_vault_wins_over_config() {
        let config = NoteConfig {
            vault: VaultSection {
                path: Some("/from/config".to_string()),
                extension: None,
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &cli_with_vault("/from/cli")).unwrap();
        assert_eq!(resolved.vault.root, PathBuf::from("/from/cli"));
        assert_eq!(resolved.vault.extension, "md");
        assert_eq!(resolved.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_extension_strips_leading_dot() {
        let config = NoteConfig {
            vault: VaultSection {
                path: None,
                extension: Some(".txt".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &cli_with_vault("/tmp/v")).unwrap();
        assert_eq!(resolved.vault.extension, "txt");
    }

    #[test]
    fn test_empty_extension_falls_back_to_default() {
        let config = NoteConfig {
            vault: VaultSection {
                path: None,
                extension: Some(".".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &cli_with_vault("/tmp/v")).unwrap();
        assert_eq!(resolved.vault.extension, DEFAULT_EXTENSION);
    }

    #[test]
    fn test_bad_log_level_is_rejected() {
        let cli = CliOverrides {
            vault: Some(PathBuf::from("/tmp/v")),
            log_level: Some("loud".to_string()),
        };
        let err = resolve(&NoteConfig::default(), &cli).unwrap_err();
        assert!(matches!(err, ConfigError::LogLevel(ref l) if l == "loud"));
    }

    #[test]
    fn test_expand_home() {
        let home = Path::new("/home/u");
        assert_eq!(expand_home("~/notes", Some(home)), PathBuf::from("/home/u/notes"));
        assert_eq!(expand_home("~", Some(home)), PathBuf::from("/home/u"));
        assert_eq!(expand_home("/abs", Some(home)), PathBuf::from("/abs"));
        assert_eq!(expand_home("~/notes", None), PathBuf::from("~/notes"));
    }

    #[test]
    fn test_toml_parses() {
        let toml_str = r#"
[vault]
path = "~/notes"
extension = "txt"

[logging]
level = "warn"
file = "/tmp/tn.log"
"#;
        let config: NoteConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.vault.path.as_deref(), Some("~/notes"));
        assert_eq!(config.vault.extension.as_deref(), Some("txt"));
        assert_eq!(config.logging.level.as_deref(), Some("warn"));
        assert_eq!(config.logging.file.as_deref(), Some("/tmp/tn.log"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[logging]
level = "trace"
"#;
        let config: NoteConfig = toml::from_str(toml_str).unwrap();
        assert!(config.vault.path.is_none());
        assert_eq!(config.logging.level.as_deref(), Some("trace"));
    }

    #[test]
    fn test_load_config_from_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[vault\npath = 3").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }
}
