//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.plaza/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::state::Badges;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PlazaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub badges: BadgeConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LayoutConfig {
    pub right_panel_breakpoint: Option<u16>,
    pub feed_max_width: Option<u16>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BadgeConfig {
    pub messenger: Option<u32>,
    pub notifications: Option<u32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_RIGHT_PANEL_BREAKPOINT: u16 = 120;
pub const DEFAULT_FEED_MAX_WIDTH: u16 = 72;
pub const DEFAULT_LOG_FILE: &str = "plaza.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    /// Minimum terminal width at which the right panel is shown.
    pub right_panel_breakpoint: u16,
    /// Maximum width of the centered feed column.
    pub feed_max_width: u16,
    pub badges: Badges,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&PlazaConfig::default(), &CliOverrides::default())
    }
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
    pub breakpoint: Option<u16>,
    pub feed_width: Option<u16>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.plaza/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".plaza").join("config.toml"))
}

/// Load config from `~/.plaza/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PlazaConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<PlazaConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PlazaConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PlazaConfig::default());
    }

    load_config_from(&path)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<PlazaConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PlazaConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Plaza Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "info"                 # "off", "error", "warn", "info", "debug", "trace"
# log_file = "plaza.log"

# [layout]
# right_panel_breakpoint = 120       # Hide stories/groups below this many columns
# feed_max_width = 72                # Widest the feed column gets

# [badges]
# messenger = 3
# notifications = 17
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PlazaConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Log level: CLI → env → config → default. Unknown names fall back.
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| std::env::var("PLAZA_LOG_LEVEL").ok())
        .or_else(|| config.general.log_level.clone())
        .and_then(|s| parse_level(&s))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    // Breakpoint: CLI → env → config → default
    let right_panel_breakpoint = cli
        .breakpoint
        .or_else(|| env_u16("PLAZA_BREAKPOINT"))
        .or(config.layout.right_panel_breakpoint)
        .unwrap_or(DEFAULT_RIGHT_PANEL_BREAKPOINT);

    // Feed width: CLI → env → config → default
    let feed_max_width = cli
        .feed_width
        .or_else(|| env_u16("PLAZA_FEED_WIDTH"))
        .or(config.layout.feed_max_width)
        .unwrap_or(DEFAULT_FEED_MAX_WIDTH);

    let defaults = Badges::default();
    let badges = Badges {
        messenger: config.badges.messenger.unwrap_or(defaults.messenger),
        notifications: config.badges.notifications.unwrap_or(defaults.notifications),
    };

    ResolvedConfig {
        log_level,
        log_file: PathBuf::from(log_file),
        right_panel_breakpoint,
        feed_max_width,
        badges,
    }
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.parse::<LevelFilter>() {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Unknown log level {:?}, using default", s);
            None
        }
    }
}

fn env_u16(key: &str) -> Option<u16> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", key, raw, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = PlazaConfig::default();
        assert!(config.general.log_level.is_none());
        assert!(config.layout.right_panel_breakpoint.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(&PlazaConfig::default(), &CliOverrides::default());
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(resolved.badges, Badges::default());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = PlazaConfig {
            general: GeneralConfig {
                log_level: Some("debug".to_string()),
                log_file: Some("/tmp/plaza-test.log".to_string()),
            },
            badges: BadgeConfig {
                messenger: Some(0),
                notifications: Some(250),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/plaza-test.log"));
        assert_eq!(resolved.badges.messenger, 0);
        assert_eq!(resolved.badges.notifications, 250);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = PlazaConfig {
            layout: LayoutConfig {
                right_panel_breakpoint: Some(200),
                feed_max_width: Some(50),
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            breakpoint: Some(90),
            feed_width: Some(60),
            log_level: Some("warn".to_string()),
            ..Default::default()
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.right_panel_breakpoint, 90);
        assert_eq!(resolved.feed_max_width, 60);
        assert_eq!(resolved.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let cli = CliOverrides {
            log_level: Some("chatty".to_string()),
            ..Default::default()
        };
        let resolved = resolve(&PlazaConfig::default(), &cli);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
log_level = "trace"

[layout]
right_panel_breakpoint = 140
feed_max_width = 80

[badges]
messenger = 120
"#;
        let config: PlazaConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level.as_deref(), Some("trace"));
        assert_eq!(config.layout.right_panel_breakpoint, Some(140));
        assert_eq!(config.layout.feed_max_width, Some(80));
        assert_eq!(config.badges.messenger, Some(120));
        assert!(config.badges.notifications.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[badges]
notifications = 4
"#;
        let config: PlazaConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.badges.notifications, Some(4));
        assert!(config.general.log_file.is_none());
        assert!(config.layout.feed_max_width.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("plaza-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[layout\nright_panel_breakpoint = ").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("plaza-definitely-missing/config.toml");
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
