//! User preferences read once at startup.
//!
//! The file is optional and never written back; everything the user does in the
//! builder is lost when the window closes.

use bevy::prelude::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Preferences loaded from `config.json`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct AppConfigData {
    /// Start in dark mode
    #[serde(default)]
    pub dark_mode: bool,

    /// Maximum number of layout snapshots kept for undo (unbounded when absent)
    #[serde(default)]
    pub history_limit: Option<usize>,
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    pub data: AppConfigData,
    /// Path the config was (or would have been) read from
    pub config_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: crate::paths::config_file(),
        }
    }
}

/// Resource to notify user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification dialog
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Parse config file contents
pub fn parse_config(json: &str) -> Result<AppConfigData, serde_json::Error> {
    serde_json::from_str(json)
}

/// Result of loading config from disk
struct LoadConfigResult {
    data: AppConfigData,
    /// Error message if config was reset to defaults due to an error
    reset_reason: Option<String>,
}

/// Load configuration from disk
fn load_config(config_path: &Path) -> LoadConfigResult {
    let (data, reset_reason) = if config_path.exists() {
        match std::fs::read_to_string(config_path) {
            Ok(json) => match parse_config(&json) {
                Ok(data) => {
                    info!("Loaded config from {:?}", config_path);
                    (data, None)
                }
                Err(e) => {
                    warn!("Failed to parse config file: {}", e);
                    (
                        AppConfigData::default(),
                        Some(format!("Configuration file is invalid: {}", e)),
                    )
                }
            },
            Err(e) => {
                warn!("Failed to read config file: {}", e);
                (
                    AppConfigData::default(),
                    Some(format!("Could not read configuration file: {}", e)),
                )
            }
        }
    } else {
        info!("No config file found, using defaults");
        (AppConfigData::default(), None)
    };

    LoadConfigResult { data, reset_reason }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<AppConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let result = load_config(&config.config_path);
    config.data = result.data;

    // Set notification if config was reset due to an error
    if let Some(reason) = result.reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_data_default() {
        let data = AppConfigData::default();
        assert!(!data.dark_mode);
        assert!(data.history_limit.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let data = parse_config(r#"{ "dark_mode": true, "history_limit": 50 }"#).unwrap();
        assert!(data.dark_mode);
        assert_eq!(data.history_limit, Some(50));
    }

    #[test]
    fn test_parse_missing_fields_use_defaults() {
        let data = parse_config("{}").unwrap();
        assert_eq!(data, AppConfigData::default());
    }

    #[test]
    fn test_parse_invalid_config_fails() {
        assert!(parse_config("{ dark_mode: yes }").is_err());
        assert!(parse_config(r#"{ "history_limit": -1 }"#).is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults_without_notification() {
        let result = load_config(Path::new("definitely/not/here/config.json"));
        assert_eq!(result.data, AppConfigData::default());
        assert!(result.reset_reason.is_none());
    }

    #[test]
    fn test_config_reset_notification_default() {
        let notification = ConfigResetNotification::default();
        assert!(!notification.show);
        assert!(notification.reason.is_none());
    }
}
