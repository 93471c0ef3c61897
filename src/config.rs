use crate::core::RankOptions;
use crate::models::MateFilter;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Library configuration for the embedding application
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Host-app defaults for the proximity pipeline
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Default max-distance cut in km; `None` means no cut until the user
    /// picks one in the filter tab
    #[serde(default)]
    pub max_distance_km: Option<f64>,
    #[serde(default = "default_sort_ascending")]
    pub sort_ascending: bool,
    #[serde(default)]
    pub exclude_unknown: bool,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            max_distance_km: None,
            sort_ascending: default_sort_ascending(),
            exclude_unknown: false,
        }
    }
}

fn default_sort_ascending() -> bool {
    true
}

impl MatchingSettings {
    /// Build rank options for one evaluation: the filter's max-distance
    /// choice wins over the configured default
    pub fn rank_options(&self, filter: &MateFilter) -> RankOptions {
        RankOptions {
            max_distance_km: filter.max_distance_km.or(self.max_distance_km),
            sort_ascending: self.sort_ascending,
            exclude_unknown: self.exclude_unknown,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with PAWMATE_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PAWMATE_MATCHING__MAX_DISTANCE_KM -> matching.max_distance_km
            .add_source(
                Environment::with_prefix("PAWMATE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("PAWMATE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
