use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub match_service: MatchServiceSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Remote matching service endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct MatchServiceSettings {
    #[serde(default = "default_match_base_url")]
    pub base_url: String,
    #[serde(default = "default_match_timeout")]
    pub timeout_secs: u64,
}

impl Default for MatchServiceSettings {
    fn default() -> Self {
        Self {
            base_url: default_match_base_url(),
            timeout_secs: default_match_timeout(),
        }
    }
}

fn default_match_base_url() -> String {
    "http://localhost:8080".to_string()
}
fn default_match_timeout() -> u64 {
    10
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    pub default_limit: Option<u8>,
    pub max_limit: Option<u8>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

/// Per-criterion point weights, overridable from config
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_location_weight")]
    pub location: u32,
    #[serde(default = "default_budget_weight")]
    pub budget: u32,
    #[serde(default = "default_work_weight")]
    pub work: u32,
    #[serde(default = "default_bedrooms_weight")]
    pub bedrooms: u32,
    #[serde(default = "default_condition_weight")]
    pub condition: u32,
    #[serde(default = "default_lifestyle_weight")]
    pub lifestyle: u32,
    #[serde(default = "default_vibe_weight")]
    pub vibe: u32,
    #[serde(default = "default_pets_weight")]
    pub pets: u32,
    #[serde(default = "default_parking_weight")]
    pub parking: u32,
    #[serde(default = "default_priorities_weight")]
    pub priorities: u32,
    #[serde(default = "default_style_weight")]
    pub style: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            location: default_location_weight(),
            budget: default_budget_weight(),
            work: default_work_weight(),
            bedrooms: default_bedrooms_weight(),
            condition: default_condition_weight(),
            lifestyle: default_lifestyle_weight(),
            vibe: default_vibe_weight(),
            pets: default_pets_weight(),
            parking: default_parking_weight(),
            priorities: default_priorities_weight(),
            style: default_style_weight(),
        }
    }
}

fn default_location_weight() -> u32 { 25 }
fn default_budget_weight() -> u32 { 25 }
fn default_work_weight() -> u32 { 20 }
fn default_bedrooms_weight() -> u32 { 15 }
fn default_condition_weight() -> u32 { 15 }
fn default_lifestyle_weight() -> u32 { 12 }
fn default_vibe_weight() -> u32 { 10 }
fn default_pets_weight() -> u32 { 10 }
fn default_parking_weight() -> u32 { 8 }
fn default_priorities_weight() -> u32 { 15 }
fn default_style_weight() -> u32 { 8 }

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

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with HOMEMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with HOMEMATCH_)
            // e.g., HOMEMATCH_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("HOMEMATCH")
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
                Environment::with_prefix("HOMEMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

impl WeightsConfig {
    pub fn to_weights(&self) -> crate::models::ScoringWeights {
        crate::models::ScoringWeights {
            location: self.location,
            budget: self.budget,
            work: self.work,
            bedrooms: self.bedrooms,
            condition: self.condition,
            lifestyle: self.lifestyle,
            vibe: self.vibe,
            pets: self.pets,
            parking: self.parking,
            priorities: self.priorities,
            style: self.style,
        }
    }
}
