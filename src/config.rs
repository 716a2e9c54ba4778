use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::{RankRequest, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub roster: RosterSettings,
    pub ranking: RankingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterSettings {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankingSettings {
    pub viewer_id: String,
    #[serde(default)]
    pub exclude_ids: Vec<String>,
    pub limit: Option<u16>,
}

impl RankingSettings {
    /// Ranking request described by this configuration
    pub fn to_request(&self) -> RankRequest {
        RankRequest {
            viewer_id: self.viewer_id.clone(),
            limit: self.limit.unwrap_or(20),
            exclude_ids: self.exclude_ids.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_interests_weight")]
    pub interests: f64,
    #[serde(default = "default_values_weight")]
    pub values: f64,
    #[serde(default = "default_personality_weight")]
    pub personality: f64,
    #[serde(default = "default_astrology_weight")]
    pub astrology: f64,
    #[serde(default = "default_lifestyle_weight")]
    pub lifestyle: f64,
    #[serde(default = "default_goals_weight")]
    pub goals: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            interests: default_interests_weight(),
            values: default_values_weight(),
            personality: default_personality_weight(),
            astrology: default_astrology_weight(),
            lifestyle: default_lifestyle_weight(),
            goals: default_goals_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            interests: config.interests,
            values: config.values,
            personality: config.personality,
            astrology: config.astrology,
            lifestyle: config.lifestyle,
            goals: config.goals,
        }
    }
}

fn default_interests_weight() -> f64 { 0.23 }
fn default_values_weight() -> f64 { 0.25 }
fn default_personality_weight() -> f64 { 0.20 }
fn default_astrology_weight() -> f64 { 0.10 }
fn default_lifestyle_weight() -> f64 { 0.12 }
fn default_goals_weight() -> f64 { 0.10 }

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
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with FRIENDER__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., FRIENDER__RANKING__VIEWER_ID -> ranking.viewer_id
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Base weights from the scoring section
    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("FRIENDER")
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("ranking.exclude_ids")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.interests, 0.23);
        assert_eq!(weights.values, 0.25);
        assert_eq!(weights.personality, 0.20);
        assert_eq!(weights.astrology, 0.10);
        assert_eq!(weights.lifestyle, 0.12);
        assert_eq!(weights.goals, 0.10);
        assert_eq!(ScoringWeights::from(&weights), ScoringWeights::default());
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "compact");
    }

    #[test]
    fn test_settings_from_toml() {
        let toml = r#"
            [roster]
            path = "data/roster.json"

            [ranking]
            viewer_id = "1"
            exclude_ids = ["2", "3"]

            [scoring.weights]
            astrology = 0.0
        "#;

        let settings: Settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.roster.path, "data/roster.json");
        let request = settings.ranking.to_request();
        assert_eq!(request.viewer_id, "1");
        assert_eq!(request.limit, 20);
        assert_eq!(request.exclude_ids, vec!["2", "3"]);

        let weights = settings.scoring_weights();
        assert_eq!(weights.astrology, 0.0);
        assert_eq!(weights.values, 0.25);
        assert_eq!(settings.logging.level, "info");
    }
}
