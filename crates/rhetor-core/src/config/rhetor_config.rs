//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, CorpusConfig, ReportConfig};
use crate::config::report_config::KNOWN_ORDERS;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`RHETOR_*`)
/// 3. Project config (`rhetor.toml` in the project root)
/// 4. User config (`~/.rhetor/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RhetorConfig {
    pub corpus: CorpusConfig,
    pub analysis: AnalysisConfig,
    pub report: ReportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub corpus_dir: Option<PathBuf>,
    pub metadata_file: Option<PathBuf>,
    pub scores_file: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub order: Option<String>,
}

impl RhetorConfig {
    /// Load configuration with layered resolution.
    ///
    /// A config file layer replaces the whole config (missing fields
    /// revert to compiled defaults via `serde(default)`); env and CLI
    /// layers override individual fields.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                Self::merge_toml_file(&mut config, &user_config_path)?;
            }
        }

        // Layer 3: project config
        let project_config_path = root.join("rhetor.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        tracing::debug!(?config, "configuration resolved");

        Ok(config)
    }

    /// Parse a configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn merge_toml_file(config: &mut Self, path: &Path) -> Result<(), ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        *config = toml::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    fn user_config_path() -> Option<PathBuf> {
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".rhetor").join("config.toml"))
    }

    fn apply_env_overrides(config: &mut Self) {
        if let Ok(dir) = std::env::var("RHETOR_CORPUS_DIR") {
            config.corpus.corpus_dir = PathBuf::from(dir);
        }
        if let Ok(path) = std::env::var("RHETOR_METADATA_FILE") {
            config.corpus.metadata_file = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var("RHETOR_SCORES_FILE") {
            config.corpus.scores_file = PathBuf::from(path);
        }
        if let Ok(dir) = std::env::var("RHETOR_OUT_DIR") {
            config.report.out_dir = PathBuf::from(dir);
        }
    }

    fn apply_cli_overrides(config: &mut Self, cli: &CliOverrides) {
        if let Some(dir) = &cli.corpus_dir {
            config.corpus.corpus_dir = dir.clone();
        }
        if let Some(path) = &cli.metadata_file {
            config.corpus.metadata_file = path.clone();
        }
        if let Some(path) = &cli.scores_file {
            config.corpus.scores_file = path.clone();
        }
        if let Some(dir) = &cli.out_dir {
            config.report.out_dir = dir.clone();
        }
        if let Some(order) = &cli.order {
            config.report.order = order.clone();
        }
    }

    fn validate(config: &Self) -> Result<(), ConfigError> {
        if config.corpus.score_column.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "corpus.score_column".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if config.report.decimals > 6 {
            return Err(ConfigError::InvalidValue {
                field: "report.decimals".to_string(),
                message: format!("{} exceeds the maximum of 6", config.report.decimals),
            });
        }
        if !KNOWN_ORDERS.contains(&config.report.order.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "report.order".to_string(),
                message: format!(
                    "'{}' is not one of {}",
                    config.report.order,
                    KNOWN_ORDERS.join(", ")
                ),
            });
        }
        if config.analysis.detectors.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.detectors".to_string(),
                message: "at least one detector must be enabled".to_string(),
            });
        }
        Ok(())
    }
}
