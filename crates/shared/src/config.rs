//! Engine configuration management.

use config::ConfigBuilder;
use config::builder::DefaultState;
use serde::Deserialize;

use crate::error::AppResult;

/// Engine configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// Category keyword tables used by the DRE classifier.
    #[serde(default)]
    pub classification: ClassificationConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Keyword tables for classifying outflow categories into DRE lines.
///
/// Matching is a case-insensitive substring test against the category name.
/// Deduction keywords are always tested before cost keywords.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassificationConfig {
    /// Keywords that mark a category as a revenue deduction.
    #[serde(default = "default_deduction_keywords")]
    pub deduction_keywords: Vec<String>,
    /// Keywords that mark a category as a cost of goods or services.
    #[serde(default = "default_cost_keywords")]
    pub cost_keywords: Vec<String>,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            deduction_keywords: default_deduction_keywords(),
            cost_keywords: default_cost_keywords(),
        }
    }
}

fn default_deduction_keywords() -> Vec<String> {
    ["imposto", "taxa", "dedução", "tributo"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_cost_keywords() -> Vec<String> {
    ["custo", "matéria", "produto", "insumo", "mercadoria"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "fluxo=info".to_string()
}

impl EngineConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default.toml`, `config/{RUN_MODE}.toml`, `FLUXO__*` variables.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`](crate::AppError::Configuration) if
    /// a source is malformed or a value has the wrong type.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("FLUXO")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("classification.deduction_keywords")
                    .with_list_parse_key("classification.cost_keywords")
                    .try_parsing(true),
            );

        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> AppResult<Self> {
        Ok(builder.build()?.try_deserialize()?)
    }
}
