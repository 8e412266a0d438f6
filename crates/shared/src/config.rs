//! Application configuration management.

use serde::Deserialize;

use crate::types::money::Currency;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Event planner configuration.
    #[serde(default)]
    pub planner: PlannerConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Event planner configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PlannerConfig {
    /// Currency all budgets are expressed in.
    #[serde(default = "default_currency")]
    pub currency: Currency,
    /// Decimal places used when amounts and percentages are displayed.
    #[serde(default = "default_display_decimal_places")]
    pub display_decimal_places: u32,
    /// Service categories offered on a new event form.
    #[serde(default = "default_categories")]
    pub default_categories: Vec<String>,
    /// Submitted drafts kept in memory before the oldest are evicted.
    #[serde(default = "default_max_drafts")]
    pub max_drafts: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            display_decimal_places: default_display_decimal_places(),
            default_categories: default_categories(),
            max_drafts: default_max_drafts(),
        }
    }
}

fn default_currency() -> Currency {
    Currency::Inr
}

fn default_display_decimal_places() -> u32 {
    2
}

fn default_max_drafts() -> usize {
    1000
}

fn default_categories() -> Vec<String> {
    [
        "Venue",
        "Catering",
        "Decoration",
        "Photography",
        "Entertainment",
        "Invitations",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FETE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
