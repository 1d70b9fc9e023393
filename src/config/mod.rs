//! Application configuration.
//!
//! Everything is read from `MORAL_GRAPH__`-prefixed environment variables,
//! with a `.env` file honoured in development. Nested keys are separated by
//! double underscores:
//!
//! | Variable                                  | Key                          |
//! |-------------------------------------------|------------------------------|
//! | `MORAL_GRAPH__DATABASE__URL`              | `database.url` (required)    |
//! | `MORAL_GRAPH__SERVER__PORT`               | `server.port`                |
//! | `MORAL_GRAPH__GRAPH__MAX_ENTROPY`         | `graph.max_entropy`          |
//! | `MORAL_GRAPH__COHORTS__REGISTRY_PATH`     | `cohorts.registry_path`      |
//!
//! ```no_run
//! use moral_graph::config::AppConfig;
//!
//! let config = AppConfig::load().expect("configuration");
//! config.validate().expect("valid configuration");
//! ```

mod cohorts;
mod database;
mod error;
mod graph;
mod server;

pub use cohorts::{parse_registry, CohortConfig};
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use graph::GraphConfig;
pub use server::{Environment, LogFormat, ServerConfig};

use serde::Deserialize;

const ENV_PREFIX: &str = "MORAL_GRAPH";

/// Root configuration, one field per section.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub cohorts: CohortConfig,
}

impl AppConfig {
    /// Reads the environment (and `.env`, if present) into typed sections.
    ///
    /// # Errors
    ///
    /// `ConfigError::LoadError` when `database.url` is missing or a value
    /// does not parse into its field type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let source = config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__");

        Ok(config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?)
    }

    /// Checks every section. The cohort registry file is checked when it
    /// is loaded.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.graph.validate()
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
