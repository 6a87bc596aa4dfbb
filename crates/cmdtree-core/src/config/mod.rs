//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod events;
pub mod logging;
pub mod store;

use serde::{Deserialize, Serialize};
use tracing::debug;

use self::events::EventsConfig;
use self::logging::LoggingConfig;
use self::store::StoreConfig;

use crate::error::AppError;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "CMDTREE";

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// configuration (`config/default.toml`, an optional explicit file, and
/// `CMDTREE__*` environment variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Command tree store settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Refresh event settings.
    #[serde(default)]
    pub events: EventsConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default.toml` (if present), the given file (required
    /// when supplied), and environment variables prefixed with `CMDTREE__`.
    pub fn load(path: Option<&str>) -> Result<Self, AppError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));

        if let Some(path) = path {
            debug!(path, "Adding configuration file");
            builder = builder.add_source(config::File::with_name(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Replace the store path, e.g. from a command-line override.
    pub fn with_store_path(mut self, path: impl Into<String>) -> Self {
        self.store.path = path.into();
        self
    }
}
