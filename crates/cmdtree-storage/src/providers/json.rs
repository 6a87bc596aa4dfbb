//! JSON file store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use cmdtree_core::config::store::StoreConfig;
use cmdtree_core::error::{AppError, ErrorKind};
use cmdtree_core::result::AppResult;
use cmdtree_core::traits::DocumentStore;
use cmdtree_entity::CommandConfig;

/// Keeps the command tree in a single JSON file.
///
/// Saves write a sibling temporary file and rename it over the target, so a
/// reader never observes a half-written tree.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    /// The JSON document.
    path: PathBuf,
    /// Write indented JSON.
    pretty: bool,
    /// Treat a missing file as an empty tree.
    create_missing: bool,
}

impl JsonFileStore {
    /// Create a store for `path` with default settings.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
            create_missing: true,
        }
    }

    /// Create a store from configuration.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self {
            path: PathBuf::from(&config.path),
            pretty: config.pretty,
            create_missing: config.create_missing,
        }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn ensure_parent(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore<CommandConfig> for JsonFileStore {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> AppResult<CommandConfig> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && self.create_missing => {
                debug!(path = %self.path.display(), "Tree file missing, starting empty");
                return Ok(CommandConfig::default());
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(AppError::not_found(format!(
                    "Tree file not found: {}",
                    self.path.display()
                )));
            }
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read tree file: {}", self.path.display()),
                    e,
                ));
            }
        };

        if raw.trim().is_empty() {
            return Ok(CommandConfig::default());
        }

        let config: CommandConfig = serde_json::from_str(&raw).map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Invalid tree file {}: {e}", self.path.display()),
                e,
            )
        })?;
        debug!(path = %self.path.display(), folders = config.folders.len(), "Loaded tree");
        Ok(config)
    }

    async fn save(&self, document: &CommandConfig) -> AppResult<()> {
        self.ensure_parent().await?;

        let mut json = if self.pretty {
            serde_json::to_string_pretty(document)?
        } else {
            serde_json::to_string(document)?
        };
        json.push('\n');

        let temp = self.temp_path();
        fs::write(&temp, json.as_bytes()).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write tree file: {}", temp.display()),
                e,
            )
        })?;
        fs::rename(&temp, &self.path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to replace tree file: {}", self.path.display()),
                e,
            )
        })?;

        debug!(path = %self.path.display(), bytes = json.len(), "Saved tree");
        Ok(())
    }
}
