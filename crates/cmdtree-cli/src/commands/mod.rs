//! CLI command definitions and dispatch.

pub mod command;
pub mod config;
pub mod drop;
pub mod folder;
pub mod tree;

use clap::{Parser, Subcommand};

use cmdtree_core::config::AppConfig;
use cmdtree_core::error::AppError;
use cmdtree_core::types::FolderPath;
use cmdtree_service::TreeService;
use cmdtree_storage::open_store;

use crate::output::OutputFormat;

/// Command Tree: organise saved shell commands into folders
#[derive(Debug, Parser)]
#[command(name = "cmdtree", version, about, long_about = None)]
pub struct Cli {
    /// Path to an additional configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Command tree JSON file (overrides `store.path`)
    #[arg(short, long, global = true)]
    pub tree: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Inspect the tree
    Tree(tree::TreeArgs),
    /// Manage and move commands
    Command(command::CommandArgs),
    /// Manage and move folders
    Folder(folder::FolderArgs),
    /// Apply a drag-and-drop gesture
    Drop(drop::DropArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Load configuration and apply command-line overrides
    pub fn load_config(&self) -> Result<AppConfig, AppError> {
        let config = AppConfig::load(self.config.as_deref())?;
        Ok(match &self.tree {
            Some(path) => config.with_store_path(path),
            None => config,
        })
    }

    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Tree(args) => tree::execute(args, config, self.format).await,
            Commands::Command(args) => command::execute(args, config, self.format).await,
            Commands::Folder(args) => folder::execute(args, config, self.format).await,
            Commands::Drop(args) => drop::execute(args, config, self.format).await,
            Commands::Config(args) => config::execute(args, config, self.format).await,
        }
    }
}

/// Helper: build the tree service for the configured store
pub fn open_service(config: &AppConfig) -> TreeService {
    TreeService::new(open_store(&config.store), &config.events)
}

/// Helper: the folder holding a command, using `hint` when given
pub async fn locate_command(
    service: &TreeService,
    command_id: &str,
    hint: Option<&FolderPath>,
) -> Result<FolderPath, AppError> {
    if let Some(path) = hint {
        return Ok(path.clone());
    }
    service
        .load()
        .await?
        .find_command(command_id)
        .map(|location| location.folder)
        .ok_or_else(|| AppError::not_found(format!("Command '{}' not found", command_id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_overrides_after_subcommand() {
        let cli = Cli::try_parse_from([
            "cmdtree", "tree", "show", "--tree", "/tmp/t.json", "--format", "json",
        ])
        .unwrap();
        assert_eq!(cli.tree.as_deref(), Some("/tmp/t.json"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_folder_move() {
        let cli = Cli::try_parse_from([
            "cmdtree", "folder", "move", "2/0", "--to", "/", "--index", "1", "--position", "after",
        ])
        .unwrap();
        match cli.command {
            Commands::Folder(folder::FolderArgs {
                command:
                    folder::FolderCommand::Move {
                        path,
                        to,
                        index,
                        position,
                    },
            }) => {
                assert_eq!(path, FolderPath::from([2, 0]));
                assert!(to.is_root());
                assert_eq!(index, Some(1));
                assert_eq!(position, cmdtree_core::types::DropPosition::After);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_invalid_path_rejected() {
        assert!(Cli::try_parse_from(["cmdtree", "folder", "remove", "1/x"]).is_err());
    }
}
