//! Folder management CLI commands.

use clap::{Args, Subcommand};

use cmdtree_core::config::AppConfig;
use cmdtree_core::error::AppError;
use cmdtree_core::types::{DropPosition, FolderPath};
use cmdtree_entity::Folder;
use cmdtree_service::moves::{FolderDescriptor, FolderDestination};
use cmdtree_service::reorder::TreeItemRef;

use crate::output::{self, OutputFormat};

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// Create a folder
    Add {
        /// Folder name
        name: String,
        /// Parent folder path (`/` for the root)
        #[arg(long, default_value = "/")]
        parent: FolderPath,
        /// Description
        #[arg(long)]
        description: Option<String>,
        /// Codicon name
        #[arg(long)]
        icon: Option<String>,
    },
    /// Remove a folder and everything in it
    Remove {
        /// Folder path
        path: FolderPath,
    },
    /// Move a folder under a parent at an index
    Move {
        /// Folder path
        path: FolderPath,
        /// Destination parent path (`/` for the root)
        #[arg(long)]
        to: FolderPath,
        /// Destination index, addressed before the move (appends when omitted)
        #[arg(long)]
        index: Option<usize>,
        /// Placement relative to the index
        #[arg(long, default_value_t = DropPosition::Before)]
        position: DropPosition,
    },
    /// Move a folder one slot up
    Up {
        /// Folder path
        path: FolderPath,
    },
    /// Move a folder one slot down
    Down {
        /// Folder path
        path: FolderPath,
    },
    /// Nest a folder inside another folder
    ToFolder {
        /// Folder path
        path: FolderPath,
        /// Destination folder path
        #[arg(long)]
        to: FolderPath,
    },
}

/// Execute folder commands
pub async fn execute(
    args: &FolderArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let service = super::open_service(config);

    match &args.command {
        FolderCommand::Add {
            name,
            parent,
            description,
            icon,
        } => {
            let mut folder = Folder::new(name);
            if let Some(description) = description {
                folder = folder.with_description(description);
            }
            if let Some(icon) = icon {
                folder = folder.with_icon(icon);
            }
            let path = service.add_folder(parent, folder).await?;
            match format {
                OutputFormat::Json => output::print_json(&path),
                OutputFormat::Table => {
                    output::print_success(&format!("Folder '{}' created at {}", name, path))
                }
            }
        }
        FolderCommand::Remove { path } => {
            let removed = service.remove_folder(path).await?;
            match format {
                OutputFormat::Json => output::print_json(&removed),
                OutputFormat::Table => output::print_success(&format!(
                    "Folder '{}' removed with {} command(s)",
                    removed.name,
                    removed.total_commands()
                )),
            }
        }
        FolderCommand::Move {
            path,
            to,
            index,
            position,
        } => {
            let report = service
                .move_folder(
                    &FolderDescriptor::new(path.clone()),
                    &FolderDestination {
                        parent_path: to.clone(),
                        index: *index,
                        position: *position,
                    },
                )
                .await?;
            output::print_move(&format!("folder {}", path), &report, format);
        }
        FolderCommand::Up { path } => {
            let report = service
                .move_item_by_offset(&TreeItemRef::folder(path.clone()), -1)
                .await?;
            output::print_move(&format!("folder {}", path), &report, format);
        }
        FolderCommand::Down { path } => {
            let report = service
                .move_item_by_offset(&TreeItemRef::folder(path.clone()), 1)
                .await?;
            output::print_move(&format!("folder {}", path), &report, format);
        }
        FolderCommand::ToFolder { path, to } => {
            let report = service
                .move_item_to_folder(&TreeItemRef::folder(path.clone()), to)
                .await?;
            output::print_move(&format!("folder {}", path), &report, format);
        }
    }

    Ok(())
}
