//! Command management CLI commands.

use clap::{Args, Subcommand};

use cmdtree_core::config::AppConfig;
use cmdtree_core::error::AppError;
use cmdtree_core::types::{DropPosition, FolderPath};
use cmdtree_entity::Command;
use cmdtree_service::moves::{CommandDescriptor, CommandDestination};
use cmdtree_service::reorder::TreeItemRef;

use crate::output::{self, OutputFormat};

/// Arguments for command commands
#[derive(Debug, Args)]
pub struct CommandArgs {
    /// Command subcommand
    #[command(subcommand)]
    pub command: CommandCommand,
}

/// Command subcommands
#[derive(Debug, Subcommand)]
pub enum CommandCommand {
    /// Add a command to a folder
    Add {
        /// Folder path, e.g. `0/1`
        #[arg(long)]
        folder: FolderPath,
        /// Display label
        #[arg(long)]
        label: String,
        /// Shell command line
        #[arg(long = "run")]
        run: String,
        /// Command id (generated when omitted)
        #[arg(long)]
        id: Option<String>,
        /// Tooltip description
        #[arg(long)]
        description: Option<String>,
    },
    /// Remove a command
    Remove {
        /// Command id
        id: String,
    },
    /// Move a command to a folder and index
    Move {
        /// Command id
        id: String,
        /// Folder currently holding the command (looked up when omitted)
        #[arg(long)]
        from: Option<FolderPath>,
        /// Destination folder path
        #[arg(long)]
        to: FolderPath,
        /// Destination index (appends when omitted)
        #[arg(long)]
        index: Option<usize>,
        /// Placement relative to the index
        #[arg(long, default_value_t = DropPosition::Before)]
        position: DropPosition,
    },
    /// Move a command one slot up
    Up {
        /// Command id
        id: String,
    },
    /// Move a command one slot down
    Down {
        /// Command id
        id: String,
    },
    /// Append a command to another folder
    ToFolder {
        /// Command id
        id: String,
        /// Destination folder path
        #[arg(long)]
        to: FolderPath,
    },
}

/// Execute command commands
pub async fn execute(
    args: &CommandArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let service = super::open_service(config);

    match &args.command {
        CommandCommand::Add {
            folder,
            label,
            run,
            id,
            description,
        } => {
            let mut command = Command::new(id.clone().unwrap_or_default(), label, run);
            if let Some(description) = description {
                command = command.with_description(description);
            }
            let location = service.add_command(folder, command).await?;
            match format {
                OutputFormat::Json => output::print_json(&location),
                OutputFormat::Table => output::print_success(&format!(
                    "Command '{}' added to {} (index {})",
                    label, location.folder, location.index
                )),
            }
        }
        CommandCommand::Remove { id } => {
            let removed = service.remove_command(id).await?;
            match format {
                OutputFormat::Json => output::print_json(&removed),
                OutputFormat::Table => output::print_success(&format!(
                    "Command '{}' ({}) removed",
                    removed.label, removed.id
                )),
            }
        }
        CommandCommand::Move {
            id,
            from,
            to,
            index,
            position,
        } => {
            let source_folder = super::locate_command(&service, id, from.as_ref()).await?;
            let report = service
                .move_command(
                    &CommandDescriptor::new(source_folder, id.as_str()),
                    &CommandDestination {
                        folder_path: to.clone(),
                        index: *index,
                        position: *position,
                    },
                )
                .await?;
            output::print_move(&format!("command '{}'", id), &report, format);
        }
        CommandCommand::Up { id } | CommandCommand::Down { id } => {
            let offset = match args.command {
                CommandCommand::Up { .. } => -1,
                _ => 1,
            };
            let folder_path = super::locate_command(&service, id, None).await?;
            let report = service
                .move_item_by_offset(&TreeItemRef::command(folder_path, id.as_str()), offset)
                .await?;
            output::print_move(&format!("command '{}'", id), &report, format);
        }
        CommandCommand::ToFolder { id, to } => {
            let folder_path = super::locate_command(&service, id, None).await?;
            let report = service
                .move_item_to_folder(&TreeItemRef::command(folder_path, id.as_str()), to)
                .await?;
            output::print_move(&format!("command '{}'", id), &report, format);
        }
    }

    Ok(())
}
