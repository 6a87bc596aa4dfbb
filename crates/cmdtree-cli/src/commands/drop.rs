//! Drag-and-drop CLI command.
//!
//! Replays a tree-view drop: the dragged item, the row it was released on
//! (none for empty space), and the position hint from the transfer data.

use clap::Args;

use cmdtree_core::config::AppConfig;
use cmdtree_core::error::AppError;
use cmdtree_core::types::{DropPosition, FolderPath};
use cmdtree_service::reorder::{DropTarget, TreeItemRef};

use crate::output::{self, OutputFormat};

/// Arguments for the drop command
#[derive(Debug, Args)]
pub struct DropArgs {
    /// Dragged command id
    #[arg(long, conflicts_with = "folder", required_unless_present = "folder")]
    pub command: Option<String>,

    /// Dragged folder path
    #[arg(long)]
    pub folder: Option<FolderPath>,

    /// Folder row the item was dropped on
    #[arg(long, conflicts_with = "onto_command")]
    pub onto_folder: Option<FolderPath>,

    /// Command row the item was dropped on
    #[arg(long)]
    pub onto_command: Option<String>,

    /// Position hint (`before`, `after`, `into`); anything else means `before`
    #[arg(long)]
    pub position: Option<String>,
}

/// Execute the drop command
pub async fn execute(
    args: &DropArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let service = super::open_service(config);

    let (source, subject) = match (&args.command, &args.folder) {
        (Some(id), _) => {
            let folder_path = super::locate_command(&service, id, None).await?;
            (
                TreeItemRef::command(folder_path, id.as_str()),
                format!("command '{}'", id),
            )
        }
        (None, Some(path)) => (TreeItemRef::folder(path.clone()), format!("folder {}", path)),
        (None, None) => {
            return Err(AppError::validation("Either --command or --folder is required"));
        }
    };

    let target = match (&args.onto_folder, &args.onto_command) {
        (Some(path), _) => Some(DropTarget::Folder { path: path.clone() }),
        (None, Some(id)) => Some(DropTarget::Command {
            folder_path: super::locate_command(&service, id, None).await?,
            command_id: id.clone(),
        }),
        (None, None) => None,
    };

    let position = DropPosition::from_transfer(args.position.as_deref());
    let report = service.drop_item(&source, target.as_ref(), position).await?;
    output::print_move(&subject, &report, format);

    Ok(())
}
