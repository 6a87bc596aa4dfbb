//! Tree inspection CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use cmdtree_core::config::AppConfig;
use cmdtree_core::error::AppError;
use cmdtree_entity::{TreeRow, TreeRowKind};

use crate::output::{self, OutputFormat};

/// Arguments for tree commands
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Tree subcommand
    #[command(subcommand)]
    pub command: TreeCommand,
}

/// Tree subcommands
#[derive(Debug, Subcommand)]
pub enum TreeCommand {
    /// Show folders and commands
    Show {
        /// Max folder depth (1 = root folders only)
        #[arg(short, long)]
        depth: Option<usize>,
    },
    /// Check the stored tree for duplicate or empty command ids
    Validate,
}

/// Tree display row
#[derive(Debug, Serialize, Tabled)]
struct TreeLine {
    /// Folder path
    path: String,
    /// Index among siblings
    index: usize,
    /// Indented name
    name: String,
    /// Command id
    id: String,
    /// Command line or folder description
    detail: String,
}

impl From<TreeRow> for TreeLine {
    fn from(row: TreeRow) -> Self {
        let marker = match row.kind {
            TreeRowKind::Folder => "▸ ",
            TreeRowKind::Command => "",
        };
        Self {
            path: row.path.to_string(),
            index: row.index,
            name: format!("{}{}{}", "  ".repeat(row.depth), marker, row.name),
            id: row.id.unwrap_or_default(),
            detail: row.detail.unwrap_or_default(),
        }
    }
}

/// Execute tree commands
pub async fn execute(
    args: &TreeArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let service = super::open_service(config);
    let tree = service.load().await?;

    match &args.command {
        TreeCommand::Show { depth } => match format {
            OutputFormat::Json => output::print_json(&tree),
            OutputFormat::Table => {
                let lines: Vec<TreeLine> =
                    tree.rows(*depth).into_iter().map(TreeLine::from).collect();
                output::print_list(&lines, format);
            }
        },
        TreeCommand::Validate => {
            let summary = tree.summary();
            match format {
                OutputFormat::Json => output::print_json(&summary),
                OutputFormat::Table => {
                    output::print_success(&format!(
                        "Tree '{}' is valid",
                        service.store_description()
                    ));
                    output::print_kv("Folders", &summary.total_folders.to_string());
                    output::print_kv("Commands", &summary.total_commands.to_string());
                    output::print_kv("Max depth", &summary.max_depth.to_string());
                }
            }
        }
    }

    Ok(())
}
