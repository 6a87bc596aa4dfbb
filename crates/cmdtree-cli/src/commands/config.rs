//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use cmdtree_core::config::AppConfig;
use cmdtree_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Check that the configured tree file can be loaded
    Validate,
    /// Generate a default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config/generated.toml")]
        output: String,
    },
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => match format {
            OutputFormat::Json => output::print_json(config),
            OutputFormat::Table => {
                output::print_kv("store.path", &config.store.path);
                output::print_kv("store.pretty", &config.store.pretty.to_string());
                output::print_kv("store.create_missing", &config.store.create_missing.to_string());
                output::print_kv("events.buffer_size", &config.events.buffer_size.to_string());
                output::print_kv("logging.level", &config.logging.level);
                output::print_kv("logging.format", &config.logging.format);
            }
        },
        ConfigCommand::Validate => {
            let service = super::open_service(config);
            match service.load().await {
                Ok(tree) => {
                    let summary = tree.summary();
                    output::print_success("Configuration is valid");
                    output::print_kv("Tree", &service.store_description());
                    output::print_kv("Folders", &summary.total_folders.to_string());
                    output::print_kv("Commands", &summary.total_commands.to_string());
                }
                Err(e) => {
                    output::print_error(&format!("Configuration invalid: {}", e));
                    return Err(e);
                }
            }
        }
        ConfigCommand::Generate { output: out_path } => {
            let default_config = include_str!("../../../../config/default.toml");

            if let Some(parent) = std::path::Path::new(out_path)
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
            {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| AppError::storage(format!("Failed to create dir: {}", e)))?;
            }

            tokio::fs::write(out_path, default_config)
                .await
                .map_err(|e| AppError::storage(format!("Failed to write config: {}", e)))?;

            output::print_success(&format!("Default config written to '{}'", out_path));
        }
    }

    Ok(())
}
