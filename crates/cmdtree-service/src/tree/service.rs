//! Load, mutate, save and publish, one operation at a time.

use std::sync::Arc;

use tokio::sync::{Mutex, broadcast};
use tracing::{debug, info, warn};

use cmdtree_core::config::events::EventsConfig;
use cmdtree_core::error::AppError;
use cmdtree_core::events::{DomainEvent, TreeEvent};
use cmdtree_core::result::AppResult;
use cmdtree_core::traits::DocumentStore;
use cmdtree_core::types::{DropPosition, FolderPath};
use cmdtree_entity::{Command, CommandConfig, CommandLocation, Folder};

use crate::moves::{
    CommandDescriptor, CommandDestination, FolderDescriptor, FolderDestination, MoveReport,
    get_folder_at_path, get_folder_at_path_mut, get_folder_collection_mut,
    remove_folder_from_config, try_move_command, try_move_folder,
};
use crate::reorder::{
    DropTarget, TreeItemRef, try_apply_drop, try_move_item_by_offset, try_move_item_to_folder,
};

/// Owns the store and the refresh channel.
///
/// Every mutating call reads the whole tree, applies one engine operation,
/// and writes the whole tree back only if the operation succeeded. Calls are
/// serialized so load/save pairs never interleave.
#[derive(Debug)]
pub struct TreeService {
    /// Backing store.
    store: Arc<dyn DocumentStore<CommandConfig>>,
    /// Refresh event publisher.
    events: broadcast::Sender<DomainEvent>,
    /// Serializes load-mutate-save cycles.
    write_lock: Mutex<()>,
}

impl TreeService {
    /// Creates a new tree service.
    pub fn new(store: Arc<dyn DocumentStore<CommandConfig>>, config: &EventsConfig) -> Self {
        let (events, _) = broadcast::channel(config.buffer_size.max(1));
        Self {
            store,
            events,
            write_lock: Mutex::new(()),
        }
    }

    /// Subscribe to refresh events.
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.events.subscribe()
    }

    /// Describe the backing store.
    pub fn store_description(&self) -> String {
        self.store.describe()
    }

    /// Load and validate the current tree.
    pub async fn load(&self) -> AppResult<CommandConfig> {
        let config = self.store.load().await?;
        config.validate()?;
        Ok(config)
    }

    /// Move a command.
    pub async fn move_command(
        &self,
        source: &CommandDescriptor,
        destination: &CommandDestination,
    ) -> AppResult<MoveReport> {
        self.mutate("move_command", |config| {
            let report = try_move_command(config, source, destination)?;
            let event = command_moved(&source.command_id, &report);
            Ok((report, event))
        })
        .await
    }

    /// Move a folder.
    pub async fn move_folder(
        &self,
        source: &FolderDescriptor,
        destination: &FolderDestination,
    ) -> AppResult<MoveReport> {
        self.mutate("move_folder", |config| {
            let report = try_move_folder(config, source, destination)?;
            let event = folder_moved(config, &report);
            Ok((report, event))
        })
        .await
    }

    /// Shift an item among its siblings ("move up" is `-1`, "move down" `+1`).
    pub async fn move_item_by_offset(
        &self,
        item: &TreeItemRef,
        offset: isize,
    ) -> AppResult<MoveReport> {
        self.mutate("move_item_by_offset", |config| {
            let report = try_move_item_by_offset(config, item, offset)?;
            let event = item_moved(config, item, &report);
            Ok((report, event))
        })
        .await
    }

    /// Append an item to a folder.
    pub async fn move_item_to_folder(
        &self,
        item: &TreeItemRef,
        folder_path: &FolderPath,
    ) -> AppResult<MoveReport> {
        self.mutate("move_item_to_folder", |config| {
            let report = try_move_item_to_folder(config, item, folder_path)?;
            let event = item_moved(config, item, &report);
            Ok((report, event))
        })
        .await
    }

    /// Apply a drag-and-drop gesture.
    pub async fn drop_item(
        &self,
        source: &TreeItemRef,
        target: Option<&DropTarget>,
        position: DropPosition,
    ) -> AppResult<MoveReport> {
        self.mutate("drop_item", |config| {
            let report = try_apply_drop(config, source, target, position)?;
            let event = item_moved(config, source, &report);
            Ok((report, event))
        })
        .await
    }

    /// Append a new folder under `parent_path` (`[]` = root). Returns its path.
    pub async fn add_folder(&self, parent_path: &FolderPath, folder: Folder) -> AppResult<FolderPath> {
        if folder.name.trim().is_empty() {
            return Err(AppError::validation("Folder name must not be empty"));
        }
        self.mutate("add_folder", |config| {
            let siblings = get_folder_collection_mut(&mut config.folders, parent_path)
                .ok_or_else(|| AppError::not_found(format!("No folder at path {parent_path}")))?;
            let name = folder.name.clone();
            siblings.push(folder);
            let path = parent_path.child(siblings.len() - 1);
            let event = TreeEvent::FolderAdded {
                name,
                path: path.clone(),
            };
            Ok((path, event))
        })
        .await
    }

    /// Append a command to the folder at `folder_path`.
    ///
    /// An empty id is replaced with a generated one; an id already used
    /// anywhere in the tree is rejected.
    pub async fn add_command(
        &self,
        folder_path: &FolderPath,
        mut command: Command,
    ) -> AppResult<CommandLocation> {
        if command.id.trim().is_empty() {
            command.id = Command::generate_id();
        }
        self.mutate("add_command", |config| {
            if config.command(&command.id).is_some() {
                return Err(AppError::conflict(format!(
                    "Command id '{}' is already in use",
                    command.id
                )));
            }
            let folder = get_folder_at_path_mut(&mut config.folders, folder_path)
                .ok_or_else(|| AppError::not_found(format!("No folder at path {folder_path}")))?;
            let command_id = command.id.clone();
            folder.commands.push(command);
            let location = CommandLocation {
                folder: folder_path.clone(),
                index: folder.commands.len() - 1,
            };
            let event = TreeEvent::CommandAdded {
                command_id,
                folder: folder_path.clone(),
            };
            Ok((location, event))
        })
        .await
    }

    /// Remove a command by id, wherever it is.
    pub async fn remove_command(&self, command_id: &str) -> AppResult<Command> {
        self.mutate("remove_command", |config| {
            let location = config
                .find_command(command_id)
                .ok_or_else(|| AppError::not_found(format!("Command '{command_id}' not found")))?;
            let folder = get_folder_at_path_mut(&mut config.folders, &location.folder)
                .ok_or_else(|| AppError::internal("Command location no longer resolves"))?;
            let command = folder.commands.remove(location.index);
            let event = TreeEvent::CommandRemoved {
                command_id: command.id.clone(),
                folder: location.folder,
            };
            Ok((command, event))
        })
        .await
    }

    /// Remove a folder and everything in it.
    pub async fn remove_folder(&self, path: &FolderPath) -> AppResult<Folder> {
        self.mutate("remove_folder", |config| {
            let removed = remove_folder_from_config(config, path)
                .ok_or_else(|| AppError::not_found(format!("No folder at path {path}")))?;
            let event = TreeEvent::FolderRemoved {
                name: removed.folder.name.clone(),
                path: path.clone(),
            };
            Ok((removed.folder, event))
        })
        .await
    }

    /// Run one load-mutate-save cycle and publish its event.
    async fn mutate<T, F>(&self, operation: &'static str, apply: F) -> AppResult<T>
    where
        F: FnOnce(&mut CommandConfig) -> AppResult<(T, TreeEvent)>,
    {
        let _guard = self.write_lock.lock().await;
        let mut config = self.load().await?;

        let (value, event) = match apply(&mut config) {
            Ok(result) => result,
            Err(e) => {
                warn!(operation, error = %e, "Tree operation rejected");
                return Err(e);
            }
        };

        self.store.save(&config).await?;
        info!(operation, event = event.kind(), store = %self.store.describe(), "Tree updated");

        if self.events.send(DomainEvent::new(event)).is_err() {
            debug!(operation, "No refresh subscribers");
        }
        Ok(value)
    }
}

fn command_moved(command_id: &str, report: &MoveReport) -> TreeEvent {
    TreeEvent::CommandMoved {
        command_id: command_id.to_string(),
        from_folder: report.from.clone(),
        to_folder: report.to.clone(),
        index: report.index,
    }
}

fn folder_moved(config: &CommandConfig, report: &MoveReport) -> TreeEvent {
    TreeEvent::FolderMoved {
        name: get_folder_at_path(&config.folders, &report.to)
            .map(|f| f.name.clone())
            .unwrap_or_default(),
        from_path: report.from.clone(),
        to_path: report.to.clone(),
    }
}

fn item_moved(config: &CommandConfig, item: &TreeItemRef, report: &MoveReport) -> TreeEvent {
    match item {
        TreeItemRef::Command { command_id, .. } => command_moved(command_id, report),
        TreeItemRef::Folder { .. } => folder_moved(config, report),
    }
}
