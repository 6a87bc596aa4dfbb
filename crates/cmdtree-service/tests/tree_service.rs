//! TreeService against an in-memory store.

use std::sync::Arc;

use cmdtree_core::config::events::EventsConfig;
use cmdtree_core::error::ErrorKind;
use cmdtree_core::events::TreeEvent;
use cmdtree_core::types::{DropPosition, FolderPath};
use cmdtree_entity::{Command, CommandConfig, Folder};
use cmdtree_service::TreeService;
use cmdtree_service::moves::{
    CommandDescriptor, CommandDestination, FolderDescriptor, FolderDestination,
};
use cmdtree_service::reorder::{DropTarget, TreeItemRef};
use cmdtree_storage::MemoryStore;

fn seed() -> CommandConfig {
    CommandConfig::new(vec![
        Folder::new("Build")
            .with_command(Command::new("build-debug", "Debug", "cargo build"))
            .with_command(Command::new("build-release", "Release", "cargo build --release")),
        Folder::new("Test").with_command(Command::new("test-all", "All", "cargo test")),
    ])
}

fn service_with(store: &Arc<MemoryStore>) -> TreeService {
    TreeService::new(store.clone(), &EventsConfig::default())
}

#[tokio::test]
async fn successful_move_saves_and_publishes() {
    let store = Arc::new(MemoryStore::new(seed()));
    let service = service_with(&store);
    let mut events = service.subscribe();

    let report = service
        .move_command(
            &CommandDescriptor::new([0], "build-release"),
            &CommandDestination::into_folder([1]),
        )
        .await
        .unwrap();

    assert_eq!(report.to, FolderPath::from([1]));
    assert_eq!(report.index, 1);
    assert_eq!(store.save_count().await, 1);

    let saved = store.snapshot().await;
    assert_eq!(saved.folders[1].commands[1].id, "build-release");

    let event = events.recv().await.unwrap();
    match event.payload {
        TreeEvent::CommandMoved {
            command_id,
            from_folder,
            to_folder,
            index,
        } => {
            assert_eq!(command_id, "build-release");
            assert_eq!(from_folder, FolderPath::from([0]));
            assert_eq!(to_folder, FolderPath::from([1]));
            assert_eq!(index, 1);
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn rejected_move_is_not_saved() {
    let store = Arc::new(MemoryStore::new(seed()));
    let service = service_with(&store);
    let mut events = service.subscribe();

    let err = service
        .move_command(
            &CommandDescriptor::new([0], "missing"),
            &CommandDestination::into_folder([1]),
        )
        .await
        .unwrap_err();
    assert!(err.is(ErrorKind::NotFound));

    let err = service
        .move_folder(
            &FolderDescriptor::new([0]),
            &FolderDestination::into_folder([0]),
        )
        .await
        .unwrap_err();
    assert!(err.is(ErrorKind::Validation));

    let err = service
        .move_item_by_offset(&TreeItemRef::folder([0]), -1)
        .await
        .unwrap_err();
    assert!(err.is(ErrorKind::Conflict));

    assert_eq!(store.save_count().await, 0);
    assert_eq!(store.snapshot().await, seed());
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn folder_move_event_names_the_folder() {
    let store = Arc::new(MemoryStore::new(seed()));
    let service = service_with(&store);
    let mut events = service.subscribe();

    let report = service
        .move_folder(
            &FolderDescriptor::new([0]),
            &FolderDestination::at(FolderPath::root(), 1, DropPosition::After),
        )
        .await
        .unwrap();
    assert_eq!(report.to, FolderPath::from([1]));
    assert_eq!(store.snapshot().await.folder_names(), vec!["Test", "Build"]);

    match events.recv().await.unwrap().payload {
        TreeEvent::FolderMoved { name, from_path, to_path } => {
            assert_eq!(name, "Build");
            assert_eq!(from_path, FolderPath::from([0]));
            assert_eq!(to_path, FolderPath::from([1]));
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn drop_onto_command_lands_after_it() {
    let store = Arc::new(MemoryStore::new(seed()));
    let service = service_with(&store);

    let target = DropTarget::Command {
        folder_path: FolderPath::from([1]),
        command_id: "test-all".to_string(),
    };
    service
        .drop_item(
            &TreeItemRef::command([0], "build-debug"),
            Some(&target),
            DropPosition::After,
        )
        .await
        .unwrap();

    let saved = store.snapshot().await;
    let ids: Vec<&str> = saved.folders[1].commands.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["test-all", "build-debug"]);
}

#[tokio::test]
async fn add_and_remove_items() {
    let store = Arc::new(MemoryStore::new(seed()));
    let service = service_with(&store);

    let path = service
        .add_folder(&FolderPath::from([1]), Folder::new("Integration"))
        .await
        .unwrap();
    assert_eq!(path, FolderPath::from([1, 0]));

    let location = service
        .add_command(&path, Command::new("", "Smoke", "cargo test --test smoke"))
        .await
        .unwrap();
    assert_eq!(location.folder, path);
    assert_eq!(location.index, 0);

    let tree = service.load().await.unwrap();
    let generated = &tree.folders[1].subfolders[0].commands[0].id;
    assert!(generated.starts_with("cmd-"));

    let removed = service.remove_command(generated).await.unwrap();
    assert_eq!(removed.label, "Smoke");

    let folder = service.remove_folder(&path).await.unwrap();
    assert_eq!(folder.name, "Integration");
    assert_eq!(store.snapshot().await, seed());
    assert_eq!(store.save_count().await, 4);
}

#[tokio::test]
async fn duplicate_and_invalid_additions_are_rejected() {
    let store = Arc::new(MemoryStore::new(seed()));
    let service = service_with(&store);

    let err = service
        .add_command(
            &FolderPath::from([1]),
            Command::new("build-debug", "Copy", "cargo build"),
        )
        .await
        .unwrap_err();
    assert!(err.is(ErrorKind::Conflict));

    let err = service
        .add_command(
            &FolderPath::from([7]),
            Command::new("fresh", "Fresh", "true"),
        )
        .await
        .unwrap_err();
    assert!(err.is(ErrorKind::NotFound));

    let err = service
        .add_folder(&FolderPath::root(), Folder::new("  "))
        .await
        .unwrap_err();
    assert!(err.is(ErrorKind::Validation));

    let err = service.remove_command("ghost").await.unwrap_err();
    assert!(err.is(ErrorKind::NotFound));

    assert_eq!(store.save_count().await, 0);
}

#[tokio::test]
async fn invalid_stored_tree_is_refused() {
    let broken = CommandConfig::new(vec![
        Folder::new("One").with_command(Command::new("same", "A", "a")),
        Folder::new("Two").with_command(Command::new("same", "B", "b")),
    ]);
    let store = Arc::new(MemoryStore::new(broken));
    let service = service_with(&store);

    let err = service
        .move_item_to_folder(&TreeItemRef::command([0], "same"), &FolderPath::from([1]))
        .await
        .unwrap_err();
    assert!(err.is(ErrorKind::Validation));
    assert_eq!(store.save_count().await, 0);
}
