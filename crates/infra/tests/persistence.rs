//! End-to-end tests: InventoryStore → JsonFileStorage → fresh process reload.

use std::fs;

use stockpile_infra::{DispatchError, InventoryStorage, InventoryStore, JsonFileStorage, StorageError};
use stockpile_inventory::{Inventory, InventoryCommand, Item};
use tempfile::TempDir;

fn file_store(dir: &TempDir) -> InventoryStore<JsonFileStorage> {
    InventoryStore::initialize(JsonFileStorage::new(dir.path().join("inventory.json"))).unwrap()
}

/// Simulates a fresh process start against the same backing file.
fn reload(dir: &TempDir) -> Inventory {
    JsonFileStorage::new(dir.path().join("inventory.json"))
        .load()
        .unwrap()
}

fn rows(store: &InventoryStore<JsonFileStorage>) -> Vec<(usize, Item)> {
    store.list().map(|r| (r.position, r.item.clone())).collect()
}

#[test]
fn add_add_delete_leaves_the_second_item() {
    let dir = TempDir::new().unwrap();
    let mut store = file_store(&dir);

    store.add("Bolts", "100").unwrap();
    store.add("Nails", "50").unwrap();
    store.delete_by_position("1").unwrap();

    assert_eq!(rows(&store), vec![(1, Item::new("Nails", 50))]);
    assert_eq!(&reload(&dir), store.inventory());
}

#[test]
fn existing_file_is_extended_in_order() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("inventory.json"),
        r#"[{"name":"Screws","stock":10}]"#,
    )
    .unwrap();

    let mut store = file_store(&dir);
    store.add("Bolts", "5").unwrap();

    assert_eq!(
        rows(&store),
        vec![(1, Item::new("Screws", 10)), (2, Item::new("Bolts", 5))]
    );
    assert_eq!(&reload(&dir), store.inventory());
}

#[test]
fn every_successful_mutation_is_durable() {
    let dir = TempDir::new().unwrap();
    let mut store = file_store(&dir);

    let commands = [
        InventoryCommand::add("A", "1"),
        InventoryCommand::add("B", "-2"),
        InventoryCommand::add("C", "3"),
        InventoryCommand::delete("2"),
        InventoryCommand::add("D", "4"),
        InventoryCommand::delete("1"),
    ];

    for command in &commands {
        store.dispatch(command).unwrap();
        assert_eq!(&reload(&dir), store.inventory(), "after {command:?}");
    }

    assert_eq!(
        store.inventory().items(),
        &[Item::new("C", 3), Item::new("D", 4)]
    );
}

#[test]
fn rejected_commands_never_create_the_file() {
    let dir = TempDir::new().unwrap();
    let mut store = file_store(&dir);

    assert!(matches!(store.add("", "5"), Err(DispatchError::Validation(_))));
    assert!(matches!(store.add("Widget", "abc"), Err(DispatchError::Parse(_))));
    for position in ["0", "1", "-1"] {
        assert!(matches!(
            store.delete_by_position(position),
            Err(DispatchError::Range(_))
        ));
    }

    assert!(!dir.path().join("inventory.json").exists());
}

#[test]
fn deleting_the_last_item_writes_an_empty_array() {
    let dir = TempDir::new().unwrap();
    let mut store = file_store(&dir);

    store.add("Only", "1").unwrap();
    store.delete_by_position("1").unwrap();

    let contents = fs::read_to_string(dir.path().join("inventory.json")).unwrap();
    assert_eq!(contents, "[]\n");
}

#[test]
fn corrupt_file_refuses_to_start() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("inventory.json"), "not json at all").unwrap();

    let err = InventoryStore::initialize(JsonFileStorage::new(dir.path().join("inventory.json")))
        .unwrap_err();
    assert!(matches!(err, StorageError::Decode { .. }));

    // The corrupt data is left in place for the operator.
    let contents = fs::read_to_string(dir.path().join("inventory.json")).unwrap();
    assert_eq!(contents, "not json at all");
}
