use std::path::PathBuf;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use stockpile_inventory::Inventory;

use super::codec;
use super::r#trait::{InventoryStorage, StorageError};

const MEMORY_PATH: &str = ":memory:";

/// In-memory storage holding the encoded JSON document.
///
/// Intended for tests and the shell transcript harness. Goes through the same
/// codec as the file backend, so a stored document is byte-identical to what
/// would land on disk.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    document: RwLock<Option<String>>,
    fail_writes: AtomicBool,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing document, as if it had been read from disk.
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: RwLock::new(Some(document.into())),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Currently stored document, if anything was saved.
    pub fn document(&self) -> Option<String> {
        self.document.read().ok().and_then(|doc| doc.clone())
    }

    /// Make every subsequent `save` fail (simulates a full disk).
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl InventoryStorage for InMemoryStorage {
    fn name(&self) -> &str {
        "memory"
    }

    fn load(&self) -> Result<Inventory, StorageError> {
        let document = self
            .document
            .read()
            .map_err(|_| StorageError::Backend("lock poisoned".to_string()))?;

        match document.as_deref() {
            None => Ok(Inventory::new()),
            Some(doc) => codec::decode(doc)
                .map(Inventory::from_items)
                .map_err(|source| StorageError::Decode {
                    path: PathBuf::from(MEMORY_PATH),
                    source,
                }),
        }
    }

    fn save(&self, inventory: &Inventory) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Write {
                path: PathBuf::from(MEMORY_PATH),
                source: std::io::Error::other("simulated write failure"),
            });
        }

        let encoded = codec::encode(inventory.items()).map_err(StorageError::Encode)?;
        let mut document = self
            .document
            .write()
            .map_err(|_| StorageError::Backend("lock poisoned".to_string()))?;
        *document = Some(encoded);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockpile_inventory::Item;

    #[test]
    fn starts_empty_with_no_document() {
        let storage = InMemoryStorage::new();
        assert!(storage.load().unwrap().is_empty());
        assert_eq!(storage.document(), None);
    }

    #[test]
    fn save_stores_the_encoded_document() {
        let storage = InMemoryStorage::new();
        storage
            .save(&Inventory::from_items(vec![Item::new("Screws", 10)]))
            .unwrap();
        assert_eq!(
            storage.document().as_deref(),
            Some("[\n  {\n    \"name\": \"Screws\",\n    \"stock\": 10\n  }\n]\n")
        );
    }

    #[test]
    fn failing_writes_keep_the_previous_document() {
        let storage = InMemoryStorage::with_document("[]");
        storage.fail_writes(true);

        let err = storage
            .save(&Inventory::from_items(vec![Item::new("A", 1)]))
            .unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
        assert_eq!(storage.document().as_deref(), Some("[]"));
    }

    #[test]
    fn corrupt_document_fails_to_load() {
        let storage = InMemoryStorage::with_document("null");
        assert!(matches!(storage.load(), Err(StorageError::Decode { .. })));
    }
}
