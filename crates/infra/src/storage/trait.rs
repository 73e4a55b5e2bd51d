use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use stockpile_inventory::Inventory;
use thiserror::Error;

use super::codec::CodecError;

/// Storage operation error.
///
/// Every variant is fatal for the running process: the in-memory inventory
/// can no longer be assumed to match durable state.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read inventory file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("inventory file {} is corrupt: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    #[error("failed to encode inventory: {0}")]
    Encode(#[source] CodecError),

    #[error("failed to write inventory file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("storage backend unavailable: {0}")]
    Backend(String),
}

/// Durable home of the inventory.
///
/// ## Load Semantics
///
/// `load()` returns an empty inventory when nothing has been saved yet.
/// Anything present but unreadable or undecodable is an error, never an
/// empty inventory.
///
/// ## Save Semantics
///
/// `save()` replaces the whole persisted state. Once it returns `Ok`, a
/// subsequent `load()` yields exactly the saved items, in order.
pub trait InventoryStorage {
    /// Short backend name used in logs.
    fn name(&self) -> &str;

    fn load(&self) -> Result<Inventory, StorageError>;

    fn save(&self, inventory: &Inventory) -> Result<(), StorageError>;
}

impl<S> InventoryStorage for Arc<S>
where
    S: InventoryStorage + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn load(&self) -> Result<Inventory, StorageError> {
        (**self).load()
    }

    fn save(&self, inventory: &Inventory) -> Result<(), StorageError> {
        (**self).save(inventory)
    }
}
