//! Infrastructure layer: persistence and the command pipeline around the
//! pure inventory domain.

pub mod command_dispatcher;
pub mod storage;

pub use command_dispatcher::{DispatchError, InventoryStore};
pub use storage::{InMemoryStorage, InventoryStorage, JsonFileStorage, StorageError};
