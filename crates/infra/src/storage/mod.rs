//! Persistence boundary for the stock list.
//!
//! The JSON codec is shared by every backend; backends only decide where the
//! document lives.

pub mod codec;
pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use codec::CodecError;
pub use in_memory::InMemoryStorage;
pub use json_file::{DEFAULT_INVENTORY_FILE, JsonFileStorage};
pub use r#trait::{InventoryStorage, StorageError};
