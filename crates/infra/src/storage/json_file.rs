use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use stockpile_inventory::Inventory;
use tempfile::NamedTempFile;

use super::codec;
use super::r#trait::{InventoryStorage, StorageError};

/// Default backing file, relative to the working directory.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";

/// JSON file on the local filesystem.
///
/// Saves go through a temporary file in the same directory which is then
/// renamed over the target, so readers never observe a half-written document.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn write_error(&self, source: io::Error) -> StorageError {
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }

    fn write_atomic(&self, contents: &[u8]) -> io::Result<()> {
        let dir = self.parent_dir();
        fs::create_dir_all(dir)?;

        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(contents)?;
        temp.as_file().sync_all()?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            temp.as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))?;
        }

        temp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl Default for JsonFileStorage {
    fn default() -> Self {
        Self::new(DEFAULT_INVENTORY_FILE)
    }
}

impl InventoryStorage for JsonFileStorage {
    fn name(&self) -> &str {
        "json-file"
    }

    fn load(&self) -> Result<Inventory, StorageError> {
        let document = match fs::read_to_string(&self.path) {
            Ok(document) => document,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no inventory file; starting empty");
                return Ok(Inventory::new());
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let items = codec::decode(&document).map_err(|source| StorageError::Decode {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!(path = %self.path.display(), items = items.len(), "inventory file loaded");
        Ok(Inventory::from_items(items))
    }

    fn save(&self, inventory: &Inventory) -> Result<(), StorageError> {
        let document = codec::encode(inventory.items()).map_err(StorageError::Encode)?;

        self.write_atomic(document.as_bytes())
            .map_err(|e| self.write_error(e))?;

        tracing::debug!(
            path = %self.path.display(),
            items = inventory.len(),
            bytes = document.len(),
            "inventory file saved"
        );
        Ok(())
    }
}
