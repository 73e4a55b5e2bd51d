//! Command execution pipeline for the stock list.
//!
//! ```text
//! Command
//!   ↓
//! 1. Handle command (pure decision logic, produces events)
//!   ↓
//! 2. Apply events to a candidate copy of the inventory
//!   ↓
//! 3. Save the candidate (synchronous, full overwrite)
//!   ↓
//! 4. Commit the candidate as the current inventory
//! ```
//!
//! Rejected input stops at step 1 and never touches storage. A failed save
//! stops at step 3 and leaves the current inventory as it was, so memory and
//! durable state agree after every returned result.

use stockpile_core::{Aggregate, DomainError, Event};
use stockpile_inventory::{Inventory, InventoryCommand, InventoryEvent, Rows};
use thiserror::Error;

use crate::storage::{InventoryStorage, StorageError};

#[derive(Debug, Error)]
pub enum DispatchError {
    /// Required input was empty.
    #[error("{0}")]
    Validation(String),
    /// Integer input did not parse.
    #[error("{0}")]
    Parse(String),
    /// Position outside the current list.
    #[error("{0}")]
    Range(String),
    /// Persisting failed. The process must not continue.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl DispatchError {
    /// True when the caller has to shut down instead of reporting and carrying on.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DispatchError::Storage(_))
    }
}

impl From<DomainError> for DispatchError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Validation(msg) => DispatchError::Validation(msg),
            DomainError::Parse(msg) => DispatchError::Parse(msg),
            DomainError::Range(msg) => DispatchError::Range(msg),
        }
    }
}

/// Owner of the authoritative in-memory inventory.
///
/// Created once per process via [`InventoryStore::initialize`]; every
/// mutation goes through [`InventoryStore::dispatch`] and is saved before it
/// returns.
#[derive(Debug)]
pub struct InventoryStore<S> {
    storage: S,
    inventory: Inventory,
}

impl<S> InventoryStore<S>
where
    S: InventoryStorage,
{
    /// Hydrate from storage. An empty backend yields an empty inventory.
    pub fn initialize(storage: S) -> Result<Self, StorageError> {
        let inventory = storage.load()?;
        tracing::info!(
            backend = storage.name(),
            items = inventory.len(),
            "inventory store initialized"
        );
        Ok(Self { storage, inventory })
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Display rows, 1-based.
    pub fn list(&self) -> Rows<'_> {
        self.inventory.list()
    }

    pub fn add(&mut self, name: &str, stock: &str) -> Result<Vec<InventoryEvent>, DispatchError> {
        self.dispatch(&InventoryCommand::add(name, stock))
    }

    pub fn delete_by_position(&mut self, position: &str) -> Result<Vec<InventoryEvent>, DispatchError> {
        self.dispatch(&InventoryCommand::delete(position))
    }

    /// Run one command through the pipeline.
    ///
    /// Returns the applied events. On `Err`, the inventory is unchanged.
    pub fn dispatch(&mut self, command: &InventoryCommand) -> Result<Vec<InventoryEvent>, DispatchError> {
        let events = self.inventory.handle(command).map_err(|err| {
            tracing::warn!(?command, error = %err, "command rejected");
            DispatchError::from(err)
        })?;

        if events.is_empty() {
            return Ok(events);
        }

        let mut candidate = self.inventory.clone();
        for event in &events {
            candidate.apply(event);
        }

        if let Err(err) = self.storage.save(&candidate) {
            tracing::error!(backend = self.storage.name(), error = %err, "failed to persist inventory");
            return Err(err.into());
        }

        self.inventory = candidate;
        for event in &events {
            tracing::info!(
                event_type = event.event_type(),
                version = self.inventory.version(),
                items = self.inventory.len(),
                "{event}"
            );
        }

        Ok(events)
    }

    /// Replay commands in order, stopping at the first fatal error.
    ///
    /// Recoverable rejections are collected alongside successes.
    pub fn replay<'a>(
        &mut self,
        commands: impl IntoIterator<Item = &'a InventoryCommand>,
    ) -> Result<Vec<Result<Vec<InventoryEvent>, DispatchError>>, StorageError> {
        let mut results = Vec::new();
        for command in commands {
            match self.dispatch(command) {
                Err(DispatchError::Storage(err)) => return Err(err),
                other => results.push(other),
            }
        }
        Ok(results)
    }
}
