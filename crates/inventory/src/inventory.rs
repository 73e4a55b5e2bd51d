use serde::{Deserialize, Serialize};

use stockpile_core::{Aggregate, DomainError, Event};

use crate::input::{self, MISSING_ITEM_FIELDS};
use crate::item::Item;

/// Aggregate root: the ordered stock list.
///
/// Order is insertion order and doubles as the addressing scheme: the item at
/// index `i` is displayed, and deleted, as position `i + 1`.
///
/// Equality compares items only; `version` is local to the running process.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<Item>,
    version: u64,
}

impl PartialEq for Inventory {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for Inventory {}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hydrate from previously persisted items (version starts at 0).
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items, version: 0 }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at a 1-based position.
    pub fn get(&self, position: usize) -> Option<&Item> {
        position.checked_sub(1).and_then(|idx| self.items.get(idx))
    }

    /// Lazy view pairing each item with its 1-based position.
    pub fn list(&self) -> Rows<'_> {
        Rows {
            inner: self.items.iter().enumerate(),
        }
    }
}

/// A display row: 1-based position plus the item shown there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'a> {
    pub position: usize,
    pub item: &'a Item,
}

impl core::fmt::Display for Row<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}] {}", self.position, self.item)
    }
}

/// Iterator returned by [`Inventory::list`]. Cloning restarts from the current point.
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    inner: core::iter::Enumerate<core::slice::Iter<'a, Item>>,
}

impl<'a> Iterator for Rows<'a> {
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(idx, item)| Row { position: idx + 1, item })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Rows<'_> {}

/// Command: AddItem. Fields hold the raw text typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItem {
    pub name: String,
    pub stock: String,
}

/// Command: DeleteItem. `position` is the raw 1-based text typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteItem {
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryCommand {
    AddItem(AddItem),
    DeleteItem(DeleteItem),
}

impl InventoryCommand {
    pub fn add(name: impl Into<String>, stock: impl Into<String>) -> Self {
        Self::AddItem(AddItem {
            name: name.into(),
            stock: stock.into(),
        })
    }

    pub fn delete(position: impl Into<String>) -> Self {
        Self::DeleteItem(DeleteItem {
            position: position.into(),
        })
    }
}

/// Event: ItemAdded. `position` is where the item landed (always last).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub position: usize,
    pub item: Item,
}

/// Event: ItemRemoved. `position` is where the item was before removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub position: usize,
    pub item: Item,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    ItemAdded(ItemAdded),
    ItemRemoved(ItemRemoved),
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ItemAdded(_) => "inventory.item.added",
            InventoryEvent::ItemRemoved(_) => "inventory.item.removed",
        }
    }
}

impl core::fmt::Display for InventoryEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InventoryEvent::ItemAdded(e) => write!(f, "Item [{}] {} added.", e.position, e.item.name),
            InventoryEvent::ItemRemoved(e) => write!(f, "Item [{}] deleted.", e.position),
        }
    }
}

impl Aggregate for Inventory {
    type Command = InventoryCommand;
    type Event = InventoryEvent;
    type Error = DomainError;

    fn version(&self) -> u64 {
        self.version
    }

    /// Events come from [`Inventory::handle`] on the same state, so an
    /// `ItemRemoved` position is always within `1..=len`.
    fn apply(&mut self, event: &Self::Event) {
        match event {
            InventoryEvent::ItemAdded(e) => {
                self.items.push(e.item.clone());
            }
            InventoryEvent::ItemRemoved(e) => {
                debug_assert!(
                    (1..=self.items.len()).contains(&e.position),
                    "removal at {} outside 1..={}",
                    e.position,
                    self.items.len()
                );
                if (1..=self.items.len()).contains(&e.position) {
                    self.items.remove(e.position - 1);
                }
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            InventoryCommand::AddItem(cmd) => self.handle_add(cmd),
            InventoryCommand::DeleteItem(cmd) => self.handle_delete(cmd),
        }
    }
}

impl Inventory {
    fn handle_add(&self, cmd: &AddItem) -> Result<Vec<InventoryEvent>, DomainError> {
        if cmd.name.is_empty() || cmd.stock.is_empty() {
            return Err(DomainError::validation(MISSING_ITEM_FIELDS));
        }
        let stock = input::parse_stock(&cmd.stock)?;

        Ok(vec![InventoryEvent::ItemAdded(ItemAdded {
            position: self.items.len() + 1,
            item: Item::new(cmd.name.clone(), stock),
        })])
    }

    fn handle_delete(&self, cmd: &DeleteItem) -> Result<Vec<InventoryEvent>, DomainError> {
        let idx = input::parse_position(&cmd.position, self.items.len())?;

        Ok(vec![InventoryEvent::ItemRemoved(ItemRemoved {
            position: idx + 1,
            item: self.items[idx].clone(),
        })])
    }
}
