//! Inventory domain module.
//!
//! This crate contains the business rules for the stock list, implemented
//! purely as deterministic domain logic (no IO, no terminal, no storage).

pub mod input;
pub mod inventory;
pub mod item;

pub use inventory::{
    AddItem, DeleteItem, Inventory, InventoryCommand, InventoryEvent, ItemAdded, ItemRemoved, Row,
    Rows,
};
pub use item::Item;
