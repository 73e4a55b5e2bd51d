//! Text rendering of the inventory panel and the action menu.

use std::io::{self, Write};

use stockpile_inventory::Row;

pub const INVENTORY_TITLE: &str = "Inventory Items";
pub const EMPTY_INVENTORY: &str = "No items in inventory.";
pub const MENU: &str = "Manage Inventory: [a] Add Item  [d] Delete Item  [q] Exit";
pub const PROMPT: &str = "> ";

/// Write the inventory panel: a title, then one line per row.
pub fn inventory<'a, W: Write>(
    out: &mut W,
    rows: impl ExactSizeIterator<Item = Row<'a>>,
) -> io::Result<()> {
    writeln!(out, "== {INVENTORY_TITLE} ==")?;
    if rows.len() == 0 {
        writeln!(out, "{EMPTY_INVENTORY}")?;
    }
    for row in rows {
        writeln!(out, "{row}")?;
    }
    writeln!(out)
}

pub fn menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{MENU}")?;
    write!(out, "{PROMPT}")?;
    out.flush()
}
