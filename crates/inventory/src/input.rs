//! Parsing of raw text fields captured by the shell.
//!
//! Values arrive exactly as typed. Nothing is trimmed: `" 5"` is not an
//! integer literal.

use std::num::IntErrorKind;

use stockpile_core::{DomainError, DomainResult};

pub const MISSING_ITEM_FIELDS: &str = "Item name and stock are required.";
pub const INVALID_STOCK: &str = "Invalid stock value.";
pub const MISSING_ITEM_ID: &str = "Please enter an item ID to delete.";
pub const INVALID_ITEM_ID: &str = "Invalid item ID.";

/// Parse a stock quantity. Any `i64` literal (optional sign) is accepted.
pub fn parse_stock(text: &str) -> DomainResult<i64> {
    text.parse::<i64>()
        .map_err(|_| DomainError::parse(INVALID_STOCK))
}

/// Parse a 1-based display position and check it against `len`.
///
/// Returns the zero-based index on success.
pub fn parse_position(text: &str, len: usize) -> DomainResult<usize> {
    if text.is_empty() {
        return Err(DomainError::validation(MISSING_ITEM_ID));
    }

    // A literal too wide for i64 is still well formed, just out of range.
    let position = text.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range(len),
        _ => DomainError::parse(INVALID_ITEM_ID),
    })?;

    check_position(position, len)
}

fn check_position(position: i64, len: usize) -> DomainResult<usize> {
    match usize::try_from(position) {
        Ok(p) if (1..=len).contains(&p) => Ok(p - 1),
        _ => Err(out_of_range(len)),
    }
}

fn out_of_range(len: usize) -> DomainError {
    if len == 0 {
        DomainError::range(format!("{INVALID_ITEM_ID} The inventory is empty."))
    } else {
        DomainError::range(format!(
            "{INVALID_ITEM_ID} Choose a number between 1 and {len}."
        ))
    }
}
