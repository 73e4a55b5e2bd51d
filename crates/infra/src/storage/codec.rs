//! JSON encoding of the stock list.
//!
//! The document is a top-level array of `{"name": <string>, "stock": <integer>}`
//! records in display order, pretty-printed with two-space indentation.

use stockpile_inventory::Item;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed inventory document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("item {position} has an empty name")]
    EmptyName { position: usize },
}

/// Encode items as a pretty-printed JSON array with a trailing newline.
///
/// An empty list encodes as `[]`.
pub fn encode(items: &[Item]) -> Result<String, CodecError> {
    let mut document = serde_json::to_string_pretty(items)?;
    document.push('\n');
    Ok(document)
}

/// Decode a JSON array of items.
///
/// Anything other than an array of complete records is rejected, including
/// `null` and an empty document. Unknown fields are ignored.
pub fn decode(document: &str) -> Result<Vec<Item>, CodecError> {
    let items: Vec<Item> = serde_json::from_str(document)?;

    if let Some(idx) = items.iter().position(|item| item.name.is_empty()) {
        return Err(CodecError::EmptyName { position: idx + 1 });
    }

    Ok(items)
}
