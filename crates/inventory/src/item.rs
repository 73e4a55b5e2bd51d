use serde::{Deserialize, Serialize};

/// A named stock record.
///
/// Field names are part of the on-disk format and must stay `name` / `stock`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub stock: i64,
}

impl Item {
    pub fn new(name: impl Into<String>, stock: i64) -> Self {
        Self {
            name: name.into(),
            stock,
        }
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} (Stock: {})", self.name, self.stock)
    }
}
