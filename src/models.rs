//! Frontend Models
//!
//! Data structures for the inventory view.

use serde::{Deserialize, Serialize};

/// Quantity below which a record is flagged as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// A single inventory record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    /// UI mode flag, not part of record identity
    #[serde(skip)]
    pub is_editing: bool,
}

impl InventoryItem {
    pub fn new(id: u32, name: impl Into<String>, category: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            quantity,
            is_editing: false,
        }
    }

    pub fn is_low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }
}

/// Raw form values, quantity kept as text until it is parsed on commit.
///
/// Used both for the new-item form and for per-row edit drafts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub category: String,
    pub quantity: String,
}

/// Direction the next quantity sort will apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}
