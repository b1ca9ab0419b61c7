//! Inventory Collection
//!
//! Canonical record collection and the operations that mutate it, plus
//! the display-only projections derived from it. All UI state flows
//! through here so render code never touches the collection directly.

use std::cmp::Reverse;

use thiserror::Error;

use crate::models::{InventoryItem, ItemDraft, SortOrder};

/// Rejected user input. Recoverable; the triggering operation is
/// aborted and the entered values stay in place for correction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields!")]
    MissingFields,
    #[error("Invalid input. Please check your values.")]
    InvalidInput,
}

/// The canonical ordered record collection.
///
/// Owns the id allocator and the sort-direction flag. Fields are
/// private; the methods below are the only mutation surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    items: Vec<InventoryItem>,
    sort_order: SortOrder,
    next_id: u32,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::with_items(Vec::new())
    }
}

impl Inventory {
    /// Build from existing records, seeding the id allocator past them.
    pub fn with_items(items: Vec<InventoryItem>) -> Self {
        let next_id = items.iter().map(|item| item.id).max().map_or(1, |id| id + 1);
        Self {
            items,
            sort_order: SortOrder::Asc,
            next_id,
        }
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a new record built from the draft.
    ///
    /// Rejects empty fields and non-numeric quantity; on success the
    /// record gets a fresh unique id and the new id is returned.
    pub fn add(&mut self, draft: &ItemDraft) -> Result<u32, ValidationError> {
        let name = draft.name.trim();
        let category = draft.category.trim();
        let quantity_text = draft.quantity.trim();
        if name.is_empty() || category.is_empty() || quantity_text.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        let quantity = quantity_text
            .parse::<u32>()
            .map_err(|_| ValidationError::InvalidInput)?;

        let id = self.allocate_id();
        self.items
            .push(InventoryItem::new(id, name, category, quantity));
        Ok(id)
    }

    /// Flip edit mode on the matching record. Unknown ids are ignored.
    pub fn toggle_edit(&mut self, id: u32) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.is_editing = !item.is_editing;
        }
    }

    /// Commit an in-progress edit into the matching record.
    ///
    /// Rejects empty name/category and non-numeric quantity; the record
    /// then stays in edit mode. On success the record leaves edit mode.
    pub fn save_edit(&mut self, id: u32, draft: &ItemDraft) -> Result<(), ValidationError> {
        let name = draft.name.trim();
        let category = draft.category.trim();
        if name.is_empty() || category.is_empty() {
            return Err(ValidationError::InvalidInput);
        }
        let quantity = draft
            .quantity
            .trim()
            .parse::<u32>()
            .map_err(|_| ValidationError::InvalidInput)?;

        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.name = name.to_string();
            item.category = category.to_string();
            item.quantity = quantity;
            item.is_editing = false;
        }
        Ok(())
    }

    /// Remove the matching record regardless of edit state.
    pub fn delete(&mut self, id: u32) {
        self.items.retain(|item| item.id != id);
    }

    /// Stable-sort the full collection by quantity in the current
    /// direction, then flip the direction for the next invocation.
    pub fn sort_by_quantity(&mut self) {
        match self.sort_order {
            SortOrder::Asc => self.items.sort_by_key(|item| item.quantity),
            SortOrder::Desc => self.items.sort_by_key(|item| Reverse(item.quantity)),
        }
        self.sort_order = self.sort_order.flipped();
    }
}

/// Unique category values in first-seen order.
pub fn distinct_categories(items: &[InventoryItem]) -> Vec<String> {
    let mut categories = Vec::new();
    for item in items {
        if !categories.contains(&item.category) {
            categories.push(item.category.clone());
        }
    }
    categories
}

/// Records matching the selected category, in their current order.
///
/// An empty selection is the identity projection. A selection with no
/// matching records yields an empty view; the selection itself is kept.
pub fn apply_filter(items: &[InventoryItem], selected_category: &str) -> Vec<InventoryItem> {
    if selected_category.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.category == selected_category)
        .cloned()
        .collect()
}
