//! In-memory sheet state: the ordered item list plus layout parameters.

use serde::{Deserialize, Serialize};

use crate::types::{Category, ItemId, LayoutParams, SheetItem};

/// A study sheet under construction.
///
/// Items keep insertion order; the renderer regroups them by category, so
/// insertion order only breaks ties within a category. Items are appended and
/// removed whole, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Sheet {
    #[serde(default)]
    pub params: LayoutParams,
    #[serde(default)]
    pub items: Vec<SheetItem>,
}

impl Sheet {
    /// Append a new item, assigning the next free id.
    ///
    /// Blank or whitespace-only content is rejected at this boundary: the
    /// call is a no-op returning `None`, and the renderer never sees an
    /// invalid item.
    pub fn add_item(
        &mut self,
        category: Category,
        label: impl Into<String>,
        content: impl Into<String>,
    ) -> Option<ItemId> {
        let content = content.into();
        if content.trim().is_empty() {
            return None;
        }
        let id = self.next_id();
        self.items.push(SheetItem {
            id,
            category,
            label: label.into(),
            content,
        });
        Some(id)
    }

    /// Remove the item with the given id. Returns `true` if an item was removed.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Next id not used by any live item.
    fn next_id(&self) -> ItemId {
        ItemId(self.items.iter().map(|item| item.id.0).max().unwrap_or(0) + 1)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
