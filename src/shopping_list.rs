//! # Shopping List Management
//!
//! Keeps parsed ingredients and their checked-off state as two independent
//! pieces of state, matching how they are persisted by the local store.
//! Incoming records are deduplicated against the existing list by
//! case-insensitive name comparison and are never mutated in place.

use crate::recipe_parser::Ingredient;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// An ordered shopping list plus the set of checked-off item ids.
#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    items: Vec<Ingredient>,
    checked: HashSet<String>,
}

impl ShoppingList {
    /// Create an empty shopping list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a list from persisted state.
    ///
    /// Checked ids that no longer match an item are dropped so the two
    /// pieces of state cannot drift apart across restarts.
    pub fn from_parts(items: Vec<Ingredient>, checked_ids: Vec<String>) -> Self {
        let known: HashSet<&str> = items.iter().map(|item| item.id.as_str()).collect();
        let checked = checked_ids
            .into_iter()
            .filter(|id| known.contains(id.as_str()))
            .collect();
        Self { items, checked }
    }

    /// Append ingredients whose names are not already on the list.
    ///
    /// Deduplication compares case-insensitively against the list as it was
    /// before this call; records are cloned in, never mutated. Returns the
    /// number of items actually added.
    pub fn add_ingredients(&mut self, ingredients: &[Ingredient]) -> usize {
        let existing: HashSet<String> = self
            .items
            .iter()
            .map(|item| item.name.to_lowercase())
            .collect();

        let mut added = 0;
        for ingredient in ingredients {
            if existing.contains(&ingredient.name.to_lowercase()) {
                debug!(name = %ingredient.name, "skipping duplicate ingredient");
                continue;
            }
            self.items.push(ingredient.clone());
            added += 1;
        }

        debug!(added, total = self.items.len(), "ingredients added to list");
        added
    }

    /// Case-insensitive name lookup.
    pub fn contains_name(&self, name: &str) -> bool {
        let needle = name.to_lowercase();
        self.items
            .iter()
            .any(|item| item.name.to_lowercase() == needle)
    }

    /// Remove an item by id; its checked flag goes with it.
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.checked.remove(id);
        self.items.len() != before
    }

    /// Flip the checked state of an item. Unknown ids are ignored.
    pub fn toggle_checked(&mut self, id: &str) {
        if !self.items.iter().any(|item| item.id == id) {
            return;
        }
        if !self.checked.remove(id) {
            self.checked.insert(id.to_string());
        }
    }

    /// Whether an item is currently checked off.
    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.contains(id)
    }

    /// Drop every checked item and reset the checked set.
    ///
    /// Returns the number of items removed.
    pub fn remove_checked(&mut self) -> usize {
        let before = self.items.len();
        let checked = std::mem::take(&mut self.checked);
        self.items.retain(|item| !checked.contains(&item.id));
        before - self.items.len()
    }

    /// Empty the list and the checked set.
    pub fn clear(&mut self) {
        self.items.clear();
        self.checked.clear();
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Ingredient] {
        &self.items
    }

    /// Checked ids in list order, ready for persistence.
    pub fn checked_ids(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| self.checked.contains(&item.id))
            .map(|item| item.id.clone())
            .collect()
    }

    /// Whether the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items on the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Snapshot counters for display.
    pub fn stats(&self) -> ShoppingListStats {
        let total = self.items.len();
        let checked = self.checked.len();
        ShoppingListStats {
            total,
            checked,
            remaining: total - checked,
        }
    }
}

/// Counters shown alongside the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListStats {
    /// Items on the list.
    pub total: usize,
    /// Items checked off.
    pub checked: usize,
    /// Items still to buy.
    pub remaining: usize,
}

/// Thread-safe handle for callers sharing one list.
pub type SharedShoppingList = Arc<Mutex<ShoppingList>>;

/// Create a new shared shopping list instance.
pub fn create_shared_list() -> SharedShoppingList {
    Arc::new(Mutex::new(ShoppingList::new()))
}
