//! # Local Store
//!
//! File-backed persistence for saved recipes and the shopping list. Each
//! piece of state lives in its own JSON file under the data directory:
//! `recipes.json`, `shopping_list.json` and `checked_items.json` (the list
//! and its checked ids are stored independently and reloaded together at
//! startup). A missing file reads as empty state, never as an error. Writes
//! go through a temp-file rename so an interrupted write cannot truncate an
//! existing file.

use crate::recipe_parser::{IdGenerator, Ingredient};
use crate::shopping_list::ShoppingList;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

const RECIPES_FILE: &str = "recipes.json";
const SHOPPING_LIST_FILE: &str = "shopping_list.json";
const CHECKED_ITEMS_FILE: &str = "checked_items.json";

/// A recipe kept in the local store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRecipe {
    pub id: String,
    pub title: String,
    pub ingredients_text: String,
    pub steps_text: String,
    pub created_at: DateTime<Utc>,
}

impl SavedRecipe {
    /// Build a recipe record with a fresh id and the current time.
    pub fn new<G: IdGenerator>(
        ids: &mut G,
        title: &str,
        ingredients_text: &str,
        steps_text: &str,
    ) -> Self {
        Self {
            id: ids.next_id(),
            title: title.to_string(),
            ingredients_text: ingredients_text.to_string(),
            steps_text: steps_text.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Handle to a data directory holding the store files.
#[derive(Debug, Clone)]
pub struct LocalStore {
    data_dir: PathBuf,
}

impl LocalStore {
    /// Open a store rooted at `data_dir`, creating the directory if needed.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;
        debug!(data_dir = %data_dir.display(), "opened local store");
        Ok(Self { data_dir })
    }

    /// Append a recipe to the store.
    pub fn save_recipe(&self, recipe: &SavedRecipe) -> Result<()> {
        let mut recipes = self.list_recipes()?;
        recipes.push(recipe.clone());
        self.write_json(RECIPES_FILE, &recipes)?;
        info!(recipe_id = %recipe.id, title = %recipe.title, "recipe saved");
        Ok(())
    }

    /// All saved recipes, oldest first.
    pub fn list_recipes(&self) -> Result<Vec<SavedRecipe>> {
        self.read_json(RECIPES_FILE)
    }

    /// Delete a recipe by id. Returns whether anything was removed.
    pub fn delete_recipe(&self, id: &str) -> Result<bool> {
        let mut recipes = self.list_recipes()?;
        let before = recipes.len();
        recipes.retain(|recipe| recipe.id != id);

        let removed = recipes.len() != before;
        if removed {
            self.write_json(RECIPES_FILE, &recipes)?;
            info!(recipe_id = %id, "recipe deleted");
        } else {
            debug!(recipe_id = %id, "delete requested for unknown recipe");
        }
        Ok(removed)
    }

    /// Persist the shopping list as its two independent pieces of state.
    pub fn save_shopping_list(&self, list: &ShoppingList) -> Result<()> {
        self.write_json(SHOPPING_LIST_FILE, &list.items())?;
        self.write_json(CHECKED_ITEMS_FILE, &list.checked_ids())?;
        debug!(items = list.len(), "shopping list saved");
        Ok(())
    }

    /// Reload the shopping list; either file may be missing.
    pub fn load_shopping_list(&self) -> Result<ShoppingList> {
        let items: Vec<Ingredient> = self.read_json(SHOPPING_LIST_FILE)?;
        let checked: Vec<String> = self.read_json(CHECKED_ITEMS_FILE)?;
        debug!(items = items.len(), checked = checked.len(), "shopping list loaded");
        Ok(ShoppingList::from_parts(items, checked))
    }

    fn path_for(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    fn read_json<T>(&self, file: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        let path = self.path_for(file);
        if !path.exists() {
            return Ok(T::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    fn write_json<T: Serialize>(&self, file: &str, value: &T) -> Result<()> {
        let path = self.path_for(file);
        let tmp = self.data_dir.join(format!("{}.tmp", file));

        let content = serde_json::to_string_pretty(value)
            .with_context(|| format!("Failed to serialize {}", file))?;
        fs::write(&tmp, content)
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;
        Ok(())
    }
}
