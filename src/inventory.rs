//! # Inventory Data Model
//!
//! This module defines the household inventory: items kept in the fridge, the freezer
//! and the pantry. It is the source of the flat product-name list the ingredient
//! matcher consumes.
//!
//! ## Core Concepts
//!
//! - **Item**: a product with quantity, unit, optional category and dates
//! - **StorageLocation**: where the item is kept
//! - **Category**: coarse product grouping used for filters and reports
//!
//! Dates are kept as the `DD-MM-YYYY` strings the app persists; see
//! [`crate::expiry`] for parsing.
//!
//! ## Usage
//!
//! ```rust
//! use pantry::inventory::{Category, Inventory, Item, StorageLocation};
//!
//! let mut inventory = Inventory::default();
//! inventory.fridge.push(
//!     Item::new("1", "Latte")
//!         .with_quantity(1.0, "L")
//!         .with_category(Category::Dairy)
//!         .with_expiry_date("20-10-2026"),
//! );
//!
//! assert_eq!(inventory.product_names(), vec!["latte"]);
//! assert_eq!(inventory.items_in(StorageLocation::Fridge).len(), 1);
//! ```

use crate::errors::{PantryError, Result};
use crate::expiry::format_date;
use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Where an item is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageLocation {
    /// Refrigerator
    Fridge,
    /// Freezer
    Freezer,
    /// Pantry / cupboard
    Pantry,
}

impl StorageLocation {
    /// All locations, in the order they are listed everywhere
    pub const ALL: [StorageLocation; 3] = [
        StorageLocation::Fridge,
        StorageLocation::Freezer,
        StorageLocation::Pantry,
    ];

    /// Persisted key of the location's item list
    pub fn key(&self) -> &'static str {
        match self {
            StorageLocation::Fridge => "fridge",
            StorageLocation::Freezer => "freezer",
            StorageLocation::Pantry => "pantry",
        }
    }

    /// Localization message id of the location's display name
    pub fn message_id(&self) -> &'static str {
        match self {
            StorageLocation::Fridge => "location-fridge",
            StorageLocation::Freezer => "location-freezer",
            StorageLocation::Pantry => "location-pantry",
        }
    }
}

impl fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Product categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Dairy,
    Vegetables,
    Meat,
    Fish,
    Frozen,
    Beverages,
    Other,
}

impl Category {
    /// All categories, `Other` last
    pub const ALL: [Category; 7] = [
        Category::Dairy,
        Category::Vegetables,
        Category::Meat,
        Category::Fish,
        Category::Frozen,
        Category::Beverages,
        Category::Other,
    ];

    /// Persisted id of the category
    pub fn id(&self) -> &'static str {
        match self {
            Category::Dairy => "dairy",
            Category::Vegetables => "vegetables",
            Category::Meat => "meat",
            Category::Fish => "fish",
            Category::Frozen => "frozen",
            Category::Beverages => "beverages",
            Category::Other => "other",
        }
    }

    /// Look a category up by id; unknown ids map to `Other`
    pub fn from_id(id: &str) -> Self {
        let id = id.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.id() == id)
            .unwrap_or(Category::Other)
    }

    /// Localization message id of the category's display name
    pub fn message_id(&self) -> String {
        format!("category-{}", self.id())
    }
}

/// A product held in one of the storage locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Identifier, unique within its location
    pub id: String,

    /// Product name as entered (e.g., "Latte", "Piselli surgelati")
    pub name: String,

    /// Amount held
    #[serde(default)]
    pub qty: f64,

    /// Unit of the amount (e.g., "kg", "pz", "L")
    #[serde(default)]
    pub unit: String,

    /// Category id (see [`Category`])
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Expiry date, `DD-MM-YYYY`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,

    /// Date the item went into the freezer, `DD-MM-YYYY`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frozen_at: Option<String>,

    /// Date the item was added, `DD-MM-YYYY`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<String>,
}

impl Item {
    /// Create a new item with just an id and a name
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            qty: 1.0,
            unit: String::new(),
            category: None,
            expiry_date: None,
            frozen_at: None,
            added_at: None,
        }
    }

    /// Set quantity and unit
    pub fn with_quantity(mut self, qty: f64, unit: &str) -> Self {
        self.qty = qty;
        self.unit = unit.to_string();
        self
    }

    /// Set the category
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category.id().to_string());
        self
    }

    /// Set the expiry date (`DD-MM-YYYY`)
    pub fn with_expiry_date(mut self, expiry_date: &str) -> Self {
        self.expiry_date = Some(expiry_date.to_string());
        self
    }

    /// The item's category, `Other` when unset or unknown
    pub fn category(&self) -> Category {
        self.category
            .as_deref()
            .map_or(Category::Other, Category::from_id)
    }
}

/// The three item lists of a household
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub fridge: Vec<Item>,
    #[serde(default)]
    pub freezer: Vec<Item>,
    #[serde(default)]
    pub pantry: Vec<Item>,
}

impl Inventory {
    /// Items held in one location
    pub fn items_in(&self, location: StorageLocation) -> &[Item] {
        match location {
            StorageLocation::Fridge => &self.fridge,
            StorageLocation::Freezer => &self.freezer,
            StorageLocation::Pantry => &self.pantry,
        }
    }

    fn items_in_mut(&mut self, location: StorageLocation) -> &mut Vec<Item> {
        match location {
            StorageLocation::Fridge => &mut self.fridge,
            StorageLocation::Freezer => &mut self.freezer,
            StorageLocation::Pantry => &mut self.pantry,
        }
    }

    /// All items, fridge first, then freezer, then pantry
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.fridge
            .iter()
            .chain(self.freezer.iter())
            .chain(self.pantry.iter())
    }

    /// All items paired with their location
    pub fn located_items(&self) -> impl Iterator<Item = (StorageLocation, &Item)> {
        StorageLocation::ALL
            .into_iter()
            .flat_map(move |location| self.items_in(location).iter().map(move |item| (location, item)))
    }

    /// Total number of items across locations
    pub fn len(&self) -> usize {
        self.fridge.len() + self.freezer.len() + self.pantry.len()
    }

    /// Whether all locations are empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of all item quantities
    pub fn total_quantity(&self) -> f64 {
        self.items().map(|item| item.qty).sum()
    }

    /// Lowercase product names across all locations, for ingredient matching
    ///
    /// Duplicates across locations are kept as separate entries.
    pub fn product_names(&self) -> Vec<String> {
        self.items().map(|item| item.name.to_lowercase()).collect()
    }

    /// Add an item to a location
    ///
    /// Records `today` as the added date when the item has none, and as the
    /// frozen date for items going into the freezer.
    pub fn add(&mut self, location: StorageLocation, mut item: Item, today: NaiveDate) {
        let stamp = format_date(today);
        if item.added_at.is_none() {
            item.added_at = Some(stamp.clone());
        }
        if location == StorageLocation::Freezer {
            if item.frozen_at.is_none() {
                item.frozen_at = Some(stamp);
            }
        } else {
            item.frozen_at = None;
        }
        debug!("Adding '{}' to {}", item.name, location);
        self.items_in_mut(location).push(item);
    }

    /// Remove an item by id from a location
    pub fn remove(&mut self, location: StorageLocation, id: &str) -> Result<Item> {
        let items = self.items_in_mut(location);
        let position = items.iter().position(|item| item.id == id).ok_or_else(|| {
            PantryError::Validation(format!("no item with id '{id}' in {location}"))
        })?;
        Ok(items.remove(position))
    }

    /// Items whose name contains `query` (ignoring case) and, if given, of one category
    pub fn filter(
        &self,
        query: &str,
        category: Option<Category>,
    ) -> Vec<(StorageLocation, &Item)> {
        let query = query.to_lowercase();
        self.located_items()
            .filter(|(_, item)| item.name.to_lowercase().contains(&query))
            .filter(|(_, item)| category.map_or(true, |c| item.category() == c))
            .collect()
    }

    /// Parse an inventory document
    ///
    /// Accepts the export format; fields other than the three lists are ignored
    /// and missing lists are empty.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the inventory as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load an inventory document from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let inventory = Self::from_json(&content)?;
        info!(
            "Loaded inventory from {}: {} fridge, {} freezer, {} pantry items",
            path.as_ref().display(),
            inventory.fridge.len(),
            inventory.freezer.len(),
            inventory.pantry.len()
        );
        Ok(inventory)
    }

    /// Write the inventory to disk
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path.as_ref(), self.to_json()?)?;
        info!("Saved {} items to {}", self.len(), path.as_ref().display());
        Ok(())
    }
}
