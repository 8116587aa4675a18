//! # Shopping List Module
//!
//! The household shopping list: items to buy, ticked off once bought, plus the
//! plain-text share format used to send the list to someone else and read it
//! back.
//!
//! ## Share format
//!
//! ```text
//! 🛒 SHOPPING LIST
//!
//! 📝 TO BUY:
//! 1. Latte (2 L)
//! 2. Pane
//!
//! ✅ ALREADY BOUGHT:
//! 1. Uova (6 pz)
//!
//! 📊 Total: 3 items
//! 📝 To buy: 2
//! ✅ Bought: 1
//! ```
//!
//! Section detection on import relies on the leading icons only, so a list
//! shared in one language imports in any other.

use crate::errors::{PantryError, Result};
use crate::ingredient_matcher::MatchResult;
use crate::localization::LocalizationManager;
use crate::text_processing::normalize_ingredient;
use chrono::Utc;
use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

const HEADER_ICON: &str = "🛒";
const PENDING_ICON: &str = "📝";
const COMPLETED_ICON: &str = "✅";
const TOTALS_ICON: &str = "📊";

lazy_static! {
    /// Numbered list line: `N. name` with an optional `(quantity unit)` suffix
    static ref LIST_LINE_REGEX: Regex =
        Regex::new(r"^\d+\.\s+(.+?)(?:\s+\(([^)]+)\))?$").expect("Failed to compile list line regex");

    /// Leading decimal quantity followed by an optional unit
    static ref QUANTITY_REGEX: Regex =
        Regex::new(r"^(\d+(?:\.\d+)?)\s*(.*)$").expect("Failed to compile quantity regex");
}

static ID_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Fresh item id: creation time in milliseconds plus a process-wide sequence number
fn next_item_id() -> String {
    let seq = ID_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", Utc::now().timestamp_millis(), seq)
}

/// One entry of the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ShoppingItem {
    /// Create a pending item with a fresh id
    pub fn new(name: &str) -> Self {
        Self {
            id: next_item_id(),
            name: name.trim().to_string(),
            quantity: None,
            unit: None,
            completed: false,
            category: None,
        }
    }

    /// `name` or `name (qty unit)` as written in the share text
    pub fn display_line(&self) -> String {
        match self.quantity {
            Some(qty) => match self.unit.as_deref() {
                Some(unit) if !unit.is_empty() => format!("{} ({} {})", self.name, qty, unit),
                _ => format!("{} ({})", self.name, qty),
            },
            None => match self.unit.as_deref() {
                Some(unit) if !unit.is_empty() => format!("{} ({})", self.name, unit),
                _ => self.name.clone(),
            },
        }
    }
}

/// Ordered shopping list, newest items first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// All items in list order
    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add an item at the top of the list
    pub fn add(&mut self, name: &str, quantity: Option<f64>, unit: Option<&str>) -> Result<&ShoppingItem> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PantryError::Validation(
                "Shopping item name cannot be empty".to_string(),
            ));
        }

        let mut item = ShoppingItem::new(name);
        item.quantity = quantity;
        item.unit = unit
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(str::to_string);

        debug!("Adding '{}' to the shopping list", item.name);
        self.items.insert(0, item);
        Ok(&self.items[0])
    }

    /// Flip the completed flag of an item, returning its new state
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| PantryError::Validation(format!("No shopping item with id '{}'", id)))?;
        item.completed = !item.completed;
        Ok(item.completed)
    }

    /// Remove an item by id
    pub fn remove(&mut self, id: &str) -> Result<ShoppingItem> {
        let position = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| PantryError::Validation(format!("No shopping item with id '{}'", id)))?;
        Ok(self.items.remove(position))
    }

    /// Drop every completed item, returning how many were removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.completed);
        before - self.items.len()
    }

    pub fn pending(&self) -> Vec<&ShoppingItem> {
        self.items.iter().filter(|item| !item.completed).collect()
    }

    pub fn completed(&self) -> Vec<&ShoppingItem> {
        self.items.iter().filter(|item| item.completed).collect()
    }

    /// Put the missing ingredients of a recipe on the list
    ///
    /// Lines are added normalized; a line whose normalized name is already
    /// pending is skipped. Returns the number of items added.
    pub fn add_missing_ingredients(&mut self, result: &MatchResult) -> usize {
        let mut added = 0;
        for line in &result.missing_ingredients {
            let name = normalize_ingredient(line);
            if name.is_empty() {
                continue;
            }
            let already_pending = self
                .items
                .iter()
                .any(|item| !item.completed && normalize_ingredient(&item.name) == name);
            if already_pending {
                debug!("'{}' already pending, skipping", name);
                continue;
            }
            self.items.insert(0, ShoppingItem::new(&name));
            added += 1;
        }
        info!("Added {} missing ingredients to the shopping list", added);
        added
    }

    /// Render the list in the share format
    pub fn share_text(&self, localization: &LocalizationManager) -> String {
        let pending = self.pending();
        let completed = self.completed();

        let mut text = format!(
            "{} {}\n\n",
            HEADER_ICON,
            localization.get_message("shopping-title", None)
        );

        if !pending.is_empty() {
            text.push_str(&format!(
                "{} {}:\n",
                PENDING_ICON,
                localization.get_message("shopping-pending", None)
            ));
            for (index, item) in pending.iter().enumerate() {
                text.push_str(&format!("{}. {}\n", index + 1, item.display_line()));
            }
            text.push('\n');
        }

        if !completed.is_empty() {
            text.push_str(&format!(
                "{} {}:\n",
                COMPLETED_ICON,
                localization.get_message("shopping-completed", None)
            ));
            for (index, item) in completed.iter().enumerate() {
                text.push_str(&format!("{}. {}\n", index + 1, item.display_line()));
            }
        }

        text.push_str(&format!(
            "\n{} {}",
            TOTALS_ICON,
            localization.get_message_with_args("shopping-total", &[("count", &self.len().to_string())])
        ));
        text.push_str(&format!(
            "\n{} {}",
            PENDING_ICON,
            localization.get_message_with_args(
                "shopping-total-pending",
                &[("count", &pending.len().to_string())]
            )
        ));
        text.push_str(&format!(
            "\n{} {}",
            COMPLETED_ICON,
            localization.get_message_with_args(
                "shopping-total-completed",
                &[("count", &completed.len().to_string())]
            )
        ));
        text
    }

    /// Append the items of a shared list, returning how many were imported
    pub fn import_text(&mut self, text: &str) -> usize {
        let imported = parse_imported_text(text);
        let count = imported.len();
        self.items.extend(imported);
        info!("Imported {} shopping items", count);
        count
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a list file; a missing file is an empty list
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No shopping list at {}, starting empty", path.display());
            return Ok(Self::new());
        }
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Parse a shared list back into items with fresh ids
///
/// Numbered lines become items, pending unless they follow a line starting
/// with the completed icon. Lines starting with the header or totals icon
/// and anything unnumbered are ignored.
pub fn parse_imported_text(text: &str) -> Vec<ShoppingItem> {
    let mut items = Vec::new();
    let mut completed = false;

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if line.starts_with(HEADER_ICON) || line.starts_with(TOTALS_ICON) {
            continue;
        }
        if line.starts_with(PENDING_ICON) {
            completed = false;
            continue;
        }
        if line.starts_with(COMPLETED_ICON) {
            completed = true;
            continue;
        }

        let Some(caps) = LIST_LINE_REGEX.captures(line) else {
            debug!("Skipping unrecognized line: '{}'", line);
            continue;
        };

        let mut item = ShoppingItem::new(&caps[1]);
        item.completed = completed;

        if let Some(info) = caps.get(2).map(|m| m.as_str().trim()) {
            match QUANTITY_REGEX.captures(info) {
                Some(q) => {
                    item.quantity = q[1].parse().ok();
                    let unit = q[2].trim();
                    if !unit.is_empty() {
                        item.unit = Some(unit.to_string());
                    }
                }
                None => item.unit = Some(info.to_string()),
            }
        }

        items.push(item);
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn localization() -> LocalizationManager {
        LocalizationManager::new().unwrap()
    }

    #[test]
    fn test_add_puts_new_items_first() {
        let mut list = ShoppingList::new();
        list.add("Latte", Some(2.0), Some("L")).unwrap();
        list.add("  Pane  ", None, Some("  ")).unwrap();

        assert_eq!(list.items()[0].name, "Pane");
        assert_eq!(list.items()[0].unit, None);
        assert_eq!(list.items()[1].name, "Latte");
    }

    #[test]
    fn test_add_rejects_empty_name() {
        let mut list = ShoppingList::new();
        assert!(matches!(
            list.add("   ", None, None),
            Err(PantryError::Validation(_))
        ));
        assert!(list.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = ShoppingItem::new("a");
        let b = ShoppingItem::new("b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_toggle_remove_and_clear() {
        let mut list = ShoppingList::new();
        let latte = list.add("Latte", None, None).unwrap().id.clone();
        let pane = list.add("Pane", None, None).unwrap().id.clone();

        assert!(list.toggle(&latte).unwrap());
        assert_eq!(list.completed().len(), 1);
        assert_eq!(list.pending().len(), 1);

        assert!(list.toggle("missing").is_err());
        assert_eq!(list.remove(&pane).unwrap().name, "Pane");
        assert!(list.remove(&pane).is_err());

        assert_eq!(list.clear_completed(), 1);
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_missing_ingredients() {
        let mut list = ShoppingList::new();
        list.add("guanciale", None, None).unwrap();

        let result = MatchResult {
            available_ingredients: vec!["spaghetti".to_string()],
            missing_ingredients: vec![
                "200g Guanciale".to_string(),
                "Pecorino romano".to_string(),
                "100 g pecorino romano".to_string(),
            ],
            match_percentage: 25.0,
        };

        assert_eq!(list.add_missing_ingredients(&result), 1);
        let names: Vec<&str> = list.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["pecorino romano", "guanciale"]);
    }

    #[test]
    fn test_share_text() {
        let mut list = ShoppingList::new();
        list.add("Uova", Some(6.0), Some("pz")).unwrap();
        list.add("Pane", None, None).unwrap();
        list.add("Latte", Some(2.5), Some("L")).unwrap();
        let uova = list.items()[2].id.clone();
        list.toggle(&uova).unwrap();

        let text = list.share_text(&localization());
        assert_eq!(
            text,
            "🛒 SHOPPING LIST\n\n\
             📝 TO BUY:\n1. Latte (2.5 L)\n2. Pane\n\n\
             ✅ ALREADY BOUGHT:\n1. Uova (6 pz)\n\n\
             📊 Total: 3 items\n📝 To buy: 2\n✅ Bought: 1"
        );
    }

    #[test]
    fn test_parse_imported_text() {
        let text = "🛒 LISTA DELLA SPESA\n\n\
                    📝 DA COMPRARE:\n\
                    1. Latte (2.5 L)\n\
                    2. Sale (q.b.)\n\
                    3. Pane\n\n\
                    ✅ GIÀ COMPRATO:\n\
                    1. Uova (6)\n\n\
                    📊 Totale: 4 elementi\n\
                    📝 Da comprare: 3\n\
                    ✅ Comprati: 1";

        let items = parse_imported_text(text);
        assert_eq!(items.len(), 4);

        assert_eq!(items[0].name, "Latte");
        assert_eq!(items[0].quantity, Some(2.5));
        assert_eq!(items[0].unit.as_deref(), Some("L"));
        assert!(!items[0].completed);

        assert_eq!(items[1].name, "Sale");
        assert_eq!(items[1].quantity, None);
        assert_eq!(items[1].unit.as_deref(), Some("q.b."));

        assert_eq!(items[2].name, "Pane");
        assert_eq!(items[2].unit, None);

        assert_eq!(items[3].name, "Uova");
        assert_eq!(items[3].quantity, Some(6.0));
        assert_eq!(items[3].unit, None);
        assert!(items[3].completed);
    }

    #[test]
    fn test_share_then_import_preserves_items() {
        let mut list = ShoppingList::new();
        list.add("Farina", Some(1.0), Some("kg")).unwrap();
        list.add("Lievito", None, None).unwrap();
        let farina = list.items()[1].id.clone();
        list.toggle(&farina).unwrap();

        let localization = localization().with_language("it");
        let mut imported = ShoppingList::new();
        assert_eq!(imported.import_text(&list.share_text(&localization)), 2);

        let original: Vec<(String, bool)> = list
            .items()
            .iter()
            .map(|i| (i.display_line(), i.completed))
            .collect();
        let restored: Vec<(String, bool)> = imported
            .items()
            .iter()
            .map(|i| (i.display_line(), i.completed))
            .collect();
        assert_eq!(original, restored);
        assert_ne!(list.items()[0].id, imported.items()[0].id);
    }
}
