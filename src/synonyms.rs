//! # Synonyms Module
//!
//! Lookup structures for ingredient matching:
//!
//! - [`SynonymRegistry`]: canonical ingredient names mapped to their alternate
//!   spellings, translations and forms. Built once and handed to the matcher.
//! - [`CommonIngredients`]: pantry staples considered always available.
//!
//! Keys, values and staples are stored normalized (see
//! [`normalize_ingredient`]) so they compare directly against normalized text.
//!
//! ## Usage
//!
//! ```rust
//! use pantry::synonyms::SynonymRegistry;
//!
//! let mut registry = SynonymRegistry::with_builtins();
//! registry.register("Guanciale", &["pork cheek", "pancetta"]);
//!
//! let synonyms = registry.synonyms_for("Pomodoro");
//! assert_eq!(synonyms[0], "pomodoro");
//! assert!(synonyms.contains(&"tomato".to_string()));
//! ```

use crate::errors::Result;
use crate::ingredient_tables::{BUILTIN_SYNONYMS, COMMON_INGREDIENTS};
use crate::text_processing::normalize_ingredient;
use indexmap::{IndexMap, IndexSet};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Ordered table of ingredient synonyms
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynonymRegistry {
    entries: IndexMap<String, Vec<String>>,
}

impl SynonymRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in synonym table
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for &(key, synonyms) in BUILTIN_SYNONYMS {
            registry.register(key, synonyms);
        }
        debug!("Loaded {} built-in synonym entries", registry.len());
        registry
    }

    /// Register synonyms for an ingredient
    ///
    /// Replaces any existing entry for the same key, keeping its position in the
    /// lookup order. Empty keys are ignored.
    pub fn register<S: AsRef<str>>(&mut self, ingredient: &str, synonyms: &[S]) {
        let key = normalize_ingredient(ingredient);
        if key.is_empty() {
            warn!("Ignoring synonym entry with empty key: '{}'", ingredient);
            return;
        }

        let values: Vec<String> = synonyms
            .iter()
            .map(|s| normalize_ingredient(s.as_ref()))
            .filter(|s| !s.is_empty())
            .collect();

        debug!("Registering {} synonyms for '{}'", values.len(), key);
        self.entries.insert(key, values);
    }

    /// Register every entry of a JSON object `{ "key": ["synonym", ...] }`
    ///
    /// Returns the number of entries read.
    pub fn load_json(&mut self, json: &str) -> Result<usize> {
        let entries: IndexMap<String, Vec<String>> = serde_json::from_str(json)?;
        let count = entries.len();
        for (key, synonyms) in &entries {
            self.register(key, synonyms.as_slice());
        }
        Ok(count)
    }

    /// Register every entry of a JSON synonym file
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let content = fs::read_to_string(path.as_ref())?;
        let count = self.load_json(&content)?;
        info!(
            "Loaded {} synonym entries from {}",
            count,
            path.as_ref().display()
        );
        Ok(count)
    }

    /// Export the registry as a JSON object
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    /// Synonyms registered under an exact (normalized) key
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Number of registered keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Expand an already normalized string into its candidate synonym set
    ///
    /// The result always starts with the string itself, followed by the values of
    /// entries it names directly (as key or as one of the values), followed by the
    /// values of entries whose key overlaps it as a substring in either direction.
    /// Duplicates keep their first position. Every key contains the empty string,
    /// so `""` expands to all registered values.
    pub fn expand(&self, normalized: &str) -> Vec<String> {
        let mut candidates: IndexSet<String> = IndexSet::new();
        candidates.insert(normalized.to_string());

        for (key, values) in &self.entries {
            if key == normalized || values.iter().any(|v| v == normalized) {
                candidates.extend(values.iter().cloned());
            }
        }

        for (key, values) in &self.entries {
            if key.contains(normalized) || normalized.contains(key.as_str()) {
                candidates.extend(values.iter().cloned());
            }
        }

        candidates.into_iter().collect()
    }

    /// Normalize free text and expand it into its synonyms
    pub fn synonyms_for(&self, ingredient: &str) -> Vec<String> {
        self.expand(&normalize_ingredient(ingredient))
    }
}

/// Pantry staples that never need to be in the inventory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonIngredients {
    entries: HashSet<String>,
}

impl CommonIngredients {
    /// Create a set holding the built-in staples
    pub fn with_builtins() -> Self {
        COMMON_INGREDIENTS.iter().copied().collect()
    }

    /// Add a staple
    pub fn insert(&mut self, name: &str) {
        let normalized = normalize_ingredient(name);
        if !normalized.is_empty() {
            self.entries.insert(normalized);
        }
    }

    /// Whether a (normalized) name is a staple, ignoring case
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains(&name.to_lowercase())
    }

    /// Number of staples
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CommonIngredients {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::default();
        for name in iter {
            set.insert(name.as_ref());
        }
        set
    }
}
