//! # Pantry
//!
//! Household inventory toolkit: fridge, freezer and pantry contents, expiry
//! tracking, exports and a shopping list, built around an ingredient matcher
//! that tells which lines of a recipe the inventory can cover.

pub mod cli;
pub mod config;
pub mod errors;
pub mod expiry;
pub mod export;
pub mod ingredient_matcher;
pub mod ingredient_tables;
pub mod inventory;
pub mod localization;
pub mod measurement_patterns;
pub mod shopping_list;
pub mod synonyms;
pub mod text_processing;

pub use errors::{PantryError, Result};
pub use ingredient_matcher::{Classification, IngredientMatcher, MatchResult};
