//! # Measurement Patterns Module
//!
//! This module contains the regex patterns used to normalize ingredient text
//! before it is compared against inventory product names.

use lazy_static::lazy_static;
use regex::Regex;

/// Units recognized at the start of a recipe line, right after the quantity
pub const QUANTITY_UNITS: &[&str] = &[
    "kg", "g", "ml", "l", "oz", "lb", "cup", "tsp", "tbsp", "tablespoon", "teaspoon",
];

// Anything that is neither a word character nor whitespace
pub const PUNCTUATION_PATTERN: &str = r"[^\w\s]";

pub const WHITESPACE_PATTERN: &str = r"\s+";

// Bare leading quantity ("2 uova")
pub const LEADING_NUMBER_PATTERN: &str = r"^\d+\s*";

// Lazy static regexes to avoid recompilation
lazy_static! {
    pub static ref PUNCTUATION_REGEX: Regex =
        Regex::new(PUNCTUATION_PATTERN).expect("Punctuation pattern should be valid");
    pub static ref WHITESPACE_REGEX: Regex =
        Regex::new(WHITESPACE_PATTERN).expect("Whitespace pattern should be valid");
    // Quantity followed by a whole-word unit ("200g carne", "1 lb beef")
    pub static ref LEADING_QUANTITY_UNIT_REGEX: Regex = Regex::new(&format!(
        r"^\d+\s*(?:{})(?:\s+|$)",
        QUANTITY_UNITS.join("|")
    ))
    .expect("Leading quantity pattern should be valid");
    pub static ref LEADING_NUMBER_REGEX: Regex =
        Regex::new(LEADING_NUMBER_PATTERN).expect("Leading number pattern should be valid");
}
