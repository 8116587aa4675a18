//! # Text Processing Module
//!
//! This module provides the text normalization used by the ingredient matcher.
//! Recipe lines and inventory product names go through the same pipeline so they
//! can be compared as plain strings.
//!
//! ## Pipeline
//!
//! - Lowercasing and trimming
//! - Punctuation removal (anything that is not a word character or whitespace)
//! - Whitespace collapsing
//! - **Leading quantity removal**: "200g carne macinata" becomes "carne macinata",
//!   "2 uova" becomes "uova". The quantity is discarded, not parsed.

use crate::measurement_patterns::{
    LEADING_NUMBER_REGEX, LEADING_QUANTITY_UNIT_REGEX, PUNCTUATION_REGEX, WHITESPACE_REGEX,
};
use log::trace;

/// Normalize a recipe line or product name for comparison
///
/// # Examples
///
/// ```rust
/// use pantry::text_processing::normalize_ingredient;
///
/// assert_eq!(normalize_ingredient("200g Carne Macinata"), "carne macinata");
/// assert_eq!(normalize_ingredient("1 tbsp olive oil,"), "olive oil");
/// assert_eq!(normalize_ingredient("2 uova"), "uova");
/// assert_eq!(normalize_ingredient("Pomodoro"), "pomodoro");
/// ```
pub fn normalize_ingredient(text: &str) -> String {
    let lowered = text.to_lowercase();
    let without_punctuation = PUNCTUATION_REGEX.replace_all(lowered.trim(), "");
    let collapsed = WHITESPACE_REGEX.replace_all(&without_punctuation, " ");
    let without_unit = LEADING_QUANTITY_UNIT_REGEX.replace(collapsed.trim(), "");
    let without_number = LEADING_NUMBER_REGEX.replace(&without_unit, "");
    let normalized = without_number.trim().to_string();

    trace!("Normalized ingredient: '{}' -> '{}'", text, normalized);
    normalized
}

/// Split a normalized string into its whitespace-delimited words
pub fn split_words(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

/// Length in characters, used for length-ratio confidence
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_trim() {
        assert_eq!(normalize_ingredient("  Pasta  "), "pasta");
        assert_eq!(normalize_ingredient("MOZZARELLA"), "mozzarella");
    }

    #[test]
    fn test_punctuation_removed() {
        assert_eq!(normalize_ingredient("olio d'oliva"), "olio doliva");
        assert_eq!(normalize_ingredient("sale, pepe."), "sale pepe");
        assert_eq!(normalize_ingredient("«basilico»"), "basilico");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(normalize_ingredient("ground \t  beef"), "ground beef");
        assert_eq!(normalize_ingredient("- pasta"), "pasta");
    }

    #[test]
    fn test_quantity_with_unit_stripped() {
        assert_eq!(normalize_ingredient("200 g ground beef"), "ground beef");
        assert_eq!(normalize_ingredient("200g carne macinata"), "carne macinata");
        assert_eq!(normalize_ingredient("1 l latte"), "latte");
        assert_eq!(normalize_ingredient("1 lb beef"), "beef");
        assert_eq!(normalize_ingredient("2 tablespoon sugar"), "sugar");
        assert_eq!(normalize_ingredient("3 teaspoon salt"), "salt");
    }

    #[test]
    fn test_bare_quantity_stripped() {
        assert_eq!(normalize_ingredient("2 uova"), "uova");
        assert_eq!(normalize_ingredient("4 pomodori"), "pomodori");
    }

    #[test]
    fn test_unit_prefix_is_not_eaten_from_words() {
        // "l" is a unit, but not when it starts a word
        assert_eq!(normalize_ingredient("2 lemons"), "lemons");
        assert_eq!(normalize_ingredient("3 grams flour"), "grams flour");
    }

    #[test]
    fn test_fraction_collapses_into_number() {
        assert_eq!(normalize_ingredient("1/2 cup milk"), "milk");
    }

    #[test]
    fn test_accents_are_kept() {
        assert_eq!(normalize_ingredient("Caffè"), "caffè");
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert_eq!(normalize_ingredient(""), "");
        assert_eq!(normalize_ingredient("   "), "");
        assert_eq!(normalize_ingredient("!!!"), "");
        assert_eq!(normalize_ingredient("250"), "");
    }

    #[test]
    fn test_split_words_and_char_len() {
        assert_eq!(split_words("carne macinata"), vec!["carne", "macinata"]);
        assert!(split_words("").is_empty());
        assert_eq!(char_len("caffè"), 5);
    }
}
