//! # Ingredient Matcher
//!
//! This module decides which ingredient lines of a recipe can be cooked from what is
//! in the fridge, freezer and pantry.
//!
//! ## Matching rules
//!
//! Each recipe line is normalized, expanded into its synonyms and then checked, in
//! this order:
//!
//! 1. **Pantry staples**: salt, oil, garlic, common herbs and spices are always available
//! 2. **Exact match**: an inventory product normalizes to the same text
//! 3. **Synonym match**: an inventory product equals one of the synonyms
//! 4. **Partial match**: substring overlap (scored by length ratio) or a shared
//!    keyword (fixed score), accepted above the configured threshold
//!
//! Exact and synonym matches always win over partial ones. Among partial matches the
//! highest score wins, and ties keep the first candidate found.
//!
//! ## Usage
//!
//! ```rust
//! use pantry::ingredient_matcher::IngredientMatcher;
//!
//! let matcher = IngredientMatcher::default();
//! let result = matcher.match_ingredients(
//!     &["pasta", "pomodori"],
//!     &["Pasta", "Aglio", "Pomodoro", "Basilico"],
//! );
//!
//! assert_eq!(result.available_ingredients.len(), 4);
//! assert_eq!(result.match_percentage, 100.0);
//! ```

use crate::config::MatcherConfig;
use crate::synonyms::{CommonIngredients, SynonymRegistry};
use crate::text_processing::{char_len, normalize_ingredient, split_words};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Outcome of matching a recipe against the inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Recipe lines that can be covered, in recipe order, original text
    pub available_ingredients: Vec<String>,
    /// Recipe lines that cannot be covered, in recipe order, original text
    pub missing_ingredients: Vec<String>,
    /// Share of available lines, 0 to 100 (100 for an empty recipe)
    pub match_percentage: f64,
}

impl MatchResult {
    /// Match percentage rounded to a whole number for display
    pub fn rounded_percentage(&self) -> u32 {
        self.match_percentage.round() as u32
    }

    /// Whether every recipe line is available
    pub fn is_complete(&self) -> bool {
        self.missing_ingredients.is_empty()
    }
}

/// How a single recipe line was classified
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Classification {
    /// A pantry staple, available regardless of the inventory
    Common,
    /// An inventory product normalizes to the same text as the line
    Exact { product: String },
    /// An inventory product equals one of the line's synonyms
    Synonym { product: String, synonym: String },
    /// Best partial match scored above the threshold
    Partial { product: String, confidence: f64 },
    /// Nothing related enough; carries the best score that was seen
    Missing {
        #[serde(rename = "bestConfidence")]
        best_confidence: f64,
    },
}

impl Classification {
    /// Whether the line counts as available
    pub fn is_available(&self) -> bool {
        !matches!(self, Classification::Missing { .. })
    }
}

/// Inventory product with its normalized form
struct Product<'a> {
    original: &'a str,
    normalized: String,
}

/// Partial match candidate
struct Candidate<'a> {
    product: &'a str,
    confidence: f64,
}

/// Matches recipe ingredient lines against inventory product names
#[derive(Debug, Clone)]
pub struct IngredientMatcher {
    registry: SynonymRegistry,
    common: CommonIngredients,
    config: MatcherConfig,
}

impl Default for IngredientMatcher {
    fn default() -> Self {
        Self::new(
            SynonymRegistry::with_builtins(),
            CommonIngredients::with_builtins(),
            MatcherConfig::default(),
        )
    }
}

impl IngredientMatcher {
    /// Create a matcher from explicit lookup tables and configuration
    pub fn new(
        registry: SynonymRegistry,
        common: CommonIngredients,
        config: MatcherConfig,
    ) -> Self {
        Self {
            registry,
            common,
            config,
        }
    }

    /// Create a matcher with the built-in tables and a custom configuration
    pub fn with_config(config: MatcherConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The synonym table in use
    pub fn registry(&self) -> &SynonymRegistry {
        &self.registry
    }

    /// The matcher configuration in use
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Partition recipe lines into available and missing
    ///
    /// # Arguments
    ///
    /// * `available_products` - Inventory product names (any case, any location)
    /// * `recipe_ingredients` - Free-text recipe lines, e.g. "200 g ground beef"
    ///
    /// # Returns
    ///
    /// A `MatchResult` where every input line appears exactly once, verbatim, in one
    /// of the two lists. An empty recipe has nothing missing and scores 100.
    pub fn match_ingredients<P, R>(
        &self,
        available_products: &[P],
        recipe_ingredients: &[R],
    ) -> MatchResult
    where
        P: AsRef<str>,
        R: AsRef<str>,
    {
        let products = normalize_products(available_products);
        let mut available_ingredients = Vec::new();
        let mut missing_ingredients = Vec::new();

        debug!(
            "Matching {} recipe ingredients against {} products",
            recipe_ingredients.len(),
            products.len()
        );

        for line in recipe_ingredients {
            let line = line.as_ref();
            if self.classify_normalized(&products, line).is_available() {
                available_ingredients.push(line.to_string());
            } else {
                missing_ingredients.push(line.to_string());
            }
        }

        let match_percentage = if recipe_ingredients.is_empty() {
            100.0
        } else {
            available_ingredients.len() as f64 / recipe_ingredients.len() as f64 * 100.0
        };

        debug!(
            "Match result: {} available, {} missing, {:.1}%",
            available_ingredients.len(),
            missing_ingredients.len(),
            match_percentage
        );

        MatchResult {
            available_ingredients,
            missing_ingredients,
            match_percentage,
        }
    }

    /// Classify a single recipe line against the inventory
    pub fn classify<P: AsRef<str>>(&self, available_products: &[P], line: &str) -> Classification {
        let products = normalize_products(available_products);
        self.classify_normalized(&products, line)
    }

    fn classify_normalized(&self, products: &[Product<'_>], line: &str) -> Classification {
        let normalized = normalize_ingredient(line);
        let synonyms = self.registry.expand(&normalized);

        trace!(
            "Recipe line '{}' -> '{}', synonyms: {:?}",
            line,
            normalized,
            synonyms
        );

        if self.common.contains(&normalized) || synonyms.iter().any(|s| self.common.contains(s)) {
            trace!("'{}' is a pantry staple", line);
            return Classification::Common;
        }

        let mut best: Option<Candidate<'_>> = None;

        for product in products {
            if product.normalized == normalized {
                trace!("Exact match for '{}': '{}'", line, product.original);
                return Classification::Exact {
                    product: product.original.to_string(),
                };
            }

            for synonym in &synonyms {
                if &product.normalized == synonym {
                    trace!(
                        "Synonym match for '{}': '{}' via '{}'",
                        line,
                        product.original,
                        synonym
                    );
                    return Classification::Synonym {
                        product: product.original.to_string(),
                        synonym: synonym.clone(),
                    };
                }

                if let Some(confidence) = substring_confidence(&product.normalized, synonym) {
                    offer(&mut best, product.original, confidence);
                }

                if shares_keyword(&product.normalized, synonym, self.config.min_keyword_len) {
                    offer(&mut best, product.original, self.config.keyword_confidence);
                }
            }
        }

        match best {
            Some(candidate) if candidate.confidence > self.config.partial_match_threshold => {
                trace!(
                    "Partial match for '{}': '{}' ({:.2})",
                    line,
                    candidate.product,
                    candidate.confidence
                );
                Classification::Partial {
                    product: candidate.product.to_string(),
                    confidence: candidate.confidence,
                }
            }
            best => {
                let best_confidence = best.map_or(0.0, |c| c.confidence);
                trace!("No match for '{}' (best {:.2})", line, best_confidence);
                Classification::Missing { best_confidence }
            }
        }
    }
}

fn normalize_products<P: AsRef<str>>(available_products: &[P]) -> Vec<Product<'_>> {
    available_products
        .iter()
        .map(|p| Product {
            original: p.as_ref(),
            normalized: normalize_ingredient(p.as_ref()),
        })
        // blank names would otherwise equal a blank recipe line
        .filter(|p| !p.normalized.is_empty())
        .collect()
}

/// Length-ratio score when one string contains the other
fn substring_confidence(product: &str, synonym: &str) -> Option<f64> {
    if !(product.contains(synonym) || synonym.contains(product)) {
        return None;
    }
    let (a, b) = (char_len(product), char_len(synonym));
    let longest = a.max(b);
    if longest == 0 {
        return None;
    }
    Some(a.min(b) as f64 / longest as f64)
}

/// Whether two strings share a word of at least `min_len` characters
fn shares_keyword(product: &str, synonym: &str, min_len: usize) -> bool {
    let synonym_words = split_words(synonym);
    split_words(product)
        .iter()
        .filter(|word| char_len(word) >= min_len)
        .any(|word| synonym_words.contains(word))
}

/// Replace the current best candidate only on a strictly higher score
fn offer<'a>(best: &mut Option<Candidate<'a>>, product: &'a str, confidence: f64) {
    let improves = best.as_ref().map_or(true, |b| confidence > b.confidence);
    if improves && confidence > 0.0 {
        *best = Some(Candidate {
            product,
            confidence,
        });
    }
}
