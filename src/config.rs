//! # Configuration Module
//!
//! This module defines configuration structures for ingredient matching and for the
//! command line tool, including the environment keys they are loaded from.

use crate::errors::{PantryError, Result};
use log::debug;
use std::path::PathBuf;

// Constants for matcher configuration
pub const DEFAULT_PARTIAL_MATCH_THRESHOLD: f64 = 0.5;
pub const DEFAULT_KEYWORD_CONFIDENCE: f64 = 0.8;
pub const DEFAULT_MIN_KEYWORD_LEN: usize = 3;
pub const DEFAULT_INVENTORY_PATH: &str = "inventory.json";
pub const DEFAULT_LANGUAGE: &str = "en";

// Environment keys
pub const ENV_PARTIAL_THRESHOLD: &str = "PANTRY_PARTIAL_THRESHOLD";
pub const ENV_KEYWORD_CONFIDENCE: &str = "PANTRY_KEYWORD_CONFIDENCE";
pub const ENV_SYNONYMS_FILE: &str = "PANTRY_SYNONYMS_FILE";
pub const ENV_INVENTORY: &str = "PANTRY_INVENTORY";
pub const ENV_LANGUAGE: &str = "PANTRY_LANGUAGE";

/// Tuning knobs for partial matches
///
/// The two confidence values are empirical. They are kept at the values the app
/// has always used so results stay comparable, but nothing depends on them beyond that.
#[derive(Debug, Clone, PartialEq)]
pub struct MatcherConfig {
    /// A partial match must score strictly above this to count as available
    pub partial_match_threshold: f64,
    /// Fixed confidence assigned to a shared keyword between product and synonym
    pub keyword_confidence: f64,
    /// Minimum length (in characters) of a shared keyword
    pub min_keyword_len: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            partial_match_threshold: DEFAULT_PARTIAL_MATCH_THRESHOLD,
            keyword_confidence: DEFAULT_KEYWORD_CONFIDENCE,
            min_keyword_len: DEFAULT_MIN_KEYWORD_LEN,
        }
    }
}

impl MatcherConfig {
    /// Check that both confidence values lie in `0.0..=1.0`
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("partial_match_threshold", self.partial_match_threshold),
            ("keyword_confidence", self.keyword_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PantryError::Config(format!(
                    "{name} must be between 0.0 and 1.0, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Configuration for the command line tool
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Matcher tuning
    pub matcher: MatcherConfig,
    /// Optional JSON file with extra synonym entries
    pub synonyms_file: Option<PathBuf>,
    /// Inventory document used when no path is given on the command line
    pub inventory_path: PathBuf,
    /// Language for reports and shopping list text ("en" or "it")
    pub language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            matcher: MatcherConfig::default(),
            synonyms_file: None,
            inventory_path: PathBuf::from(DEFAULT_INVENTORY_PATH),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_PARTIAL_THRESHOLD) {
            config.matcher.partial_match_threshold = parse_f64(ENV_PARTIAL_THRESHOLD, &raw)?;
        }
        if let Some(raw) = lookup(ENV_KEYWORD_CONFIDENCE) {
            config.matcher.keyword_confidence = parse_f64(ENV_KEYWORD_CONFIDENCE, &raw)?;
        }
        if let Some(path) = lookup(ENV_SYNONYMS_FILE).filter(|p| !p.trim().is_empty()) {
            config.synonyms_file = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup(ENV_INVENTORY).filter(|p| !p.trim().is_empty()) {
            config.inventory_path = PathBuf::from(path);
        }
        if let Some(language) = lookup(ENV_LANGUAGE).filter(|l| !l.trim().is_empty()) {
            config.language = language.trim().to_lowercase();
        }

        config.matcher.validate()?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }
}

fn parse_f64(key: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| PantryError::Config(format!("{key}={raw:?} is not a number: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.matcher.partial_match_threshold, 0.5);
        assert_eq!(config.matcher.keyword_confidence, 0.8);
    }

    #[test]
    fn test_overrides_from_lookup() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_PARTIAL_THRESHOLD, "0.6"),
            (ENV_SYNONYMS_FILE, "extra.json"),
            (ENV_LANGUAGE, " IT "),
        ]))
        .unwrap();

        assert_eq!(config.matcher.partial_match_threshold, 0.6);
        assert_eq!(config.synonyms_file, Some(PathBuf::from("extra.json")));
        assert_eq!(config.language, "it");
    }

    #[test]
    fn test_invalid_number_is_config_error() {
        let err = AppConfig::from_lookup(lookup_from(&[(ENV_KEYWORD_CONFIDENCE, "high")]))
            .unwrap_err();
        assert!(matches!(err, PantryError::Config(_)));
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[(ENV_PARTIAL_THRESHOLD, "1.5")]))
            .unwrap_err();
        assert!(err.to_string().contains("partial_match_threshold"));
    }
}
