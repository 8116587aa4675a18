//! # Localization Module
//!
//! Fluent-based message catalogue for user-facing text (export headers,
//! summaries, shopping list share text, expiry labels).
//!
//! English and Italian resources are compiled into the binary from
//! `locales/<lang>/main.ftl`. Unknown languages fall back to English.

use crate::errors::{PantryError, Result};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use log::{debug, warn};
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

/// Language used when nothing else is requested or available
pub const FALLBACK_LANGUAGE: &str = "en";

/// Languages with an embedded message catalogue
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "it"];

const EN_RESOURCE: &str = include_str!("../locales/en/main.ftl");
const IT_RESOURCE: &str = include_str!("../locales/it/main.ftl");

/// Localization manager holding one bundle per supported language
pub struct LocalizationManager {
    bundles: HashMap<String, FluentBundle<FluentResource>>,
    language: String,
}

impl LocalizationManager {
    /// Create a new localization manager using English by default
    pub fn new() -> Result<Self> {
        let mut bundles = HashMap::new();
        bundles.insert("en".to_string(), Self::create_bundle("en", EN_RESOURCE)?);
        bundles.insert("it".to_string(), Self::create_bundle("it", IT_RESOURCE)?);

        Ok(Self {
            bundles,
            language: FALLBACK_LANGUAGE.to_string(),
        })
    }

    /// Switch the default language; unsupported languages keep English
    pub fn with_language(mut self, language: &str) -> Self {
        let language = language.trim().to_lowercase();
        if self.is_supported(&language) {
            self.language = language;
        } else {
            warn!(
                "Unsupported language '{}', falling back to {}",
                language, FALLBACK_LANGUAGE
            );
            self.language = FALLBACK_LANGUAGE.to_string();
        }
        self
    }

    /// The default language of this manager
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Whether a language has a catalogue
    pub fn is_supported(&self, language: &str) -> bool {
        self.bundles.contains_key(language)
    }

    /// Create a fluent bundle for a locale from embedded FTL source
    fn create_bundle(locale: &str, source: &str) -> Result<FluentBundle<FluentResource>> {
        let langid: LanguageIdentifier = locale
            .parse()
            .map_err(|e| PantryError::Config(format!("Invalid locale '{}': {}", locale, e)))?;

        let mut bundle = FluentBundle::new(vec![langid]);
        // Plain text output: no Unicode isolation marks around placeables
        bundle.set_use_isolating(false);

        let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
            PantryError::Parse(format!("Invalid FTL for '{}': {:?}", locale, errors))
        })?;
        bundle.add_resource(resource).map_err(|errors| {
            PantryError::Config(format!("Duplicate messages for '{}': {:?}", locale, errors))
        })?;

        debug!("Loaded message catalogue for '{}'", locale);
        Ok(bundle)
    }

    /// Get a localized message in the default language
    pub fn get_message(&self, key: &str, args: Option<&HashMap<&str, &str>>) -> String {
        self.get_message_in_language(key, &self.language, args)
    }

    /// Get a localized message in a specific language
    pub fn get_message_in_language(
        &self,
        key: &str,
        language: &str,
        args: Option<&HashMap<&str, &str>>,
    ) -> String {
        let bundle = match self
            .bundles
            .get(language)
            .or_else(|| self.bundles.get(FALLBACK_LANGUAGE))
        {
            Some(bundle) => bundle,
            None => return format!("Missing translation: {}", key),
        };

        let msg = match bundle.get_message(key) {
            Some(msg) => msg,
            None => return format!("Missing translation: {}", key),
        };

        let pattern = match msg.value() {
            Some(pattern) => pattern,
            None => return format!("Missing value for key: {}", key),
        };

        let fluent_args = args.map(|args| {
            FluentArgs::from_iter(args.iter().map(|(k, v)| (*k, FluentValue::from(*v))))
        });

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, fluent_args.as_ref(), &mut errors);
        if !errors.is_empty() {
            debug!("Formatting '{}' reported {:?}", key, errors);
        }

        value.into_owned()
    }

    /// Get a localized message with simple string arguments
    pub fn get_message_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let args_map: HashMap<&str, &str> = args.iter().cloned().collect();
        self.get_message(key, Some(&args_map))
    }
}
