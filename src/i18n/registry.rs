//! Language registry: Single source of truth for all supported languages.
//!
//! This module provides a centralized registry of all languages supported by the
//! application. It uses a singleton pattern with `OnceLock` to ensure thread-safe
//! initialization and access.

use super::strings::{LanguageStrings, CHINESE_STRINGS, ENGLISH_STRINGS, SPANISH_STRINGS};
use std::sync::OnceLock;

/// Code of the language used whenever a requested code is unknown
pub const DEFAULT_LANGUAGE_CODE: &str = "en";

/// Configuration for a supported language.
///
/// Contains the metadata for a specific language plus the strings used to
/// prompt the model and to build the fallback result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "es", "zh")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Spanish")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Español")
    pub native_name: &'static str,

    /// Whether this is the fallback language (only one should be true)
    pub is_default: bool,

    /// Prompt instructions, JSON example and fallback copy
    pub strings: LanguageStrings,
}

/// Global language registry singleton.
///
/// Initialized once on first access and immutable thereafter. The default
/// language is always stored first.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its exact code, without fallback.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Resolve any language code to a configuration.
    ///
    /// Unknown or unsupported codes silently fall back to English.
    pub fn resolve(&self, code: &str) -> &LanguageConfig {
        self.get_by_code(code)
            .unwrap_or_else(|| self.default_language())
    }

    /// Get the default (English) language configuration.
    pub fn default_language(&self) -> &LanguageConfig {
        // default_languages() always puts English first
        &self.languages[0]
    }

    /// Check if a language code is in the registry.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    /// List all supported language codes in registry order.
    pub fn list_supported(&self) -> Vec<&'static str> {
        self.languages.iter().map(|lang| lang.code).collect()
    }
}

/// Default language configurations.
///
/// English must stay first: it is the fallback for unknown codes.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: DEFAULT_LANGUAGE_CODE,
            name: "English",
            native_name: "English",
            is_default: true,
            strings: ENGLISH_STRINGS,
        },
        LanguageConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            is_default: false,
            strings: SPANISH_STRINGS,
        },
        LanguageConfig {
            code: "zh",
            name: "Chinese",
            native_name: "中文",
            is_default: false,
            strings: CHINESE_STRINGS,
        },
    ]
}
