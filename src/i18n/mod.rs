//! Internationalization (i18n) module for multi-language support.
//!
//! All localized prompt text and fallback copy lives here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `strings`: Per-language instructions, JSON examples and fallback copy
//!
//! # Example
//!
//! ```rust
//! use emoji_search::i18n::LanguageRegistry;
//!
//! let registry = LanguageRegistry::get();
//!
//! // Unknown codes fall back to English
//! assert_eq!(registry.resolve("fr").code, "en");
//! assert!(registry.is_supported("es"));
//! ```

mod registry;
mod strings;

pub use registry::{LanguageConfig, LanguageRegistry, DEFAULT_LANGUAGE_CODE};
pub use strings::{ErrorMessages, LanguageStrings};
