use anyhow::{Context, Result};

/// Default OpenAI-compatible API base URL
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default chat model
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // OpenAI-compatible endpoint
    pub api_key: String,
    pub api_base: String,
    pub model_name: String,

    // Localization
    pub preferred_language: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_key: std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?,
            api_base: std::env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            model_name: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            preferred_language: std::env::var("PREFERRED_LANGUAGE")
                .unwrap_or_else(|_| crate::i18n::DEFAULT_LANGUAGE_CODE.to_string()),
        })
    }

    /// Names of the required settings that are empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("api_key", &self.api_key),
            ("api_base", &self.api_base),
            ("model_name", &self.model_name),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Whether the config can be used to send a request
    pub fn is_valid(&self) -> bool {
        crate::openai::validate_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = [
        "OPENAI_API_KEY",
        "OPENAI_API_BASE",
        "OPENAI_MODEL",
        "PREFERRED_LANGUAGE",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    fn test_config() -> Config {
        Config {
            api_key: "test-key".to_string(),
            api_base: "http://localhost:1234/v1".to_string(),
            model_name: "gpt-4o-mini".to_string(),
            preferred_language: "en".to_string(),
        }
    }

    #[test]
    #[serial]
    fn test_from_env_requires_api_key() {
        clear_env();

        let error = Config::from_env().unwrap_err();
        assert!(error.to_string().contains("OPENAI_API_KEY not set"));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        std::env::set_var("OPENAI_API_KEY", "sk-test");

        let config = Config::from_env().expect("config should load");
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.model_name, DEFAULT_MODEL);
        assert_eq!(config.preferred_language, "en");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("OPENAI_API_KEY", "sk-test");
        std::env::set_var("OPENAI_API_BASE", "http://localhost:11434/v1");
        std::env::set_var("OPENAI_MODEL", "llama3");
        std::env::set_var("PREFERRED_LANGUAGE", "es");

        let config = Config::from_env().expect("config should load");
        assert_eq!(config.api_base, "http://localhost:11434/v1");
        assert_eq!(config.model_name, "llama3");
        assert_eq!(config.preferred_language, "es");

        clear_env();
    }

    #[test]
    fn test_missing_fields_empty_for_complete_config() {
        let config = test_config();
        assert!(config.missing_fields().is_empty());
        assert!(config.is_valid());
    }

    #[test]
    fn test_missing_fields_lists_every_empty_setting() {
        let config = Config {
            api_key: String::new(),
            model_name: String::new(),
            ..test_config()
        };
        assert_eq!(config.missing_fields(), vec!["api_key", "model_name"]);
        assert!(!config.is_valid());
    }

    #[test]
    fn test_preferred_language_not_required() {
        let config = Config {
            preferred_language: String::new(),
            ..test_config()
        };
        assert!(config.is_valid());
    }
}
