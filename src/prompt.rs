use crate::i18n::{LanguageRegistry, DEFAULT_LANGUAGE_CODE};

/// Number of emojis the model is asked to return
pub const EMOJI_COUNT: usize = 5;

/// Prompt builder settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptConfig {
    /// Language code for the model's answer; `None` means English
    pub preferred_language: Option<String>,
}

/// The localized pieces a prompt is assembled from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptComponents {
    pub query: String,
    pub instructions: &'static str,
    pub json_example: &'static str,
}

/// Builds emoji search prompts for a fixed language
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    config: PromptConfig,
}

impl PromptBuilder {
    pub fn new(config: PromptConfig) -> Self {
        Self { config }
    }

    /// Language code this builder renders prompts in
    pub fn language(&self) -> &str {
        self.config
            .preferred_language
            .as_deref()
            .unwrap_or(DEFAULT_LANGUAGE_CODE)
    }

    /// Build the full prompt for a query
    pub fn build_prompt(&self, query: &str) -> String {
        build_prompt(query, self.language())
    }

    /// Get the unassembled prompt inputs for custom templating
    pub fn prompt_components(&self, query: &str) -> PromptComponents {
        prompt_components(query, self.language())
    }
}

/// Build the emoji search prompt for `query` in `language`.
///
/// The query is embedded verbatim. Empty queries still produce a prompt; the
/// caller decides whether to send it.
pub fn build_prompt(query: &str, language: &str) -> String {
    let components = prompt_components(query, language);

    format!(
        r#"You are an emoji search assistant. Given a natural language query, return relevant emojis in JSON format.

Query: "{query}"

{instructions}

Please return exactly {count} emojis that best match the query. For each emoji, provide:
- emoji: the actual emoji character
- name: a descriptive name for the emoji
- description: a brief explanation of when to use this emoji

Return the response as a valid JSON array like this:
{json_example}

Only return the JSON array, no other text."#,
        query = components.query,
        instructions = components.instructions,
        count = EMOJI_COUNT,
        json_example = components.json_example,
    )
}

/// Resolve the localized prompt inputs for `query` in `language`
pub fn prompt_components(query: &str, language: &str) -> PromptComponents {
    let strings = &LanguageRegistry::get().resolve(language).strings;
    PromptComponents {
        query: query.to_string(),
        instructions: strings.instructions,
        json_example: strings.json_example,
    }
}
