use crate::config::Config;
use crate::error::SearchError;
use crate::openai;
use crate::parser::{self, EmojiResult};
use crate::prompt::{PromptBuilder, PromptConfig};
use tracing::info;

/// Search emojis matching a natural-language query.
///
/// A blank query returns no results without touching the network. Config,
/// transport and HTTP failures are returned as errors; an unusable model
/// reply degrades into the localized fallback list instead.
pub async fn search(
    client: &reqwest::Client,
    query: &str,
    config: &Config,
) -> Result<Vec<EmojiResult>, SearchError> {
    if query.trim().is_empty() {
        return Ok(Vec::new());
    }

    if !openai::validate_config(config) {
        return Err(SearchError::Config(format!(
            "missing {}",
            config.missing_fields().join(", ")
        )));
    }

    let builder = PromptBuilder::new(PromptConfig {
        preferred_language: Some(config.preferred_language.clone()),
    });
    let prompt = builder.build_prompt(query);

    info!(
        "Searching emojis for {:?} (language {})",
        query,
        builder.language()
    );
    let reply = openai::complete(client, config, &prompt).await?;

    let results = parser::parse_response(&reply, builder.language());
    info!("Found {} emojis", results.len());
    Ok(results)
}
