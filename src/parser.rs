//! Turns a chat-completion reply into emoji results.
//!
//! Models do not always honor "return only JSON", so the reply content goes
//! through a layered recovery: direct parse, then extraction of the first
//! JSON-looking region, then a localized fallback list. Parsing never fails
//! outward.

use crate::i18n::LanguageRegistry;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::OnceLock;
use tracing::{debug, warn};

const DEFAULT_EMOJI: &str = "❓";
const DEFAULT_DESCRIPTION: &str = "No description available";

/// A single emoji suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiResult {
    pub emoji: String,
    pub name: String,
    pub description: String,
}

impl fmt::Display for EmojiResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji, self.name)
    }
}

/// Finds a candidate JSON region inside free text
type Matcher = fn(&str) -> Option<&str>;

// Regex patterns for extraction (cached for performance)
static ARRAY_REGEX: OnceLock<Regex> = OnceLock::new();
static OBJECT_REGEX: OnceLock<Regex> = OnceLock::new();
static JSON_FENCE_REGEX: OnceLock<Regex> = OnceLock::new();
static FENCE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Extraction strategies in priority order; the first one that matches wins
const MATCHERS: [(&str, Matcher); 4] = [
    ("array", extract_array),
    ("object", extract_object),
    ("json fence", extract_json_fence),
    ("fence", extract_fence),
];

/// From the first `[` to the last `]`
fn extract_array(content: &str) -> Option<&str> {
    let regex = ARRAY_REGEX.get_or_init(|| Regex::new(r"(?s)\[.*\]").unwrap());
    regex.find(content).map(|m| m.as_str())
}

/// From the first `{` to the last `}`
fn extract_object(content: &str) -> Option<&str> {
    let regex = OBJECT_REGEX.get_or_init(|| Regex::new(r"(?s)\{.*\}").unwrap());
    regex.find(content).map(|m| m.as_str())
}

/// Body of the first fenced block tagged `json`
fn extract_json_fence(content: &str) -> Option<&str> {
    let regex = JSON_FENCE_REGEX.get_or_init(|| Regex::new(r"(?s)```json\s*(.*?)\s*```").unwrap());
    fence_body(regex, content)
}

/// Body of the first fenced block of any kind
fn extract_fence(content: &str) -> Option<&str> {
    let regex = FENCE_REGEX.get_or_init(|| Regex::new(r"(?s)```\s*(.*?)\s*```").unwrap());
    fence_body(regex, content)
}

fn fence_body<'a>(regex: &Regex, content: &'a str) -> Option<&'a str> {
    regex
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parse a model reply into emoji results.
///
/// Always returns at least one result. When nothing usable can be recovered,
/// returns the fallback list in `language` (English for unknown codes).
pub fn parse_response(raw_reply: &Value, language: &str) -> Vec<EmojiResult> {
    let content = raw_reply
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .filter(|content| !content.is_empty());

    let Some(content) = content else {
        warn!("Completion reply has no message content");
        return fallback_results(language);
    };

    if let Some(results) = parse_array(content) {
        return results;
    }

    warn!("Completion content is not a JSON array, trying extraction");
    debug!("Original response content: {}", content);

    match recover_array(content) {
        Some(results) => results,
        None => {
            warn!("Could not recover emojis from completion content");
            fallback_results(language)
        }
    }
}

/// Run the matchers in order and parse whatever the first match found
fn recover_array(content: &str) -> Option<Vec<EmojiResult>> {
    let (strategy, extracted) = MATCHERS
        .iter()
        .find_map(|(strategy, matcher)| matcher(content).map(|text| (*strategy, text)))?;

    debug!("Extracted candidate JSON using {} matcher", strategy);
    let results = parse_array(extracted);
    if results.is_none() {
        warn!("Text extracted by {} matcher is not a JSON array", strategy);
    }
    results
}

/// Parse `text` as a non-empty JSON array of emoji records
fn parse_array(text: &str) -> Option<Vec<EmojiResult>> {
    let value: Value = serde_json::from_str(text).ok()?;
    let items = value.as_array().filter(|items| !items.is_empty())?;

    Some(
        items
            .iter()
            .enumerate()
            .map(|(index, item)| to_emoji_result(index, item))
            .collect(),
    )
}

/// Map one array element, defaulting each missing field on its own
fn to_emoji_result(index: usize, item: &Value) -> EmojiResult {
    EmojiResult {
        emoji: text_field(item, "emoji").unwrap_or_else(|| DEFAULT_EMOJI.to_string()),
        name: text_field(item, "name").unwrap_or_else(|| format!("Emoji {}", index + 1)),
        description: text_field(item, "description")
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
    }
}

/// A field counts as present only when it is a non-empty string
fn text_field(item: &Value, key: &str) -> Option<String> {
    item.get(key)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// The apology list returned when a reply holds no usable records
pub fn fallback_results(language: &str) -> Vec<EmojiResult> {
    let messages = &LanguageRegistry::get().resolve(language).strings.error_messages;

    [
        ("😔", "Pensive Face", messages.no_results),
        ("🤔", "Thinking Face", messages.try_different_keywords),
        ("🙏", "Folded Hands", messages.thank_you),
    ]
    .into_iter()
    .map(|(emoji, name, description)| EmojiResult {
        emoji: emoji.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    })
    .collect()
}
