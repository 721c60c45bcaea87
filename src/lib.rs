//! Emoji search backed by an OpenAI-compatible chat-completion API.
//!
//! A query is rendered into a localized prompt, sent to the model, and the
//! reply is parsed into a list of [`EmojiResult`]s. Replies that cannot be
//! parsed degrade into a localized fallback list rather than an error.

pub mod config;
pub mod error;
pub mod i18n;
pub mod openai;
pub mod parser;
pub mod prompt;
pub mod search;

pub use config::Config;
pub use error::SearchError;
pub use parser::{parse_response, EmojiResult};
pub use prompt::{build_prompt, prompt_components, PromptBuilder, PromptComponents, PromptConfig};
pub use search::search;
