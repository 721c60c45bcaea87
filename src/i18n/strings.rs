/// Fallback copy shown when no emojis could be recovered from a reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessages {
    /// Apology shown next to the pensive face
    pub no_results: &'static str,

    /// Hint shown next to the thinking face
    pub try_different_keywords: &'static str,

    /// Closing line shown next to the folded hands
    pub thank_you: &'static str,
}

/// All localized strings used to prompt the model and report failures
///
/// Strings are stored verbatim and embedded into prompts without escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStrings {
    /// Tells the model which language to answer in
    pub instructions: &'static str,

    /// JSON array shown to the model as the expected reply shape
    pub json_example: &'static str,

    /// Copy for the fallback result list
    pub error_messages: ErrorMessages,
}

// ==================== English Strings ====================

/// English language strings (default)
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    instructions:
        "Please respond in English. The emoji name and description should be in English.",
    json_example: r#"[
  {
    "emoji": "😊",
    "name": "Smiling Face",
    "description": "A friendly, happy face"
  }
]"#,
    error_messages: ErrorMessages {
        no_results: "Sorry, unable to find related emojis",
        try_different_keywords: "Please try searching with different keywords",
        thank_you: "Thank you for your patience",
    },
};

// ==================== Spanish Strings ====================

/// Spanish language strings
pub const SPANISH_STRINGS: LanguageStrings = LanguageStrings {
    instructions: "Por favor responde en español. El nombre y descripción del emoji deben estar en español.",
    json_example: r#"[
  {
    "emoji": "😊",
    "name": "Cara Sonriente",
    "description": "Una cara amigable y feliz"
  }
]"#,
    error_messages: ErrorMessages {
        no_results: "Lo siento, no se pudieron encontrar emojis relacionados",
        try_different_keywords: "Por favor intenta buscar con diferentes palabras clave",
        thank_you: "Gracias por tu paciencia",
    },
};

// ==================== Chinese Strings ====================

/// Simplified Chinese language strings
pub const CHINESE_STRINGS: LanguageStrings = LanguageStrings {
    instructions: "请用中文回答。emoji的名称和描述都使用中文。",
    json_example: r#"[
  {
    "emoji": "😊",
    "name": "微笑脸",
    "description": "一个友好、开心的表情"
  }
]"#,
    error_messages: ErrorMessages {
        no_results: "抱歉，无法找到相关的 emoji",
        try_different_keywords: "请尝试用不同的关键词搜索",
        thank_you: "感谢您的耐心等待",
    },
};
