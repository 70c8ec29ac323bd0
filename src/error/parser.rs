/// Errors from the Parser Facade.
///
/// `GrammarUnavailable`, `ParseTimeout`, and `UnknownLanguage` are soft in
/// the sense that most callers see them only as `ExtractionResult`
/// diagnostics, not as a propagated `Result::Err` — they are still
/// constructed as typed values so the hybrid extractor's fallback logic
/// can match on them precisely.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("no grammar linked for language `{language}`")]
    GrammarUnavailable { language: String },

    #[error("parse of `{language}` source exceeded {timeout_micros}us timeout")]
    ParseTimeout {
        language: String,
        timeout_micros: u64,
    },

    #[error("`{extension}` does not map to any known language tag")]
    UnknownLanguage { extension: String },
}

impl ParserError {
    pub fn grammar_unavailable(language: impl Into<String>) -> Self {
        Self::GrammarUnavailable {
            language: language.into(),
        }
    }

    pub fn parse_timeout(language: impl Into<String>, timeout_micros: u64) -> Self {
        Self::ParseTimeout {
            language: language.into(),
            timeout_micros,
        }
    }

    pub fn unknown_language(extension: impl Into<String>) -> Self {
        Self::UnknownLanguage {
            extension: extension.into(),
        }
    }
}
