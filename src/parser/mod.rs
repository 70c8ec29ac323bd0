mod node;
mod tree;

pub use node::Node;
pub use tree::{get_node_text, SyntaxTree};

use std::sync::Arc;

use tracing::trace;

use crate::error::ParserError;
use crate::language::LanguageTag;

/// Default parse timeout when a caller doesn't override it via
/// `ExtractorConfig`.
pub const DEFAULT_PARSE_TIMEOUT_MICROS: u64 = 2_000_000;

fn tree_sitter_language(tag: LanguageTag) -> Option<tree_sitter::Language> {
    match tag {
        LanguageTag::Go => Some(tree_sitter_go::LANGUAGE.into()),
        LanguageTag::Python => Some(tree_sitter_python::LANGUAGE.into()),
        LanguageTag::Rust => Some(tree_sitter_rust::LANGUAGE.into()),
        LanguageTag::JavaScript => Some(tree_sitter_javascript::LANGUAGE.into()),
        LanguageTag::TypeScript => Some(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()),
        LanguageTag::C => Some(tree_sitter_c::LANGUAGE.into()),
        LanguageTag::Cpp => Some(tree_sitter_cpp::LANGUAGE.into()),
        LanguageTag::Java => Some(tree_sitter_java::LANGUAGE.into()),
        LanguageTag::Zig => Some(tree_sitter_zig::LANGUAGE.into()),
    }
}

/// Maps a `LanguageTag` to a concrete grammar and produces persistent
/// syntax trees. Holds no mutable state across calls, but per the
/// concurrency contract a `tree_sitter::Parser` is not `Sync` — each
/// `parse` call constructs and discards its own `Parser`, which is cheap
/// relative to the parse itself.
#[derive(Default)]
pub struct ParserFacade;

impl ParserFacade {
    pub fn new() -> Self {
        Self
    }

    pub fn supports(&self, language: LanguageTag) -> bool {
        tree_sitter_language(language).is_some()
    }

    /// Parse `source` as `language`. `timeout_micros` of `None` uses
    /// `DEFAULT_PARSE_TIMEOUT_MICROS`.
    ///
    /// Fails only with `GrammarUnavailable` or `ParseTimeout`; any other
    /// input, malformed or not, yields a tree with `has_error()` set
    /// rather than an `Err` — recovery is the grammar's responsibility.
    pub fn parse(
        &self,
        source: &[u8],
        language: LanguageTag,
        timeout_micros: Option<u64>,
    ) -> Result<SyntaxTree, ParserError> {
        let ts_language =
            tree_sitter_language(language).ok_or_else(|| ParserError::grammar_unavailable(language.as_str()))?;

        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&ts_language)
            .map_err(|_| ParserError::grammar_unavailable(language.as_str()))?;

        let timeout = timeout_micros.unwrap_or(DEFAULT_PARSE_TIMEOUT_MICROS);
        parser.set_timeout_micros(timeout);

        trace!(language = %language, timeout, "parsing source");

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ParserError::parse_timeout(language.as_str(), timeout))?;

        Ok(SyntaxTree::new(tree, Arc::from(source), language))
    }
}
