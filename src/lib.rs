//! Ananke's extraction core: a polyglot syntactic/semantic analyzer.
//!
//! Parses source text across nine languages, walks the resulting syntax
//! tree, detects constraint-bearing patterns and semantic holes
//! (unfinished code), and merges results from multiple extraction
//! strategies at different confidence levels behind a content-addressed
//! cache. Command-line plumbing, rule-file loading, and the downstream
//! DSL compiler are out of scope here — this crate exposes only the
//! extraction core through [`ClewFacade`].

pub mod cache;
pub mod config;
pub mod error;
pub mod extractor;
pub mod facade;
pub mod holes;
pub mod hybrid;
pub mod language;
pub mod logging;
pub mod model;
pub mod parser;
pub mod pattern;
pub mod telemetry;
pub mod tests_mining;
pub mod traversal;

pub use config::ExtractorConfig;
pub use error::{Error, Result};
pub use facade::ClewFacade;
pub use language::LanguageTag;
pub use model::{
    Constraint, ConstraintSet, ExtractionResult, Hole, HoleKind, HoleOrigin, Kind, Location, SourceTag, Strategy,
};
pub use parser::{get_node_text, Node, ParserFacade, SyntaxTree};
pub use telemetry::TelemetryReading;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_round_trips_through_public_api() {
        let facade = ClewFacade::new(ExtractorConfig::default());
        let set = facade.extract_from_code(b"fn main() {}", LanguageTag::Rust);
        assert!(!set.is_empty());
    }
}
