use crate::cache::{fingerprint, ConstraintCache};
use crate::config::ExtractorConfig;
use crate::hybrid;
use crate::language::LanguageTag;
use crate::model::ConstraintSet;
use crate::parser::ParserFacade;
use crate::telemetry::{self, TelemetryReading};
use crate::tests_mining;

/// Composes the parser facade, hybrid extractor, and cache behind three
/// entry points. Holds no mutable global state; parallel extraction
/// requests from separate `ClewFacade` instances are independent.
pub struct ClewFacade {
    config: ExtractorConfig,
    parser: ParserFacade,
    cache: ConstraintCache,
}

impl ClewFacade {
    /// Never fails: constructor errors are reserved for allocator
    /// failure, which Rust surfaces by aborting rather than through a
    /// `Result`, so there is nothing for this constructor to propagate.
    pub fn new(config: ExtractorConfig) -> Self {
        let cache = ConstraintCache::new(config.cache_capacity);
        Self {
            parser: ParserFacade::new(),
            config,
            cache,
        }
    }

    /// Full hybrid pipeline with the facade's configured strategy
    /// (default `Combined`). Never panics on input data: unknown
    /// languages fall through the hybrid extractor's pattern-only path,
    /// and malformed source is handled best-effort by the parser's
    /// error-recovery contract.
    pub fn extract_from_code(&self, source: &[u8], language: LanguageTag) -> ConstraintSet {
        let key = fingerprint(source, language, self.config.strategy);

        if let Some(cached) = self.cache.get(&key) {
            return cached;
        }

        let result = hybrid::extract(
            source,
            language,
            self.config.strategy,
            &self.parser,
            Some(self.config.parse_timeout_micros),
        );

        self.cache.insert(key, result.constraints.clone());
        result.constraints
    }

    /// Parses a test file and mines assertions. Returns an empty
    /// ConstraintSet, not an error, when no assertion parser exists for
    /// `language`.
    pub fn extract_from_tests(&self, test_source: &str, language: LanguageTag) -> ConstraintSet {
        tests_mining::extract(test_source, language)
    }

    /// Resolves a `LanguageTag` from a file extension, honoring this
    /// facade's configured `user_extensions` overrides before falling
    /// back to the built-in extension table.
    pub fn resolve_language(&self, extension: &str) -> Option<LanguageTag> {
        LanguageTag::from_extension(extension, &self.config.user_extensions)
    }

    /// Resolves `language` from `file_extension` (honoring
    /// `user_extensions`) and runs the full hybrid pipeline on `source`.
    /// Returns an empty ConstraintSet, not an error, when the extension
    /// doesn't map to any known language.
    pub fn extract_from_code_by_extension(&self, source: &[u8], file_extension: &str) -> ConstraintSet {
        match self.resolve_language(file_extension) {
            Some(language) => self.extract_from_code(source, language),
            None => ConstraintSet::empty(),
        }
    }

    /// Deterministic threshold mapping from telemetry fields to
    /// Constraints.
    pub fn extract_from_telemetry(&self, reading: &TelemetryReading) -> ConstraintSet {
        telemetry::extract(reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Strategy;

    #[test]
    fn extract_from_code_is_cache_backed() {
        let facade = ClewFacade::new(ExtractorConfig {
            strategy: Strategy::Combined,
            ..ExtractorConfig::default()
        });
        let source = b"fn main() { let x: Option<i32> = None; }";

        let first = facade.extract_from_code(source, LanguageTag::Rust);
        let second = facade.extract_from_code(source, LanguageTag::Rust);

        assert_eq!(first.constraints.len(), second.constraints.len());
    }

    #[test]
    fn extract_from_telemetry_delegates_to_telemetry_module() {
        let facade = ClewFacade::new(ExtractorConfig::default());
        let set = facade.extract_from_telemetry(&TelemetryReading {
            latency_p99: 200.0,
            error_rate: 0.05,
        });
        assert!(set.len() >= 2);
    }

    #[test]
    fn extract_from_tests_delegates_to_mining_module() {
        let facade = ClewFacade::new(ExtractorConfig::default());
        let set = facade.extract_from_tests("assert foo() == 1", LanguageTag::Python);
        assert!(!set.is_empty());
    }

    #[test]
    fn zero_capacity_cache_still_extracts_correctly() {
        let facade = ClewFacade::new(ExtractorConfig {
            cache_capacity: 0,
            ..ExtractorConfig::default()
        });
        let set = facade.extract_from_code(b"fn main() {}", LanguageTag::Rust);
        assert!(!set.is_empty());
    }

    #[test]
    fn user_extensions_override_the_builtin_extension_table() {
        let mut user_extensions = std::collections::HashMap::new();
        user_extensions.insert("mjs".to_string(), LanguageTag::JavaScript);
        let facade = ClewFacade::new(ExtractorConfig {
            user_extensions,
            ..ExtractorConfig::default()
        });

        assert_eq!(facade.resolve_language("mjs"), Some(LanguageTag::JavaScript));
        let set = facade.extract_from_code_by_extension(b"async function ghost() {}", "mjs");
        assert!(!set.is_empty());
    }

    #[test]
    fn unknown_extension_yields_empty_set_not_error() {
        let facade = ClewFacade::new(ExtractorConfig::default());
        let set = facade.extract_from_code_by_extension(b"whatever", "exe");
        assert!(set.is_empty());
    }
}
