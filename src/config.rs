use std::collections::HashMap;

use crate::cache::DEFAULT_CACHE_CAPACITY;
use crate::language::LanguageTag;
use crate::model::Strategy;
use crate::parser::DEFAULT_PARSE_TIMEOUT_MICROS;

/// Configuration surface for the Clew Facade constructor. This is the
/// only "configuration layer" the core owns — a plain struct, not a
/// CLI-flags parser; CLI ownership lives with external collaborators.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    pub strategy: Strategy,
    pub parse_timeout_micros: u64,
    /// `0` disables the cache.
    pub cache_capacity: usize,
    pub user_extensions: HashMap<String, LanguageTag>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Combined,
            parse_timeout_micros: DEFAULT_PARSE_TIMEOUT_MICROS,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            user_extensions: HashMap::new(),
        }
    }
}
