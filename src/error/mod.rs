mod cache;
mod parser;

pub use cache::CacheError;
pub use parser::ParserError;

/// Top-level error type for the extraction core.
///
/// Every fallible public entry point returns `Result<T>`. Soft failures
/// named in the error-handling design (grammar unavailable, parse
/// timeout, unknown language) are *not* represented here when they occur
/// mid-pipeline — those are absorbed into `ExtractionResult` diagnostics
/// instead. This type only surfaces failures a caller cannot route
/// around: cache invariant violations and malformed configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parser(#[from] ParserError),

    #[error(transparent)]
    Cache(#[from] CacheError),
}

pub type Result<T> = std::result::Result<T, Error>;
