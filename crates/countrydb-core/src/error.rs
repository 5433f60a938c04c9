// crates/countrydb-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by countrydb-core.
///
/// Lookups never fail for absent data: a missing country is `None` or an
/// empty `Vec`. Errors only come from loading a dataset or from asking for
/// a capability that was compiled out.
#[derive(Debug, Error)]
pub enum CountryError {
    /// The dataset file could not be found.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A matching backend is not available in this build.
    #[error("missing capability: {0}")]
    MissingCapability(&'static str),
}

pub type Result<T> = std::result::Result<T, CountryError>;
