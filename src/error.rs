//! Error handling for the FarmSecure core library.

/// Specialized error type for registry and catalog operations
///
/// The risk scorer itself is total and never returns an error; these
/// variants cover the fallible record operations around it.
#[derive(Debug, thiserror::Error)]
pub enum FarmSecureError {
    /// A record was rejected because required fields were missing
    #[error("Validation error: {0}")]
    Validation(String),

    /// A lookup referenced an id that does not exist
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Kind of record that was looked up (e.g. "training module")
        kind: &'static str,
        /// The id that failed to resolve
        id: String,
    },

    /// A date field could not be parsed
    #[error("Date parse error: {0}")]
    DateParse(#[from] chrono::ParseError),
}

/// Result type for FarmSecure operations
pub type Result<T> = std::result::Result<T, FarmSecureError>;
