//! Error types for the remote-content filter.
//!
//! Nothing here is fatal: both error families are recovered at the point
//! they occur and the affected message simply falls back to the host's
//! default remote-content policy.

/// A configured pattern failed to compile as a regular expression.
///
/// The rule is treated as non-matching and evaluation continues with the
/// other rule.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("Invalid pattern {pattern:?}: {source}")]
    Invalid {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// The per-message decision property could not be read from host storage.
///
/// Treated as "no decision recorded" — evaluation proceeds.
#[derive(Debug, thiserror::Error)]
pub enum PropertyError {
    #[error("Property store unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read property {name}: {reason}")]
    ReadFailed { name: String, reason: String },
}
