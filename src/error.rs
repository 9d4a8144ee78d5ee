//! Error types for hgvs-intake

use thiserror::Error;

/// Main error type for hgvs-intake operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    /// Input contained no well-formed variant notation.
    ///
    /// This is a normal negative outcome, not a fault: the extractor is total
    /// over all strings and "not found" is its only failure mode. Callers
    /// that prefer `Option` should use [`crate::extract`] directly.
    #[error("no variant notation found in input")]
    NotationNotFound,

    /// IO error (for file operations)
    #[error("IO error: {msg}")]
    Io { msg: String },

    /// JSON serialization error
    #[error("JSON error: {msg}")]
    Json { msg: String },
}

impl From<std::io::Error> for IntakeError {
    fn from(e: std::io::Error) -> Self {
        IntakeError::Io { msg: e.to_string() }
    }
}

impl From<serde_json::Error> for IntakeError {
    fn from(e: serde_json::Error) -> Self {
        IntakeError::Json { msg: e.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = IntakeError::NotationNotFound;
        assert_eq!(err.to_string(), "no variant notation found in input");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: IntakeError = io.into();
        assert!(matches!(err, IntakeError::Io { .. }));
        assert!(err.to_string().contains("missing"));
    }
}
