use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during crfprep core operations.
///
/// Annotation noise inside a corpus is never reported through this type;
/// see [`RecordError`] and [`crate::types::Diagnostic`] for that.
#[derive(Debug, Error)]
pub enum CrfPrepError {
    /// The requested corpus format name is not one of `conll` or `ssf`.
    #[error("unknown corpus format {name:?} (expected \"conll\" or \"ssf\")")]
    UnknownFormat {
        /// The name that could not be resolved.
        name: String,
    },

    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),

    /// Reading or writing a corpus file failed.
    #[error("i/o error on {path}: {source}")]
    Io {
        /// The file or directory involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for crfprep operations.
pub type Result<T> = std::result::Result<T, CrfPrepError>;

/// Why a single annotated line could not be decoded into a token/tag record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The line has fewer tab-separated fields than the format requires.
    #[error("expected at least {expected} tab-separated fields, found {found}")]
    TooFewFields {
        /// Minimum field count for the format.
        expected: usize,
        /// Field count actually present.
        found: usize,
    },

    /// A required field is present but empty.
    #[error("field {field} ({position}) is empty")]
    EmptyField {
        /// Field name (`token` or `tag`).
        field: &'static str,
        /// Zero-based field position in the line.
        position: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = CrfPrepError::UnknownFormat {
            name: "xml".into(),
        };
        assert!(err.to_string().contains("\"xml\""));

        let err = RecordError::TooFewFields {
            expected: 3,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "expected at least 3 tab-separated fields, found 2"
        );

        let err = RecordError::EmptyField {
            field: "tag",
            position: 2,
        };
        assert_eq!(err.to_string(), "field tag (2) is empty");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CrfPrepError>();
        assert_send_sync::<RecordError>();
    }
}
