//! Error types for the transaction browser
//!
//! The core components (filtering, identity resolution, aggregation) are
//! total functions and never fail; errors only arise at the plumbing edges.
//!
//! # Error Categories
//!
//! - **File I/O errors**: snapshot file not found, permission denied, etc.
//! - **CSV parsing errors**: malformed snapshot rows, invalid data types
//! - **Render errors**: the rendering collaborator rejected a series
//!
//! Malformed *user input* (unparsable customer id or amount text) is not an
//! error anywhere in this crate: it degrades to a well-defined fallback view
//! per the filter and selection contracts.

use thiserror::Error;

/// Main error type for the transaction browser
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewerError {
    /// I/O error occurred while reading snapshot files or writing output
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred while loading a snapshot collection
    ///
    /// Recoverable at the row level: the malformed row is logged and
    /// skipped, loading continues with the next row. Returned only when
    /// the reader itself fails.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// The rendering collaborator failed to install a series
    #[error("Render error: {message}")]
    Render {
        /// Description of the render failure
        message: String,
    },
}

impl From<std::io::Error> for ViewerError {
    fn from(error: std::io::Error) -> Self {
        ViewerError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for ViewerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        ViewerError::Parse {
            line,
            message: error.to_string(),
        }
    }
}

impl From<csv_async::Error> for ViewerError {
    fn from(error: csv_async::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        ViewerError::Parse {
            line,
            message: error.to_string(),
        }
    }
}

impl ViewerError {
    /// Create a Render error
    pub fn render(message: impl Into<String>) -> Self {
        ViewerError::Render {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::io(
        ViewerError::Io { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::parse_with_line(
        ViewerError::Parse { line: Some(42), message: "Invalid field".to_string() },
        "CSV parse error at line 42: Invalid field"
    )]
    #[case::parse_without_line(
        ViewerError::Parse { line: None, message: "Invalid field".to_string() },
        "CSV parse error: Invalid field"
    )]
    #[case::render(
        ViewerError::render("canvas unavailable"),
        "Render error: canvas unavailable"
    )]
    fn test_error_display(#[case] error: ViewerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: ViewerError = io_error.into();
        assert!(matches!(error, ViewerError::Io { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
