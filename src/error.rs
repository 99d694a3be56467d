use crate::codec::IdentifierForm;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the guid-converter library.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// A value failed the length/shape validation for its form.
    ///
    /// Raised both for invalid input values and for produced values that
    /// fail the post-conversion check.
    #[error("Validation of {form} value '{value}' failed")]
    Format {
        /// Form the value was validated against
        form: IdentifierForm,
        /// The offending value
        value: String,
    },

    /// Declared input format is outside the closed {guid, hex} set.
    #[error("Unknown format '{name}': expected 'guid' or 'hex'")]
    UnsupportedFormat {
        /// The unrecognized format name
        name: String,
    },

    /// IO error with context about the file path.
    #[error("IO error accessing '{path}': {message}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// Request validation error.
    #[error("Invalid request: {message}")]
    Config {
        /// Detailed error message
        message: String,
    },
}

impl Error {
    /// Creates a format validation error.
    #[must_use]
    pub fn format(form: IdentifierForm, value: impl Into<String>) -> Self {
        Self::Format {
            form,
            value: value.into(),
        }
    }

    /// Creates an unsupported format error.
    #[must_use]
    pub fn unsupported_format(name: impl Into<String>) -> Self {
        Self::UnsupportedFormat { name: name.into() }
    }

    /// Creates an IO error with path context.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Creates an IO error with a plain message.
    #[must_use]
    pub fn io_message(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a request validation error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Returns true if this is a format validation error.
    #[must_use]
    pub const fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    /// Returns true if this is an IO error.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns true if this is a request validation error.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error() {
        let err = Error::format(IdentifierForm::Guid, "not-a-guid");
        assert!(err.is_format());
        assert!(err.to_string().contains("guid"));
        assert!(err.to_string().contains("not-a-guid"));
    }

    #[test]
    fn test_unsupported_format_error() {
        let err = Error::unsupported_format("base64");
        assert!(err.to_string().contains("base64"));
        assert!(err.to_string().contains("expected 'guid' or 'hex'"));
    }

    #[test]
    fn test_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::io("/tmp/input.txt", io_err);
        assert!(err.is_io());
        assert!(err.to_string().contains("/tmp/input.txt"));
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("workers must be greater than 0");
        assert!(err.is_config());
        assert!(err.to_string().contains("workers"));
    }

    #[test]
    fn test_error_clone() {
        let err = Error::format(IdentifierForm::Hex, "abc");
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
