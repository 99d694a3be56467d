use crate::codec::IdentifierForm;
use crate::error::{Error, Result};
use std::path::PathBuf;

/// Default worker count: batch conversion is sequential unless asked otherwise.
pub const DEFAULT_WORKERS: usize = 1;

/// The source and sink of one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionInput {
    /// Convert a single value and print the result.
    Value(String),
    /// Convert every line of `input`, writing results to `output`.
    File {
        /// Path to the line-oriented input file
        input: PathBuf,
        /// Path of the output file to write
        output: PathBuf,
    },
}

/// An immutable conversion request, created once per invocation.
///
/// Use [`ConversionRequest::single`] or [`ConversionRequest::file`] to
/// construct one; the engine validates it before any I/O happens.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ConversionRequest {
    /// Value or file pair to convert
    pub input: ConversionInput,

    /// Declared form of the input value(s); the target is always its opposite
    pub form: IdentifierForm,

    /// Hard cap on simultaneously in-flight conversion tasks
    pub workers: usize,
}

impl ConversionRequest {
    /// Creates a request for a single-value conversion.
    #[must_use]
    pub fn single(value: impl Into<String>, form: IdentifierForm) -> Self {
        Self {
            input: ConversionInput::Value(value.into()),
            form,
            workers: DEFAULT_WORKERS,
        }
    }

    /// Creates a request for a whole-file conversion.
    #[must_use]
    pub fn file(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        form: IdentifierForm,
    ) -> Self {
        Self {
            input: ConversionInput::File {
                input: input.into(),
                output: output.into(),
            },
            form,
            workers: DEFAULT_WORKERS,
        }
    }

    /// Sets the worker-pool size for batch conversion.
    #[must_use]
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the worker count is zero or a file
    /// request names an empty path.
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::config("workers must be greater than 0"));
        }

        if let ConversionInput::File { input, output } = &self.input {
            if input.as_os_str().is_empty() {
                return Err(Error::config("input path must not be empty"));
            }
            if output.as_os_str().is_empty() {
                return Err(Error::config("output path must not be empty"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_request_defaults() {
        let request = ConversionRequest::single("abc", IdentifierForm::Hex);
        assert_eq!(request.workers, DEFAULT_WORKERS);
        assert_eq!(request.form, IdentifierForm::Hex);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_file_request_with_workers() {
        let request =
            ConversionRequest::file("in.txt", "out.txt", IdentifierForm::Guid).workers(8);
        assert_eq!(request.workers, 8);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_zero_workers_rejected() {
        let request = ConversionRequest::single("abc", IdentifierForm::Hex).workers(0);
        let err = request.validate().unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_empty_paths_rejected() {
        let request = ConversionRequest::file("", "out.txt", IdentifierForm::Guid);
        assert!(request.validate().is_err());

        let request = ConversionRequest::file("in.txt", "", IdentifierForm::Guid);
        assert!(request.validate().is_err());
    }
}
