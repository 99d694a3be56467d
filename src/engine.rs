use crate::batch::BatchCoordinator;
use crate::codec;
use crate::error::Result;
use crate::request::{ConversionInput, ConversionRequest};
use crate::storage;
use serde::Serialize;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Statistics from a completed batch conversion.
#[derive(Debug, Clone, Serialize)]
pub struct BatchStats {
    /// Number of successfully converted lines
    pub converted: usize,

    /// Time spent converting and writing
    pub duration: Duration,
}

/// Result of one conversion run.
#[derive(Debug, Clone, Serialize)]
pub enum ConversionOutcome {
    /// The converted single value; printing is the caller's job
    Single(String),
    /// Batch statistics; the converted lines were written to the output file
    Batch(BatchStats),
}

/// Drives a single-value or whole-file conversion run.
///
/// The engine owns the request for the duration of the run; nothing
/// outlives it. The destination form is always the opposite of the
/// declared input form.
pub struct ConversionEngine {
    request: ConversionRequest,
}

impl ConversionEngine {
    /// Creates an engine for the given request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails validation.
    pub fn new(request: ConversionRequest) -> Result<Self> {
        request.validate()?;
        Ok(Self { request })
    }

    /// Executes the conversion run.
    ///
    /// # Errors
    ///
    /// Returns an error on validation or conversion failure, or when any
    /// file operation fails in batch mode. A failure leaves no partial
    /// output file behind.
    #[instrument(skip(self), fields(form = %self.request.form))]
    pub fn run(self) -> Result<ConversionOutcome> {
        debug!("Output format is {}", self.request.form.opposite());

        match &self.request.input {
            ConversionInput::Value(value) => {
                debug!("Starting conversion process");
                let converted = codec::convert(self.request.form, value)?;
                debug!(
                    "Conversion of {} value {} to {} value {} was successful",
                    self.request.form,
                    value,
                    self.request.form.opposite(),
                    converted
                );
                Ok(ConversionOutcome::Single(converted))
            }
            ConversionInput::File { input, output } => {
                let stats = self.convert_file(input, output)?;
                Ok(ConversionOutcome::Batch(stats))
            }
        }
    }

    /// Converts every line of `input` and writes the results to `output`.
    fn convert_file(&self, input: &Path, output: &Path) -> Result<BatchStats> {
        storage::check_input_file(input)?;
        storage::check_output_path(output)?;

        info!("Starting conversion process");

        let lines = storage::read_lines(input)?;
        let count = lines.len();
        info!(
            "Found {} {} values in input file {}",
            count,
            self.request.form,
            input.display()
        );

        let coordinator = BatchCoordinator::new(self.request.workers)?;

        let start = Instant::now();
        let converted = coordinator.convert_all(self.request.form, &lines)?;
        storage::write_lines(output, &converted, count)?;
        let duration = start.elapsed();

        info!("Finished conversion process");
        info!("Runtime: {} milliseconds", duration.as_millis());

        Ok(BatchStats {
            converted: converted.len(),
            duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::IdentifierForm;
    use assert_fs::prelude::*;

    const GUID: &str = "{48ED4993-8F51-406E-8501-64809B4EAEC8}";
    const HEX: &str = "9349ED48518F6E40850164809B4EAEC8";

    #[test]
    fn test_single_value_conversion() {
        let request = ConversionRequest::single(HEX, IdentifierForm::Hex);
        let outcome = ConversionEngine::new(request).unwrap().run().unwrap();

        match outcome {
            ConversionOutcome::Single(value) => assert_eq!(value, GUID),
            ConversionOutcome::Batch(_) => panic!("expected single outcome"),
        }
    }

    #[test]
    fn test_single_value_invalid_input() {
        let request = ConversionRequest::single("bogus", IdentifierForm::Guid);
        let err = ConversionEngine::new(request).unwrap().run().unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_file_conversion_hex_to_guid() {
        let temp = assert_fs::TempDir::new().unwrap();
        let input = temp.child("input.txt");
        let output = temp.child("output.txt");
        input
            .write_str(&format!("{HEX}\n{HEX}\n{HEX}\n"))
            .unwrap();

        let request =
            ConversionRequest::file(input.path(), output.path(), IdentifierForm::Hex).workers(4);
        let outcome = ConversionEngine::new(request).unwrap().run().unwrap();

        match outcome {
            ConversionOutcome::Batch(stats) => assert_eq!(stats.converted, 3),
            ConversionOutcome::Single(_) => panic!("expected batch outcome"),
        }

        output.assert(format!("{GUID}\n{GUID}\n{GUID}\n").as_str());
    }

    #[test]
    fn test_file_conversion_guid_to_hex() {
        let temp = assert_fs::TempDir::new().unwrap();
        let input = temp.child("input.txt");
        let output = temp.child("output.txt");
        input.write_str(&format!("{GUID}\n")).unwrap();

        let request =
            ConversionRequest::file(input.path(), output.path(), IdentifierForm::Guid);
        ConversionEngine::new(request).unwrap().run().unwrap();

        output.assert(format!("{HEX}\n").as_str());
    }

    #[test]
    fn test_file_conversion_missing_input() {
        let temp = assert_fs::TempDir::new().unwrap();
        let request = ConversionRequest::file(
            temp.path().join("absent.txt"),
            temp.path().join("out.txt"),
            IdentifierForm::Hex,
        );

        let err = ConversionEngine::new(request).unwrap().run().unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_file_conversion_missing_output_directory() {
        let temp = assert_fs::TempDir::new().unwrap();
        let input = temp.child("input.txt");
        input.write_str(&format!("{HEX}\n")).unwrap();

        let request = ConversionRequest::file(
            input.path(),
            temp.path().join("nope/out.txt"),
            IdentifierForm::Hex,
        );

        let err = ConversionEngine::new(request).unwrap().run().unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_failing_line_leaves_no_output_file() {
        let temp = assert_fs::TempDir::new().unwrap();
        let input = temp.child("input.txt");
        let output = temp.child("output.txt");
        input
            .write_str(&format!("{HEX}\nnot a value\n{HEX}\n"))
            .unwrap();

        let request =
            ConversionRequest::file(input.path(), output.path(), IdentifierForm::Hex).workers(2);
        let err = ConversionEngine::new(request).unwrap().run().unwrap_err();

        assert!(err.is_format());
        assert!(!output.exists());
    }

    #[test]
    fn test_invalid_worker_count_rejected_before_io() {
        let request = ConversionRequest::single(HEX, IdentifierForm::Hex).workers(0);
        assert!(ConversionEngine::new(request).is_err());
    }

    #[test]
    fn test_empty_input_file() {
        let temp = assert_fs::TempDir::new().unwrap();
        let input = temp.child("input.txt");
        let output = temp.child("output.txt");
        input.write_str("").unwrap();

        let request =
            ConversionRequest::file(input.path(), output.path(), IdentifierForm::Hex);
        let outcome = ConversionEngine::new(request).unwrap().run().unwrap();

        match outcome {
            ConversionOutcome::Batch(stats) => assert_eq!(stats.converted, 0),
            ConversionOutcome::Single(_) => panic!("expected batch outcome"),
        }
        output.assert("");
    }
}
