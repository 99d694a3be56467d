use crate::codec::{self, IdentifierForm};
use crate::error::{Error, Result};
use rayon::prelude::*;
use tracing::{debug, error};

/// Converts an ordered sequence of lines with a bounded worker pool.
///
/// The coordinator guarantees that the result at position `i` corresponds
/// to input line `i` regardless of which worker processed it, that at most
/// `workers` conversions run concurrently, and that the first failing line
/// aborts the whole batch.
#[derive(Debug)]
pub(crate) struct BatchCoordinator {
    workers: usize,
}

impl BatchCoordinator {
    /// Creates a coordinator with the given worker-pool size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `workers` is zero.
    pub(crate) fn new(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(Error::config("workers must be greater than 0"));
        }
        Ok(Self { workers })
    }

    /// Converts every line from `form` into its opposite form, in input order.
    ///
    /// Each line is independently validated, converted, and validated again.
    /// With one worker the lines are processed sequentially; with more, a
    /// thread pool of exactly `workers` threads is built for this call and
    /// torn down when it returns, on both success and failure paths. The
    /// fallible collect short-circuits, so lines queued after the first
    /// failure are not converted.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::Format`] encountered, aborting the batch.
    pub(crate) fn convert_all(
        &self,
        form: IdentifierForm,
        lines: &[String],
    ) -> Result<Vec<String>> {
        debug!(
            "Converting {} {} values with {} worker(s)",
            lines.len(),
            form,
            self.workers
        );

        if self.workers == 1 {
            return lines.iter().map(|line| convert_line(form, line)).collect();
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()
            .map_err(|e| Error::config(format!("failed to build worker pool: {e}")))?;

        pool.install(|| {
            lines
                .par_iter()
                .map(|line| convert_line(form, line))
                .collect()
        })
    }
}

/// Converts one line, reporting a failure the moment it is observed.
fn convert_line(form: IdentifierForm, line: &str) -> Result<String> {
    match codec::convert(form, line) {
        Ok(converted) => Ok(converted),
        Err(e) => {
            error!("{e}");
            Err(e)
        }
    }
}
