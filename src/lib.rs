//! # guid-converter
//!
//! Converts 128-bit identifiers between their braced GUID form
//! (`{48ED4993-8F51-406E-8501-64809B4EAEC8}`) and their flat 32-character
//! hex form (`9349ED48518F6E40850164809B4EAEC8`).
//!
//! ## Features
//!
//! - Single-value conversion in either direction
//! - Whole-file conversion with a bounded worker pool
//! - Input order preserved regardless of worker completion order
//! - Fail-fast batches: one bad line aborts the run, no partial output file
//! - Atomic output writes with a post-write count check
//!
//! ## Quick Start
//!
//! ```no_run
//! use guid_converter::{ConversionEngine, ConversionRequest, IdentifierForm};
//!
//! # fn main() -> anyhow::Result<()> {
//! let request = ConversionRequest::file("guids.txt", "hex.txt", IdentifierForm::Guid)
//!     .workers(4);
//!
//! ConversionEngine::new(request)?.run()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! 1. **Codec**: validates and byte-reorders a single value
//! 2. **BatchCoordinator**: drives bounded-parallel, order-preserving conversion
//! 3. **Storage**: line-oriented file access with atomic writes
//! 4. **ConversionEngine**: orchestrates the single-value and file paths

#![warn(
    missing_docs,
    rust_2018_idioms,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::module_name_repetitions)]

mod batch;
mod codec;
mod engine;
mod error;
mod request;
mod storage;

pub use codec::{convert, IdentifierForm, GUID_LEN, HEX_LEN};
pub use engine::{BatchStats, ConversionEngine, ConversionOutcome};
pub use error::{Error, Result};
pub use request::{ConversionInput, ConversionRequest, DEFAULT_WORKERS};

/// Runs a complete conversion with the given request.
///
/// This is the main entry point for the library.
///
/// # Errors
///
/// Returns an error if:
/// - The request is invalid (zero workers, empty paths)
/// - A value fails validation before or after conversion
/// - The input file is missing or the output directory does not exist
/// - File operations fail
///
/// # Examples
///
/// ```no_run
/// use guid_converter::{run, ConversionRequest, IdentifierForm};
///
/// # fn main() -> anyhow::Result<()> {
/// let request = ConversionRequest::single(
///     "9349ED48518F6E40850164809B4EAEC8",
///     IdentifierForm::Hex,
/// );
///
/// let outcome = run(request)?;
/// # Ok(())
/// # }
/// ```
pub fn run(request: ConversionRequest) -> Result<ConversionOutcome> {
    ConversionEngine::new(request)?.run()
}
