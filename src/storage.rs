use crate::error::{Error, Result};
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Checks that the input file exists.
///
/// # Errors
///
/// Returns [`Error::Io`] if the path does not name an existing file.
pub(crate) fn check_input_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::io_message(path, "file not found"));
    }

    info!("File {} found", path.display());
    Ok(())
}

/// Checks that the directory the output file will be written into exists.
///
/// An output path without a parent component refers to the current
/// directory, which always exists.
///
/// # Errors
///
/// Returns [`Error::Io`] if the parent directory is missing or not a directory.
pub(crate) fn check_output_path(path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Ok(()),
    };

    if !parent.is_dir() {
        return Err(Error::io_message(
            path,
            format!("path {} not found", parent.display()),
        ));
    }

    info!("Path {} found", parent.display());
    Ok(())
}

/// Reads all lines of the input file into memory, in file order.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read.
pub(crate) fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = fs::File::open(path).map_err(|e| Error::io(path, e))?;
    let reader = BufReader::new(file);

    reader
        .lines()
        .map(|line| line.map_err(|e| Error::io(path, e)))
        .collect()
}

/// Writes the converted lines to the output file, one per line.
///
/// The content goes to a temporary file first, is synced, and is then
/// atomically renamed onto the target path, so an interrupted run never
/// leaves a half-written output file.
///
/// A mismatch between the number of lines written and `expected` is logged
/// as a warning, not returned as an error.
///
/// # Errors
///
/// Returns [`Error::Io`] if the temporary file cannot be created, written,
/// synced, or renamed.
pub(crate) fn write_lines(path: &Path, lines: &[String], expected: usize) -> Result<()> {
    let temp_path = path.with_extension("tmp");
    let mut temp_file = fs::File::create(&temp_path).map_err(|e| Error::io(&temp_path, e))?;

    for line in lines {
        temp_file
            .write_all(line.as_bytes())
            .and_then(|()| temp_file.write_all(b"\n"))
            .map_err(|e| Error::io(&temp_path, e))?;
    }

    temp_file.sync_all().map_err(|e| Error::io(&temp_path, e))?;
    drop(temp_file);

    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))?;

    if lines.len() == expected {
        debug!("Wrote {} lines to {}", lines.len(), path.display());
    } else {
        warn!(
            "Wrote {} lines to {} but expected {}",
            lines.len(),
            path.display(),
            expected
        );
    }

    Ok(())
}
