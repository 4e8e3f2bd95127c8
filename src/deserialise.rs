//! Generic function for deserialising a per-location table to a Vec of Readings

use std::path::Path;

use tracing::debug;

use crate::{
    error::{SynthError, SynthResult},
    reading::{Reading, SirenReading},
};

/// Location lines above the column header of a SIREN weather file.
const SIREN_PREAMBLE_LINES: usize = 2;

/// Load a per-location CSV table from the file system and deserialise every row
pub fn deserialise<R: Reading>(file_path: &Path) -> SynthResult<Vec<R>> {
    if !file_path.is_file() {
        return Err(SynthError::MissingInputFile {
            category: R::CATEGORY,
            path: file_path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(file_path)
        .map_err(|e| malformed(file_path, e))?;

    let mut readings = Vec::new();
    for record in reader.deserialize::<R>() {
        readings.push(record.map_err(|e| malformed(file_path, e))?);
    }

    debug!(
        category = %R::CATEGORY,
        path = %file_path.display(),
        rows = readings.len(),
        "table loaded"
    );

    Ok(readings)
}

/// Load a SIREN weather file, skipping the location lines above its header
pub fn deserialise_siren(file_path: &Path) -> SynthResult<Vec<SirenReading>> {
    if !file_path.is_file() {
        return Err(SynthError::MissingOverrideTable {
            path: file_path.to_path_buf(),
        });
    }

    // The preamble is narrower than the table, hence `flexible`
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(file_path)
        .map_err(|e| malformed(file_path, e))?;

    let mut records = reader.records().skip(SIREN_PREAMBLE_LINES);
    let headers = match records.next() {
        Some(headers) => headers.map_err(|e| malformed(file_path, e))?,
        None => {
            return Err(SynthError::MalformedInput {
                path: file_path.to_path_buf(),
                reason: "no column header after the location lines".to_string(),
            })
        }
    };

    let mut readings = Vec::new();
    for record in records {
        let record = record.map_err(|e| malformed(file_path, e))?;
        readings.push(
            record
                .deserialize::<SirenReading>(Some(&headers))
                .map_err(|e| malformed(file_path, e))?,
        );
    }

    debug!(path = %file_path.display(), rows = readings.len(), "override table loaded");

    Ok(readings)
}

fn malformed(file_path: &Path, e: csv::Error) -> SynthError {
    let reason = match e.position() {
        Some(pos) => format!("line {}: {}", pos.line(), e),
        None => e.to_string(),
    };

    SynthError::MalformedInput {
        path: file_path.to_path_buf(),
        reason,
    }
}

// -- Tests -------------------------------------------------------------------
