//! Errors raised while building an EPW file.

use std::path::PathBuf;

use chrono::NaiveDateTime;

use crate::reading::Category;

/// Every variant is fatal for the run.
#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    /// A per-category, per-location table is absent.
    #[error("missing {category} input: {} not found", path.display())]
    MissingInputFile { category: Category, path: PathBuf },

    /// No processed file to pick a grid cell from.
    #[error("no lat_<lat>_lon_<lon>.csv files in {}", dir.display())]
    NoGridCells { dir: PathBuf },

    /// Fewer local hourly marks than the target period needs.
    #[error(
        "incomplete {category} coverage: {found} of {expected} hours present, first missing hour {first_missing}"
    )]
    IncompleteCoverage {
        category: Category,
        expected: usize,
        found: usize,
        first_missing: NaiveDateTime,
    },

    /// Two source rows land on the same local hourly mark.
    #[error("duplicate {category} row for local hour {time}")]
    DuplicateTimestamp {
        category: Category,
        time: NaiveDateTime,
    },

    /// A derivation lacks one of its inputs for a given hour.
    #[error("cannot compute {quantity}: missing {input} at {time} UTC")]
    MissingDerivationInput {
        quantity: &'static str,
        input: &'static str,
        time: NaiveDateTime,
    },

    #[error("override table {} not found", path.display())]
    MissingOverrideTable { path: PathBuf },

    /// Override rows do not line up one-to-one with the grid.
    #[error("override table {} does not match the grid: {reason}", path.display())]
    OverrideMismatch { path: PathBuf, reason: String },

    #[error("malformed input {}: {reason}", path.display())]
    MalformedInput { path: PathBuf, reason: String },

    #[error("unknown time zone '{0}'")]
    UnknownTimeZone(String),

    #[error("invalid EPW header: {reason}")]
    InvalidHeader { reason: String },

    #[error("invalid period: {reason}")]
    InvalidPeriod { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type SynthResult<T> = Result<T, SynthError>;
