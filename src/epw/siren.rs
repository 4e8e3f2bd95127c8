//! Replaces irradiance and wind with the columns of a SIREN weather file.

use std::path::Path;

use chrono::{Datelike, Timelike};

use super::record::HourRecord;
use crate::{
    align::HourGrid,
    error::{SynthError, SynthResult},
    reading::SirenReading,
};

/// Overwrites GHI, DNI and DHI (scaled by `scaling_factor`) and wind direction and
/// speed (as given) row by row. `rows` must hold one row per grid mark; rows that
/// carry a calendar stamp must name the mark's local standard hour.
pub fn apply_siren(
    records: &mut [HourRecord],
    grid: &HourGrid,
    rows: &[SirenReading],
    scaling_factor: f64,
    path: &Path,
) -> SynthResult<()> {
    let mismatch = |reason: String| SynthError::OverrideMismatch {
        path: path.to_path_buf(),
        reason,
    };

    if rows.len() != grid.len() || records.len() != grid.len() {
        return Err(mismatch(format!(
            "{} rows for a {} hour grid",
            rows.len(),
            grid.len()
        )));
    }

    for (i, ((record, row), mark)) in records.iter_mut().zip(rows).zip(grid.marks()).enumerate() {
        if let Some(stamp) = row.stamp() {
            let expected = (mark.year(), mark.month(), mark.day(), mark.hour());
            if stamp != expected {
                return Err(mismatch(format!(
                    "row {} is stamped {stamp:?}, expected {expected:?}",
                    i + 1
                )));
            }
        }
        if !row.is_finite() {
            return Err(mismatch(format!("row {} has a missing value", i + 1)));
        }

        record.global_horizontal = row.ghi * scaling_factor;
        record.direct_normal = row.dni * scaling_factor;
        record.diffuse_horizontal = row.dhi * scaling_factor;
        record.wind_direction = row.wdir;
        record.wind_speed = row.wspd;
    }

    Ok(())
}

// -- Tests -------------------------------------------------------------------
