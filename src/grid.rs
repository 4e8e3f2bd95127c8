//! Finds the processed grid cell closest to a target coordinate.
//!
//! The extraction layer writes one table per cell, named `lat_<lat>_lon_<lon>.csv`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    error::{SynthError, SynthResult},
    reading::Category,
};

#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub latitude: f64,
    pub longitude: f64,
    pub file_name: String,
}

impl GridCell {
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let stem = file_name.strip_suffix(".csv")?;
        let rest = stem.strip_prefix("lat_")?;
        let (lat, lon) = rest.split_once("_lon_")?;

        Some(GridCell {
            latitude: lat.parse().ok()?,
            longitude: lon.parse().ok()?,
            file_name: file_name.to_string(),
        })
    }

    /// Euclidean distance in degrees.
    pub fn distance(&self, latitude: f64, longitude: f64) -> f64 {
        ((self.latitude - latitude).powi(2) + (self.longitude - longitude).powi(2)).sqrt()
    }

    /// The table for this cell in one category directory.
    pub fn path(&self, processed_dir: &Path, category: Category) -> PathBuf {
        processed_dir.join(category.dir_name()).join(&self.file_name)
    }
}

/// Scans the Solar directory, which every run needs, and returns the nearest cell.
pub fn nearest_cell(processed_dir: &Path, latitude: f64, longitude: f64) -> SynthResult<GridCell> {
    let dir = processed_dir.join(Category::Solar.dir_name());
    if !dir.is_dir() {
        return Err(SynthError::MissingInputFile {
            category: Category::Solar,
            path: dir,
        });
    }

    let mut cells = Vec::new();
    for entry in fs::read_dir(&dir)? {
        let entry = entry?;
        if let Some(cell) = entry.file_name().to_str().and_then(GridCell::from_file_name) {
            cells.push(cell);
        }
    }

    closest(cells, latitude, longitude).ok_or(SynthError::NoGridCells { dir })
}

fn closest(cells: Vec<GridCell>, latitude: f64, longitude: f64) -> Option<GridCell> {
    cells.into_iter().min_by(|a, b| {
        a.distance(latitude, longitude)
            .total_cmp(&b.distance(latitude, longitude))
    })
}

// -- Tests -------------------------------------------------------------------
