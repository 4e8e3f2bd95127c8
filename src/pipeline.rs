//! The EPW synthesiser: four per-location tables in, one weather file out.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument};

use crate::{
    align::{align, HourGrid},
    deserialise::{deserialise, deserialise_siren},
    epw::{
        apply_siren, assemble, render, stage, AlignedSeries, EpwHeader, HourRecord, Site,
        StagedFile,
    },
    error::{SynthError, SynthResult},
    grid::{nearest_cell, GridCell},
    reading::{Category, Reading},
};

#[derive(Debug)]
pub struct SynthConfig {
    pub processed_dir: PathBuf,
    /// Target coordinate, also used for the solar position.
    pub site: Site,
    pub grid: HourGrid,
    pub scaling_factor: f64,
    pub header: EpwHeader,
    /// SIREN weather file whose irradiance and wind replace the derived values.
    pub override_table: Option<PathBuf>,
}

#[derive(Debug)]
pub struct Synthesis {
    pub cell: GridCell,
    pub records: Vec<HourRecord>,
}

/// Picks the nearest grid cell, loads and aligns its four tables, then derives
/// one record per grid hour.
#[instrument(skip_all, fields(lat = config.site.latitude, lon = config.site.longitude))]
pub fn synthesise(config: &SynthConfig) -> SynthResult<Synthesis> {
    let cell = nearest_cell(
        &config.processed_dir,
        config.site.latitude,
        config.site.longitude,
    )?;
    info!(
        file = %cell.file_name,
        tz = %config.grid.time_zone(),
        minute = config.grid.minute(),
        "using grid cell"
    );

    let series = load_series(&config.processed_dir, &cell, &config.grid)?;
    let mut records = assemble(&config.grid, config.site, &series, config.scaling_factor)?;
    info!(rows = records.len(), "records assembled");

    if let Some(path) = &config.override_table {
        let rows = deserialise_siren(path)?;
        apply_siren(&mut records, &config.grid, &rows, config.scaling_factor, path)?;
        info!(path = %path.display(), "irradiance and wind replaced");
    }

    Ok(Synthesis { cell, records })
}

pub fn load_series(
    processed_dir: &Path,
    cell: &GridCell,
    grid: &HourGrid,
) -> SynthResult<AlignedSeries> {
    Ok(AlignedSeries {
        wind: load_one(processed_dir, cell, grid)?,
        solar: load_one(processed_dir, cell, grid)?,
        snow: load_one(processed_dir, cell, grid)?,
        precipitation: load_one(processed_dir, cell, grid)?,
    })
}

fn load_one<R: Reading>(processed_dir: &Path, cell: &GridCell, grid: &HourGrid) -> SynthResult<Vec<R>> {
    let path = cell.path(processed_dir, R::CATEGORY);
    align(grid, deserialise::<R>(&path)?)
}

/// Header and rows, staged in one go next to `path`.
pub fn stage_epw(
    path: &Path,
    header: &EpwHeader,
    records: &[HourRecord],
) -> SynthResult<StagedFile> {
    let text = render(header, records);
    let staged = stage::<_, SynthError>(path, |file| {
        file.write_all(text.as_bytes())?;
        Ok(())
    })?;

    debug!(path = %path.display(), bytes = text.len(), "EPW staged");

    Ok(staged)
}

/// Categories whose table for `cell` is absent.
pub fn missing_categories(processed_dir: &Path, cell: &GridCell) -> Vec<Category> {
    Category::ALL
        .into_iter()
        .filter(|c| !cell.path(processed_dir, *c).is_file())
        .collect()
}

// -- Tests -------------------------------------------------------------------
