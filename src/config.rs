//! TOML configuration. Every key is optional in the file; command-line flags fill
//! or override values before a run.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::reading::Category;

pub const DEFAULT_CONFIG_FILE: &str = "merra2epw.toml";

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Merra2EpwConfig {
    #[serde(default)]
    pub fetch: FetchToml,

    #[serde(default)]
    pub synth: SynthToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchToml {
    /// Where granules are saved, one sub-directory per category.
    #[serde(default = "default_raw_dir")]
    pub raw_dir: PathBuf,
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    /// The snow provider rate-limits harder than the others.
    #[serde(default = "default_snow_concurrency")]
    pub snow_concurrency: usize,
    #[serde(default)]
    pub url_lists: UrlListsToml,
}

impl Default for FetchToml {
    fn default() -> Self {
        Self {
            raw_dir: default_raw_dir(),
            concurrency: default_concurrency(),
            snow_concurrency: default_snow_concurrency(),
            url_lists: UrlListsToml::default(),
        }
    }
}

impl FetchToml {
    pub fn concurrency_for(&self, category: Category) -> usize {
        let limit = match category {
            Category::Snow => self.snow_concurrency,
            _ => self.concurrency,
        };
        limit.max(1)
    }
}

fn default_raw_dir() -> PathBuf {
    PathBuf::from("MERRA-2_Data")
}
fn default_concurrency() -> usize {
    8
}
fn default_snow_concurrency() -> usize {
    5
}

/// One URL list file per category, as exported by the GES DISC subsetter.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct UrlListsToml {
    pub wind: Option<PathBuf>,
    pub solar: Option<PathBuf>,
    pub snow: Option<PathBuf>,
    pub precipitation: Option<PathBuf>,
}

impl UrlListsToml {
    pub fn get(&self, category: Category) -> Option<&Path> {
        match category {
            Category::Wind => self.wind.as_deref(),
            Category::Solar => self.solar.as_deref(),
            Category::Snow => self.snow.as_deref(),
            Category::Precipitation => self.precipitation.as_deref(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynthToml {
    #[serde(default = "default_processed_dir")]
    pub processed_dir: PathBuf,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub year: Option<i32>,
    /// IANA zone name.
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
    /// Calibration applied to GHI, DNI and DHI.
    #[serde(default = "default_scaling_factor")]
    pub scaling_factor: f64,
    pub output: Option<PathBuf>,
    /// Replaces the built-in 8-line header.
    pub header: Option<PathBuf>,
    /// Also write the hourly records as parquet.
    pub table: Option<PathBuf>,
    /// SIREN `solar_weather_<lat>_<lon>_<year>.csv` supplying GHI, DNI, DHI and wind.
    pub override_table: Option<PathBuf>,
}

impl Default for SynthToml {
    fn default() -> Self {
        Self {
            processed_dir: default_processed_dir(),
            latitude: None,
            longitude: None,
            year: None,
            time_zone: default_time_zone(),
            scaling_factor: default_scaling_factor(),
            output: None,
            header: None,
            table: None,
            override_table: None,
        }
    }
}

fn default_processed_dir() -> PathBuf {
    PathBuf::from("MERRA-2_Data_Processed")
}
fn default_time_zone() -> String {
    "Asia/Shanghai".to_string()
}
fn default_scaling_factor() -> f64 {
    0.8985
}

/// Reads `path`, or `merra2epw.toml` in the working directory when no path is
/// given. A missing default file means all defaults.
pub fn load(path: Option<&Path>) -> Result<Merra2EpwConfig> {
    let (path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    if !required && !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Merra2EpwConfig::default());
    }

    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: Merra2EpwConfig = toml::from_str(&text)
        .with_context(|| format!("failed to parse TOML config {}", path.display()))?;

    debug!(path = %path.display(), "config loaded");

    Ok(config)
}

// -- Tests -------------------------------------------------------------------
