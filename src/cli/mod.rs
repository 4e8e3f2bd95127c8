//! Command line interface.

pub mod command;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Builds EnergyPlus weather files from MERRA-2 reanalysis data
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// TOML configuration file [default: ./merra2epw.toml when present]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download the granules in the configured URL lists
    Fetch(FetchArgs),
    /// Show the processed grid cell nearest to a coordinate
    Locate(LocateArgs),
    /// Build the EPW file for a coordinate and year
    Synth(SynthArgs),
}

#[derive(Args, Default)]
pub struct FetchArgs {
    /// Directory to save granules in, one sub-directory per category
    #[arg(long)]
    pub raw_dir: Option<PathBuf>,

    /// Requests in flight per category
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Requests in flight for snow granules
    #[arg(long)]
    pub snow_concurrency: Option<usize>,
}

#[derive(Args, Default)]
pub struct LocateArgs {
    /// Directory holding the Wind, Solar, Snow and Precipitation tables
    #[arg(long)]
    pub processed_dir: Option<PathBuf>,

    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,
}

#[derive(Args, Default)]
pub struct SynthArgs {
    #[command(flatten)]
    pub location: LocateArgs,

    #[arg(long)]
    pub year: Option<i32>,

    /// IANA time zone of the site, e.g. Asia/Shanghai
    #[arg(long)]
    pub time_zone: Option<String>,

    /// Calibration applied to all irradiance components
    #[arg(long)]
    pub scaling_factor: Option<f64>,

    /// Output EPW path [default: in the home directory]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Eight-line header file to use instead of the built-in one
    #[arg(long)]
    pub header: Option<PathBuf>,

    /// Also write the hourly records to this parquet file
    #[arg(long)]
    pub table: Option<PathBuf>,

    /// SIREN weather file whose GHI, DNI, DHI, Wdir and Wspd replace the derived values
    #[arg(long = "override")]
    pub override_table: Option<PathBuf>,
}

/// Creates a progress bar.
pub fn create_progress_bar(size: u64, message: String) -> ProgressBar {
    let style = ProgressStyle::with_template("[{eta_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-");

    ProgressBar::new(size).with_message(message).with_style(style)
}

// -- Tests -------------------------------------------------------------------
