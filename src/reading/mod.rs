//! Rows of the per-location tables, one type per category.

pub mod category;
pub mod precipitation;
pub mod siren;
pub mod snow;
pub mod solar;
pub mod wind;

use chrono::NaiveDateTime;
use serde::{de::DeserializeOwned, Deserialize, Deserializer};

pub use category::Category;
pub use precipitation::PrecipitationReading;
pub use siren::SirenReading;
pub use snow::SnowReading;
pub use solar::SolarReading;
pub use wind::WindReading;

/// MERRA-2 marks masked cells with 1e15.
const FILL_VALUE_THRESHOLD: f64 = 1.0e14;

// Define a trait for a table row keyed by its UTC timestamp
pub trait Reading: DeserializeOwned + Sized {
    const CATEGORY: Category;

    fn time(&self) -> NaiveDateTime;
}

/// Drops NaN and fill values.
pub(crate) fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && v.abs() < FILL_VALUE_THRESHOLD)
}

pub(crate) fn deserialize_time<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_time(&s).map_err(serde::de::Error::custom)
}

fn parse_time(s: &str) -> Result<NaiveDateTime, String> {
    let s = s.trim();
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| format!("unrecognised timestamp '{s}'"))
}

// -- Tests -------------------------------------------------------------------
