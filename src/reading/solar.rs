//! Rows of the `tavg1_2d_rad_Nx` (radiation diagnostics) table.

use chrono::NaiveDateTime;
use serde::Deserialize;

use super::{deserialize_time, present, Category, Reading};

#[derive(Debug, Clone, Deserialize)]
pub struct SolarReading {
    #[serde(deserialize_with = "deserialize_time")]
    pub time: NaiveDateTime,
    /// Surface incoming shortwave flux, W/m2.
    #[serde(rename = "SWGDN", default)]
    pub swgdn: Option<f64>,
    /// Total cloud area fraction.
    #[serde(rename = "CLDTOT", default)]
    pub cldtot: Option<f64>,
}

impl SolarReading {
    pub fn global_horizontal(&self) -> Option<f64> {
        present(self.swgdn)
    }

    pub fn cloud_fraction(&self) -> Option<f64> {
        present(self.cldtot)
    }
}

impl Reading for SolarReading {
    const CATEGORY: Category = Category::Solar;

    fn time(&self) -> NaiveDateTime {
        self.time
    }
}
