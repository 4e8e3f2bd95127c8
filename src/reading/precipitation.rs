//! Rows of the `tavg1_2d_flx_Nx` (surface flux diagnostics) table.

use chrono::NaiveDateTime;
use serde::Deserialize;

use super::{deserialize_time, present, Category, Reading};

#[derive(Debug, Clone, Deserialize)]
pub struct PrecipitationReading {
    #[serde(deserialize_with = "deserialize_time")]
    pub time: NaiveDateTime,
    /// Total precipitation rate, kg/m2/s.
    #[serde(rename = "PRECTOT", default)]
    pub prectot: Option<f64>,
}

impl PrecipitationReading {
    pub fn rate(&self) -> Option<f64> {
        present(self.prectot)
    }
}

impl Reading for PrecipitationReading {
    const CATEGORY: Category = Category::Precipitation;

    fn time(&self) -> NaiveDateTime {
        self.time
    }
}
