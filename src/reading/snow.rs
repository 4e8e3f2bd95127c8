//! Rows of the `tavg1_2d_lnd_Nx` (land surface diagnostics) table.

use chrono::NaiveDateTime;
use serde::Deserialize;

use super::{deserialize_time, present, Category, Reading};

#[derive(Debug, Clone, Deserialize)]
pub struct SnowReading {
    #[serde(deserialize_with = "deserialize_time")]
    pub time: NaiveDateTime,
    /// Snow depth, m.
    #[serde(rename = "SNODP", default)]
    pub snodp: Option<f64>,
}

impl SnowReading {
    pub fn depth_m(&self) -> Option<f64> {
        present(self.snodp)
    }
}

impl Reading for SnowReading {
    const CATEGORY: Category = Category::Snow;

    fn time(&self) -> NaiveDateTime {
        self.time
    }
}
