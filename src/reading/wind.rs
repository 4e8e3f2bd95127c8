//! Rows of the `tavg1_2d_slv_Nx` (single-level diagnostics) table.

use chrono::NaiveDateTime;
use serde::Deserialize;

use super::{deserialize_time, present, Category, Reading};
use crate::units::{Kelvin, Pascals};

#[derive(Debug, Clone, Deserialize)]
pub struct WindReading {
    #[serde(deserialize_with = "deserialize_time")]
    pub time: NaiveDateTime,
    #[serde(rename = "T2M", default)]
    pub t2m: Option<f64>,
    #[serde(rename = "T2MDEW", default)]
    pub t2mdew: Option<f64>,
    #[serde(rename = "QV2M", default)]
    pub qv2m: Option<f64>,
    #[serde(rename = "U2M", default)]
    pub u2m: Option<f64>,
    #[serde(rename = "V2M", default)]
    pub v2m: Option<f64>,
    #[serde(rename = "PS", default)]
    pub ps: Option<f64>,
}

impl WindReading {
    pub fn temperature(&self) -> Option<Kelvin> {
        present(self.t2m).map(Kelvin)
    }

    pub fn dew_point(&self) -> Option<Kelvin> {
        present(self.t2mdew).map(Kelvin)
    }

    pub fn specific_humidity(&self) -> Option<f64> {
        present(self.qv2m)
    }

    pub fn pressure(&self) -> Option<Pascals> {
        present(self.ps).map(Pascals)
    }

    /// Eastward and northward components at 2 m.
    pub fn wind_components(&self) -> (Option<f64>, Option<f64>) {
        (present(self.u2m), present(self.v2m))
    }
}

impl Reading for WindReading {
    const CATEGORY: Category = Category::Wind;

    fn time(&self) -> NaiveDateTime {
        self.time
    }
}

// -- Tests -------------------------------------------------------------------
