//! Rows of a SIREN `solar_weather_<lat>_<lon>_<year>.csv` file (SAM CSV layout: two
//! location lines, then the column header).
//!
//! Only the irradiance and wind columns are read. The calendar columns, when present,
//! are local standard time with hours 0..=23 and are used to check row order.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SirenReading {
    #[serde(rename = "Year", default)]
    pub year: Option<i32>,
    #[serde(rename = "Month", default)]
    pub month: Option<u32>,
    #[serde(rename = "Day", default)]
    pub day: Option<u32>,
    #[serde(rename = "Hour", default)]
    pub hour: Option<u32>,
    /// W/m2, unscaled.
    #[serde(rename = "GHI")]
    pub ghi: f64,
    #[serde(rename = "DNI")]
    pub dni: f64,
    #[serde(rename = "DHI")]
    pub dhi: f64,
    /// Degrees, 0 = north.
    #[serde(rename = "Wdir")]
    pub wdir: f64,
    /// m/s
    #[serde(rename = "Wspd")]
    pub wspd: f64,
}

impl SirenReading {
    /// `(year, month, day, hour)` when the file carries all four columns.
    pub fn stamp(&self) -> Option<(i32, u32, u32, u32)> {
        Some((self.year?, self.month?, self.day?, self.hour?))
    }

    pub fn is_finite(&self) -> bool {
        [self.ghi, self.dni, self.dhi, self.wdir, self.wspd]
            .iter()
            .all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialise_row() {
        let data = "Year,Month,Day,Hour,Minute,GHI,DNI,DHI,Tdry,Wspd,Wdir\n2023,6,1,12,30,812.0,640.5,150.25,24.1,3.5,270\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let row: SirenReading = reader.deserialize().next().unwrap().unwrap();

        assert_eq!(row.stamp(), Some((2023, 6, 1, 12)));
        assert_eq!(row.dni, 640.5);
        assert_eq!(row.wdir, 270.0);
        assert!(row.is_finite());
    }

    #[test]
    fn should_allow_missing_calendar() {
        let data = "GHI,DNI,DHI,Wspd,Wdir\n0,0,0,1.2,NaN\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let row: SirenReading = reader.deserialize().next().unwrap().unwrap();

        assert_eq!(row.stamp(), None);
        assert!(!row.is_finite());
    }
}
