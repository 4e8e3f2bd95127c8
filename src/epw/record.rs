//! One hourly EPW data row.

use std::fmt::Display;

pub const FIELD_COUNT: usize = 35;

/// Every field observed as missing/unknown except temperature, humidity and pressure.
pub const DATA_SOURCE_FLAGS: &str = "?9?9?9?9E0?9?9?9?9*9?9?9?9?9?9?9?9?9*9*9?9*9";

// Missing-value codes for fields EnergyPlus computes itself or does not read.
const EXTRATERRESTRIAL_RADIATION: u32 = 9999;
const HORIZONTAL_INFRARED: u32 = 9999;
const ILLUMINANCE: u32 = 999999;
const ZENITH_LUMINANCE: u32 = 9999;
const VISIBILITY: u32 = 9999;
const CEILING_HEIGHT: u32 = 99999;
const PRESENT_WEATHER_OBSERVATION: u32 = 9;
const PRESENT_WEATHER_CODES: u32 = 999999999;
const PRECIPITABLE_WATER: u32 = 999;
const AEROSOL_OPTICAL_DEPTH: f64 = 0.999;
const DAYS_SINCE_SNOWFALL: u32 = 99;
const ALBEDO: f64 = 0.99;
const LIQUID_PRECIPITATION_QUANTITY: u32 = 0;

#[derive(Debug, Clone, PartialEq)]
pub struct HourRecord {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// 1..=24, the hour ending at this label.
    pub hour: u32,
    pub minute: u32,
    /// °C
    pub dry_bulb: f64,
    /// °C
    pub dew_point: f64,
    /// %
    pub relative_humidity: f64,
    /// Pa
    pub station_pressure: f64,
    /// Wh/m2
    pub global_horizontal: f64,
    pub direct_normal: f64,
    pub diffuse_horizontal: f64,
    /// Degrees, 0 = north.
    pub wind_direction: f64,
    /// m/s
    pub wind_speed: f64,
    /// Tenths of sky, 0..=10.
    pub total_sky_cover: u8,
    pub opaque_sky_cover: u8,
    /// cm
    pub snow_depth: f64,
    /// mm
    pub liquid_precipitation_depth: f64,
}

impl HourRecord {
    /// The 35 fields in EPW order.
    pub fn fields(&self) -> [String; FIELD_COUNT] {
        fn s(v: impl Display) -> String {
            v.to_string()
        }

        [
            s(self.year),
            s(self.month),
            s(self.day),
            s(self.hour),
            s(self.minute),
            s(DATA_SOURCE_FLAGS),
            s(self.dry_bulb),
            s(self.dew_point),
            s(self.relative_humidity),
            s(self.station_pressure),
            s(EXTRATERRESTRIAL_RADIATION),
            s(EXTRATERRESTRIAL_RADIATION),
            s(HORIZONTAL_INFRARED),
            s(self.global_horizontal),
            s(self.direct_normal),
            s(self.diffuse_horizontal),
            s(ILLUMINANCE),
            s(ILLUMINANCE),
            s(ILLUMINANCE),
            s(ZENITH_LUMINANCE),
            s(self.wind_direction),
            s(self.wind_speed),
            s(self.total_sky_cover),
            s(self.opaque_sky_cover),
            s(VISIBILITY),
            s(CEILING_HEIGHT),
            s(PRESENT_WEATHER_OBSERVATION),
            s(PRESENT_WEATHER_CODES),
            s(PRECIPITABLE_WATER),
            s(AEROSOL_OPTICAL_DEPTH),
            s(self.snow_depth),
            s(DAYS_SINCE_SNOWFALL),
            s(ALBEDO),
            s(self.liquid_precipitation_depth),
            s(LIQUID_PRECIPITATION_QUANTITY),
        ]
    }

    pub fn to_line(&self) -> String {
        self.fields().join(",")
    }
}

/// Cloud fraction to tenths of sky, rounding half to even.
pub fn sky_cover(cloud_fraction: f64) -> u8 {
    (cloud_fraction * 10.0).round_ties_even().clamp(0.0, 10.0) as u8
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod tests {

    use super::*;

    pub(crate) fn record_fixture() -> HourRecord {
        HourRecord {
            year: 2023,
            month: 1,
            day: 1,
            hour: 1,
            minute: 30,
            dry_bulb: 20.0,
            dew_point: 12.5,
            relative_humidity: 68.6,
            station_pressure: 101325.0,
            global_horizontal: 0.0,
            direct_normal: 0.0,
            diffuse_horizontal: 0.0,
            wind_direction: 36.9,
            wind_speed: 5.0,
            total_sky_cover: 4,
            opaque_sky_cover: 4,
            snow_depth: 2.5,
            liquid_precipitation_depth: 0.36,
        }
    }

    #[test]
    fn should_emit_35_fields() {
        assert_eq!(record_fixture().fields().len(), FIELD_COUNT);
    }

    #[test]
    fn should_format_line_in_epw_order() {
        let line = record_fixture().to_line();

        assert_eq!(
            line,
            "2023,1,1,1,30,?9?9?9?9E0?9?9?9?9*9?9?9?9?9?9?9?9?9*9*9?9*9,20,12.5,68.6,101325,\
             9999,9999,9999,0,0,0,999999,999999,999999,9999,36.9,5,4,4,\
             9999,99999,9,999999999,999,0.999,2.5,99,0.99,0.36,0"
        );
    }

    #[test]
    fn should_round_sky_cover_half_to_even() {
        assert_eq!(sky_cover(0.0), 0);
        assert_eq!(sky_cover(0.25), 2);
        assert_eq!(sky_cover(0.35), 4);
        assert_eq!(sky_cover(0.449), 4);
        assert_eq!(sky_cover(1.0), 10);
        assert_eq!(sky_cover(1.02), 10);
        assert_eq!(sky_cover(-0.01), 0);
    }
}
