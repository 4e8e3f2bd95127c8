//! Merges the four aligned series into EPW rows.

use chrono::{Datelike, NaiveDateTime, Timelike};
use tracing::trace;

use super::record::{sky_cover, HourRecord};
use crate::{
    align::HourGrid,
    derive::{decompose, relative_humidity, solar_position, wind_from_components},
    error::{SynthError, SynthResult},
    reading::{PrecipitationReading, SnowReading, SolarReading, WindReading},
};

const SECONDS_PER_HOUR: f64 = 3600.0;
const CM_PER_M: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Site {
    pub latitude: f64,
    pub longitude: f64,
}

/// Series already aligned one-to-one with a grid.
#[derive(Debug)]
pub struct AlignedSeries {
    pub wind: Vec<WindReading>,
    pub solar: Vec<SolarReading>,
    pub snow: Vec<SnowReading>,
    pub precipitation: Vec<PrecipitationReading>,
}

pub fn assemble(
    grid: &HourGrid,
    site: Site,
    series: &AlignedSeries,
    scaling_factor: f64,
) -> SynthResult<Vec<HourRecord>> {
    let lengths = [
        series.wind.len(),
        series.solar.len(),
        series.snow.len(),
        series.precipitation.len(),
    ];
    if lengths.iter().any(|&n| n != grid.len()) {
        return Err(SynthError::InvalidPeriod {
            reason: format!(
                "series lengths {lengths:?} do not match the {} hour grid",
                grid.len()
            ),
        });
    }

    grid.marks()
        .zip(&series.wind)
        .zip(&series.solar)
        .zip(&series.snow)
        .zip(&series.precipitation)
        .map(|((((local, wind), solar), snow), precipitation)| {
            hour_record(local, site, wind, solar, snow, precipitation, scaling_factor)
        })
        .collect()
}

fn hour_record(
    local: NaiveDateTime,
    site: Site,
    wind: &WindReading,
    solar: &SolarReading,
    snow: &SnowReading,
    precipitation: &PrecipitationReading,
    scaling_factor: f64,
) -> SynthResult<HourRecord> {
    let utc = wind.time;

    let temperature = require(wind.temperature(), "dry bulb temperature", "T2M", utc)?;
    let dew_point = require(wind.dew_point(), "dew point temperature", "T2MDEW", utc)?;
    let pressure = require(wind.pressure(), "relative humidity", "PS", utc)?;
    let q = require(wind.specific_humidity(), "relative humidity", "QV2M", utc)?;

    let (u, v) = wind.wind_components();
    let u = require(u, "wind", "U2M", utc)?;
    let v = require(v, "wind", "V2M", utc)?;
    let wind_vector = wind_from_components(u, v);

    let position = solar_position(
        site.latitude,
        site.longitude,
        solar.time,
        wind.pressure(),
        wind.temperature(),
    )?;
    trace!(
        %utc,
        zenith = position.zenith,
        apparent_zenith = position.apparent_zenith,
        azimuth = position.azimuth,
        "solar position"
    );
    let ghi = require(solar.global_horizontal(), "irradiance", "SWGDN", solar.time)?;
    let irradiance = decompose(ghi, position.zenith, solar.time.ordinal(), pressure)
        .scaled(scaling_factor);
    let cloud = require(solar.cloud_fraction(), "sky cover", "CLDTOT", solar.time)?;
    let cover = sky_cover(cloud);

    let snow_depth = require(snow.depth_m(), "snow depth", "SNODP", snow.time)?;
    let rate = require(precipitation.rate(), "precipitation", "PRECTOT", precipitation.time)?;

    Ok(HourRecord {
        year: local.year(),
        month: local.month(),
        day: local.day(),
        hour: local.hour() + 1,
        minute: local.minute(),
        dry_bulb: temperature.celsius(),
        dew_point: dew_point.celsius(),
        relative_humidity: relative_humidity(q, pressure, temperature),
        station_pressure: pressure.value(),
        global_horizontal: irradiance.ghi,
        direct_normal: irradiance.dni,
        diffuse_horizontal: irradiance.dhi,
        wind_direction: wind_vector.direction,
        wind_speed: wind_vector.speed,
        total_sky_cover: cover,
        opaque_sky_cover: cover,
        snow_depth: snow_depth * CM_PER_M,
        // kg/m2/s of water is mm/s
        liquid_precipitation_depth: rate * SECONDS_PER_HOUR,
    })
}

fn require<T>(
    value: Option<T>,
    quantity: &'static str,
    input: &'static str,
    time: NaiveDateTime,
) -> SynthResult<T> {
    value.ok_or(SynthError::MissingDerivationInput {
        quantity,
        input,
        time,
    })
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod tests {
    use approx::assert_relative_eq;
    use chrono::{Duration, NaiveDate};
    use chrono_tz::Tz;

    use super::*;

    pub(crate) const QINGDAO: Site = Site {
        latitude: 35.5,
        longitude: 119.375,
    };

    pub(crate) fn constant_series(start_utc: NaiveDateTime, hours: usize) -> AlignedSeries {
        let times: Vec<NaiveDateTime> = (0..hours)
            .map(|i| start_utc + Duration::hours(i as i64))
            .collect();

        AlignedSeries {
            wind: times
                .iter()
                .map(|&time| WindReading {
                    time,
                    t2m: Some(293.15),
                    t2mdew: Some(285.15),
                    qv2m: Some(0.01),
                    u2m: Some(3.0),
                    v2m: Some(4.0),
                    ps: Some(101325.0),
                })
                .collect(),
            solar: times
                .iter()
                .enumerate()
                .map(|(i, &time)| SolarReading {
                    time,
                    swgdn: Some(if (8..17).contains(&(i % 24)) { 500.0 } else { 0.0 }),
                    cldtot: Some(0.35),
                })
                .collect(),
            snow: times
                .iter()
                .map(|&time| SnowReading {
                    time,
                    snodp: Some(0.012),
                })
                .collect(),
            precipitation: times
                .iter()
                .map(|&time| PrecipitationReading {
                    time,
                    prectot: Some(1.0e-4),
                })
                .collect(),
        }
    }

    fn one_day_utc() -> (HourGrid, AlignedSeries) {
        let day = NaiveDate::from_ymd_opt(2023, 6, 21).unwrap();
        let grid = HourGrid::for_dates(Tz::UTC, day, day).unwrap();
        let series = constant_series(day.and_hms_opt(0, 30, 0).unwrap(), 24);
        (grid, series)
    }

    #[test]
    fn should_derive_constant_day() {
        let (grid, series) = one_day_utc();

        let records = assemble(&grid, QINGDAO, &series, 0.8985).unwrap();

        assert_eq!(records.len(), 24);
        for (i, r) in records.iter().enumerate() {
            assert_eq!(r.hour, i as u32 + 1);
            assert_eq!(r.minute, 30);
            assert_relative_eq!(r.wind_speed, 5.0, epsilon = 1e-12);
            assert_relative_eq!(r.wind_direction, 36.869898, epsilon = 1e-5);
            assert_relative_eq!(r.relative_humidity, 68.604191, epsilon = 1e-3);
            assert_relative_eq!(r.dry_bulb, 20.0, epsilon = 1e-9);
            assert_relative_eq!(r.dew_point, 12.0, epsilon = 1e-9);
            assert_eq!(r.total_sky_cover, 4);
            assert_relative_eq!(r.snow_depth, 1.2, epsilon = 1e-9);
            assert_relative_eq!(r.liquid_precipitation_depth, 0.36, epsilon = 1e-9);
        }
    }

    #[test]
    fn should_scale_irradiance() {
        let (grid, series) = one_day_utc();

        let records = assemble(&grid, QINGDAO, &series, 0.8985).unwrap();

        // 08:30 UTC is late afternoon in Qingdao
        assert_relative_eq!(records[8].global_horizontal, 500.0 * 0.8985, epsilon = 1e-9);
        // 16:30 UTC is past local midnight: no beam, diffuse equals global
        assert!(records[16].global_horizontal > 0.0);
        assert_eq!(records[16].direct_normal, 0.0);
        assert_eq!(records[16].diffuse_horizontal, records[16].global_horizontal);
    }

    #[test]
    fn should_fail_on_missing_pressure() {
        let (grid, mut series) = one_day_utc();
        series.wind[5].ps = None;

        let err = assemble(&grid, QINGDAO, &series, 1.0).unwrap_err();

        assert!(matches!(
            err,
            SynthError::MissingDerivationInput { input: "PS", .. }
        ));
    }

    #[test]
    fn should_fail_on_length_mismatch() {
        let (grid, mut series) = one_day_utc();
        series.snow.pop();

        assert!(assemble(&grid, QINGDAO, &series, 1.0).is_err());
    }
}
