//! Solar position from the NOAA solar calculator (Meeus, *Astronomical Algorithms*).
//!
//! Accurate to roughly 0.01° between 1800 and 2100, which is well inside the
//! resolution of an hourly reanalysis grid.

use chrono::{NaiveDateTime, Timelike};

use crate::{
    error::{SynthError, SynthResult},
    units::{Kelvin, Pascals},
};

const JULIAN_UNIX_EPOCH: f64 = 2_440_587.5;
const JULIAN_J2000: f64 = 2_451_545.0;
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Apparent solar radius plus mean refraction at the horizon, degrees.
const HORIZON_DIP: f64 = 0.26667 + 0.5667;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Geometric zenith, degrees.
    pub zenith: f64,
    /// Zenith corrected for atmospheric refraction, degrees.
    pub apparent_zenith: f64,
    /// Degrees east of north.
    pub azimuth: f64,
}

/// Sun position for a site at a UTC instant.
///
/// Pressure and temperature only affect the refraction term, but a missing value is
/// still an error rather than a silent standard atmosphere.
pub fn solar_position(
    latitude: f64,
    longitude: f64,
    utc: NaiveDateTime,
    pressure: Option<Pascals>,
    temperature: Option<Kelvin>,
) -> SynthResult<SolarPosition> {
    let pressure = pressure.ok_or(SynthError::MissingDerivationInput {
        quantity: "solar position",
        input: "PS",
        time: utc,
    })?;
    let temperature = temperature.ok_or(SynthError::MissingDerivationInput {
        quantity: "solar position",
        input: "T2M",
        time: utc,
    })?;

    let (declination, equation_of_time) = sun_declination_and_eot(julian_century(utc));

    let minutes = utc.num_seconds_from_midnight() as f64 / 60.0;
    let true_solar_time = (minutes + equation_of_time + 4.0 * longitude).rem_euclid(1440.0);
    let hour_angle = (true_solar_time / 4.0 - 180.0).to_radians();

    let lat = latitude.to_radians();
    let cos_zenith =
        lat.sin() * declination.sin() + lat.cos() * declination.cos() * hour_angle.cos();
    let zenith = cos_zenith.clamp(-1.0, 1.0).acos();

    let azimuth = azimuth(lat, declination, hour_angle, zenith);

    let zenith = zenith.to_degrees();
    let refraction = refraction(90.0 - zenith, pressure, temperature);

    Ok(SolarPosition {
        zenith,
        apparent_zenith: zenith - refraction,
        azimuth,
    })
}

fn julian_century(utc: NaiveDateTime) -> f64 {
    let seconds = utc.and_utc().timestamp() as f64;
    let julian_day = seconds / 86_400.0 + JULIAN_UNIX_EPOCH;

    (julian_day - JULIAN_J2000) / DAYS_PER_CENTURY
}

/// Returns declination (radians) and the equation of time (minutes).
fn sun_declination_and_eot(jc: f64) -> (f64, f64) {
    let mean_longitude = (280.46646 + jc * (36000.76983 + jc * 0.0003032)).rem_euclid(360.0);
    let mean_anomaly = 357.52911 + jc * (35999.05029 - 0.0001537 * jc);
    let eccentricity = 0.016708634 - jc * (0.000042037 + 0.0000001267 * jc);

    let m = mean_anomaly.to_radians();
    let centre = m.sin() * (1.914602 - jc * (0.004817 + 0.000014 * jc))
        + (2.0 * m).sin() * (0.019993 - 0.000101 * jc)
        + (3.0 * m).sin() * 0.000289;

    let omega = (125.04 - 1934.136 * jc).to_radians();
    let apparent_longitude = (mean_longitude + centre - 0.00569 - 0.00478 * omega.sin()).to_radians();

    let mean_obliquity =
        23.0 + (26.0 + (21.448 - jc * (46.815 + jc * (0.00059 - jc * 0.001813))) / 60.0) / 60.0;
    let obliquity = (mean_obliquity + 0.00256 * omega.cos()).to_radians();

    let declination = (obliquity.sin() * apparent_longitude.sin()).asin();

    let y = (obliquity / 2.0).tan().powi(2);
    let l0 = mean_longitude.to_radians();
    let e = eccentricity;
    let equation_of_time = 4.0
        * (y * (2.0 * l0).sin() - 2.0 * e * m.sin() + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
            - 0.5 * y * y * (4.0 * l0).sin()
            - 1.25 * e * e * (2.0 * m).sin())
        .to_degrees();

    (declination, equation_of_time)
}

fn azimuth(lat: f64, declination: f64, hour_angle: f64, zenith: f64) -> f64 {
    let denominator = lat.cos() * zenith.sin();
    if denominator.abs() < 1e-12 {
        return 180.0;
    }

    let cos_az = ((lat.sin() * zenith.cos() - declination.sin()) / denominator).clamp(-1.0, 1.0);
    let az = cos_az.acos().to_degrees();

    if hour_angle > 0.0 {
        (az + 180.0).rem_euclid(360.0)
    } else {
        (540.0 - az).rem_euclid(360.0)
    }
}

/// Refraction lift in degrees for an elevation, pressure and temperature
/// (NREL SPA, Reda & Andreas 2004, eq. 42).
fn refraction(elevation: f64, pressure: Pascals, temperature: Kelvin) -> f64 {
    if elevation < -HORIZON_DIP {
        return 0.0;
    }

    let arg = (elevation + 10.3 / (elevation + 5.11)).to_radians();

    (pressure.hectopascals() / 1010.0) * (283.0 / (273.0 + temperature.celsius())) * 1.02
        / (60.0 * arg.tan())
}

// -- Tests -------------------------------------------------------------------
