//! Relative humidity from specific humidity, surface pressure and temperature.

use crate::units::{Kelvin, Pascals};

/// Ratio of the molar masses of water vapour and dry air.
const EPSILON: f64 = 0.622;

/// Values above this are an artefact of the Magnus fit near saturation.
pub const MAX_RELATIVE_HUMIDITY: f64 = 110.0;

/// Actual vapour pressure, `e = q·P / (0.622 + q)`.
pub fn vapour_pressure(specific_humidity: f64, pressure: Pascals) -> Pascals {
    Pascals(specific_humidity * pressure.value() / (EPSILON + specific_humidity))
}

/// Saturation vapour pressure over water (Magnus–Tetens, Bolton 1980).
pub fn saturation_vapour_pressure(temperature: Kelvin) -> Pascals {
    let t = temperature.celsius();
    Pascals::from_hectopascals(6.112 * (17.67 * t / (t + 243.5)).exp())
}

/// Relative humidity in percent, clipped to `[0, 110]`.
pub fn relative_humidity(specific_humidity: f64, pressure: Pascals, temperature: Kelvin) -> f64 {
    let e = vapour_pressure(specific_humidity, pressure);
    let e_s = saturation_vapour_pressure(temperature);

    (100.0 * e.value() / e_s.value()).clamp(0.0, MAX_RELATIVE_HUMIDITY)
}

// -- Tests -------------------------------------------------------------------
