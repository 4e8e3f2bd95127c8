//! Splits global horizontal irradiance into direct normal and diffuse parts with the
//! DISC model (Maxwell 1987, <https://www.nrel.gov/grid/solar-resource/disc.html>).

use std::f64::consts::PI;

use crate::units::Pascals;

const SOLAR_CONSTANT: f64 = 1366.1;
const STANDARD_PRESSURE: f64 = 101_325.0;

/// Floor on `cos(zenith)` when computing the clearness index.
const MIN_COS_ZENITH: f64 = 0.065;
/// DNI is forced to zero beyond this zenith.
const MAX_ZENITH: f64 = 87.0;
const MAX_AIRMASS: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Irradiance {
    pub ghi: f64,
    pub dni: f64,
    pub dhi: f64,
}

impl Irradiance {
    /// Applies the same calibration factor to all three components.
    pub fn scaled(self, factor: f64) -> Self {
        Irradiance {
            ghi: self.ghi * factor,
            dni: self.dni * factor,
            dhi: self.dhi * factor,
        }
    }
}

/// GHI (W/m2) at a solar zenith (degrees) into its direct and diffuse parts.
///
/// With the sun at or below the horizon all of GHI is diffuse.
pub fn decompose(ghi: f64, zenith: f64, day_of_year: u32, pressure: Pascals) -> Irradiance {
    if zenith >= 90.0 {
        return Irradiance {
            ghi,
            dni: 0.0,
            dhi: ghi,
        };
    }

    let dni = disc_dni(ghi, zenith, day_of_year, pressure);
    let dhi = (ghi - dni * zenith.to_radians().cos()).max(0.0);

    Irradiance { ghi, dni, dhi }
}

/// Direct normal irradiance from the DISC correlation.
pub fn disc_dni(ghi: f64, zenith: f64, day_of_year: u32, pressure: Pascals) -> f64 {
    if zenith > MAX_ZENITH || ghi < 0.0 {
        return 0.0;
    }

    let i0 = extraterrestrial_normal(day_of_year);
    let kt = clearness_index(ghi, zenith, i0);
    let am = absolute_airmass(zenith, pressure).min(MAX_AIRMASS);

    let dni = direct_beam_transmittance(kt, am) * i0;
    if dni.is_finite() && dni > 0.0 {
        dni
    } else {
        0.0
    }
}

/// Extraterrestrial normal irradiance (Spencer 1971).
pub fn extraterrestrial_normal(day_of_year: u32) -> f64 {
    let b = 2.0 * PI * (day_of_year as f64 - 1.0) / 365.0;
    let r = 1.00011
        + 0.034221 * b.cos()
        + 0.00128 * b.sin()
        + 0.000719 * (2.0 * b).cos()
        + 0.000077 * (2.0 * b).sin();

    SOLAR_CONSTANT * r
}

fn clearness_index(ghi: f64, zenith: f64, i0: f64) -> f64 {
    let horizontal = i0 * zenith.to_radians().cos().max(MIN_COS_ZENITH);
    (ghi / horizontal).clamp(0.0, 1.0)
}

/// Kasten (1966) relative airmass, scaled by station pressure.
fn absolute_airmass(zenith: f64, pressure: Pascals) -> f64 {
    let relative = 1.0 / (zenith.to_radians().cos() + 0.15 * (93.885 - zenith).powf(-1.253));
    relative * pressure.value() / STANDARD_PRESSURE
}

/// `Kn = Knc - ΔKn`.
fn direct_beam_transmittance(kt: f64, am: f64) -> f64 {
    let (a, b, c) = if kt <= 0.6 {
        (
            0.512 - 1.56 * kt + 2.286 * kt.powi(2) - 2.222 * kt.powi(3),
            0.37 + 0.962 * kt,
            -0.28 + 0.932 * kt - 2.048 * kt.powi(2),
        )
    } else {
        (
            -5.743 + 21.77 * kt - 27.49 * kt.powi(2) + 11.56 * kt.powi(3),
            41.4 - 118.5 * kt + 66.05 * kt.powi(2) + 31.9 * kt.powi(3),
            -47.01 + 184.2 * kt - 222.0 * kt.powi(2) + 73.81 * kt.powi(3),
        )
    };
    let delta_kn = a + b * (c * am).exp();

    let knc = 0.866 - 0.122 * am + 0.0121 * am.powi(2) - 0.000653 * am.powi(3)
        + 0.000014 * am.powi(4);

    knc - delta_kn
}

// -- Tests -------------------------------------------------------------------
