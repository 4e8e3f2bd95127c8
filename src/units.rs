//! Unit-carrying wrappers for quantities shared between derivations.
//!
//! Surface pressure feeds both the humidity and the solar computations. Both take
//! `Pascals`, so a pressure in hPa cannot reach one of them by accident.

const KELVIN_OFFSET: f64 = 273.15;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Pascals(pub f64);

impl Pascals {
    pub fn from_hectopascals(hpa: f64) -> Self {
        Pascals(hpa * 100.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn hectopascals(self) -> f64 {
        self.0 / 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Kelvin(pub f64);

impl Kelvin {
    pub fn celsius(self) -> f64 {
        self.0 - KELVIN_OFFSET
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn should_convert_kelvin_to_celsius() {
        assert_relative_eq!(Kelvin(293.15).celsius(), 20.0, epsilon = 1e-12);
        assert_relative_eq!(Kelvin(273.15).celsius(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn should_round_trip_hectopascals() {
        let p = Pascals::from_hectopascals(1013.25);
        assert_relative_eq!(p.value(), 101325.0, epsilon = 1e-9);
        assert_relative_eq!(p.hectopascals(), 1013.25, epsilon = 1e-9);
    }
}
