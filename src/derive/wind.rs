//! Wind speed and direction from eastward/northward components.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wind {
    /// m/s
    pub speed: f64,
    /// Degrees in `[0, 360)`, 0 = north, clockwise.
    pub direction: f64,
}

/// `atan2(u, v)`, not `atan2(v, u)`: the (u, v) order yields compass bearings.
pub fn wind_from_components(u: f64, v: f64) -> Wind {
    let speed = u.hypot(v);
    let direction = (u.atan2(v).to_degrees() + 360.0) % 360.0;

    Wind { speed, direction }
}

// -- Tests -------------------------------------------------------------------
