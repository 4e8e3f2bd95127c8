//! Physical quantities derived from the raw MERRA-2 variables.

pub mod disc;
pub mod humidity;
pub mod solar_position;
pub mod wind;

pub use disc::decompose;
pub use humidity::relative_humidity;
pub use solar_position::solar_position;
pub use wind::wind_from_components;
