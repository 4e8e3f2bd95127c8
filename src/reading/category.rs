//! MERRA-2 variable categories.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// One MERRA-2 collection, processed into its own directory of per-location tables.
/// See the [MERRA-2 file specification](https://gmao.gsfc.nasa.gov/pubs/docs/Bosilovich785.pdf)
/// for the variables in each collection.
pub enum Category {
    /// `tavg1_2d_slv_Nx`: T2M, T2MDEW, QV2M, U2M, V2M, PS
    Wind,
    /// `tavg1_2d_rad_Nx`: SWGDN, CLDTOT
    Solar,
    /// `tavg1_2d_lnd_Nx`: SNODP
    Snow,
    /// `tavg1_2d_flx_Nx`: PRECTOT
    Precipitation,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Wind,
        Category::Solar,
        Category::Snow,
        Category::Precipitation,
    ];

    /// Directory name used for both raw granules and processed tables.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Wind => "Wind",
            Category::Solar => "Solar",
            Category::Snow => "Snow",
            Category::Precipitation => "Precipitation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dir_name().to_lowercase())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn should_name_directories() {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.dir_name()).collect();
        assert_eq!(names, ["Wind", "Solar", "Snow", "Precipitation"]);
    }

    #[test]
    fn should_display_lowercase() {
        assert_eq!(Category::Wind.to_string(), "wind");
    }
}
