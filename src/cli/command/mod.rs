pub mod fetch;
pub mod locate;
pub mod synth;

use std::path::PathBuf;

use chrono::{Datelike, Local};
pub use fetch::fetch;
pub use locate::locate;
pub use synth::synth;

use crate::epw::Site;

pub fn make_epw_file_name(site: Site, year: i32) -> PathBuf {
    let today = Local::now();
    let file_name = format!(
        "merra2epw-{}_{}-{}-{}-{:02}-{:02}.epw",
        site.latitude,
        site.longitude,
        year,
        today.year(),
        today.month(),
        today.day()
    );

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(file_name)
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_file_after_site_and_year() {
        let path = make_epw_file_name(
            Site {
                latitude: 35.4,
                longitude: 119.3,
            },
            2023,
        );
        let name = path.file_name().unwrap().to_str().unwrap();

        assert!(name.starts_with("merra2epw-35.4_119.3-2023-"));
        assert!(name.ends_with(".epw"));
    }
}
