use anyhow::{anyhow, Result};

use crate::{
    cli::LocateArgs,
    config::SynthToml,
    grid::nearest_cell,
    pipeline::missing_categories,
};

/// Reports the nearest processed cell, how far away it is and whether all four
/// tables exist for it.
pub fn locate(args: LocateArgs, config: &SynthToml) -> Result<String> {
    let processed_dir = args.processed_dir.unwrap_or_else(|| config.processed_dir.clone());
    let lat = args
        .lat
        .or(config.latitude)
        .ok_or_else(|| anyhow!("latitude not set: pass --lat or set synth.latitude"))?;
    let lon = args
        .lon
        .or(config.longitude)
        .ok_or_else(|| anyhow!("longitude not set: pass --lon or set synth.longitude"))?;

    let cell = nearest_cell(&processed_dir, lat, lon)?;
    let missing = missing_categories(&processed_dir, &cell);

    let mut report = format!(
        "{} (lat {}, lon {}), {:.4}° from target",
        cell.file_name,
        cell.latitude,
        cell.longitude,
        cell.distance(lat, lon)
    );
    if !missing.is_empty() {
        let names: Vec<String> = missing.iter().map(|c| c.dir_name().to_string()).collect();
        report.push_str(&format!("; missing in {}", names.join(", ")));
    }

    Ok(report)
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::reading::Category;

    #[test]
    fn should_report_cell_and_gaps() {
        let dir = TempDir::new().unwrap();
        for category in [Category::Solar, Category::Wind] {
            let sub = dir.path().join(category.dir_name());
            fs::create_dir_all(&sub).unwrap();
            fs::write(sub.join("lat_35.5_lon_119.375.csv"), "").unwrap();
        }

        let args = LocateArgs {
            processed_dir: Some(dir.path().to_path_buf()),
            lat: Some(35.5),
            lon: None,
        };
        let config = SynthToml {
            longitude: Some(119.375),
            ..SynthToml::default()
        };

        let report = locate(args, &config).unwrap();

        assert_eq!(
            report,
            "lat_35.5_lon_119.375.csv (lat 35.5, lon 119.375), 0.0000° from target; \
             missing in Snow, Precipitation"
        );
    }

    #[test]
    fn should_require_coordinates() {
        let args = LocateArgs::default();
        assert!(locate(args, &SynthToml::default()).is_err());
    }
}
