use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use tracing::info;

use crate::{
    align::{parse_time_zone, HourGrid},
    cli::SynthArgs,
    config::SynthToml,
    epw::{EpwHeader, Site},
    parquet,
    pipeline::{stage_epw, synthesise, SynthConfig},
};

use super::make_epw_file_name;

/// A synthesiser run with every setting decided.
#[derive(Debug)]
pub struct SynthRun {
    pub config: SynthConfig,
    pub output: PathBuf,
    pub table: Option<PathBuf>,
}

pub fn synth(args: SynthArgs, config: SynthToml) -> Result<String> {
    let run = resolve(args, config)?;
    let path = execute(&run)?;

    Ok(path.to_string_lossy().to_string())
}

/// Builds the records, then stages the EPW and the optional table. Nothing is
/// renamed into place until both were written.
pub fn execute(run: &SynthRun) -> Result<PathBuf> {
    info!(
        lat = run.config.site.latitude,
        lon = run.config.site.longitude,
        hours = run.config.grid.len(),
        "building weather file"
    );
    let synthesis = synthesise(&run.config).context("failed to build EPW records")?;

    let epw = stage_epw(&run.output, &run.config.header, &synthesis.records)
        .with_context(|| format!("failed to write {}", run.output.display()))?;
    let table = match &run.table {
        Some(table) => Some(
            parquet::stage_hourly(&synthesis.records, table)
                .with_context(|| format!("failed to write {}", table.display()))?,
        ),
        None => None,
    };

    if let Some(table) = table {
        let path = table.path().to_path_buf();
        table
            .persist()
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "hourly table written");
    }
    let path = epw
        .persist()
        .with_context(|| format!("failed to write {}", run.output.display()))?;

    info!(
        cell = %synthesis.cell.file_name,
        rows = synthesis.records.len(),
        path = %path.display(),
        "EPW written"
    );

    Ok(path)
}

/// Command-line values win over the config file.
pub fn resolve(args: SynthArgs, config: SynthToml) -> Result<SynthRun> {
    let latitude = args
        .location
        .lat
        .or(config.latitude)
        .ok_or_else(|| anyhow!("latitude not set: pass --lat or set synth.latitude"))?;
    let longitude = args
        .location
        .lon
        .or(config.longitude)
        .ok_or_else(|| anyhow!("longitude not set: pass --lon or set synth.longitude"))?;
    let year = args
        .year
        .or(config.year)
        .ok_or_else(|| anyhow!("year not set: pass --year or set synth.year"))?;

    let tz = parse_time_zone(args.time_zone.as_deref().unwrap_or(&config.time_zone))?;
    let grid = HourGrid::for_year(tz, year)?;

    let header = match args.header.or(config.header) {
        Some(path) => EpwHeader::from_file(&path)
            .with_context(|| format!("failed to load header {}", path.display()))?,
        None => EpwHeader::default(),
    };

    let site = Site {
        latitude,
        longitude,
    };

    Ok(SynthRun {
        config: SynthConfig {
            processed_dir: args.location.processed_dir.unwrap_or(config.processed_dir),
            site,
            grid,
            scaling_factor: args.scaling_factor.unwrap_or(config.scaling_factor),
            header,
            override_table: args.override_table.or(config.override_table),
        },
        output: args
            .output
            .or(config.output)
            .unwrap_or_else(|| make_epw_file_name(site, year)),
        table: args.table.or(config.table),
    })
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::fs;

    use chrono::NaiveDate;
    use tempfile::TempDir;

    use super::*;
    use crate::{
        align::parse_time_zone,
        cli::LocateArgs,
        pipeline::tests::{at, config, write_tables},
    };

    fn one_day_run(dir: &std::path::Path, table: PathBuf) -> SynthRun {
        write_tables(dir, at(2023, 6, 20, 0), 72);
        let day = NaiveDate::from_ymd_opt(2023, 6, 21).unwrap();
        let tz = parse_time_zone("Asia/Shanghai").unwrap();

        SynthRun {
            config: config(dir, HourGrid::for_dates(tz, day, day).unwrap()),
            output: dir.join("out").join("site.epw"),
            table: Some(table),
        }
    }

    fn file_config() -> SynthToml {
        SynthToml {
            latitude: Some(35.4),
            longitude: Some(119.3),
            year: Some(2023),
            output: Some(PathBuf::from("from_file.epw")),
            ..SynthToml::default()
        }
    }

    #[test]
    fn should_take_file_values() {
        let run = resolve(SynthArgs::default(), file_config()).unwrap();

        assert_eq!(run.config.site.latitude, 35.4);
        assert_eq!(run.config.grid.len(), 8760);
        assert_eq!(run.config.grid.time_zone().name(), "Asia/Shanghai");
        assert_eq!(run.config.scaling_factor, 0.8985);
        assert_eq!(run.config.header, EpwHeader::default());
        assert_eq!(run.output, PathBuf::from("from_file.epw"));
        assert_eq!(run.table, None);
    }

    #[test]
    fn should_let_flags_win() {
        let args = SynthArgs {
            location: LocateArgs {
                processed_dir: Some(PathBuf::from("elsewhere")),
                lat: Some(-12.0),
                lon: None,
            },
            year: Some(2024),
            time_zone: Some("America/Lima".to_string()),
            scaling_factor: Some(1.0),
            output: Some(PathBuf::from("lima.epw")),
            header: None,
            table: Some(PathBuf::from("lima.parquet")),
            override_table: Some(PathBuf::from("siren.csv")),
        };

        let run = resolve(args, file_config()).unwrap();

        assert_eq!(run.config.processed_dir, PathBuf::from("elsewhere"));
        assert_eq!(run.config.site.latitude, -12.0);
        assert_eq!(run.config.site.longitude, 119.3);
        assert_eq!(run.config.grid.len(), 8784);
        assert_eq!(run.config.scaling_factor, 1.0);
        assert_eq!(run.output, PathBuf::from("lima.epw"));
        assert_eq!(run.table, Some(PathBuf::from("lima.parquet")));
        assert_eq!(run.config.override_table, Some(PathBuf::from("siren.csv")));
    }

    #[test]
    fn should_reject_bad_header_and_zone() {
        let dir = TempDir::new().unwrap();
        let header = dir.path().join("header.txt");
        fs::write(&header, "LOCATION,only one line\n").unwrap();

        let args = SynthArgs {
            header: Some(header),
            ..SynthArgs::default()
        };
        assert!(resolve(args, file_config()).is_err());

        let args = SynthArgs {
            time_zone: Some("Nowhere/Special".to_string()),
            ..SynthArgs::default()
        };
        assert!(resolve(args, file_config()).is_err());
    }

    #[test]
    fn should_require_year() {
        let config = SynthToml {
            year: None,
            ..file_config()
        };
        assert!(resolve(SynthArgs::default(), config).is_err());
    }

    #[test]
    fn should_write_epw_and_table() {
        let dir = TempDir::new().unwrap();
        let run = one_day_run(dir.path(), dir.path().join("out").join("site.parquet"));

        let path = execute(&run).unwrap();

        assert_eq!(path, run.output);
        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 8 + 24);
        assert!(dir.path().join("out").join("site.parquet").is_file());
        assert_eq!(fs::read_dir(dir.path().join("out")).unwrap().count(), 2);
    }

    #[test]
    fn should_leave_no_epw_when_table_fails() {
        let dir = TempDir::new().unwrap();
        // A regular file where the table's directory should be
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let run = one_day_run(dir.path(), blocker.join("site.parquet"));

        assert!(execute(&run).is_err());
        assert!(!run.output.exists());
        assert_eq!(fs::read_dir(dir.path().join("out")).unwrap().count(), 0);
    }
}
