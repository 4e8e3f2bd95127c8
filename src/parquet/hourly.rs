//! Save the assembled hourly records to a parquet file.

use std::{
    fs::File,
    path::Path,
    sync::Arc,
};

use anyhow::Result;
use arrow::{
    array::{ArrayRef, Float64Array, Int32Array, UInt32Array, UInt8Array},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use parquet::{
    arrow::ArrowWriter,
    basic::{Compression, ZstdLevel},
    file::properties::WriterProperties,
};
use tracing::debug;

use crate::epw::{stage, HourRecord, StagedFile};

/// Writes the table next to `file_path`; it lands there on [`StagedFile::persist`].
pub fn stage_hourly(records: &[HourRecord], file_path: &Path) -> Result<StagedFile> {
    let staged = stage(file_path, |file| write_table(records, file))?;
    debug!(rows = records.len(), path = %file_path.display(), "hourly table staged");

    Ok(staged)
}

fn schema() -> Schema {
    let f64_field = |name: &str| Field::new(name, DataType::Float64, false);

    Schema::new(vec![
        Field::new("year", DataType::Int32, false),
        Field::new("month", DataType::UInt32, false),
        Field::new("day", DataType::UInt32, false),
        Field::new("hour", DataType::UInt32, false),
        Field::new("minute", DataType::UInt32, false),
        f64_field("dry_bulb"),
        f64_field("dew_point"),
        f64_field("relative_humidity"),
        f64_field("station_pressure"),
        f64_field("global_horizontal"),
        f64_field("direct_normal"),
        f64_field("diffuse_horizontal"),
        f64_field("wind_direction"),
        f64_field("wind_speed"),
        Field::new("total_sky_cover", DataType::UInt8, false),
        Field::new("opaque_sky_cover", DataType::UInt8, false),
        f64_field("snow_depth"),
        f64_field("liquid_precipitation_depth"),
    ])
}

fn write_table(records: &[HourRecord], file: &mut File) -> Result<()> {
    let schema = Arc::new(schema());

    let props = WriterProperties::builder()
        .set_compression(Compression::ZSTD(ZstdLevel::default()))
        .build();

    let mut writer = ArrowWriter::try_new(file, schema.clone(), Some(props))?;

    let floats = |f: fn(&HourRecord) -> f64| -> ArrayRef {
        Arc::new(Float64Array::from_iter_values(records.iter().map(f)))
    };
    let unsigned = |f: fn(&HourRecord) -> u32| -> ArrayRef {
        Arc::new(UInt32Array::from_iter_values(records.iter().map(f)))
    };
    let cover = |f: fn(&HourRecord) -> u8| -> ArrayRef {
        Arc::new(UInt8Array::from_iter_values(records.iter().map(f)))
    };

    let columns: Vec<ArrayRef> = vec![
        Arc::new(Int32Array::from_iter_values(records.iter().map(|r| r.year))),
        unsigned(|r| r.month),
        unsigned(|r| r.day),
        unsigned(|r| r.hour),
        unsigned(|r| r.minute),
        floats(|r| r.dry_bulb),
        floats(|r| r.dew_point),
        floats(|r| r.relative_humidity),
        floats(|r| r.station_pressure),
        floats(|r| r.global_horizontal),
        floats(|r| r.direct_normal),
        floats(|r| r.diffuse_horizontal),
        floats(|r| r.wind_direction),
        floats(|r| r.wind_speed),
        cover(|r| r.total_sky_cover),
        cover(|r| r.opaque_sky_cover),
        floats(|r| r.snow_depth),
        floats(|r| r.liquid_precipitation_depth),
    ];

    let batch = RecordBatch::try_new(schema, columns)?;

    writer.write(&batch)?;
    writer.close()?;

    Ok(())
}

// -- Tests -------------------------------------------------------------------
