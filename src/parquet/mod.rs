//! Handles serialising and saving data to disk in the _parquet_ file format.

pub mod hourly;

pub use hourly::stage_hourly;
