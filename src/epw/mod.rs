//! EnergyPlus weather file assembly and serialisation.
//!
//! See the [EPW format description](https://climate.onebuilding.org/papers/EnergyPlus_Weather_File_Format.pdf).

pub mod assemble;
pub mod file;
pub mod header;
pub mod record;
pub mod siren;

pub use assemble::{assemble, AlignedSeries, Site};
pub use file::{render, stage, StagedFile};
pub use header::EpwHeader;
pub use record::HourRecord;
pub use siren::apply_siren;
