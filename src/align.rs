//! Aligns UTC source rows onto the local-time hourly grid of the target period.
//!
//! MERRA-2 rows are stamped at `HH:30` UTC, the centre of each hourly averaging
//! window. Grid marks sit on the same instants, expressed in local *standard* time:
//! the zone's base offset is used and daylight saving is ignored, as EPW files expect.
//! In a whole-hour zone the marks fall on `HH:30` local; in Asia/Kolkata (+5:30) they
//! fall on `HH:00`, in Asia/Kathmandu (+5:45) on `HH:15`.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use chrono_tz::{OffsetComponents, Tz};
use tracing::debug;

use crate::{
    error::{SynthError, SynthResult},
    reading::Reading,
};

/// Minute past the UTC hour at which source rows are stamped.
pub const SOURCE_MINUTE: i64 = 30;

#[derive(Debug, Clone)]
pub struct HourGrid {
    tz: Tz,
    first: NaiveDateTime,
    len: usize,
}

/// Local minute of every mark in `tz`, taken from the base offset in force at `date`.
pub fn grid_minute(tz: Tz, date: NaiveDate) -> u32 {
    let offset = tz
        .offset_from_utc_datetime(&date.and_time(NaiveTime::default()))
        .base_utc_offset()
        .num_minutes();

    (SOURCE_MINUTE + offset).rem_euclid(60) as u32
}

impl HourGrid {
    pub fn for_year(tz: Tz, year: i32) -> SynthResult<Self> {
        let first = NaiveDate::from_ymd_opt(year, 1, 1);
        let last = NaiveDate::from_ymd_opt(year, 12, 31);

        match (first, last) {
            (Some(first), Some(last)) => HourGrid::for_dates(tz, first, last),
            _ => Err(SynthError::InvalidPeriod {
                reason: format!("year {year} is out of range"),
            }),
        }
    }

    /// Every hour from `first` 00:MM to `last` 23:MM, inclusive, with MM from
    /// [`grid_minute`].
    pub fn for_dates(tz: Tz, first: NaiveDate, last: NaiveDate) -> SynthResult<Self> {
        if last < first {
            return Err(SynthError::InvalidPeriod {
                reason: format!("{last} is before {first}"),
            });
        }

        let days = (last - first).num_days() as usize + 1;
        let minute = grid_minute(tz, first);
        let first = first
            .and_hms_opt(0, minute, 0)
            .ok_or_else(|| SynthError::InvalidPeriod {
                reason: format!("cannot build first mark for {first}"),
            })?;

        Ok(HourGrid {
            tz,
            first,
            len: days * 24,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn time_zone(&self) -> Tz {
        self.tz
    }

    pub fn minute(&self) -> u32 {
        self.first.minute()
    }

    /// Local standard time of the `index`th mark.
    pub fn mark(&self, index: usize) -> NaiveDateTime {
        self.first + Duration::hours(index as i64)
    }

    pub fn marks(&self) -> impl Iterator<Item = NaiveDateTime> + '_ {
        (0..self.len).map(|i| self.mark(i))
    }

    /// Converts a UTC instant to local standard time.
    pub fn to_local_standard(&self, utc: NaiveDateTime) -> NaiveDateTime {
        let offset = self.tz.offset_from_utc_datetime(&utc).base_utc_offset();
        utc + offset
    }

    fn index_of(&self, local: NaiveDateTime) -> Option<usize> {
        let seconds = (local - self.first).num_seconds();
        if seconds < 0 || seconds % 3600 != 0 {
            return None;
        }

        let index = (seconds / 3600) as usize;
        (index < self.len).then_some(index)
    }
}

/// Picks exactly one reading per grid mark, in grid order.
///
/// Rows outside the grid are dropped. A mark hit twice or never is an error.
pub fn align<R: Reading>(grid: &HourGrid, readings: Vec<R>) -> SynthResult<Vec<R>> {
    let total = readings.len();
    let mut slots: Vec<Option<R>> = (0..grid.len()).map(|_| None).collect();

    for reading in readings {
        let local = grid.to_local_standard(reading.time());
        if let Some(index) = grid.index_of(local) {
            if slots[index].is_some() {
                return Err(SynthError::DuplicateTimestamp {
                    category: R::CATEGORY,
                    time: local,
                });
            }
            slots[index] = Some(reading);
        }
    }

    if let Some(first_missing) = slots.iter().position(Option::is_none) {
        return Err(SynthError::IncompleteCoverage {
            category: R::CATEGORY,
            expected: grid.len(),
            found: slots.iter().filter(|s| s.is_some()).count(),
            first_missing: grid.mark(first_missing),
        });
    }

    debug!(
        category = %R::CATEGORY,
        source_rows = total,
        aligned_rows = grid.len(),
        "series aligned"
    );

    Ok(slots.into_iter().flatten().collect())
}

pub fn parse_time_zone(name: &str) -> SynthResult<Tz> {
    name.parse::<Tz>()
        .map_err(|_| SynthError::UnknownTimeZone(name.to_string()))
}

// -- Tests -------------------------------------------------------------------
