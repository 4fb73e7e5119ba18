//! Calendar handling for the solar-angle formulas.
//!
//! The ASCE equations need only two things from a timestamp: the day of year
//! and the local clock time as fractional hours. [`TimeInstant`] carries those
//! together with the UTC offset the clock time refers to.

use crate::error::check_utc_offset;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{Datelike, Offset, TimeZone, Timelike};

/// Seconds per hour (3,600)
pub(crate) const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Largest second-of-minute that keeps local hours below 24.
#[cfg(feature = "chrono")]
const LAST_SECOND_OF_MINUTE: f64 = 59.999_999_999;

/// A local date and clock time resolved for the solar-angle formulas.
///
/// # Example
/// ```
/// # use asce_clearsky::time::TimeInstant;
/// // 8 March 2019, 12:30 Central European Time
/// let instant = TimeInstant::new(2019, 3, 8, 12, 30, 0.0, 1.0).unwrap();
/// assert_eq!(instant.day_of_year(), 67);
/// assert_eq!(instant.local_hours(), 12.5);
/// assert_eq!(instant.utc_offset_hours(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeInstant {
    year: i32,
    day_of_year: u32,
    /// Local clock time in hours since local midnight, [0, 24)
    local_hours: f64,
    /// Hours east of UTC
    utc_offset_hours: f64,
}

impl TimeInstant {
    /// Creates an instant from local calendar components.
    ///
    /// # Arguments
    /// * `year` - Gregorian year (proleptic before 1582)
    /// * `month` - Month (1-12)
    /// * `day` - Day of month (1-31)
    /// * `hour` - Local hour (0-23)
    /// * `minute` - Minute (0-59)
    /// * `second` - Second (0-59, can include fractional seconds)
    /// * `utc_offset_hours` - Offset of the local clock from UTC, positive eastwards
    ///
    /// # Errors
    /// Returns `InvalidDateTime` for out-of-range components and `InvalidUtcOffset`
    /// when the offset is 24 hours or more in magnitude.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        utc_offset_hours: f64,
    ) -> Result<Self> {
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_datetime(
                "second must be between 0 and 59.999...",
            ));
        }
        check_utc_offset(utc_offset_hours)?;
        let day_of_year = day_of_year(year, month, day)?;

        Ok(Self {
            year,
            day_of_year,
            local_hours: fractional_hours(hour, minute, second),
            utc_offset_hours,
        })
    }

    /// Creates an instant from UTC calendar components.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` for out-of-range components.
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        Self::new(year, month, day, hour, minute, second, 0.0)
    }

    /// Creates an instant from a timezone-aware chrono `DateTime`.
    ///
    /// The local calendar date and the offset in force at that instant are used,
    /// so daylight saving time is handled by the time zone itself.
    #[cfg(feature = "chrono")]
    pub fn from_datetime<Tz: TimeZone>(datetime: &chrono::DateTime<Tz>) -> Self {
        let local = datetime.naive_local();
        let offset_seconds = datetime.offset().fix().local_minus_utc();
        // chrono encodes a leap second as nanosecond >= 1e9; hold it at the end of the minute
        let second = (f64::from(local.second()) + f64::from(local.nanosecond()) / 1e9)
            .min(LAST_SECOND_OF_MINUTE);

        Self {
            year: local.year(),
            day_of_year: local.ordinal(),
            local_hours: fractional_hours(local.hour(), local.minute(), second),
            utc_offset_hours: f64::from(offset_seconds) / SECONDS_PER_HOUR,
        }
    }

    /// Gets the calendar year of the local date.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the day of year (1-366) of the local date.
    #[must_use]
    pub const fn day_of_year(&self) -> u32 {
        self.day_of_year
    }

    /// Gets the local clock time in fractional hours since midnight.
    #[must_use]
    pub const fn local_hours(&self) -> f64 {
        self.local_hours
    }

    /// Gets the UTC offset in hours (positive eastwards).
    #[must_use]
    pub const fn utc_offset_hours(&self) -> f64 {
        self.utc_offset_hours
    }
}

fn fractional_hours(hour: u32, minute: u32, second: f64) -> f64 {
    f64::from(hour) + (f64::from(minute) + second / 60.0) / 60.0
}

/// Computes the day of year (1-366) of a Gregorian date.
///
/// # Errors
/// Returns `InvalidDateTime` if the month or day is out of range.
///
/// # Example
/// ```
/// # use asce_clearsky::time::day_of_year;
/// assert_eq!(day_of_year(2019, 3, 8).unwrap(), 67);
/// assert_eq!(day_of_year(2020, 12, 31).unwrap(), 366);
/// ```
pub fn day_of_year(year: i32, month: u32, day: u32) -> Result<u32> {
    if !(1..=12).contains(&month) {
        return Err(Error::invalid_datetime("month must be between 1 and 12"));
    }
    if day == 0 || day > days_in_month(year, month) {
        return Err(Error::invalid_datetime("day is out of range for month"));
    }

    let preceding: u32 = (1..month).map(|m| days_in_month(year, m)).sum();
    Ok(preceding + day)
}

/// Whether `year` is a leap year in the Gregorian calendar.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}
