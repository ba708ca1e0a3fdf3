mod calendar;
mod consts;
mod generator;
mod prelude;
mod range;
mod types;
mod weekday;

pub use calendar::{
    calculate_difference, day_of_week, days_in_month, format_date, has_leap_year_in_range,
    is_leap_year, is_valid_date, is_valid_day, is_valid_month, is_valid_year, max_days_in_months,
    min_days_in_months, month_name, to_days, validate_date,
};
pub use consts::*;
pub use generator::DateGenerator;
pub use range::{Bound, DateRange, RangeError};
pub use types::{Day, Month, Year};
pub use weekday::Weekday;

use crate::prelude::*;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// A validated proleptic Gregorian date.
///
/// Fields are ordered year, month, day so the derived ordering is
/// chronological. Constructors take `(month, day, year)`, the order the date
/// is written in, e.g. "January 27, 2005".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{} {}, {}", "month.name()", "day", "year")]
#[serde(try_from = "DateParts", into = "DateParts")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

/// Every way a date, or a field of one, can be invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid year: {} (must be at least {})", "_0", MIN_YEAR)]
    InvalidYear(u32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u32 },
    #[display(fmt = "Invalid day: {} (must be {}-{})", "_0", MIN_DAY, MAX_DAY)]
    DayOutOfRange(u8),
}

impl std::error::Error for DateError {}

/// Plain serialized shape of a [`CalendarDate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct DateParts {
    year: u32,
    month: u8,
    day: u8,
}

impl Default for CalendarDate {
    /// January 1 of year 1, the first day of the epoch
    fn default() -> Self {
        Self {
            year: Year::MIN,
            month: Month::JANUARY,
            day: Day::FIRST,
        }
    }
}

impl CalendarDate {
    /// Creates a date, validating the year, then the month, then the day.
    ///
    /// # Errors
    /// Returns the `DateError` for the first invalid field.
    pub fn new(month: u8, day: u8, year: u32) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, month, year)?;
        Ok(Self { year, month, day })
    }

    /// Creates a date from already validated components
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if `day` is past the end of the month.
    pub const fn from_typed(year: Year, month: Month, day: Day) -> Result<Self, DateError> {
        if day.get() > month.length(year) {
            return Err(DateError::InvalidDay {
                month: month.get(),
                day: day.get(),
                year: year.get(),
            });
        }
        Ok(Self { year, month, day })
    }

    /// Today's date on the host's local clock.
    ///
    /// # Errors
    /// Returns a `DateError` if the clock reports a date before year 1.
    pub fn today() -> Result<Self, DateError> {
        let now = chrono::Local::now().date_naive();
        Self::new(
            u8::try_from(now.month()).unwrap_or(0),
            u8::try_from(now.day()).unwrap_or(0),
            u32::try_from(now.year()).unwrap_or(0),
        )
    }

    /// Returns the day of the month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the month, 1 for January
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the year
    pub const fn year(&self) -> u32 {
        self.year.get()
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the `(month, day, year)` triple the date was built from
    pub const fn to_parts(&self) -> (u8, u8, u32) {
        (self.month(), self.day(), self.year())
    }

    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Length of this date's month
    pub const fn days_in_month(&self) -> u8 {
        self.month.length(self.year)
    }

    pub const fn month_name(&self) -> &'static str {
        self.month.name()
    }

    pub fn day_of_week(&self) -> Weekday {
        calendar::zeller(self.month(), self.day(), self.year())
    }

    /// Days elapsed since the epoch, counting January 1 of year 1 as day 1
    pub fn to_days(&self) -> u64 {
        calendar::epoch_days(self.month(), self.day(), self.year())
    }

    /// Absolute number of days between two dates, 0 when they are equal
    pub fn calculate_difference(&self, other: &Self) -> u64 {
        self.to_days().abs_diff(other.to_days())
    }

    /// Replaces the date in place. On error the date is left as it was.
    ///
    /// # Errors
    /// Returns the `DateError` for the first invalid field.
    pub fn update_date(&mut self, month: u8, day: u8, year: u32) -> Result<(), DateError> {
        *self = Self::new(month, day, year)?;
        Ok(())
    }

    /// Renders `"<MonthName> <day>, <year>"` followed by `end`, e.g. `"\n"`
    pub fn format_with(&self, end: &str) -> String {
        format!("{self}{end}")
    }
}

impl TryFrom<(u8, u8, u32)> for CalendarDate {
    type Error = DateError;

    fn try_from((month, day, year): (u8, u8, u32)) -> Result<Self, Self::Error> {
        Self::new(month, day, year)
    }
}

impl From<CalendarDate> for (u8, u8, u32) {
    fn from(date: CalendarDate) -> Self {
        date.to_parts()
    }
}

impl TryFrom<DateParts> for CalendarDate {
    type Error = DateError;

    fn try_from(parts: DateParts) -> Result<Self, Self::Error> {
        Self::new(parts.month, parts.day, parts.year)
    }
}

impl From<CalendarDate> for DateParts {
    fn from(date: CalendarDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}
