use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, DEFAULT_MAX_YEAR, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_DAY, MAX_MONTH, MIN_DAY, MONTH_NAMES,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::num::NonZeroU32;

/// A year value guaranteed to be at least 1 (proleptic Gregorian, no year zero)
/// Uses `NonZeroU32` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Year(NonZeroU32);

impl Year {
    /// Year 1, the first year of the epoch
    pub const MIN: Self = Self(NonZeroU32::MIN);

    /// Upper year of a default [`DateRange`](crate::DateRange)
    pub const DEFAULT_MAX: Self = match NonZeroU32::new(DEFAULT_MAX_YEAR) {
        Some(year) => Self(year),
        None => Self::MIN,
    };

    /// Creates a new Year, validating that it's non-zero
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is 0.
    pub fn new(value: u32) -> Result<Self, DateError> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(DateError::InvalidYear(value))
    }

    /// Returns the year value as u32
    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Whether this year has a February 29th
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u32> for Year {
    type Error = DateError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u32 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    pub const JANUARY: Self = Self(NonZeroU8::MIN);

    pub const DECEMBER: Self = match NonZeroU8::new(DECEMBER) {
        Some(month) => Self(month),
        None => Self::JANUARY,
    };

    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// English name of the month, e.g. "January"
    #[inline]
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.get() as usize]
    }

    /// Number of days in this month of `year`
    #[inline]
    pub const fn length(self, year: Year) -> u8 {
        days_in_month(self.get(), year.get())
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day-of-month value. Constructed with [`Day::new`] it is valid for the
/// given month and year; through `TryFrom<u8>` it is only known to be in `1..=31`.
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// First day of any month
    pub const FIRST: Self = Self(NonZeroU8::MIN);

    /// Last day of the longest months
    pub const LAST: Self = match NonZeroU8::new(MAX_DAY) {
        Some(day) => Self(day),
        None => Self::FIRST,
    };

    /// Creates a new Day, validating that it's non-zero and valid for the given month and year
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, month: Month, year: Year) -> Result<Self, DateError> {
        let invalid = DateError::InvalidDay {
            month: month.get(),
            day: value,
            year: year.get(),
        };
        let non_zero = NonZeroU8::new(value).ok_or(invalid)?;
        if value > month.length(year) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate against a month without context, so only the 1..=31 window
        if !(MIN_DAY..=MAX_DAY).contains(&value) {
            return Err(DateError::DayOutOfRange(value));
        }
        NonZeroU8::new(value)
            .map(Self)
            .ok_or(DateError::DayOutOfRange(value))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions. Callers must pass an already validated month.

pub(crate) const fn is_leap_year(year: u32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub(crate) const fn days_in_month(month: u8, year: u32) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
