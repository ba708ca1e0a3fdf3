//! Checked calendar queries over a raw `(month, day, year)` triple.
//!
//! Every function here validates its input and then delegates to the same
//! code [`CalendarDate`] uses for its infallible methods.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE, MARCH, MAX_MONTH, MIN_DAY, MIN_YEAR,
};
use crate::types::{self, Month, Year};
use crate::{CalendarDate, DateError, Weekday};

/// Whether `year` is a representable year (at least 1)
pub const fn is_valid_year(year: u32) -> bool {
    year >= MIN_YEAR
}

/// Whether `month` is in `1..=12`
pub fn is_valid_month(month: u8) -> bool {
    (JANUARY..=MAX_MONTH).contains(&month)
}

/// Whether `day` exists in the given month of the given year.
/// Returns false when the month or year is itself invalid.
pub fn is_valid_day(month: u8, day: u8, year: u32) -> bool {
    days_in_month(month, year).is_ok_and(|length| (MIN_DAY..=length).contains(&day))
}

/// Whether `(month, day, year)` names a real Gregorian date
pub fn is_valid_date(month: u8, day: u8, year: u32) -> bool {
    validate_date(month, day, year).is_ok()
}

/// Validates a date, checking the year, then the month, then the day.
///
/// # Errors
/// Returns the `DateError` for the first field that is invalid.
pub fn validate_date(month: u8, day: u8, year: u32) -> Result<(), DateError> {
    CalendarDate::new(month, day, year).map(|_| ())
}

/// Gregorian leap year rule.
///
/// # Errors
/// Returns `DateError::InvalidYear` for year 0.
pub fn is_leap_year(year: u32) -> Result<bool, DateError> {
    Year::new(year).map(Year::is_leap)
}

/// Length of `month` in `year`, 29 for February of a leap year.
///
/// # Errors
/// Returns `DateError::InvalidYear` or `DateError::InvalidMonth`.
pub fn days_in_month(month: u8, year: u32) -> Result<u8, DateError> {
    let year = Year::new(year)?;
    Ok(Month::new(month)?.length(year))
}

/// English name of `month`.
///
/// # Errors
/// Returns `DateError::InvalidMonth` outside `1..=12`.
pub fn month_name(month: u8) -> Result<&'static str, DateError> {
    Month::new(month).map(Month::name)
}

/// Day of the week of a date.
///
/// # Errors
/// Returns a `DateError` if the date is invalid.
pub fn day_of_week(month: u8, day: u8, year: u32) -> Result<Weekday, DateError> {
    CalendarDate::new(month, day, year).map(|date| date.day_of_week())
}

/// Days elapsed since the epoch, counting January 1 of year 1 as day 1.
///
/// # Errors
/// Returns a `DateError` if the date is invalid.
pub fn to_days(month: u8, day: u8, year: u32) -> Result<u64, DateError> {
    CalendarDate::new(month, day, year).map(|date| date.to_days())
}

/// Absolute number of days between two dates.
///
/// # Errors
/// Returns a `DateError` if either date is invalid.
pub fn calculate_difference(
    month_a: u8,
    day_a: u8,
    year_a: u32,
    month_b: u8,
    day_b: u8,
    year_b: u32,
) -> Result<u64, DateError> {
    let a = CalendarDate::new(month_a, day_a, year_a)?;
    let b = CalendarDate::new(month_b, day_b, year_b)?;
    Ok(a.calculate_difference(&b))
}

/// Renders a date as `"<MonthName> <day>, <year>"` followed by `end`.
///
/// # Errors
/// Returns a `DateError` if the date is invalid.
pub fn format_date(month: u8, day: u8, year: u32, end: &str) -> Result<String, DateError> {
    CalendarDate::new(month, day, year).map(|date| date.format_with(end))
}

/// Whether any year in `min_year..=max_year` is a leap year.
///
/// Only the first multiple of 4 at or after `min_year` needs checking, and
/// the one after it when that candidate is a non-leap century.
pub fn has_leap_year_in_range(min_year: Year, max_year: Year) -> bool {
    let cycle = u64::from(LEAP_YEAR_CYCLE);
    let mut candidate = u64::from(min_year.get()).div_ceil(cycle) * cycle;
    if candidate % u64::from(CENTURY_CYCLE) == 0 && candidate % u64::from(GREGORIAN_CYCLE) != 0 {
        candidate += cycle;
    }
    candidate <= u64::from(max_year.get())
}

/// Shortest month length across `min_month..=max_month`, with February
/// counted as 29 days when `leap` is set. Returns 0 for an empty span.
pub fn min_days_in_months(min_month: Month, max_month: Month, leap: bool) -> u8 {
    month_lengths(min_month, max_month, leap).min().unwrap_or(0)
}

/// Longest month length across `min_month..=max_month`, with February
/// counted as 29 days when `leap` is set. Returns 0 for an empty span.
pub fn max_days_in_months(min_month: Month, max_month: Month, leap: bool) -> u8 {
    month_lengths(min_month, max_month, leap).max().unwrap_or(0)
}

fn month_lengths(min_month: Month, max_month: Month, leap: bool) -> impl Iterator<Item = u8> {
    (min_month.get()..=max_month.get()).map(move |month| {
        if leap && month == FEBRUARY {
            FEBRUARY_DAYS_LEAP
        } else {
            DAYS_IN_MONTH[month as usize]
        }
    })
}

// Unchecked cores. Callers guarantee a valid date.

/// Zeller's congruence. January and February count as months 13 and 14 of
/// the previous year.
pub(crate) fn zeller(month: u8, day: u8, year: u32) -> Weekday {
    debug_assert!(year >= MIN_YEAR);

    let (m, y) = if month < MARCH {
        (u64::from(month) + 12, u64::from(year) - 1)
    } else {
        (u64::from(month), u64::from(year))
    };
    let k = y % 100;
    let j = y / 100;
    let h = u64::from(day) + 13 * (m + 1) / 5 + k + k / 4 + j / 4 + 5 * j;
    Weekday::from_zeller(h)
}

pub(crate) fn epoch_days(month: u8, day: u8, year: u32) -> u64 {
    debug_assert!(year >= MIN_YEAR);

    let prior = u64::from(year) - 1;
    let leap_days = prior / u64::from(LEAP_YEAR_CYCLE) - prior / u64::from(CENTURY_CYCLE)
        + prior / u64::from(GREGORIAN_CYCLE);
    let month_days: u64 = (JANUARY..month)
        .map(|m| u64::from(types::days_in_month(m, year)))
        .sum();
    prior * DAYS_IN_COMMON_YEAR + leap_days + month_days + u64::from(day)
}
