use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DateError, Day, Month, Year, calendar, prelude::*};

/// Inclusive day, month and year bounds for random date generation.
///
/// A `DateRange` is always feasible: every bound is individually valid, each
/// min is at most its max, and `min_day..=max_day` can be met by the months
/// in `min_month..=max_month`, with February given 29 days whenever the year
/// span contains a leap year. Changing a bound produces a new, revalidated
/// range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RangeBounds", into = "RangeBounds")]
pub struct DateRange {
    min_day:   Day,
    max_day:   Day,
    min_month: Month,
    max_month: Month,
    min_year:  Year,
    max_year:  Year,
}

/// Names one of the six bounds of a [`DateRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Bound {
    #[display(fmt = "min day")]
    MinDay,
    #[display(fmt = "max day")]
    MaxDay,
    #[display(fmt = "min month")]
    MinMonth,
    #[display(fmt = "max month")]
    MaxMonth,
    #[display(fmt = "min year")]
    MinYear,
    #[display(fmt = "max year")]
    MaxYear,
}

/// Error type for date range operations.
///
/// `field` is always the bound whose change was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// The bound is not a valid day, month or year on its own.
    #[error(transparent)]
    Date(#[from] DateError),

    /// A min would exceed its max, or the reverse.
    #[error("Invalid {field}: {value} conflicts with {partner} {partner_value}")]
    Inverted {
        field:         Bound,
        value:         u32,
        partner:       Bound,
        partner_value: u32,
    },

    /// Some month in the span is shorter than the min day.
    #[error(
        "Invalid {field}: {value}. min day ({min_day}) must be less than or equal to the shortest month in range ({shortest} days)"
    )]
    MinDayUnreachable {
        field:    Bound,
        value:    u32,
        min_day:  u8,
        shortest: u8,
    },

    /// No month in the span is as long as the max day.
    #[error(
        "Invalid {field}: {value}. max day ({max_day}) must be less than or equal to the longest month in range ({longest} days)"
    )]
    MaxDayUnreachable {
        field:   Bound,
        value:   u32,
        max_day: u8,
        longest: u8,
    },
}

/// Plain serialized shape of a [`DateRange`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct RangeBounds {
    min_day:   u8,
    max_day:   u8,
    min_month: u8,
    max_month: u8,
    min_year:  u32,
    max_year:  u32,
}

impl Default for DateRange {
    /// Any day of any month from year 1 through `DEFAULT_MAX_YEAR`
    fn default() -> Self {
        Self {
            min_day:   Day::FIRST,
            max_day:   Day::LAST,
            min_month: Month::JANUARY,
            max_month: Month::DECEMBER,
            min_year:  Year::MIN,
            max_year:  Year::DEFAULT_MAX,
        }
    }
}

impl DateRange {
    /// Creates a range from all six bounds at once.
    ///
    /// # Errors
    /// Returns a `RangeError` if any bound is invalid or the combination is
    /// infeasible. Errors are attributed to the first offending bound in the
    /// order the arguments are listed.
    pub fn new(
        (min_day, max_day): (u8, u8),
        (min_month, max_month): (u8, u8),
        (min_year, max_year): (u32, u32),
    ) -> Result<Self, RangeError> {
        let candidate = Self {
            min_day:   Day::try_from(min_day)?,
            max_day:   Day::try_from(max_day)?,
            min_month: Month::new(min_month)?,
            max_month: Month::new(max_month)?,
            min_year:  Year::new(min_year)?,
            max_year:  Year::new(max_year)?,
        };
        candidate.ordered(Bound::MinDay)?;
        candidate.ordered(Bound::MinMonth)?;
        candidate.ordered(Bound::MinYear)?;
        candidate.feasible(Bound::MinDay)
    }

    pub const fn min_day(&self) -> u8 {
        self.min_day.get()
    }

    pub const fn max_day(&self) -> u8 {
        self.max_day.get()
    }

    pub const fn min_month(&self) -> u8 {
        self.min_month.get()
    }

    pub const fn max_month(&self) -> u8 {
        self.max_month.get()
    }

    pub const fn min_year(&self) -> u32 {
        self.min_year.get()
    }

    pub const fn max_year(&self) -> u32 {
        self.max_year.get()
    }

    /// Returns the value of one bound, widened to u32
    pub fn get(&self, bound: Bound) -> u32 {
        match bound {
            Bound::MinDay => u32::from(self.min_day()),
            Bound::MaxDay => u32::from(self.max_day()),
            Bound::MinMonth => u32::from(self.min_month()),
            Bound::MaxMonth => u32::from(self.max_month()),
            Bound::MinYear => self.min_year(),
            Bound::MaxYear => self.max_year(),
        }
    }

    /// Whether the year span contains at least one leap year
    pub fn has_leap_year(&self) -> bool {
        calendar::has_leap_year_in_range(self.min_year, self.max_year)
    }

    /// Whether `date` falls inside every bound
    pub fn contains(&self, date: &CalendarDate) -> bool {
        (self.min_year..=self.max_year).contains(&date.year_typed())
            && (self.min_month..=self.max_month).contains(&date.month_typed())
            && (self.min_day()..=self.max_day()).contains(&date.day())
    }

    /// # Errors
    /// Returns a `RangeError` if `value` is not in `1..=31`, exceeds the max
    /// day, or is longer than the shortest month in the month span.
    pub fn with_min_day(self, value: u8) -> Result<Self, RangeError> {
        let min_day = Day::try_from(value)?;
        Self { min_day, ..self }.checked(Bound::MinDay)
    }

    /// # Errors
    /// Returns a `RangeError` if `value` is not in `1..=31`, is below the min
    /// day, or is longer than the longest month in the month span.
    pub fn with_max_day(self, value: u8) -> Result<Self, RangeError> {
        let max_day = Day::try_from(value)?;
        Self { max_day, ..self }.checked(Bound::MaxDay)
    }

    /// # Errors
    /// Returns a `RangeError` if `value` is not a month, exceeds the max
    /// month, or leaves the day bounds unreachable.
    pub fn with_min_month(self, value: u8) -> Result<Self, RangeError> {
        let min_month = Month::new(value)?;
        Self { min_month, ..self }.checked(Bound::MinMonth)
    }

    /// # Errors
    /// Returns a `RangeError` if `value` is not a month, is below the min
    /// month, or leaves the day bounds unreachable.
    pub fn with_max_month(self, value: u8) -> Result<Self, RangeError> {
        let max_month = Month::new(value)?;
        Self { max_month, ..self }.checked(Bound::MaxMonth)
    }

    /// # Errors
    /// Returns a `RangeError` if `value` is 0, exceeds the max year, or
    /// removes the only leap year a February 29th bound relies on.
    pub fn with_min_year(self, value: u32) -> Result<Self, RangeError> {
        let min_year = Year::new(value)?;
        Self { min_year, ..self }.checked(Bound::MinYear)
    }

    /// # Errors
    /// Returns a `RangeError` if `value` is 0, is below the min year, or
    /// removes the only leap year a February 29th bound relies on.
    pub fn with_max_year(self, value: u32) -> Result<Self, RangeError> {
        let max_year = Year::new(value)?;
        Self { max_year, ..self }.checked(Bound::MaxYear)
    }

    fn checked(self, field: Bound) -> Result<Self, RangeError> {
        self.ordered(field)?;
        self.feasible(field)
    }

    /// Checks the min/max pair `field` belongs to
    fn ordered(&self, field: Bound) -> Result<(), RangeError> {
        let (min, max) = match field {
            Bound::MinDay | Bound::MaxDay => (Bound::MinDay, Bound::MaxDay),
            Bound::MinMonth | Bound::MaxMonth => (Bound::MinMonth, Bound::MaxMonth),
            Bound::MinYear | Bound::MaxYear => (Bound::MinYear, Bound::MaxYear),
        };
        if self.get(min) <= self.get(max) {
            return Ok(());
        }
        let partner = if field == min { max } else { min };
        Err(RangeError::Inverted {
            field,
            value: self.get(field),
            partner,
            partner_value: self.get(partner),
        })
    }

    /// Checks the day bounds against the month span, whatever `field` changed
    fn feasible(self, field: Bound) -> Result<Self, RangeError> {
        let leap = self.has_leap_year();
        // a day bound is reported as itself, any other change is blamed for the conflict
        let blame = |day_bound: Bound| match field {
            Bound::MinDay | Bound::MaxDay => (day_bound, self.get(day_bound)),
            _ => (field, self.get(field)),
        };

        let shortest = calendar::min_days_in_months(self.min_month, self.max_month, leap);
        if self.min_day() > shortest {
            let (field, value) = blame(Bound::MinDay);
            return Err(RangeError::MinDayUnreachable {
                field,
                value,
                min_day: self.min_day(),
                shortest,
            });
        }

        let longest = calendar::max_days_in_months(self.min_month, self.max_month, leap);
        if self.max_day() > longest {
            let (field, value) = blame(Bound::MaxDay);
            return Err(RangeError::MaxDayUnreachable {
                field,
                value,
                max_day: self.max_day(),
                longest,
            });
        }

        Ok(self)
    }
}

impl TryFrom<RangeBounds> for DateRange {
    type Error = RangeError;

    fn try_from(bounds: RangeBounds) -> Result<Self, Self::Error> {
        Self::new(
            (bounds.min_day, bounds.max_day),
            (bounds.min_month, bounds.max_month),
            (bounds.min_year, bounds.max_year),
        )
    }
}

impl From<DateRange> for RangeBounds {
    fn from(range: DateRange) -> Self {
        Self {
            min_day:   range.min_day(),
            max_day:   range.max_day(),
            min_month: range.min_month(),
            max_month: range.max_month(),
            min_year:  range.min_year(),
            max_year:  range.max_year(),
        }
    }
}
