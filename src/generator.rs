use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{Bound, CalendarDate, DateRange, RangeError, types};

/// Produces random [`CalendarDate`]s inside a [`DateRange`].
///
/// The generator owns its random source, so a seeded one gives a repeatable
/// sequence of dates. Setters swap the whole range for a revalidated copy;
/// a rejected change leaves every bound as it was. All access goes through
/// `&mut self`, so a generator shared between threads needs a `Mutex`.
#[derive(Debug, Clone)]
pub struct DateGenerator<R = StdRng> {
    range: DateRange,
    rng:   R,
}

impl DateGenerator<StdRng> {
    /// Creates a generator over the default range with a deterministic seed
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for DateGenerator<StdRng> {
    /// Default range, seeded from the operating system
    fn default() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> DateGenerator<R> {
    /// Creates a generator over the default range
    pub fn new(rng: R) -> Self {
        Self::with_range(DateRange::default(), rng)
    }

    pub fn with_range(range: DateRange, rng: R) -> Self {
        Self { range, rng }
    }

    /// Returns the current bounds
    pub const fn range(&self) -> DateRange {
        self.range
    }

    /// Replaces all six bounds with an already validated range
    pub fn set_range(&mut self, range: DateRange) {
        self.range = range;
    }

    pub const fn min_day(&self) -> u8 {
        self.range.min_day()
    }

    pub const fn max_day(&self) -> u8 {
        self.range.max_day()
    }

    pub const fn min_month(&self) -> u8 {
        self.range.min_month()
    }

    pub const fn max_month(&self) -> u8 {
        self.range.max_month()
    }

    pub const fn min_year(&self) -> u32 {
        self.range.min_year()
    }

    pub const fn max_year(&self) -> u32 {
        self.range.max_year()
    }

    /// # Errors
    /// See [`DateRange::with_min_day`].
    pub fn set_min_day(&mut self, value: u8) -> Result<(), RangeError> {
        self.update(Bound::MinDay, u32::from(value), |range| range.with_min_day(value))
    }

    /// # Errors
    /// See [`DateRange::with_max_day`].
    pub fn set_max_day(&mut self, value: u8) -> Result<(), RangeError> {
        self.update(Bound::MaxDay, u32::from(value), |range| range.with_max_day(value))
    }

    /// # Errors
    /// See [`DateRange::with_min_month`].
    pub fn set_min_month(&mut self, value: u8) -> Result<(), RangeError> {
        self.update(Bound::MinMonth, u32::from(value), |range| {
            range.with_min_month(value)
        })
    }

    /// # Errors
    /// See [`DateRange::with_max_month`].
    pub fn set_max_month(&mut self, value: u8) -> Result<(), RangeError> {
        self.update(Bound::MaxMonth, u32::from(value), |range| {
            range.with_max_month(value)
        })
    }

    /// # Errors
    /// See [`DateRange::with_min_year`].
    pub fn set_min_year(&mut self, value: u32) -> Result<(), RangeError> {
        self.update(Bound::MinYear, value, |range| range.with_min_year(value))
    }

    /// # Errors
    /// See [`DateRange::with_max_year`].
    pub fn set_max_year(&mut self, value: u32) -> Result<(), RangeError> {
        self.update(Bound::MaxYear, value, |range| range.with_max_year(value))
    }

    fn update(
        &mut self,
        field: Bound,
        value: u32,
        change: impl FnOnce(DateRange) -> Result<DateRange, RangeError>,
    ) -> Result<(), RangeError> {
        match change(self.range) {
            Ok(range) => {
                self.range = range;
                Ok(())
            },
            Err(error) => {
                tracing::debug!(%field, value, %error, "rejected date range change");
                Err(error)
            },
        }
    }

    /// Draws `n` dates, in draw order.
    pub fn generate_random_dates(&mut self, n: usize) -> Vec<CalendarDate> {
        let dates: Vec<_> = (0..n).map(|_| self.generate_random_date()).collect();
        tracing::trace!(count = dates.len(), range = ?self.range, "generated random dates");
        dates
    }

    /// Draws one date: a year, then a month, then a day that fits both.
    ///
    /// The upper day bound is clamped to the drawn month's length. A
    /// February of a common year cannot reach a min day of 29; the range
    /// only guarantees some leap year exists, so that year and month are
    /// drawn again instead.
    pub fn generate_random_date(&mut self) -> CalendarDate {
        let range = self.range;
        loop {
            let year = self.rng.random_range(range.min_year()..=range.max_year());
            let month = self.rng.random_range(range.min_month()..=range.max_month());

            let last = range.max_day().min(types::days_in_month(month, year));
            if range.min_day() > last {
                continue;
            }
            let day = self.rng.random_range(range.min_day()..=last);

            if let Ok(date) = CalendarDate::new(month, day, year) {
                return date;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DateError;

    fn generator(days: (u8, u8), months: (u8, u8), years: (u32, u32)) -> DateGenerator {
        let range = DateRange::new(days, months, years).unwrap();
        DateGenerator::with_range(range, StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_generate_exact_count() {
        let mut g = DateGenerator::from_seed(1);
        assert_eq!(g.generate_random_dates(0).len(), 0);
        assert_eq!(g.generate_random_dates(10).len(), 10);
        assert_eq!(g.generate_random_dates(1000).len(), 1000);
    }

    #[test]
    fn test_generated_dates_respect_bounds() {
        let mut g = generator((5, 31), (2, 6), (2000, 2025));
        for date in g.generate_random_dates(2000) {
            assert!((2000..=2025).contains(&date.year()), "{date}");
            assert!((2..=6).contains(&date.month()), "{date}");
            assert!(date.day() >= 5, "{date}");
            assert!(date.day() <= date.days_in_month(), "{date}");
        }
    }

    #[test]
    fn test_max_day_clamped_per_month() {
        // day 31 is reachable in March and May, never in April
        let mut g = generator((29, 31), (3, 5), (2001, 2003));
        let dates = g.generate_random_dates(500);
        assert!(dates.iter().all(|d| d.day() <= d.days_in_month()));
        assert!(dates.iter().any(|d| d.day() == 31));
        assert!(dates.iter().filter(|d| d.month() == 4).all(|d| d.day() <= 30));
    }

    #[test]
    fn test_min_day_29_only_lands_on_leap_february() {
        let mut g = generator((29, 29), (2, 2), (2021, 2024));
        for date in g.generate_random_dates(200) {
            assert_eq!(date.to_parts(), (2, 29, 2024));
        }
    }

    #[test]
    fn test_same_seed_same_dates() {
        let mut a = DateGenerator::from_seed(42);
        let mut b = DateGenerator::from_seed(42);
        assert_eq!(a.generate_random_dates(50), b.generate_random_dates(50));
    }

    #[test]
    fn test_setters() {
        let mut g = DateGenerator::from_seed(3);
        g.set_min_year(2000).unwrap();
        g.set_max_year(2025).unwrap();
        g.set_min_month(1).unwrap();
        g.set_max_month(12).unwrap();
        g.set_min_day(1).unwrap();
        g.set_max_day(31).unwrap();
        assert_eq!((g.min_day(), g.max_day()), (1, 31));
        assert_eq!((g.min_month(), g.max_month()), (1, 12));
        assert_eq!((g.min_year(), g.max_year()), (2000, 2025));

        for date in g.generate_random_dates(100) {
            assert!(g.range().contains(&date), "{date}");
        }
    }

    #[test]
    fn test_rejected_setter_leaves_bounds_unchanged() {
        let mut g = generator((1, 29), (2, 2), (2020, 2023));
        let before = g.range();

        assert!(matches!(
            g.set_min_year(2021),
            Err(RangeError::MaxDayUnreachable { .. })
        ));
        assert!(matches!(
            g.set_min_day(30),
            Err(RangeError::Inverted { .. })
        ));
        assert!(matches!(
            g.set_max_day(30),
            Err(RangeError::MaxDayUnreachable { .. })
        ));
        assert!(matches!(
            g.set_max_month(13),
            Err(RangeError::Date(DateError::InvalidMonth(13)))
        ));
        assert!(matches!(
            g.set_min_month(3),
            Err(RangeError::Inverted { .. })
        ));
        assert!(matches!(
            g.set_max_year(0),
            Err(RangeError::Date(DateError::InvalidYear(0)))
        ));
        assert_eq!(g.range(), before);
    }

    #[test]
    fn test_set_range() {
        let mut g = DateGenerator::from_seed(9);
        let range = DateRange::new((10, 12), (7, 7), (1999, 1999)).unwrap();
        g.set_range(range);
        for date in g.generate_random_dates(20) {
            assert_eq!(date.month(), 7);
            assert_eq!(date.year(), 1999);
            assert!((10..=12).contains(&date.day()));
        }
    }
}
