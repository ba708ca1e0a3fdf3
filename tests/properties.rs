use calendar_date::{
    CalendarDate, DateGenerator, DateRange, Weekday, Year, calculate_difference, day_of_week,
    has_leap_year_in_range, is_leap_year, is_valid_date, to_days,
};
use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

/// Any valid date between year 1 and 9999
fn date_strategy() -> impl Strategy<Value = CalendarDate> {
    (1_u32..=9999, 1_u8..=12, 1_u8..=31).prop_map(|(year, month, day)| {
        let last = calendar_date::days_in_month(month, year).unwrap();
        CalendarDate::new(month, day.min(last), year).unwrap()
    })
}

fn chrono_date(date: &CalendarDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(
        i32::try_from(date.year()).unwrap(),
        u32::from(date.month()),
        u32::from(date.day()),
    )
    .unwrap()
}

fn chrono_weekday(weekday: chrono::Weekday) -> Weekday {
    match weekday {
        chrono::Weekday::Mon => Weekday::Monday,
        chrono::Weekday::Tue => Weekday::Tuesday,
        chrono::Weekday::Wed => Weekday::Wednesday,
        chrono::Weekday::Thu => Weekday::Thursday,
        chrono::Weekday::Fri => Weekday::Friday,
        chrono::Weekday::Sat => Weekday::Saturday,
        chrono::Weekday::Sun => Weekday::Sunday,
    }
}

/// A feasible range, built by clamping arbitrary bounds into shape
fn range_strategy() -> impl Strategy<Value = DateRange> {
    (
        1_u32..=3000,
        0_u32..=40,
        1_u8..=12,
        0_u8..=11,
        1_u8..=31,
        0_u8..=30,
    )
        .prop_map(|(min_year, span, min_month, month_span, min_day, day_span)| {
            let max_month = min_month.saturating_add(month_span).min(12);
            let max_day = min_day.saturating_add(day_span).min(31);
            let years = (min_year, min_year + span);
            // shrink the day bounds until the month span can hold them
            let mut days = (min_day, max_day);
            loop {
                match DateRange::new(days, (min_month, max_month), years) {
                    Ok(range) => return range,
                    Err(_) if days.1 > days.0 => days.1 -= 1,
                    Err(_) => days = (days.0 - 1, days.0 - 1),
                }
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Invariant: the epoch day count matches chrono's count of days from the common era.
    #[test]
    fn to_days_matches_chrono(date in date_strategy()) {
        let expected = u64::try_from(chrono_date(&date).num_days_from_ce()).unwrap();
        prop_assert_eq!(date.to_days(), expected);
        prop_assert_eq!(to_days(date.month(), date.day(), date.year()), Ok(expected));
    }

    /// Invariant: Zeller's congruence agrees with chrono on every date.
    #[test]
    fn day_of_week_matches_chrono(date in date_strategy()) {
        let expected = chrono_weekday(chrono_date(&date).weekday());
        prop_assert_eq!(date.day_of_week(), expected);
        prop_assert_eq!(day_of_week(date.month(), date.day(), date.year()), Ok(expected));
    }

    /// Invariant: ordering agrees with the epoch day count.
    #[test]
    fn ordering_matches_to_days(a in date_strategy(), b in date_strategy()) {
        prop_assert_eq!(a.cmp(&b), a.to_days().cmp(&b.to_days()));
        prop_assert_eq!(a == b, a.to_days() == b.to_days());
    }

    /// Invariant: difference is symmetric, exact, and zero only for equal dates.
    #[test]
    fn difference_is_symmetric(a in date_strategy(), b in date_strategy()) {
        let forward = a.calculate_difference(&b);
        prop_assert_eq!(forward, b.calculate_difference(&a));
        prop_assert_eq!(forward, a.to_days().abs_diff(b.to_days()));
        prop_assert_eq!(forward == 0, a == b);
        prop_assert_eq!(
            calculate_difference(a.month(), a.day(), a.year(), b.month(), b.day(), b.year()),
            Ok(forward)
        );
    }

    /// Invariant: a valid triple reads back unchanged.
    #[test]
    fn construction_round_trips(year in 1_u32..=100_000, month in 1_u8..=12, day in 1_u8..=31) {
        let date = CalendarDate::new(month, day, year);
        prop_assert_eq!(date.is_ok(), is_valid_date(month, day, year));
        if let Ok(date) = date {
            prop_assert_eq!(date.to_parts(), (month, day, year));
        }
    }

    /// Invariant: leap year rule and the leap-year-in-range shortcut agree with a scan.
    #[test]
    fn leap_year_in_range_matches_scan(min in 1_u32..=10_000, span in 0_u32..=20) {
        let max = min + span;
        let expected = (min..=max).any(|y| is_leap_year(y) == Ok(true));
        let found = has_leap_year_in_range(Year::new(min).unwrap(), Year::new(max).unwrap());
        prop_assert_eq!(found, expected);
    }

    /// Invariant: generated dates lie in the range, and every draw returns exactly n dates.
    #[test]
    fn generated_dates_stay_in_range(range in range_strategy(), seed in any::<u64>(), n in 0_usize..64) {
        let mut generator = DateGenerator::from_seed(seed);
        generator.set_range(range);
        let dates = generator.generate_random_dates(n);
        prop_assert_eq!(dates.len(), n);
        for date in dates {
            prop_assert!(range.contains(&date), "{} outside {:?}", date, range);
            prop_assert!(date.day() <= date.days_in_month());
        }
    }

    /// Invariant: a rejected change leaves all six bounds untouched.
    #[test]
    fn rejected_setters_change_nothing(
        range in range_strategy(),
        day in 0_u8..=40,
        month in 0_u8..=14,
        year in 0_u32..=4000,
        which in 0_usize..6,
    ) {
        let mut generator = DateGenerator::from_seed(0);
        generator.set_range(range);
        let result = match which {
            0 => generator.set_min_day(day),
            1 => generator.set_max_day(day),
            2 => generator.set_min_month(month),
            3 => generator.set_max_month(month),
            4 => generator.set_min_year(year),
            _ => generator.set_max_year(year),
        };
        if result.is_err() {
            prop_assert_eq!(generator.range(), range);
        }
    }
}
