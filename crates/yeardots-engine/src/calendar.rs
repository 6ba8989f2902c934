use chrono::{Datelike, Months, NaiveDate};

/// Every calendar day of `reference`'s year, Jan 1 through Dec 31, ascending.
///
/// Built by stepping one day at a time so leap years fall out of the date
/// arithmetic rather than a month-length table.
pub fn generate_year_sequence(reference: NaiveDate) -> Vec<NaiveDate> {
    let year = reference.year();
    let start = start_of_year(reference);

    start
        .iter_days()
        .take_while(|day| day.year() == year)
        .collect()
}

pub fn start_of_year(date: NaiveDate) -> NaiveDate {
    date.with_ordinal(1).unwrap_or(date)
}

pub fn end_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date)
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// 1-based week-of-month bucket: `ceil(day / 7)`.
///
/// Buckets restart every month: days 1-7 are week 1, 8-14 week 2, and so on,
/// with week 5 holding whatever is left after day 28. This is not ISO 8601.
pub fn week_of_month(date: NaiveDate) -> u32 {
    date.day().div_ceil(7)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_leap_year_has_366_days() {
        let days = generate_year_sequence(date(2024, 7, 4));
        assert_eq!(days.len(), 366);
        assert_eq!(days.first(), Some(&date(2024, 1, 1)));
        assert_eq!(days.last(), Some(&date(2024, 12, 31)));
        assert!(days.contains(&date(2024, 2, 29)));
    }

    #[test]
    fn test_common_year_has_365_days() {
        let days = generate_year_sequence(date(2023, 2, 15));
        assert_eq!(days.len(), 365);
        assert!(!days.iter().any(|d| d.month() == 2 && d.day() == 29));
        assert_eq!(days.last(), Some(&date(2023, 12, 31)));
    }

    #[test]
    fn test_century_rules() {
        assert_eq!(generate_year_sequence(date(1900, 6, 1)).len(), 365);
        assert_eq!(generate_year_sequence(date(2000, 6, 1)).len(), 366);
        assert_eq!(generate_year_sequence(date(2100, 6, 1)).len(), 365);
    }

    #[test]
    fn test_sequence_is_strictly_ascending_without_gaps() {
        let days = generate_year_sequence(date(2024, 1, 1));
        for pair in days.windows(2) {
            assert_eq!(pair[0].succ_opt(), Some(pair[1]));
        }
    }

    #[test]
    fn test_sequence_only_depends_on_year() {
        assert_eq!(
            generate_year_sequence(date(2025, 1, 1)),
            generate_year_sequence(date(2025, 12, 31))
        );
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(start_of_month(date(2024, 2, 17)), date(2024, 2, 1));
        assert_eq!(end_of_month(date(2024, 2, 17)), date(2024, 2, 29));
        assert_eq!(end_of_month(date(2023, 2, 17)), date(2023, 2, 28));
        assert_eq!(end_of_month(date(2024, 12, 5)), date(2024, 12, 31));
    }

    #[test]
    fn test_year_bounds() {
        assert_eq!(start_of_year(date(2024, 9, 9)), date(2024, 1, 1));
        assert_eq!(end_of_year(date(2024, 9, 9)), date(2024, 12, 31));
    }

    #[test]
    fn test_week_of_month_buckets() {
        assert_eq!(week_of_month(date(2024, 3, 1)), 1);
        assert_eq!(week_of_month(date(2024, 3, 7)), 1);
        assert_eq!(week_of_month(date(2024, 3, 8)), 2);
        assert_eq!(week_of_month(date(2024, 3, 28)), 4);
        assert_eq!(week_of_month(date(2024, 3, 29)), 5);
        assert_eq!(week_of_month(date(2024, 3, 31)), 5);
    }
}
