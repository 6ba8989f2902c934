use chrono::{NaiveDate, NaiveDateTime};
use yeardots_types::Granularity;

/// `Fri, Mar 1, 2024`
pub fn format_medium_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}

/// `March 2024`
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Footer caption: the full date of `now` under the year view, the month otherwise.
pub fn format_caption(granularity: Granularity, now: NaiveDateTime, reference: NaiveDate) -> String {
    match granularity {
        Granularity::Year => format_medium_date(now.date()),
        Granularity::Month | Granularity::Week | Granularity::Day => format_month_year(reference),
    }
}

/// Detail line for a focused dot: `Fri, Mar 1, 2024 (today)`.
pub fn format_day_detail(date: NaiveDate, is_past: bool, is_today: bool) -> String {
    let status = if is_today {
        "today"
    } else if is_past {
        "past"
    } else {
        "ahead"
    };
    format!("{} ({})", format_medium_date(date), status)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_medium_date() {
        assert_eq!(format_medium_date(date(2024, 3, 1)), "Fri, Mar 1, 2024");
        assert_eq!(format_medium_date(date(2023, 12, 25)), "Mon, Dec 25, 2023");
    }

    #[test]
    fn test_format_month_year() {
        assert_eq!(format_month_year(date(2024, 3, 1)), "March 2024");
    }

    #[test]
    fn test_caption_depends_on_granularity() {
        let now = date(2024, 3, 1).and_hms_opt(10, 0, 0).unwrap();
        let reference = date(2024, 3, 1);
        assert_eq!(
            format_caption(Granularity::Year, now, reference),
            "Fri, Mar 1, 2024"
        );
        assert_eq!(
            format_caption(Granularity::Week, now, reference),
            "March 2024"
        );
    }

    #[test]
    fn test_format_day_detail() {
        assert_eq!(
            format_day_detail(date(2024, 3, 1), false, true),
            "Fri, Mar 1, 2024 (today)"
        );
        assert_eq!(
            format_day_detail(date(2024, 2, 1), true, false),
            "Thu, Feb 1, 2024 (past)"
        );
        assert_eq!(
            format_day_detail(date(2024, 4, 1), false, false),
            "Mon, Apr 1, 2024 (ahead)"
        );
    }
}
