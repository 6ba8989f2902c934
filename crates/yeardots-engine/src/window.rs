use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use yeardots_types::Granularity;

use crate::calendar::{end_of_month, end_of_year, start_of_month, start_of_year, week_of_month};

/// Inclusive calendar bounds of a granularity window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Window {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Window {
    /// The window of size `granularity` that contains `reference`.
    pub fn containing(granularity: Granularity, reference: NaiveDate) -> Self {
        match granularity {
            Granularity::Year => Self {
                start: start_of_year(reference),
                end: end_of_year(reference),
            },
            Granularity::Month => Self {
                start: start_of_month(reference),
                end: end_of_month(reference),
            },
            Granularity::Week => {
                let month_end = end_of_month(reference);
                let week = week_of_month(reference);
                let first_day = (week - 1) * 7 + 1;
                let last_day = (week * 7).min(month_end.day());

                Self {
                    start: reference.with_day(first_day).unwrap_or(reference),
                    end: reference.with_day(last_day).unwrap_or(month_end),
                }
            }
            Granularity::Day => Self {
                start: reference,
                end: reference,
            },
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whole days from start to end. A single-day window spans zero days.
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Whole days from `date` to the end of the window, never negative.
    pub fn days_until_end(&self, date: NaiveDate) -> i64 {
        (self.end - date).num_days().max(0)
    }
}
