use chrono::{Datelike, Month, NaiveDate};
use serde::Serialize;
use std::fmt;
use yeardots_types::Granularity;

use crate::calendar::week_of_month;
use crate::window::Window;

/// Title of the current view.
///
/// Kept as raw calendar fields so JSON consumers get numbers; `Display`
/// produces the human-readable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Heading {
    /// `2024`
    Year { year: i32 },
    /// `March 2024`
    Month { month: u32, year: i32 },
    /// `Week-1 Mar 2024`
    Week { week: u32, month: u32, year: i32 },
    /// `1 March 2024`
    Day { day: u32, month: u32, year: i32 },
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Heading::Year { year } => write!(f, "{}", year),
            Heading::Month { month, year } => write!(f, "{} {}", month_name(month), year),
            Heading::Week { week, month, year } => {
                write!(f, "Week-{} {} {}", week, month_abbrev(month), year)
            }
            Heading::Day { day, month, year } => {
                write!(f, "{} {} {}", day, month_name(month), year)
            }
        }
    }
}

/// Time left in the active window, counted in whole calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Remaining {
    /// Days from the reference date to the last day of the window.
    pub count: i64,
    /// Days from the first to the last day of the window (end minus start).
    pub total: i64,
    /// `count / total * 100`, one decimal place, within [0.0, 100.0].
    pub percentage: f64,
}

pub fn compute_heading(granularity: Granularity, reference: NaiveDate) -> Heading {
    let year = reference.year();
    let month = reference.month();

    match granularity {
        Granularity::Year => Heading::Year { year },
        Granularity::Month => Heading::Month { month, year },
        Granularity::Week => Heading::Week {
            week: week_of_month(reference),
            month,
            year,
        },
        Granularity::Day => Heading::Day {
            day: reference.day(),
            month,
            year,
        },
    }
}

pub fn compute_remaining(granularity: Granularity, reference: NaiveDate) -> Remaining {
    let window = Window::containing(granularity, reference);
    let count = window.days_until_end(reference);
    let total = window.span_days();

    Remaining {
        count,
        total,
        percentage: remaining_percentage(count, total),
    }
}

/// Zero-length windows report 0.0 instead of dividing by zero.
fn remaining_percentage(count: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }

    let raw = count as f64 / total as f64 * 100.0;
    round_to_tenth(raw).clamp(0.0, 100.0)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("")
}

pub fn month_abbrev(month: u32) -> &'static str {
    let name = month_name(month);
    name.get(..3).unwrap_or(name)
}
