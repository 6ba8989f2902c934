use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use yeardots_engine::Heading;
use yeardots_types::{Granularity, RemainingMode};

use super::{ColorMode, CreateView};

#[derive(Debug, Clone, Serialize)]
pub struct YearViewViewModel {
    pub now: NaiveDateTime,
    pub granularity: Granularity,
    pub reference: NaiveDate,
    pub heading: Heading,
    pub window: WindowViewModel,
    pub remaining: RemainingViewModel,
    /// Dots per grid row
    pub columns: usize,
    pub days: Vec<DayViewModel>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct WindowViewModel {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RemainingViewModel {
    pub mode: RemainingMode,
    pub days_left: i64,
    pub window_days: i64,
    pub percentage_left: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayViewModel {
    pub date: NaiveDate,
    pub is_past: bool,
    pub is_today: bool,
}

impl CreateView for YearViewViewModel {
    fn create_view<'a>(&'a self, mode: ColorMode) -> Box<dyn std::fmt::Display + 'a> {
        use crate::presentation::views::YearView;
        Box::new(YearView::new(self, mode))
    }
}
