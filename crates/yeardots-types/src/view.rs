use chrono::NaiveDate;
use serde::Serialize;

use crate::Granularity;

/// The active granularity and the date whose window is on screen.
///
/// A value type: transitions return a new state instead of mutating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub granularity: Granularity,
    pub reference: NaiveDate,
}

impl ViewState {
    /// Fresh session state: the year view anchored at `reference`.
    pub fn new(reference: NaiveDate) -> Self {
        Self {
            granularity: Granularity::Year,
            reference,
        }
    }

    pub fn with_granularity(self, granularity: Granularity) -> Self {
        Self {
            granularity,
            ..self
        }
    }

    pub fn advance(self) -> Self {
        self.with_granularity(self.granularity.advance())
    }
}

/// A single dot in the grid, classified against the clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_past: bool,
    pub is_today: bool,
}
