use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use yeardots_types::{Clock, DayCell, Granularity, RemainingMode, ViewState};

use crate::calendar::generate_year_sequence;
use crate::classify::classify_days;
use crate::filter::filter_view;
use crate::metrics::{Heading, Remaining, compute_heading, compute_remaining};
use crate::window::Window;

/// Interactive view session.
///
/// The clock is read once in [`ViewSession::start`]; the instant and the
/// year sequence stay fixed for the session's lifetime. Only the view state
/// and the remaining-time readout change, through [`advance`](Self::advance)
/// and [`toggle_remaining`](Self::toggle_remaining).
#[derive(Debug, Clone)]
pub struct ViewSession {
    now: NaiveDateTime,
    state: ViewState,
    remaining_mode: RemainingMode,
    year: Vec<NaiveDate>,
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSnapshot {
    pub now: NaiveDateTime,
    pub granularity: Granularity,
    pub reference: NaiveDate,
    pub remaining_mode: RemainingMode,
    pub heading: Heading,
    pub window: Window,
    pub remaining: Remaining,
    pub cells: Vec<DayCell>,
}

impl ViewSession {
    pub fn start(clock: &dyn Clock) -> Self {
        let now = clock.now();
        let reference = now.date();

        Self {
            now,
            state: ViewState::new(reference),
            remaining_mode: RemainingMode::default(),
            year: generate_year_sequence(reference),
        }
    }

    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.state = self.state.with_granularity(granularity);
        self
    }

    pub fn with_remaining_mode(mut self, mode: RemainingMode) -> Self {
        self.remaining_mode = mode;
        self
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    pub fn granularity(&self) -> Granularity {
        self.state.granularity
    }

    pub fn remaining_mode(&self) -> RemainingMode {
        self.remaining_mode
    }

    /// Moves one step along Year → Month → Week → Day → Year.
    pub fn advance(&mut self) -> Granularity {
        self.state = self.state.advance();
        self.state.granularity
    }

    pub fn toggle_remaining(&mut self) -> RemainingMode {
        self.remaining_mode = self.remaining_mode.toggle();
        self.remaining_mode
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        let ViewState {
            granularity,
            reference,
        } = self.state;
        let days = filter_view(&self.year, granularity, reference);

        ViewSnapshot {
            now: self.now,
            granularity,
            reference,
            remaining_mode: self.remaining_mode,
            heading: compute_heading(granularity, reference),
            window: Window::containing(granularity, reference),
            remaining: compute_remaining(granularity, reference),
            cells: classify_days(&days, self.now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yeardots_types::FixedClock;

    fn clock(y: i32, m: u32, d: u32, h: u32) -> FixedClock {
        FixedClock::new(
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(h, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_session_starts_in_year_view() {
        let session = ViewSession::start(&clock(2024, 3, 1, 9));
        assert_eq!(session.granularity(), Granularity::Year);
        assert_eq!(session.remaining_mode(), RemainingMode::Days);
        assert_eq!(session.snapshot().cells.len(), 366);
    }

    #[test]
    fn test_advance_cycles_through_all_granularities() {
        let mut session = ViewSession::start(&clock(2024, 3, 1, 9));
        assert_eq!(session.advance(), Granularity::Month);
        assert_eq!(session.advance(), Granularity::Week);
        assert_eq!(session.advance(), Granularity::Day);
        assert_eq!(session.advance(), Granularity::Year);
    }

    #[test]
    fn test_toggle_does_not_touch_granularity() {
        let mut session = ViewSession::start(&clock(2024, 3, 1, 9));
        session.advance();
        assert_eq!(session.toggle_remaining(), RemainingMode::Percentage);
        assert_eq!(session.granularity(), Granularity::Month);
        assert_eq!(session.toggle_remaining(), RemainingMode::Days);
    }

    #[test]
    fn test_month_snapshot() {
        let session =
            ViewSession::start(&clock(2024, 3, 1, 9)).with_granularity(Granularity::Month);
        let snapshot = session.snapshot();

        assert_eq!(snapshot.heading.to_string(), "March 2024");
        assert_eq!(snapshot.cells.len(), 31);
        assert_eq!(snapshot.remaining.count, 30);
        assert_eq!(snapshot.remaining.percentage, 100.0);
        assert!(snapshot.cells[0].is_today);
        assert_eq!(snapshot.cells.iter().filter(|c| c.is_today).count(), 1);
        assert!(snapshot.cells.iter().all(|c| !c.is_past));
    }

    #[test]
    fn test_year_snapshot_marks_past_days() {
        let session = ViewSession::start(&clock(2024, 1, 10, 12));
        let snapshot = session.snapshot();

        assert_eq!(snapshot.cells.len(), 366);
        assert_eq!(snapshot.cells.iter().filter(|c| c.is_past).count(), 9);
    }

    #[test]
    fn test_snapshot_is_idempotent() {
        let mut session = ViewSession::start(&clock(2024, 7, 4, 18));
        session.advance();
        session.advance();
        assert_eq!(session.snapshot(), session.snapshot());
    }
}
