use yeardots_engine::{Remaining, ViewSnapshot};
use yeardots_types::RemainingMode;

use crate::config::DisplayConfig;
use crate::presentation::view_models::{
    DayViewModel, RemainingViewModel, WindowViewModel, YearViewViewModel,
};

/// `max_columns` caps the configured row width, e.g. to fit the terminal.
pub fn present_year_view(
    snapshot: &ViewSnapshot,
    display: &DisplayConfig,
    max_columns: Option<usize>,
) -> YearViewViewModel {
    let configured = display.columns_for(snapshot.granularity);
    let columns = max_columns
        .map(|max| configured.min(max))
        .unwrap_or(configured)
        .max(1);

    YearViewViewModel {
        now: snapshot.now,
        granularity: snapshot.granularity,
        reference: snapshot.reference,
        heading: snapshot.heading,
        window: WindowViewModel {
            start: snapshot.window.start,
            end: snapshot.window.end,
        },
        remaining: present_remaining(&snapshot.remaining, snapshot.remaining_mode),
        columns,
        days: snapshot
            .cells
            .iter()
            .map(|cell| DayViewModel {
                date: cell.date,
                is_past: cell.is_past,
                is_today: cell.is_today,
            })
            .collect(),
    }
}

pub fn present_remaining(remaining: &Remaining, mode: RemainingMode) -> RemainingViewModel {
    RemainingViewModel {
        mode,
        days_left: remaining.count,
        window_days: remaining.total,
        percentage_left: remaining.percentage,
    }
}
