// Engine module - the temporal view engine (windows, filtering, metrics)
// This layer sits between the clock (types) and CLI presentation

pub mod calendar;
pub mod classify;
pub mod filter;
pub mod metrics;
pub mod session;
pub mod window;

pub use calendar::{generate_year_sequence, week_of_month};
pub use classify::{classify_day, classify_days, is_past_day, is_today_day};
pub use filter::filter_view;
pub use metrics::{Heading, Remaining, compute_heading, compute_remaining};
pub use session::{ViewSession, ViewSnapshot};
pub use window::Window;

use yeardots_types::Granularity;

// Façade API - Stable public interface for CLI layer

/// Next granularity in the drill-down cycle (Year → Month → Week → Day → Year)
pub fn advance_granularity(current: Granularity) -> Granularity {
    current.advance()
}
