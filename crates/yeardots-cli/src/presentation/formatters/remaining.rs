use yeardots_types::RemainingMode;

use crate::presentation::view_models::RemainingViewModel;

/// `305 Days left` or `83.6% left`.
pub fn format_remaining(remaining: &RemainingViewModel) -> String {
    match remaining.mode {
        RemainingMode::Days => format!("{} Days left", remaining.days_left),
        RemainingMode::Percentage => format!("{:.1}% left", remaining.percentage_left),
    }
}
