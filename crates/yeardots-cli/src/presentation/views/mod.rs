pub mod config;
pub mod cycle;
pub mod tui;
pub mod year_view;

pub use config::{ConfigInitView, ConfigPathView, ConfigView};
pub use cycle::CycleView;
pub use year_view::YearView;

use crate::presentation::view_models::DayViewModel;

/// Glyph used for every dot when color carries the classification.
pub const DOT: &str = "●";

/// Glyph for uncolored output, where shape has to carry the classification.
pub fn plain_glyph(day: &DayViewModel) -> &'static str {
    if day.is_today {
        "◉"
    } else if day.is_past {
        "○"
    } else {
        DOT
    }
}
