pub mod common;
pub mod config;
pub mod cycle;
pub mod result;
pub mod year_view;

use std::fmt;

pub use common::{ColorMode, Guidance, StatusBadge, StatusLevel};
pub use config::{ConfigInitViewModel, ConfigPathViewModel, ConfigViewModel};
pub use cycle::{CycleStepViewModel, CycleViewModel};
pub use result::CommandResultViewModel;
pub use year_view::{DayViewModel, RemainingViewModel, WindowViewModel, YearViewViewModel};

/// Bridge from a ViewModel (data) to its text View (layout + styling).
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ColorMode) -> Box<dyn fmt::Display + 'a>;
}
