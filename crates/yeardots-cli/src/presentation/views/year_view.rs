use owo_colors::OwoColorize;
use std::fmt;

use super::{DOT, plain_glyph};
use crate::presentation::formatters::{format_caption, format_remaining};
use crate::presentation::view_models::{ColorMode, DayViewModel, YearViewViewModel};

// --------------------------------------------------------
// Dot grid view (heading, grid, footer)
// --------------------------------------------------------

pub struct YearView<'a> {
    data: &'a YearViewViewModel,
    mode: ColorMode,
}

impl<'a> YearView<'a> {
    pub fn new(data: &'a YearViewViewModel, mode: ColorMode) -> Self {
        Self { data, mode }
    }

    fn dot(&self, day: &DayViewModel) -> String {
        match self.mode {
            ColorMode::Plain => plain_glyph(day).to_string(),
            ColorMode::Ansi if day.is_today => DOT.red().bold().to_string(),
            ColorMode::Ansi if day.is_past => DOT.dimmed().to_string(),
            ColorMode::Ansi => DOT.white().to_string(),
        }
    }

    /// Display width of the widest grid row.
    fn grid_width(&self) -> usize {
        let per_row = self.data.columns.min(self.data.days.len());
        (per_row * 2).saturating_sub(1)
    }
}

impl<'a> fmt::Display for YearView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let heading = self.data.heading.to_string();
        match self.mode {
            ColorMode::Plain => writeln!(f, "{}", heading)?,
            ColorMode::Ansi => writeln!(f, "{}", heading.bold())?,
        }
        writeln!(f)?;

        if self.data.days.is_empty() {
            writeln!(f, "(no days in view)")?;
        }

        for row in self.data.days.chunks(self.data.columns.max(1)) {
            let dots: Vec<String> = row.iter().map(|day| self.dot(day)).collect();
            writeln!(f, "{}", dots.join(" "))?;
        }
        writeln!(f)?;

        let caption = format_caption(self.data.granularity, self.data.now, self.data.reference);
        let readout = format_remaining(&self.data.remaining);
        let used = caption.chars().count() + readout.chars().count();
        let padding = self.grid_width().saturating_sub(used).max(2);

        writeln!(f, "{}{}{}", caption, " ".repeat(padding), readout)
    }
}
