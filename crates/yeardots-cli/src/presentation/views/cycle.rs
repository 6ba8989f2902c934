use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::format_remaining;
use crate::presentation::view_models::{ColorMode, CycleViewModel};

pub struct CycleView<'a> {
    data: &'a CycleViewModel,
    mode: ColorMode,
}

impl<'a> CycleView<'a> {
    pub fn new(data: &'a CycleViewModel, mode: ColorMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for CycleView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let header = format!(
            "{:<5} {:<12} {:<17} REMAINING",
            "STEP", "GRANULARITY", "HEADING"
        );
        match self.mode {
            ColorMode::Plain => writeln!(f, "{}", header)?,
            ColorMode::Ansi => writeln!(f, "{}", header.bold())?,
        }

        for row in &self.data.steps {
            writeln!(
                f,
                "{:<5} {:<12} {:<17} {}",
                row.step,
                row.granularity,
                row.heading.to_string(),
                format_remaining(&row.remaining)
            )?;
        }

        Ok(())
    }
}
