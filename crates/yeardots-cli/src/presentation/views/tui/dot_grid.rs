use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};
use yeardots_types::Granularity;

use crate::presentation::view_models::{DayViewModel, YearViewViewModel};
use crate::presentation::views::DOT;

/// Horizontal distance between dots. Detail views spread their dots out.
pub fn cell_width(granularity: Granularity) -> u16 {
    match granularity {
        Granularity::Year => 2,
        Granularity::Month | Granularity::Week | Granularity::Day => 4,
    }
}

fn row_height(granularity: Granularity) -> u16 {
    match granularity {
        Granularity::Year => 1,
        Granularity::Month | Granularity::Week | Granularity::Day => 2,
    }
}

/// How many dots fit on one row of `width` cells.
pub fn fit_columns(width: u16, granularity: Granularity) -> usize {
    if width == 0 {
        return 1;
    }
    usize::from((width - 1) / cell_width(granularity) + 1)
}

fn day_style(day: &DayViewModel) -> Style {
    if day.is_today {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else if day.is_past {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    }
}

pub struct DotGridView<'a> {
    model: &'a YearViewViewModel,
    cursor: Option<usize>,
}

impl<'a> DotGridView<'a> {
    pub fn new(model: &'a YearViewViewModel, cursor: Option<usize>) -> Self {
        Self { model, cursor }
    }
}

impl<'a> Widget for DotGridView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = self.model.columns.max(1);
        let dx = cell_width(self.model.granularity);
        let dy = row_height(self.model.granularity);

        for (index, day) in self.model.days.iter().enumerate() {
            let (Ok(col), Ok(row)) = (u16::try_from(index % columns), u16::try_from(index / columns))
            else {
                break;
            };

            let x = area.x.saturating_add(col.saturating_mul(dx));
            let y = area.y.saturating_add(row.saturating_mul(dy));
            if x >= area.right() || y >= area.bottom() {
                continue;
            }

            let mut style = day_style(day);
            if self.cursor == Some(index) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            buf.set_string(x, y, DOT, style);
        }
    }
}
