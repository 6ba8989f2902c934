//! Status Bar View Component
//!
//! Renders the bottom bar: caption, remaining readout, focused day, and keys.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::formatters::{format_caption, format_day_detail, format_remaining};
use crate::presentation::view_models::YearViewViewModel;

pub struct StatusBarView<'a> {
    model: &'a YearViewViewModel,
    cursor: Option<usize>,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a YearViewViewModel, cursor: Option<usize>) -> Self {
        Self { model, cursor }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(inner);

        let caption = format_caption(self.model.granularity, self.model.now, self.model.reference);
        let mut spans = vec![
            Span::raw(caption),
            Span::raw(" | "),
            Span::styled(
                format_remaining(&self.model.remaining),
                Style::default().fg(Color::Cyan),
            ),
        ];

        if let Some(day) = self.cursor.and_then(|i| self.model.days.get(i)) {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format_day_detail(day.date, day.is_past, day.is_today),
                Style::default().fg(Color::DarkGray),
            ));
        }

        Paragraph::new(Line::from(spans)).render(chunks[0], buf);

        let key = Style::default().fg(Color::Yellow);
        let help_line = Line::from(vec![
            Span::styled("[enter]", key),
            Span::raw("drill "),
            Span::styled("[r]", key),
            Span::raw("eadout "),
            Span::styled("[t]", key),
            Span::raw("oday "),
            Span::styled("[q]", key),
            Span::raw("uit"),
        ]);
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}
