//! Interactive renderer for the dot grid.
//!
//! The renderer owns the `ViewSession` and the cursor. Every state change
//! re-runs the engine through `snapshot()`; nothing is cached across frames
//! except the last grid width, which cursor movement needs.

use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    widgets::{Block, Borders},
};
use yeardots_engine::{ViewSession, ViewSnapshot};

use crate::config::DisplayConfig;
use crate::presentation::presenters::present_year_view;
use crate::presentation::views::tui::{DotGridView, HeaderView, StatusBarView, fit_columns};

pub struct TuiRenderer {
    session: ViewSession,
    display: DisplayConfig,
    snapshot: ViewSnapshot,

    /// Index into the visible days
    cursor: usize,

    /// Dots per row at the last draw
    columns: usize,

    should_quit: bool,
}

impl TuiRenderer {
    pub fn new(session: ViewSession, display: DisplayConfig) -> Self {
        let snapshot = session.snapshot();
        let columns = display.columns_for(snapshot.granularity).max(1);
        let mut renderer = Self {
            session,
            display,
            snapshot,
            cursor: 0,
            columns,
            should_quit: false,
        };
        renderer.jump_to_today();
        renderer
    }

    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            // Nothing changes without input, so block on the next event.
            if let Event::Key(key) = event::read()? {
                self.handle_key_event(key);
            }
        }

        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Tab => {
                let next = self.session.advance();
                tracing::debug!(granularity = %next, "advanced granularity");
                self.refresh();
                self.columns = self.display.columns_for(next).max(1);
                self.jump_to_today();
            }
            KeyCode::Char('r') => {
                let mode = self.session.toggle_remaining();
                tracing::debug!(mode = %mode, "toggled remaining readout");
                self.refresh();
            }
            KeyCode::Char('t') => self.jump_to_today(),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-(self.columns as isize)),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(self.columns as isize),
            _ => {}
        }
    }

    fn refresh(&mut self) {
        self.snapshot = self.session.snapshot();
    }

    fn jump_to_today(&mut self) {
        self.cursor = self
            .snapshot
            .cells
            .iter()
            .position(|cell| cell.is_today)
            .unwrap_or(0);
    }

    fn move_cursor(&mut self, delta: isize) {
        let last = self.snapshot.cells.len().saturating_sub(1);
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(f.area());

        let grid_block = Block::default().borders(Borders::ALL);
        let grid_area = grid_block.inner(chunks[1]);

        let max_columns = fit_columns(grid_area.width, self.snapshot.granularity);
        let model = present_year_view(&self.snapshot, &self.display, Some(max_columns));
        self.columns = model.columns;

        f.render_widget(HeaderView::new(&model), chunks[0]);
        f.render_widget(grid_block, chunks[1]);
        f.render_widget(DotGridView::new(&model, Some(self.cursor)), grid_area);
        f.render_widget(StatusBarView::new(&model, Some(self.cursor)), chunks[2]);
    }
}
