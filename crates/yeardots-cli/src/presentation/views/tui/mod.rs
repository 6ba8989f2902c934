//! Ratatui widgets for the interactive view.

mod dot_grid;
mod header;
mod status_bar;

pub use dot_grid::{DotGridView, cell_width, fit_columns};
pub use header::HeaderView;
pub use status_bar::StatusBarView;
