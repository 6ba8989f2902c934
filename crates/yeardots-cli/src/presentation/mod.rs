//! # Presentation Layer
//!
//! Everything the user sees. The engine crate computes dates, headings and
//! remaining metrics; this layer turns them into text, JSON, or a TUI frame.
//!
//! ## Data Flow
//!
//! ### Console output (plain/JSON):
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> stdout
//!   (Controller)     (Converter)       (Data)          (Driver)  ==(Text)==> [ View ] --> stdout
//!                                                                              (Layout)
//! ```
//!
//! ### Interactive TUI:
//!
//! ```text
//! [ Handler ] --> [ TuiRenderer ] <-- key events
//!                  owns ViewSession + cursor
//!                        |
//!                        v
//!            [ Presenter ] --> [ ViewModel ] --> [ Widgets ]
//! ```
//!
//! ## Rules
//!
//! 1. **ViewModels hold raw data.** Dates stay dates, percentages stay
//!    numbers. `--format json` serializes them as they are.
//! 2. **Presenters make decisions, Views draw.** Badges, suggestions and the
//!    effective grid width are chosen in presenters; colors and glyphs are
//!    chosen in views.
//! 3. **The engine never sees styling.** A day is `is_past`/`is_today`; what
//!    that looks like is decided here.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer};
