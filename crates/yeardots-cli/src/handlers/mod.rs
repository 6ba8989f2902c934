pub mod config;
pub mod cycle;
pub mod show;
pub mod tui;
