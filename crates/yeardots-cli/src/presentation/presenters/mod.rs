pub mod config;
pub mod cycle;
pub mod year_view;

pub use config::{present_config, present_config_init, present_config_path};
pub use cycle::present_cycle;
pub use year_view::{present_remaining, present_year_view};
