pub mod date;
pub mod remaining;

pub use date::{format_caption, format_day_detail, format_medium_date, format_month_year};
pub use remaining::format_remaining;
