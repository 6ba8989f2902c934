pub mod clock;
pub mod error;
pub mod granularity;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use granularity::{Granularity, RemainingMode};
pub use view::{DayCell, ViewState};
