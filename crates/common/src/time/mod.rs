//! Time utilities
//!
//! - **[`clock`]**: real and mock wall clocks
//! - **[`format`]**: Indonesian date, time and duration strings

pub mod clock;
pub mod format;

pub use clock::{Clock, MockClock, SystemClock};
pub use format::{
    day_name_id, format_duration_id, format_long_date, format_table_date, format_time_hm,
    month_name_id,
};
