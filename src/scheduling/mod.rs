pub mod rule;

pub use rule::{parse_prayer_time, schedule_notifications};
