pub mod location;
pub mod notification;
pub mod prayer;

pub use location::{LocationQuery, LocationRequest, Position};
pub use notification::{ChannelSpec, Importance, ScheduledNotification, PRAYER_CHANNEL_ID};
pub use prayer::{PrayerTimeSet, PrayerType};
