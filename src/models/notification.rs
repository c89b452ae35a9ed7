use chrono::{DateTime, Local};

pub const PRAYER_CHANNEL_ID: &str = "prayer-times";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Importance {
    Default,
    High,
}

/// An OS-level notification channel: registered once at startup, reused for
/// every prayer alert.
#[derive(Debug, Clone)]
pub struct ChannelSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub importance: Importance,
    pub vibrate: bool,
}

impl ChannelSpec {
    pub fn prayer_times() -> Self {
        Self {
            id: PRAYER_CHANNEL_ID,
            name: "Prayer Times",
            description: "Namaz vakitleri bildirim kanalı",
            importance: Importance::High,
            vibrate: true,
        }
    }
}

/// A request handed to the notification service. Ownership passes to the
/// service on submit; no handle comes back, so nothing can be cancelled or
/// queried afterwards.
#[derive(Debug, Clone)]
pub struct ScheduledNotification {
    pub channel_id: String,
    pub message: String,
    pub fire_at: DateTime<Local>,
    pub allow_while_idle: bool,
}
