pub mod desktop;
pub mod geoip;
pub mod permissions;

use anyhow::Result;

use crate::models::{ChannelSpec, LocationRequest, Position, ScheduledNotification};

pub use desktop::DesktopNotifier;
pub use geoip::GeoIpProvider;
pub use permissions::{request_startup_permissions, GrantAllPermissions};

/// The notification service as the scheduling rule sees it.
pub trait NotificationScheduler {
    /// Register a channel. Returns true if it was created, false if it
    /// already existed. The already-exists case is not an error.
    fn create_channel(&mut self, spec: &ChannelSpec) -> Result<bool>;

    /// Submit one notification for delivery at its fire time.
    fn schedule(&mut self, notification: ScheduledNotification) -> Result<()>;
}

pub trait LocationProvider {
    fn current_position(&mut self, request: &LocationRequest) -> Result<Position>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    FineLocation,
    ExactAlarm,
    ModifyAudioSettings,
}

impl Permission {
    pub fn describe(&self) -> &'static str {
        match self {
            Permission::FineLocation => "fine location",
            Permission::ExactAlarm => "exact-alarm scheduling",
            Permission::ModifyAudioSettings => "audio-settings modification",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

pub trait PermissionProvider {
    fn request(&self, permission: Permission) -> PermissionStatus;
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::HashSet;

    /// Records submissions instead of talking to a notification service.
    #[derive(Debug, Default)]
    pub struct MemoryScheduler {
        pub channels: HashSet<String>,
        pub scheduled: Vec<ScheduledNotification>,
    }

    impl NotificationScheduler for MemoryScheduler {
        fn create_channel(&mut self, spec: &ChannelSpec) -> Result<bool> {
            Ok(self.channels.insert(spec.id.to_string()))
        }

        fn schedule(&mut self, notification: ScheduledNotification) -> Result<()> {
            self.scheduled.push(notification);
            Ok(())
        }
    }

    pub struct FixedPosition(pub Position);

    impl LocationProvider for FixedPosition {
        fn current_position(&mut self, _request: &LocationRequest) -> Result<Position> {
            Ok(self.0)
        }
    }

    pub struct DenyAllPermissions;

    impl PermissionProvider for DenyAllPermissions {
        fn request(&self, _permission: Permission) -> PermissionStatus {
            PermissionStatus::Denied
        }
    }
}
