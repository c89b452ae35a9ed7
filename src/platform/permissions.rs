use log::{info, warn};

use super::{Permission, PermissionProvider, PermissionStatus};

/// Desktop platforms have no runtime permission model, so every request
/// succeeds and the flow proceeds directly.
pub struct GrantAllPermissions;

impl PermissionProvider for GrantAllPermissions {
    fn request(&self, _permission: Permission) -> PermissionStatus {
        PermissionStatus::Granted
    }
}

/// Request every startup permission unconditionally. Each outcome is logged;
/// a denial never blocks the remaining requests or the fetch flow, and no
/// permission is ever rechecked later.
pub fn request_startup_permissions(provider: &dyn PermissionProvider) {
    let wanted = [
        Permission::FineLocation,
        Permission::ExactAlarm,
        Permission::ModifyAudioSettings,
    ];

    for permission in wanted {
        match provider.request(permission) {
            PermissionStatus::Granted => info!("permission granted: {}", permission.describe()),
            PermissionStatus::Denied => warn!("permission denied: {}", permission.describe()),
        }
    }
}
