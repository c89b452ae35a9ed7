use anyhow::Result;
use chrono::Local;
use log::{debug, error};
use notify_rust::{Notification, Urgency};
use std::collections::HashSet;
use std::thread::JoinHandle;

use super::NotificationScheduler;
use crate::models::{ChannelSpec, ScheduledNotification};

/// Notification scheduler backed by the desktop notification service.
///
/// The desktop has no persistent alarm subsystem, so each submission spawns a
/// delivery thread that sleeps until the fire time and then shows the
/// notification. A fire time already in the past delivers immediately.
/// Deliveries outlive the submitting call but not the process; `--wait` keeps
/// the process alive until they finish.
pub struct DesktopNotifier {
    channels: HashSet<String>,
    pending: Vec<JoinHandle<()>>,
}

impl DesktopNotifier {
    pub fn new() -> Self {
        Self {
            channels: HashSet::new(),
            pending: Vec::new(),
        }
    }

    /// Block until every submitted notification has been delivered.
    pub fn deliver_pending(&mut self) {
        for handle in self.pending.drain(..) {
            if handle.join().is_err() {
                error!("notification delivery thread panicked");
            }
        }
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationScheduler for DesktopNotifier {
    fn create_channel(&mut self, spec: &ChannelSpec) -> Result<bool> {
        let created = self.channels.insert(spec.id.to_string());
        debug!(
            "channel '{}' {}",
            spec.id,
            if created { "created" } else { "already exists" }
        );
        Ok(created)
    }

    fn schedule(&mut self, notification: ScheduledNotification) -> Result<()> {
        // Negative delay (fire time in the past) clamps to zero.
        let delay = (notification.fire_at - Local::now())
            .to_std()
            .unwrap_or_default();

        let handle = std::thread::spawn(move || {
            std::thread::sleep(delay);
            let urgency = if notification.allow_while_idle {
                Urgency::Critical
            } else {
                Urgency::Normal
            };
            let shown = Notification::new()
                .appname("vakit")
                .summary("Namaz Vakitleri")
                .body(&notification.message)
                .urgency(urgency)
                .show();
            if let Err(err) = shown {
                error!(
                    "failed to show notification on '{}': {}",
                    notification.channel_id, err
                );
            }
        });
        self.pending.push(handle);
        Ok(())
    }
}
