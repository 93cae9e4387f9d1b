#![allow(dead_code)]
pub mod notifier;
pub mod scheduler;

pub use notifier::FileBackedNotifier;
pub use scheduler::{
    cancel_scheduled_reminders, request_reminder_permissions, schedule_daily_reminder,
};

use anyhow::Result;
use async_trait::async_trait;

/// Notification permission as reported by the platform. Provisional
/// authorization counts as sufficient for scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Provisional,
    Denied,
    Undetermined,
}

impl PermissionStatus {
    pub fn allows_notifications(self) -> bool {
        matches!(self, PermissionStatus::Granted | PermissionStatus::Provisional)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSpec {
    pub id: String,
    pub name: String,
    pub sound: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
    pub sound: String,
}

/// Platform notification capability. The scheduler drives this; the binary
/// ships a file-backed desktop implementation and tests use a recording mock.
#[async_trait]
pub trait NotificationApi: Send + Sync {
    async fn get_permissions(&self) -> Result<PermissionStatus>;
    async fn request_permissions(&self) -> Result<PermissionStatus>;
    /// Idempotent; platforms without channels treat this as a no-op.
    async fn set_channel(&self, channel: &ChannelSpec) -> Result<()>;
    async fn cancel_all(&self) -> Result<()>;
    /// Register one repeating trigger firing daily at hour/minute.
    async fn schedule_repeating(
        &self,
        hour: u32,
        minute: u32,
        content: &NotificationContent,
    ) -> Result<()>;
}
