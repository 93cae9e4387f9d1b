use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::reminder::{ChannelSpec, NotificationApi, NotificationContent, PermissionStatus};

/// The active repeating trigger as recorded on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTrigger {
    pub hour: u32,
    pub minute: u32,
    pub title: String,
    pub body: String,
    pub sound: String,
}

/// Desktop stand-in for the platform notification capability.
///
/// A terminal host has no notification daemon contract to program against, so
/// the active trigger is spooled to one JSON file under the data dir, where
/// `remind status` can report it. Permissions are always granted.
pub struct FileBackedNotifier {
    path: PathBuf,
}

impl FileBackedNotifier {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The currently registered trigger, if any.
    pub async fn active_trigger(&self) -> Option<ScheduledTrigger> {
        let content = tokio::fs::read_to_string(&self.path).await.ok()?;
        serde_json::from_str(&content).ok()
    }
}

#[async_trait]
impl NotificationApi for FileBackedNotifier {
    async fn get_permissions(&self) -> Result<PermissionStatus> {
        Ok(PermissionStatus::Granted)
    }

    async fn request_permissions(&self) -> Result<PermissionStatus> {
        Ok(PermissionStatus::Granted)
    }

    async fn set_channel(&self, _channel: &ChannelSpec) -> Result<()> {
        Ok(())
    }

    async fn cancel_all(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| format!("Removing {:?}", self.path)),
        }
    }

    async fn schedule_repeating(
        &self,
        hour: u32,
        minute: u32,
        content: &NotificationContent,
    ) -> Result<()> {
        let trigger = ScheduledTrigger {
            hour,
            minute,
            title: content.title.clone(),
            body: content.body.clone(),
            sound: content.sound.clone(),
        };
        let text = serde_json::to_string(&trigger).context("Serializing trigger")?;
        tokio::fs::write(&self.path, text)
            .await
            .with_context(|| format!("Writing {:?}", self.path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reminder::schedule_daily_reminder;

    #[tokio::test]
    async fn schedule_records_a_trigger_and_cancel_clears_it() {
        let dir = tempfile::tempdir().unwrap();
        let notifier = FileBackedNotifier::new(dir.path().join("scheduled-reminder.json"));

        assert!(notifier.active_trigger().await.is_none());
        assert!(schedule_daily_reminder(&notifier, "07:05").await.unwrap());

        let trigger = notifier.active_trigger().await.unwrap();
        assert_eq!((trigger.hour, trigger.minute), (7, 5));
        assert_eq!(trigger.title, "Time to pray");

        notifier.cancel_all().await.unwrap();
        assert!(notifier.active_trigger().await.is_none());
        // cancelling twice is fine
        notifier.cancel_all().await.unwrap();
    }

    #[tokio::test]
    async fn rescheduling_replaces_the_previous_trigger() {
        let dir = tempfile::tempdir().unwrap();
        let notifier = FileBackedNotifier::new(dir.path().join("scheduled-reminder.json"));

        assert!(schedule_daily_reminder(&notifier, "07:05").await.unwrap());
        assert!(schedule_daily_reminder(&notifier, "21:30").await.unwrap());

        let trigger = notifier.active_trigger().await.unwrap();
        assert_eq!((trigger.hour, trigger.minute), (21, 30));
    }
}
