use anyhow::Result;
use regex::Regex;
use std::sync::LazyLock;

use crate::reminder::{ChannelSpec, NotificationApi, NotificationContent};

pub const REMINDER_CHANNEL_ID: &str = "daily-prayer-reminder";
const REMINDER_CHANNEL_NAME: &str = "Daily Prayer Reminder";
const REMINDER_TITLE: &str = "Time to pray";
const REMINDER_BODY: &str = "Open Praying Daily to see today's prayers.";
const DEFAULT_SOUND: &str = "default";

/// Strict wall-clock parse: hour 0-23, minute 00-59. Deliberately tighter
/// than the preference store's shape check, so a stored "99:99" can never
/// reach the platform.
static STRICT_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]?\d|2[0-3]):([0-5]\d)$").unwrap());

pub fn parse_reminder_time(time: &str) -> Option<(u32, u32)> {
    let caps = STRICT_TIME.captures(time)?;
    let hour = caps[1].parse().ok()?;
    let minute = caps[2].parse().ok()?;
    Some((hour, minute))
}

/// True when notifications are already allowed or the platform grants them on
/// request. Provisional authorization is treated as granted.
pub async fn request_reminder_permissions(api: &dyn NotificationApi) -> Result<bool> {
    let existing = api.get_permissions().await?;
    if existing.allows_notifications() {
        return Ok(true);
    }
    let requested = api.request_permissions().await?;
    Ok(requested.allows_notifications())
}

pub async fn cancel_scheduled_reminders(api: &dyn NotificationApi) -> Result<()> {
    api.cancel_all().await
}

/// Replace the daily reminder with one repeating trigger at the given time.
///
/// Returns `Ok(false)` without side effects on an unparsable time, and
/// `Ok(false)` after the permission flow when notifications are denied.
/// Unexpected platform rejections propagate as errors.
pub async fn schedule_daily_reminder(api: &dyn NotificationApi, time: &str) -> Result<bool> {
    let Some((hour, minute)) = parse_reminder_time(time) else {
        return Ok(false);
    };

    if !request_reminder_permissions(api).await? {
        return Ok(false);
    }

    api.set_channel(&ChannelSpec {
        id: REMINDER_CHANNEL_ID.to_string(),
        name: REMINDER_CHANNEL_NAME.to_string(),
        sound: DEFAULT_SOUND.to_string(),
    })
    .await?;

    // At most one logical reminder exists: clear then set.
    cancel_scheduled_reminders(api).await?;

    api.schedule_repeating(
        hour,
        minute,
        &NotificationContent {
            title: REMINDER_TITLE.to_string(),
            body: REMINDER_BODY.to_string(),
            sound: DEFAULT_SOUND.to_string(),
        },
    )
    .await?;

    Ok(true)
}
