use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, Utc};

use crate::days::{self, DAILY_SENTINEL, WEEKDAYS_SENTINEL};
use crate::models::{StoredPrayer, TopicId};
use crate::reminder::{self, FileBackedNotifier};
use crate::store::{PrayerStore, PreferenceStore};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";

const NOTIFICATIONS_UNAVAILABLE: &str =
    "Notifications are unavailable. Check your system settings.";

// ─── Add / edit ──────────────────────────────────────────────────────────────

pub async fn handle_add(
    prayers: &PrayerStore,
    topic: &str,
    name: Option<String>,
    day_labels: Vec<String>,
    reminder: bool,
    id: Option<String>,
) -> Result<()> {
    let topic = TopicId::from_param(Some(topic));
    let name = match name {
        Some(name) if !name.is_empty() => name,
        _ => format!("{} Prayer", topic.label()),
    };
    let day_labels = normalize_day_labels(day_labels);
    let id = id.unwrap_or_else(|| Utc::now().timestamp_millis().to_string());

    let prayer = StoredPrayer::new(id.clone(), topic, name.clone(), day_labels, reminder);
    prayers.upsert(prayer).await;

    println_colored!(GREEN, "  Your prayer has been added");
    println_colored!(DIM, "  {} — {} (id {})", topic.label(), name, id);
    Ok(())
}

/// Canonicalize the entered day labels the way the selection screen would:
/// "Daily" (or a selection covering the full week) collapses to the Daily
/// sentinel, a lone "Weekdays" stays a sentinel, and anything else becomes
/// the matched catalog letters with unrecognized entries dropped.
fn normalize_day_labels(input: Vec<String>) -> Vec<String> {
    let trimmed: Vec<String> = input
        .into_iter()
        .map(|label| label.trim().to_string())
        .filter(|label| !label.is_empty())
        .collect();
    if trimmed.iter().any(|label| label.eq_ignore_ascii_case(DAILY_SENTINEL)) {
        return vec![DAILY_SENTINEL.to_string()];
    }
    if trimmed.len() == 1 && trimmed[0].eq_ignore_ascii_case(WEEKDAYS_SENTINEL) {
        return vec![WEEKDAYS_SENTINEL.to_string()];
    }
    let ids = days::labels_to_day_ids(&trimmed);
    if days::is_full_week(&ids) {
        return vec![DAILY_SENTINEL.to_string()];
    }
    days::day_ids_to_labels(&ids)
}

// ─── Dashboard view ──────────────────────────────────────────────────────────

pub async fn handle_list(prayers: &PrayerStore, date: Option<String>) -> Result<()> {
    let date = match date {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .with_context(|| format!("Bad date '{}', expected YYYY-MM-DD", raw))?,
        None => Local::now().date_naive(),
    };
    let weekday = days::day_id_from_date(date)
        .map(|id| id.full_name())
        .unwrap_or("");

    // reconcile with disk once, then render from the sync cache
    prayers.hydrate().await;
    let all = prayers.get_sync();
    let shown: Vec<&StoredPrayer> = all.iter().filter(|p| p.shown_on(date)).collect();
    let (completed, active): (Vec<&StoredPrayer>, Vec<&StoredPrayer>) =
        shown.into_iter().partition(|p| p.completed);

    println!();
    println_colored!(BOLD, "  Prayers for {} ({})", weekday, date);
    println!();

    if active.is_empty() && completed.is_empty() {
        println_colored!(DIM, "  Nothing scheduled for this day.");
        println!();
        return Ok(());
    }

    for prayer in &active {
        print_prayer(prayer, false);
    }
    if !completed.is_empty() {
        println!();
        println_colored!(DIM, "  Completed");
        for prayer in &completed {
            print_prayer(prayer, true);
        }
    }
    println!();
    Ok(())
}

fn print_prayer(prayer: &StoredPrayer, completed: bool) {
    let mark = if completed { "✓" } else { " " };
    let meta = if prayer.days.is_empty() {
        String::new()
    } else {
        format!("  [{}]", prayer.days.join(", "))
    };
    let line = format!(
        "  {} {:<24} {}{}  (id {})",
        mark, prayer.name, prayer.topic_label, meta, prayer.id
    );
    if completed {
        println_colored!(DIM, "{}", line);
    } else {
        println!("{}", line);
    }
}

// ─── Completion toggle / delete ──────────────────────────────────────────────

pub async fn handle_set_completed(prayers: &PrayerStore, id: &str, completed: bool) -> Result<()> {
    if prayers.set_completed(id, completed).await {
        let verb = if completed { "completed" } else { "active again" };
        println_colored!(GREEN, "  Prayer {} is {}", id, verb);
    } else {
        println_colored!(RED, "  No prayer with id {}", id);
    }
    Ok(())
}

pub async fn handle_remove(prayers: &PrayerStore, id: &str) -> Result<()> {
    if prayers.remove(id).await {
        println_colored!(GREEN, "  Prayer {} removed", id);
    } else {
        println_colored!(RED, "  No prayer with id {}", id);
    }
    Ok(())
}

// ─── Reminder ────────────────────────────────────────────────────────────────

pub async fn handle_remind_set(
    preferences: &PreferenceStore,
    notifier: &FileBackedNotifier,
    time: &str,
) -> Result<()> {
    preferences.hydrate().await;
    preferences.set_reminder_time(time).await;

    let stored = preferences.get_reminder_time_sync();
    if stored != time {
        println_colored!(RED, "  '{}' is not an HH:MM time; keeping {}", time, stored);
        return Ok(());
    }
    println_colored!(GREEN, "  Reminder time set to {}", stored);

    if preferences.get_reminder_enabled_sync() {
        let scheduled = reminder::schedule_daily_reminder(notifier, &stored).await?;
        if scheduled {
            println_colored!(DIM, "  Daily reminder rescheduled");
        } else {
            println_colored!(AMBER, "  {}", NOTIFICATIONS_UNAVAILABLE);
        }
    }
    Ok(())
}

pub async fn handle_remind_on(
    preferences: &PreferenceStore,
    notifier: &FileBackedNotifier,
) -> Result<()> {
    preferences.hydrate().await;
    preferences.set_reminder_enabled(true).await;

    let time = preferences.get_reminder_time_sync();
    let scheduled = reminder::schedule_daily_reminder(notifier, &time).await?;
    if scheduled {
        println_colored!(GREEN, "  Daily reminder on at {}", time);
    } else {
        println_colored!(AMBER, "  {}", NOTIFICATIONS_UNAVAILABLE);
    }
    Ok(())
}

pub async fn handle_remind_off(
    preferences: &PreferenceStore,
    notifier: &FileBackedNotifier,
) -> Result<()> {
    preferences.hydrate().await;
    preferences.set_reminder_enabled(false).await;
    reminder::cancel_scheduled_reminders(notifier).await?;
    println_colored!(GREEN, "  Daily reminder off");
    Ok(())
}

pub async fn handle_remind_status(
    preferences: &PreferenceStore,
    notifier: &FileBackedNotifier,
) -> Result<()> {
    let preference = preferences.hydrate().await;
    println!();
    println_colored!(BOLD, "  Reminder");
    println!("  time     {}", preference.time);
    println!("  enabled  {}", if preference.enabled { "yes" } else { "no" });
    match notifier.active_trigger().await {
        Some(trigger) => {
            println!("  schedule daily at {:02}:{:02}", trigger.hour, trigger.minute);
        }
        None => println_colored!(DIM, "  schedule none"),
    }
    println!();
    Ok(())
}

// ─── Topic catalog ───────────────────────────────────────────────────────────

pub fn handle_topics() -> Result<()> {
    println!();
    println_colored!(BOLD, "  Topics");
    for topic in TopicId::all() {
        println!("  {:<16} {:<16} {}", topic.as_str(), topic.label(), topic.icon());
    }
    println!();
    Ok(())
}
