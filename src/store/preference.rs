use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, LazyLock};

use crate::store::{CachedDocument, DocumentIo, DocumentSchema, FsDocument, ReadError};

pub const REMINDER_DEFAULT_TIME: &str = "07:00";

/// Shape-only gate for stored times: two digits, a colon, two digits. Range
/// checking is left to the scheduler's stricter parse.
static LOOSE_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}$").unwrap());

fn is_valid_time(value: &str) -> bool {
    LOOSE_TIME.is_match(value)
}

/// Singleton reminder preference persisted as `reminder-time.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderPreference {
    pub time: String,
    #[serde(default)]
    pub enabled: bool,
}

impl Default for ReminderPreference {
    fn default() -> Self {
        Self { time: REMINDER_DEFAULT_TIME.to_string(), enabled: false }
    }
}

pub struct PreferenceSchema;

impl DocumentSchema for PreferenceSchema {
    type Value = ReminderPreference;

    const NAME: &'static str = "reminder preference";

    fn default_value() -> ReminderPreference {
        ReminderPreference::default()
    }

    fn decode(text: &str) -> Result<ReminderPreference, ReadError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        // Legacy documents held a bare time string with no enabled flag.
        let preference = match value {
            serde_json::Value::String(time) => ReminderPreference { time, enabled: false },
            other => serde_json::from_value(other)?,
        };
        if !is_valid_time(&preference.time) {
            return Err(ReadError::Schema("time is not an HH:MM string"));
        }
        Ok(preference)
    }

    fn encode(value: &ReminderPreference) -> serde_json::Result<String> {
        serde_json::to_string(value)
    }
}

/// Async cache over the reminder preference document.
pub struct PreferenceStore {
    doc: CachedDocument<PreferenceSchema>,
}

impl PreferenceStore {
    pub fn new(io: Arc<dyn DocumentIo>) -> Self {
        Self { doc: CachedDocument::new(io) }
    }

    pub fn open(path: PathBuf) -> Self {
        Self::new(Arc::new(FsDocument::new(path)))
    }

    pub fn get_reminder_time_sync(&self) -> String {
        self.doc.get_sync().time
    }

    pub fn get_reminder_enabled_sync(&self) -> bool {
        self.doc.get_sync().enabled
    }

    pub async fn hydrate(&self) -> ReminderPreference {
        self.doc.hydrate().await
    }

    /// Update the stored time. Values not matching the two-digit:two-digit
    /// shape are a silent no-op.
    pub async fn set_reminder_time(&self, value: &str) {
        if !is_valid_time(value) {
            return;
        }
        let mut preference = self.doc.get_sync();
        preference.time = value.to_string();
        self.doc.save(preference).await;
    }

    pub async fn set_reminder_enabled(&self, enabled: bool) {
        let mut preference = self.doc.get_sync();
        preference.enabled = enabled;
        self.doc.save(preference).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::MemoryDocument;

    #[tokio::test]
    async fn defaults_before_hydration() {
        let store = PreferenceStore::new(Arc::new(MemoryDocument::empty()));
        assert_eq!(store.get_reminder_time_sync(), "07:00");
        assert!(!store.get_reminder_enabled_sync());
    }

    #[tokio::test]
    async fn set_time_accepts_the_loose_shape() {
        let store = PreferenceStore::new(Arc::new(MemoryDocument::empty()));
        store.set_reminder_time("23:59").await;
        assert_eq!(store.get_reminder_time_sync(), "23:59");
        // shape-valid but out of range is still accepted here
        store.set_reminder_time("99:99").await;
        assert_eq!(store.get_reminder_time_sync(), "99:99");
    }

    #[tokio::test]
    async fn malformed_time_is_a_silent_no_op() {
        let store = PreferenceStore::new(Arc::new(MemoryDocument::empty()));
        store.set_reminder_time("08:30").await;
        store.set_reminder_time("9:5").await;
        store.set_reminder_time("eight").await;
        store.set_reminder_time("").await;
        assert_eq!(store.get_reminder_time_sync(), "08:30");
    }

    #[tokio::test]
    async fn set_time_preserves_the_enabled_flag() {
        let io = Arc::new(MemoryDocument::empty());
        let store = PreferenceStore::new(io.clone());
        store.set_reminder_enabled(true).await;
        store.set_reminder_time("06:15").await;
        assert!(store.get_reminder_enabled_sync());
        assert_eq!(store.get_reminder_time_sync(), "06:15");
    }

    #[tokio::test]
    async fn persistence_round_trip_survives_a_fresh_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reminder-time.json");

        let store = PreferenceStore::open(path.clone());
        store.set_reminder_enabled(true).await;
        store.set_reminder_time("08:30").await;

        // fresh store over the same file, as after a process restart
        let restarted = PreferenceStore::open(path);
        let preference = restarted.hydrate().await;
        assert_eq!(preference, ReminderPreference { time: "08:30".to_string(), enabled: true });
    }

    #[tokio::test]
    async fn legacy_bare_string_reads_as_time_only() {
        let io = Arc::new(MemoryDocument::with_content("\"08:15\""));
        let store = PreferenceStore::new(io);
        let preference = store.hydrate().await;
        assert_eq!(preference.time, "08:15");
        assert!(!preference.enabled);
    }

    #[tokio::test]
    async fn invalid_stored_time_falls_back_to_default() {
        let io = Arc::new(MemoryDocument::with_content(
            "{\"time\":\"soon\",\"enabled\":true}",
        ));
        let store = PreferenceStore::new(io);
        assert_eq!(store.hydrate().await, ReminderPreference::default());
    }

    #[tokio::test]
    async fn missing_enabled_field_defaults_to_false() {
        let io = Arc::new(MemoryDocument::with_content("{\"time\":\"12:00\"}"));
        let store = PreferenceStore::new(io);
        let preference = store.hydrate().await;
        assert_eq!(preference.time, "12:00");
        assert!(!preference.enabled);
    }
}
