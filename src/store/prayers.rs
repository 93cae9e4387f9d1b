use std::path::PathBuf;
use std::sync::Arc;

use crate::models::StoredPrayer;
use crate::store::{CachedDocument, DocumentIo, DocumentSchema, FsDocument, ReadError};

pub struct PrayerListSchema;

impl DocumentSchema for PrayerListSchema {
    type Value = Vec<StoredPrayer>;

    const NAME: &'static str = "prayer list";

    fn default_value() -> Vec<StoredPrayer> {
        Vec::new()
    }

    /// Elements are validated independently; a malformed entry drops that
    /// entry, not the whole document.
    fn decode(text: &str) -> Result<Vec<StoredPrayer>, ReadError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        let serde_json::Value::Array(items) = value else {
            return Err(ReadError::Schema("prayer document is not an array"));
        };
        Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect())
    }

    fn encode(value: &Vec<StoredPrayer>) -> serde_json::Result<String> {
        serde_json::to_string(value)
    }
}

/// Async cache over the ordered prayer list in `prayers.json`.
pub struct PrayerStore {
    doc: CachedDocument<PrayerListSchema>,
}

impl PrayerStore {
    pub fn new(io: Arc<dyn DocumentIo>) -> Self {
        Self { doc: CachedDocument::new(io) }
    }

    pub fn open(path: PathBuf) -> Self {
        Self::new(Arc::new(FsDocument::new(path)))
    }

    pub fn get_sync(&self) -> Vec<StoredPrayer> {
        self.doc.get_sync()
    }

    pub async fn hydrate(&self) -> Vec<StoredPrayer> {
        self.doc.hydrate().await
    }

    /// Replace the whole list. No validation on write.
    pub async fn save_all(&self, prayers: Vec<StoredPrayer>) {
        self.doc.save(prayers).await;
    }

    /// Insert at the front, replacing any existing record with the same id.
    pub async fn upsert(&self, prayer: StoredPrayer) {
        let existing = self.hydrate().await;
        let mut next = Vec::with_capacity(existing.len() + 1);
        next.push(prayer.clone());
        next.extend(existing.into_iter().filter(|p| p.id != prayer.id));
        self.save_all(next).await;
    }

    /// Delete by id. Returns whether a record was removed.
    pub async fn remove(&self, id: &str) -> bool {
        let existing = self.hydrate().await;
        let before = existing.len();
        let next: Vec<StoredPrayer> = existing.into_iter().filter(|p| p.id != id).collect();
        let removed = next.len() != before;
        if removed {
            self.save_all(next).await;
        }
        removed
    }

    /// Completion toggle. Returns whether the id was found.
    pub async fn set_completed(&self, id: &str, completed: bool) -> bool {
        let mut prayers = self.hydrate().await;
        let mut found = false;
        for prayer in &mut prayers {
            if prayer.id == id {
                prayer.completed = completed;
                found = true;
            }
        }
        if found {
            self.save_all(prayers).await;
        }
        found
    }
}
