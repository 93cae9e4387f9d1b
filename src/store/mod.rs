pub mod document;
pub mod prayers;
pub mod preference;

pub use document::{DocumentIo, FsDocument};
pub use prayers::PrayerStore;
pub use preference::{PreferenceStore, ReminderPreference};

use log::{debug, warn};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Why a document read produced no usable value. Collapsed to the schema
/// default at the store boundary; callers never see these.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("reading document: {0}")]
    Io(#[from] std::io::Error),
    #[error("parsing document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("document failed validation: {0}")]
    Schema(&'static str),
}

/// Shape of one persisted document: its default, and how it maps to and from
/// the on-disk JSON text.
pub trait DocumentSchema: Send + Sync + 'static {
    type Value: Clone + Send + 'static;

    /// Short name used in log messages.
    const NAME: &'static str;

    fn default_value() -> Self::Value;
    fn decode(text: &str) -> Result<Self::Value, ReadError>;
    fn encode(value: &Self::Value) -> serde_json::Result<String>;
}

struct State<T> {
    value: T,
    hydrated: bool,
}

/// In-memory value mirrored to one on-disk JSON document.
///
/// The cache is the source of truth once hydrated. The disk is read lazily at
/// most once per process lifetime; concurrent `hydrate` calls join the same
/// in-flight read. Read and write failures are logged and degrade to the
/// schema default rather than surfacing to callers.
pub struct CachedDocument<S: DocumentSchema> {
    io: Arc<dyn DocumentIo>,
    state: Mutex<State<S::Value>>,
    // Serializes hydration so at most one disk read is in flight.
    gate: tokio::sync::Mutex<()>,
}

impl<S: DocumentSchema> CachedDocument<S> {
    pub fn new(io: Arc<dyn DocumentIo>) -> Self {
        Self {
            io,
            state: Mutex::new(State { value: S::default_value(), hydrated: false }),
            gate: tokio::sync::Mutex::new(()),
        }
    }

    /// Current cached value, no I/O. The schema default before first
    /// hydration.
    pub fn get_sync(&self) -> S::Value {
        self.state.lock().unwrap().value.clone()
    }

    /// Ensure the document has been read from disk at least once, then return
    /// the cached value.
    pub async fn hydrate(&self) -> S::Value {
        if let Some(value) = self.cached() {
            return value;
        }
        let _guard = self.gate.lock().await;
        // A caller that held the gate first may have finished the read while
        // we waited.
        if let Some(value) = self.cached() {
            return value;
        }
        let value = match self.read_from_disk().await {
            Ok(value) => value,
            Err(err) => {
                warn!("Failed to read {}: {}", S::NAME, err);
                S::default_value()
            }
        };
        let mut state = self.state.lock().unwrap();
        state.value = value.clone();
        state.hydrated = true;
        debug!("Hydrated {}", S::NAME);
        value
    }

    /// Replace the cached value, then mirror it to disk. The cache update
    /// happens before any I/O suspension, so `get_sync` observes the new
    /// value immediately; a failed write leaves the cache ahead of the disk.
    pub async fn save(&self, value: S::Value) {
        {
            let mut state = self.state.lock().unwrap();
            state.value = value.clone();
            state.hydrated = true;
        }
        let text = match S::encode(&value) {
            Ok(text) => text,
            Err(err) => {
                warn!("Failed to serialize {}: {}", S::NAME, err);
                return;
            }
        };
        if let Err(err) = self.io.write_text(&text).await {
            warn!("Failed to persist {}: {}", S::NAME, err);
        }
    }

    fn cached(&self) -> Option<S::Value> {
        let state = self.state.lock().unwrap();
        state.hydrated.then(|| state.value.clone())
    }

    async fn read_from_disk(&self) -> Result<S::Value, ReadError> {
        if !self.io.exists().await? {
            return Ok(S::default_value());
        }
        let text = self.io.read_text().await?;
        S::decode(&text)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::MemoryDocument;
    use super::*;
    use std::time::Duration;

    struct CounterSchema;

    impl DocumentSchema for CounterSchema {
        type Value = u32;

        const NAME: &'static str = "counter";

        fn default_value() -> u32 {
            0
        }

        fn decode(text: &str) -> Result<u32, ReadError> {
            Ok(serde_json::from_str(text)?)
        }

        fn encode(value: &u32) -> serde_json::Result<String> {
            serde_json::to_string(value)
        }
    }

    fn store_over(io: Arc<MemoryDocument>) -> CachedDocument<CounterSchema> {
        CachedDocument::new(io)
    }

    #[tokio::test]
    async fn get_sync_returns_default_before_hydration() {
        let store = store_over(Arc::new(MemoryDocument::with_content("42")));
        assert_eq!(store.get_sync(), 0);
    }

    #[tokio::test]
    async fn hydrate_reads_the_document_once() {
        let io = Arc::new(MemoryDocument::with_content("42"));
        let store = store_over(io.clone());
        assert_eq!(store.hydrate().await, 42);
        assert_eq!(store.hydrate().await, 42);
        assert_eq!(io.read_count(), 1);
        assert_eq!(store.get_sync(), 42);
    }

    #[tokio::test]
    async fn concurrent_hydrations_share_one_read() {
        let io = Arc::new(MemoryDocument {
            read_delay: Some(Duration::from_millis(20)),
            ..MemoryDocument::with_content("7")
        });
        let store = store_over(io.clone());
        let (a, b) = tokio::join!(store.hydrate(), store.hydrate());
        assert_eq!(a, 7);
        assert_eq!(b, 7);
        assert_eq!(io.read_count(), 1);
    }

    #[tokio::test]
    async fn missing_document_hydrates_to_default_without_reading() {
        let io = Arc::new(MemoryDocument::empty());
        let store = store_over(io.clone());
        assert_eq!(store.hydrate().await, 0);
        assert_eq!(io.read_count(), 0);
    }

    #[tokio::test]
    async fn read_failure_degrades_to_default() {
        let io = Arc::new(MemoryDocument {
            fail_reads: true,
            ..MemoryDocument::with_content("42")
        });
        let store = store_over(io);
        assert_eq!(store.hydrate().await, 0);
    }

    #[tokio::test]
    async fn parse_failure_degrades_to_default() {
        let store = store_over(Arc::new(MemoryDocument::with_content("not json")));
        assert_eq!(store.hydrate().await, 0);
    }

    #[tokio::test]
    async fn save_updates_cache_and_persists() {
        let io = Arc::new(MemoryDocument::empty());
        let store = store_over(io.clone());
        store.save(9).await;
        assert_eq!(store.get_sync(), 9);
        assert_eq!(io.written().as_deref(), Some("9"));
        // saving marks the store hydrated, so no read happens afterwards
        assert_eq!(store.hydrate().await, 9);
        assert_eq!(io.read_count(), 0);
    }

    #[tokio::test]
    async fn write_failure_is_swallowed_and_cache_keeps_the_value() {
        let io = Arc::new(MemoryDocument {
            fail_writes: true,
            ..MemoryDocument::empty()
        });
        let store = store_over(io);
        store.save(5).await;
        assert_eq!(store.get_sync(), 5);
    }
}
