use async_trait::async_trait;
use std::io;
use std::path::PathBuf;

/// File capability backing one persisted document. Stores talk to this trait
/// rather than the filesystem directly so tests can count reads and inject
/// failures.
#[async_trait]
pub trait DocumentIo: Send + Sync {
    async fn exists(&self) -> io::Result<bool>;
    async fn read_text(&self) -> io::Result<String>;
    async fn write_text(&self, content: &str) -> io::Result<()>;
}

/// Production document backend: one JSON file under the app data directory.
pub struct FsDocument {
    path: PathBuf,
}

impl FsDocument {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl DocumentIo for FsDocument {
    async fn exists(&self) -> io::Result<bool> {
        tokio::fs::try_exists(&self.path).await
    }

    async fn read_text(&self) -> io::Result<String> {
        tokio::fs::read_to_string(&self.path).await
    }

    async fn write_text(&self, content: &str) -> io::Result<()> {
        tokio::fs::write(&self.path, content).await
    }
}
