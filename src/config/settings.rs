use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// App-private paths for the persisted documents.
pub struct AppPaths;

impl AppPaths {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "praying-daily")
            .context("Could not determine project directories")
    }

    pub fn data_dir() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn prayers_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("prayers.json"))
    }

    pub fn reminder_preference_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("reminder-time.json"))
    }

    pub fn scheduled_reminder_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("scheduled-reminder.json"))
    }

    pub fn ensure_data_dir() -> Result<PathBuf> {
        let dir = Self::data_dir()?;
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}
