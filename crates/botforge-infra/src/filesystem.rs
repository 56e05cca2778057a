//! Filesystem adapter for Botforge.
//!
//! Implements the `FileSystem` trait from `botforge-core` for real
//! filesystem I/O, plus resolution of the data directory the workspace
//! root lives under.

use std::path::{Path, PathBuf};

use botforge_core::service::fs::FileSystem;

/// Local filesystem implementation of the `FileSystem` trait.
///
/// All operations go through `tokio::fs` for async I/O.
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for LocalFileSystem {
    async fn write_file(&self, path: &Path, content: &str) -> Result<(), std::io::Error> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, content).await
    }

    async fn read_file(&self, path: &Path) -> Result<String, std::io::Error> {
        tokio::fs::read_to_string(path).await
    }

    async fn create_dir(&self, path: &Path) -> Result<(), std::io::Error> {
        // Non-recursive on purpose: the AlreadyExists error kind from the
        // primitive is what the service layer turns into a conflict.
        tokio::fs::create_dir(path).await
    }

    async fn create_dir_all(&self, path: &Path) -> Result<(), std::io::Error> {
        tokio::fs::create_dir_all(path).await
    }

    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    async fn remove_dir_all(&self, path: &Path) -> Result<(), std::io::Error> {
        tokio::fs::remove_dir_all(path).await
    }

    async fn list_dirs(&self, path: &Path) -> Result<Vec<String>, std::io::Error> {
        let mut entries = tokio::fs::read_dir(path).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }
}

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `BOTFORGE_DATA_DIR` environment variable
/// 2. Platform home directory: `~/.botforge`
/// 3. Last resort: `./.botforge`
///
/// The bot workspace root is `{data_dir}/bots`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("BOTFORGE_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".botforge");
    }

    PathBuf::from(".botforge")
}
