//! Implements FavoritesPort using a JSON file.
//!
//! The file is the source of truth: every `read` goes back to disk, so two
//! screens mutating favorites can never diverge on a stale in-memory copy.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::watch;

use crate::domain::DomainError;
use crate::ports::FavoritesPort;

#[derive(Debug, Default, Serialize, Deserialize)]
struct FavoritesData {
    favorite_groups: BTreeSet<String>,
}

/// JSON file-based favorites storage with a watch stream of updates.
pub struct FavoritesJson {
    path: std::path::PathBuf,
    tx: watch::Sender<BTreeSet<String>>,
}

impl FavoritesJson {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let (tx, _rx) = watch::channel(BTreeSet::new());
        Self {
            path: path.as_ref().to_path_buf(),
            tx,
        }
    }

    /// Seed the update stream from disk. Call once after construction; a
    /// missing or unreadable file counts as an empty set.
    pub async fn load(&self) -> Result<(), DomainError> {
        let favorites = self.read_from_disk().await;
        self.tx.send_replace(favorites);
        Ok(())
    }

    async fn read_from_disk(&self) -> BTreeSet<String> {
        match fs::read_to_string(&self.path).await {
            Ok(s) => serde_json::from_str::<FavoritesData>(&s)
                .unwrap_or_default()
                .favorite_groups,
            Err(_) => BTreeSet::new(),
        }
    }

    /// Atomic save using the write-replace pattern:
    /// 1. Write to a temp file
    /// 2. sync_all() to flush to disk
    /// 3. Atomic rename onto the target path
    async fn save(&self, favorites: &BTreeSet<String>) -> Result<(), DomainError> {
        let data = FavoritesData {
            favorite_groups: favorites.clone(),
        };
        let json = serde_json::to_string_pretty(&data)
            .map_err(|e| DomainError::Favorites(e.to_string()))?;

        let temp_path = self.path.with_extension("json.tmp");
        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DomainError::Favorites(format!("create temp file: {e}")))?;
        f.write_all(json.as_bytes())
            .await
            .map_err(|e| DomainError::Favorites(format!("write temp file: {e}")))?;
        f.sync_all()
            .await
            .map_err(|e| DomainError::Favorites(format!("sync temp file: {e}")))?;
        drop(f); // close handle before rename

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| DomainError::Favorites(format!("atomic rename failed: {e}")))?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl FavoritesPort for FavoritesJson {
    async fn read(&self) -> Result<BTreeSet<String>, DomainError> {
        Ok(self.read_from_disk().await)
    }

    async fn write(&self, favorites: &BTreeSet<String>) -> Result<(), DomainError> {
        self.save(favorites).await?;
        self.tx.send_replace(favorites.clone());
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<BTreeSet<String>> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let store = FavoritesJson::new(dir.path().join("favorites.json"));
        assert!(store.read().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn written_set_survives_a_fresh_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");

        let store = FavoritesJson::new(&path);
        store.write(&set(&["CS-101", "MA-201"])).await.unwrap();

        let reopened = FavoritesJson::new(&path);
        assert_eq!(reopened.read().await.unwrap(), set(&["CS-101", "MA-201"]));
    }

    #[tokio::test]
    async fn write_replaces_the_whole_set() {
        let dir = tempfile::tempdir().unwrap();
        let store = FavoritesJson::new(dir.path().join("favorites.json"));

        store.write(&set(&["CS-101", "MA-201"])).await.unwrap();
        store.write(&set(&["MA-201"])).await.unwrap();

        assert_eq!(store.read().await.unwrap(), set(&["MA-201"]));
    }

    #[tokio::test]
    async fn subscribers_see_each_write() {
        let dir = tempfile::tempdir().unwrap();
        let store = FavoritesJson::new(dir.path().join("favorites.json"));
        let mut rx = store.subscribe();

        store.write(&set(&["CS-101"])).await.unwrap();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), set(&["CS-101"]));
    }

    #[tokio::test]
    async fn corrupt_file_degrades_to_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        tokio::fs::write(&path, b"{ not json").await.unwrap();

        let store = FavoritesJson::new(&path);
        assert!(store.read().await.unwrap().is_empty());
    }
}
