use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::seed::seed_listings;
use super::traits::ListingStore;
use crate::models::Listing;

/// Default store file, relative to the working directory
pub const DEFAULT_STORE_PATH: &str = "spareshub_listings.json";

/// Environment variable overriding the store file location
pub const STORE_PATH_ENV: &str = "SPARESHUB_STORE";

/// File-backed listing store: one JSON array, rewritten wholesale.
///
/// Reading never fails from the caller's point of view. A missing,
/// unreadable or malformed file falls back to the seed set with a log
/// line, so the demo always has data to show.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store over the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the path from `SPARESHUB_STORE`, or the default
    pub fn from_env() -> Self {
        let path = std::env::var(STORE_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE_PATH));
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ListingStore for JsonFileStore {
    async fn load_all(&self) -> Result<Vec<Listing>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "No stored listings at {} yet, starting from the seed set",
                    self.path.display()
                );
                return Ok(seed_listings());
            }
            Err(err) => {
                warn!(
                    "Could not read {} ({}), falling back to the seed set",
                    self.path.display(),
                    err
                );
                return Ok(seed_listings());
            }
        };

        match serde_json::from_str::<Vec<Listing>>(&raw) {
            Ok(listings) => {
                debug!(
                    "Loaded {} listings from {}",
                    listings.len(),
                    self.path.display()
                );
                Ok(listings)
            }
            Err(err) => {
                warn!(
                    "Stored listings at {} are unreadable ({}), falling back to the seed set",
                    self.path.display(),
                    err
                );
                Ok(seed_listings())
            }
        }
    }

    async fn save_all(&self, listings: &[Listing]) -> Result<()> {
        let json = serde_json::to_string_pretty(listings)
            .context("Failed to serialize listings")?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        info!(
            "💾 Saved {} listings to {}",
            listings.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_falls_back_to_the_seed_set() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nothing_here.json"));

        let listings = store.load_all().await.unwrap();
        assert_eq!(listings, seed_listings());
    }

    #[tokio::test]
    async fn corrupt_file_falls_back_to_the_seed_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listings.json");
        tokio::fs::write(&path, "{ not json ]").await.unwrap();

        let store = JsonFileStore::new(&path);
        let listings = store.load_all().await.unwrap();
        assert_eq!(listings, seed_listings());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("listings.json"));

        let mut listings = seed_listings();
        listings.truncate(2);
        store.save_all(&listings).await.unwrap();

        let loaded = store.load_all().await.unwrap();
        assert_eq!(loaded, listings);
    }

    #[tokio::test]
    async fn an_empty_stored_array_is_respected_not_reseeded() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("listings.json"));

        store.save_all(&[]).await.unwrap();
        let loaded = store.load_all().await.unwrap();
        assert!(loaded.is_empty());
    }
}
