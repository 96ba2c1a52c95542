use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;

use super::traits::ListingStore;
use crate::models::Listing;

/// In-memory listing store, mainly for tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    listings: RwLock<Vec<Listing>>,
}

#[allow(dead_code)]
impl MemoryStore {
    /// Create a new empty memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory store pre-populated with the given listings
    pub fn with_listings(listings: Vec<Listing>) -> Self {
        Self {
            listings: RwLock::new(listings),
        }
    }
}

#[async_trait]
impl ListingStore for MemoryStore {
    async fn load_all(&self) -> Result<Vec<Listing>> {
        Ok(self.listings.read().clone())
    }

    async fn save_all(&self, listings: &[Listing]) -> Result<()> {
        *self.listings.write() = listings.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed_listings;

    #[tokio::test]
    async fn starts_empty_and_round_trips_saves() {
        let store = MemoryStore::new();
        assert!(store.load_all().await.unwrap().is_empty());

        let listings = seed_listings();
        store.save_all(&listings).await.unwrap();
        assert_eq!(store.load_all().await.unwrap(), listings);
    }

    #[tokio::test]
    async fn save_replaces_the_whole_set() {
        let store = MemoryStore::with_listings(seed_listings());

        let kept = vec![seed_listings().remove(0)];
        store.save_all(&kept).await.unwrap();
        assert_eq!(store.load_all().await.unwrap(), kept);
    }
}
