use crate::models::Listing;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for listing storage backends
/// The set is always read and written wholesale; there is no per-listing
/// update or delete
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Load every stored listing
    async fn load_all(&self) -> Result<Vec<Listing>>;

    /// Replace the stored set with the given listings
    async fn save_all(&self, listings: &[Listing]) -> Result<()>;
}
