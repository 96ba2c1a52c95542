pub mod json_file;
pub mod memory;
pub mod seed;
pub mod traits;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use seed::seed_listings;
pub use traits::ListingStore;
