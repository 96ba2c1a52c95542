pub mod filter;
pub mod types;

pub use filter::{filter_listings, preview_top_n, INSTANT_MATCH_LIMIT};
pub use types::{FacetSelection, SearchOutcome, SearchStats};
