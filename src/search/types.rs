use serde::{Deserialize, Serialize};

use crate::models::{Category, Era, Listing, MakeModel};

/// Facet constraints for a listing search
///
/// Each facet is optional; `None` leaves that dimension unconstrained.
/// Facet matching is exact equality, unlike the case-insensitive keyword.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacetSelection {
    pub era: Option<Era>,
    pub make: Option<MakeModel>,
    pub model: Option<MakeModel>,
    pub category: Option<Category>,
}

/// Aggregate figures over one result set
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchStats {
    pub count: usize,
    /// Lowest asking price in the results, 0 when there are none
    pub min_price: f64,
    /// Highest asking price in the results, 0 when there are none
    pub max_price: f64,
}

impl SearchStats {
    /// Compute count and price range in a single pass.
    ///
    /// An empty result set reports a 0 to 0 price range rather than no
    /// range at all; callers render that literally.
    pub fn over(results: &[Listing]) -> Self {
        if results.is_empty() {
            return Self {
                count: 0,
                min_price: 0.0,
                max_price: 0.0,
            };
        }

        let mut min_price = f64::INFINITY;
        let mut max_price = f64::NEG_INFINITY;
        for listing in results {
            min_price = min_price.min(listing.price_gbp);
            max_price = max_price.max(listing.price_gbp);
        }

        Self {
            count: results.len(),
            min_price,
            max_price,
        }
    }
}

/// Filtered, ordered results plus their stats
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub results: Vec<Listing>,
    pub stats: SearchStats,
}
