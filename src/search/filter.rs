use crate::models::Listing;

use super::types::{FacetSelection, SearchOutcome, SearchStats};

/// How many results the instant-match preview shows
pub const INSTANT_MATCH_LIMIT: usize = 6;

/// Filter the listing set by the active facets and keyword.
///
/// A listing survives only if every set facet matches exactly and, when a
/// keyword is given, the keyword appears (case-insensitively) in at least
/// one of title, description, category label, make or model. Results come
/// back newest first with stats computed over them. The input is never
/// mutated; the whole set is rescanned on every call, which is the right
/// trade at demo scale where this runs per keystroke.
pub fn filter_listings(
    listings: &[Listing],
    selection: &FacetSelection,
    keyword: &str,
) -> SearchOutcome {
    let needle = keyword.trim().to_lowercase();

    let mut results: Vec<Listing> = listings
        .iter()
        .filter(|listing| selection.era.map_or(true, |era| listing.era == era))
        .filter(|listing| {
            selection
                .make
                .as_ref()
                .map_or(true, |make| listing.make == *make)
        })
        .filter(|listing| {
            selection
                .model
                .as_ref()
                .map_or(true, |model| listing.model == *model)
        })
        .filter(|listing| {
            selection
                .category
                .map_or(true, |category| listing.category == category)
        })
        .filter(|listing| needle.is_empty() || keyword_matches(listing, &needle))
        .cloned()
        .collect();

    // stable sort keeps equal timestamps in input order
    results.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let stats = SearchStats::over(&results);
    SearchOutcome { results, stats }
}

/// The first `n` of an already-ordered result set.
///
/// Pure truncation for the instant-match preview; callers pair it with the
/// full count to render "showing 6 of 23".
pub fn preview_top_n(results: &[Listing], n: usize) -> &[Listing] {
    &results[..results.len().min(n)]
}

// needle must already be trimmed and lowercased
fn keyword_matches(listing: &Listing, needle: &str) -> bool {
    let description = listing.description.as_deref().unwrap_or("");
    [
        listing.title.as_str(),
        description,
        listing.category.label(),
        listing.make.display_name(),
        listing.model.display_name(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Condition, Era, ListingDraft, MakeModel};
    use crate::store::seed_listings;

    fn selection() -> FacetSelection {
        FacetSelection::default()
    }

    fn matches_selection(listing: &Listing, selection: &FacetSelection) -> bool {
        selection.era.map_or(true, |era| listing.era == era)
            && selection
                .make
                .as_ref()
                .map_or(true, |make| listing.make == *make)
            && selection
                .model
                .as_ref()
                .map_or(true, |model| listing.model == *model)
            && selection
                .category
                .map_or(true, |category| listing.category == category)
    }

    #[test]
    fn era_and_make_with_keyword_finds_both_jaguar_speedo_listings() {
        let listings = seed_listings();
        let selection = FacetSelection {
            era: Some(Era::Fifties),
            make: Some(MakeModel::from("Jaguar")),
            ..selection()
        };

        let outcome = filter_listings(&listings, &selection, "speedo");

        assert_eq!(outcome.stats.count, 2);
        assert_eq!(outcome.stats.min_price, 495.0);
        assert_eq!(outcome.stats.max_price, 640.0);
        for listing in &outcome.results {
            assert_eq!(listing.era, Era::Fifties);
            assert_eq!(listing.make, MakeModel::from("Jaguar"));
            assert_eq!(listing.category, Category::Electrical);
        }
    }

    #[test]
    fn keyword_alone_finds_the_steering_rack() {
        let listings = seed_listings();

        let outcome = filter_listings(&listings, &selection(), "rack");

        assert_eq!(outcome.stats.count, 1);
        assert_eq!(outcome.results[0].make, MakeModel::from("BMW"));
        assert_eq!(outcome.results[0].category, Category::Suspension);
        assert_eq!(outcome.stats.min_price, 220.0);
        assert_eq!(outcome.stats.max_price, 220.0);
    }

    #[test]
    fn unmatched_category_reports_zero_to_zero_price_range() {
        let listings = seed_listings();
        let selection = FacetSelection {
            category: Some(Category::BodyPanels),
            ..selection()
        };

        let outcome = filter_listings(&listings, &selection, "");

        assert!(outcome.results.is_empty());
        assert_eq!(outcome.stats.count, 0);
        assert_eq!(outcome.stats.min_price, 0.0);
        assert_eq!(outcome.stats.max_price, 0.0);
    }

    #[test]
    fn preview_of_a_small_result_set_is_the_whole_set() {
        let listings = seed_listings();
        let outcome = filter_listings(&listings, &selection(), "");

        let preview = preview_top_n(&outcome.results, INSTANT_MATCH_LIMIT);
        assert_eq!(preview.len(), 4);
        assert_eq!(preview, &outcome.results[..]);
    }

    #[test]
    fn preview_is_a_prefix_of_the_results() {
        let listings = seed_listings();
        let outcome = filter_listings(&listings, &selection(), "");

        let preview = preview_top_n(&outcome.results, 2);
        assert_eq!(preview, &outcome.results[..2]);
        assert!(preview_top_n(&outcome.results, 0).is_empty());
    }

    #[test]
    fn results_are_sound_and_complete() {
        let listings = seed_listings();
        let selection = FacetSelection {
            era: Some(Era::Eighties),
            ..selection()
        };

        let outcome = filter_listings(&listings, &selection, "");

        // every result satisfies the constraints
        for listing in &outcome.results {
            assert!(matches_selection(listing, &selection));
        }
        // every satisfying input listing appears exactly once
        for listing in listings.iter().filter(|l| matches_selection(l, &selection)) {
            assert_eq!(
                outcome.results.iter().filter(|r| r.id == listing.id).count(),
                1
            );
        }
    }

    #[test]
    fn results_come_back_newest_first() {
        let listings = seed_listings();
        let outcome = filter_listings(&listings, &selection(), "");

        for pair in outcome.results.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[test]
    fn stats_bound_every_result_price() {
        let listings = seed_listings();
        let outcome = filter_listings(&listings, &selection(), "");

        assert!(outcome.stats.count > 0);
        for listing in &outcome.results {
            assert!(outcome.stats.min_price <= listing.price_gbp);
            assert!(listing.price_gbp <= outcome.stats.max_price);
        }
    }

    #[test]
    fn filtering_never_mutates_the_input() {
        let listings = seed_listings();
        let before = listings.clone();

        let first = filter_listings(&listings, &selection(), "jaguar");
        let second = filter_listings(&listings, &selection(), "jaguar");

        assert_eq!(listings, before);
        assert_eq!(first, second);
    }

    #[test]
    fn keyword_is_case_insensitive_across_fields() {
        let listings = seed_listings();

        // title
        assert_eq!(filter_listings(&listings, &selection(), "SPEEDO").stats.count, 2);
        // category label
        assert_eq!(
            filter_listings(&listings, &selection(), "electrical").stats.count,
            2
        );
        // make
        assert_eq!(filter_listings(&listings, &selection(), "bmw").stats.count, 1);
        // model only ("3 Series" appears nowhere else on the BMW listing)
        assert_eq!(
            filter_listings(&listings, &selection(), "3 series").stats.count,
            1
        );
        // description only
        assert_eq!(
            filter_listings(&listings, &selection(), "odometer").stats.count,
            1
        );
    }

    #[test]
    fn whitespace_keyword_is_unconstrained() {
        let listings = seed_listings();
        let all = filter_listings(&listings, &selection(), "");
        let padded = filter_listings(&listings, &selection(), "   ");
        assert_eq!(all.stats.count, listings.len());
        assert_eq!(padded, all);
    }

    #[test]
    fn facet_equality_is_case_sensitive() {
        let listings = seed_listings();
        let selection = FacetSelection {
            make: Some(MakeModel::from("jaguar")),
            ..selection()
        };
        assert_eq!(filter_listings(&listings, &selection, "").stats.count, 0);
    }

    #[test]
    fn other_unknown_facet_matches_only_other_unknown_listings() {
        let mut listings = seed_listings();
        listings.push(
            ListingDraft {
                era: Era::Seventies,
                make: MakeModel::OtherUnknown,
                model: MakeModel::OtherUnknown,
                category: Category::Brakes,
                title: "Girling caliper pair, unidentified application".to_string(),
                description: None,
                condition: Condition::UsedFair,
                price_gbp: 60.0,
                location: "Derby".to_string(),
                postage_available: true,
                photos: Vec::new(),
            }
            .build()
            .unwrap(),
        );

        let selection = FacetSelection {
            make: Some(MakeModel::OtherUnknown),
            ..FacetSelection::default()
        };
        let outcome = filter_listings(&listings, &selection, "");
        assert_eq!(outcome.stats.count, 1);
        assert_eq!(outcome.results[0].make, MakeModel::OtherUnknown);

        // the keyword side sees the display label
        let by_keyword = filter_listings(&listings, &FacetSelection::default(), "unknown");
        assert_eq!(by_keyword.stats.count, 1);
    }

    #[test]
    fn empty_input_yields_empty_results_and_zero_stats() {
        let outcome = filter_listings(&[], &selection(), "anything");
        assert!(outcome.results.is_empty());
        assert_eq!(outcome.stats, SearchStats::over(&[]));
    }
}
