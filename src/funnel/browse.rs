use anyhow::Result;
use dialoguer::{Input, Select};

use crate::catalog;
use crate::models::{Category, Era, Listing, MakeModel, OTHER_UNKNOWN_LABEL};
use crate::search::{filter_listings, preview_top_n, FacetSelection, SearchOutcome, INSTANT_MATCH_LIMIT};

/// Step-by-step browse funnel: era, make, model, category, keyword.
///
/// Every step can be left open ("Any ...") and prints the instant-match
/// preview for the selection so far, so narrowing is visible before the
/// final results. The model step only appears once a make is chosen.
pub fn run(listings: &[Listing]) -> Result<()> {
    println!("\nFind rare original parts");
    println!("------------------------");

    let mut selection = FacetSelection::default();

    selection.era = pick_era()?;
    show_instant_matches(listings, &selection, "");

    selection.make = pick_make(selection.era)?;
    show_instant_matches(listings, &selection, "");

    if let Some(make) = selection.make.clone() {
        selection.model = pick_model(selection.era, &make)?;
        show_instant_matches(listings, &selection, "");
    }

    selection.category = pick_category()?;
    show_instant_matches(listings, &selection, "");

    let keyword: String = Input::new()
        .with_prompt("Keyword (blank to skip)")
        .allow_empty(true)
        .interact_text()?;

    let outcome = filter_listings(listings, &selection, &keyword);
    render_results(&outcome);

    Ok(())
}

fn pick_era() -> Result<Option<Era>> {
    let mut items = vec!["Any era"];
    items.extend(Era::ALL.iter().map(|era| era.label()));

    let choice = Select::new()
        .with_prompt("Vehicle era")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(if choice == 0 {
        None
    } else {
        Some(Era::ALL[choice - 1])
    })
}

fn pick_make(era: Option<Era>) -> Result<Option<MakeModel>> {
    let known = match era {
        Some(era) => catalog::makes_for(era),
        None => catalog::all_makes(),
    };

    let mut items = vec!["Any make"];
    items.extend(known);
    items.push(OTHER_UNKNOWN_LABEL);

    let choice = Select::new()
        .with_prompt("Make")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(if choice == 0 {
        None
    } else {
        Some(MakeModel::from(items[choice]))
    })
}

fn pick_model(era: Option<Era>, make: &MakeModel) -> Result<Option<MakeModel>> {
    let known = match (era, make) {
        (Some(era), MakeModel::Known(name)) => catalog::models_for(era, name),
        (None, MakeModel::Known(name)) => catalog::models_for_make(name),
        (_, MakeModel::OtherUnknown) => Vec::new(),
    };

    let mut items = vec!["Any model"];
    items.extend(known);
    items.push(OTHER_UNKNOWN_LABEL);

    let choice = Select::new()
        .with_prompt("Model")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(if choice == 0 {
        None
    } else {
        Some(MakeModel::from(items[choice]))
    })
}

fn pick_category() -> Result<Option<Category>> {
    let mut items = vec!["Any category"];
    items.extend(Category::ALL.iter().map(|category| category.label()));

    let choice = Select::new()
        .with_prompt("Part category")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(if choice == 0 {
        None
    } else {
        Some(Category::ALL[choice - 1])
    })
}

fn show_instant_matches(listings: &[Listing], selection: &FacetSelection, keyword: &str) {
    let outcome = filter_listings(listings, selection, keyword);
    if outcome.stats.count == 0 {
        println!("  Instant matches: none yet\n");
        return;
    }

    let preview = preview_top_n(&outcome.results, INSTANT_MATCH_LIMIT);
    println!(
        "  Instant matches: showing {} of {} (£{:.0} - £{:.0})",
        preview.len(),
        outcome.stats.count,
        outcome.stats.min_price,
        outcome.stats.max_price
    );
    for listing in preview {
        println!("    - {} (£{:.2})", listing.title, listing.price_gbp);
    }
    println!();
}

fn render_results(outcome: &SearchOutcome) {
    if outcome.results.is_empty() {
        println!("\nNo parts matched your search.\n");
        return;
    }

    println!(
        "\n{} part(s) found, £{:.0} to £{:.0}\n",
        outcome.stats.count, outcome.stats.min_price, outcome.stats.max_price
    );

    for (i, listing) in outcome.results.iter().enumerate() {
        println!("{}. {} (£{:.2})", i + 1, listing.title, listing.price_gbp);
        println!(
            "   {} | {} {} | {}",
            listing.era.label(),
            listing.make.display_name(),
            listing.model.display_name(),
            listing.category.label()
        );
        println!(
            "   Condition: {} | Location: {} | Postage: {}",
            listing.condition.label(),
            listing.location,
            if listing.postage_available { "yes" } else { "collection only" }
        );
        if let Some(description) = &listing.description {
            println!("   {}", description);
        }
        if !listing.photos.is_empty() {
            println!("   {} photo(s) attached", listing.photos.len());
        }
        println!();
    }
}
