use std::path::Path;

use anyhow::{Context, Result};
use dialoguer::{Confirm, Input, Select};
use tracing::{info, warn};

use super::photos::encode_photo;
use crate::catalog;
use crate::models::{
    Category, Condition, Era, ListingDraft, MakeModel, MAX_PHOTOS, MIN_LOCATION_LEN,
    MIN_TITLE_LEN, OTHER_UNKNOWN_LABEL,
};
use crate::store::ListingStore;

/// The sell-a-part flow: prompt for every field, validate at the prompt,
/// then append the new listing and save the whole set back.
pub async fn run(store: &dyn ListingStore) -> Result<()> {
    println!("\nSell a part");
    println!("-----------");

    let mut listings = store.load_all().await?;

    let era = pick_era()?;
    let make = pick_make(era)?;
    let model = pick_model(era, &make)?;
    let category = pick_category()?;

    let title: String = Input::new()
        .with_prompt("Title")
        .validate_with(|input: &String| -> Result<(), String> {
            if input.trim().chars().count() >= MIN_TITLE_LEN {
                Ok(())
            } else {
                Err(format!("the title needs at least {MIN_TITLE_LEN} characters"))
            }
        })
        .interact_text()?;

    let description: String = Input::new()
        .with_prompt("Description (optional)")
        .allow_empty(true)
        .interact_text()?;

    let condition = pick_condition()?;

    let price_gbp: f64 = Input::new()
        .with_prompt("Price (GBP)")
        .validate_with(|input: &f64| -> Result<(), &str> {
            if input.is_finite() && *input > 0.0 {
                Ok(())
            } else {
                Err("the price must be a positive amount")
            }
        })
        .interact_text()?;

    let location: String = Input::new()
        .with_prompt("Location")
        .validate_with(|input: &String| -> Result<(), String> {
            if input.trim().chars().count() >= MIN_LOCATION_LEN {
                Ok(())
            } else {
                Err(format!("the location needs at least {MIN_LOCATION_LEN} characters"))
            }
        })
        .interact_text()?;

    let postage_available = Confirm::new()
        .with_prompt("Can you post this part?")
        .default(true)
        .interact()?;

    let photos = collect_photos().await?;

    let draft = ListingDraft {
        era,
        make,
        model,
        category,
        title,
        description: Some(description),
        condition,
        price_gbp,
        location,
        postage_available,
        photos,
    };

    let listing = draft.build().context("The listing was refused")?;
    info!("✅ Listed \"{}\" at £{:.2}", listing.title, listing.price_gbp);

    listings.push(listing);
    store.save_all(&listings).await?;

    Ok(())
}

fn pick_era() -> Result<Era> {
    let items = Era::ALL.map(|era| era.label());
    let choice = Select::new()
        .with_prompt("Vehicle era")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(Era::ALL[choice])
}

fn pick_make(era: Era) -> Result<MakeModel> {
    let mut items = catalog::makes_for(era);
    items.push(OTHER_UNKNOWN_LABEL);

    let choice = Select::new()
        .with_prompt("Make")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(MakeModel::from(items[choice]))
}

fn pick_model(era: Era, make: &MakeModel) -> Result<MakeModel> {
    let mut items = match make {
        MakeModel::Known(name) => catalog::models_for(era, name),
        MakeModel::OtherUnknown => Vec::new(),
    };
    items.push(OTHER_UNKNOWN_LABEL);

    let choice = Select::new()
        .with_prompt("Model")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(MakeModel::from(items[choice]))
}

fn pick_category() -> Result<Category> {
    let items = Category::ALL.map(|category| category.label());
    let choice = Select::new()
        .with_prompt("Part category")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(Category::ALL[choice])
}

fn pick_condition() -> Result<Condition> {
    let items = Condition::ALL.map(|condition| condition.label());
    let choice = Select::new()
        .with_prompt("Condition")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(Condition::ALL[choice])
}

/// Prompt for photo paths one by one, embedding each as a data URL.
/// A blank path finishes early; an unreadable file is skipped, not fatal.
async fn collect_photos() -> Result<Vec<String>> {
    let mut photos = Vec::new();

    while photos.len() < MAX_PHOTOS {
        let path: String = Input::new()
            .with_prompt(format!(
                "Photo file {} of {} (blank to finish)",
                photos.len() + 1,
                MAX_PHOTOS
            ))
            .allow_empty(true)
            .interact_text()?;

        let path = path.trim();
        if path.is_empty() {
            break;
        }

        match encode_photo(Path::new(path)).await {
            Ok(data_url) => photos.push(data_url),
            Err(err) => warn!("Skipping photo: {:#}", err),
        }
    }

    Ok(photos)
}
