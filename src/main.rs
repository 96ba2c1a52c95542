mod catalog;
mod funnel;
mod models;
mod search;
mod store;

use anyhow::Result;
use dialoguer::Select;
use store::{seed_listings, JsonFileStore, ListingStore};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🔧 SparesHub - rare original parts for pre-2000 vehicles");
    info!("=========================================================");
    info!("Original • Used • NOS • Overhauled");
    info!("");

    let store = JsonFileStore::from_env();
    info!("Listing store: {}", store.path().display());

    loop {
        let choice = Select::new()
            .with_prompt("What would you like to do?")
            .items(&["Browse parts", "Sell a part", "Reset demo data", "Exit"])
            .default(0)
            .interact()?;

        match choice {
            0 => {
                let listings = store.load_all().await?;
                funnel::browse::run(&listings)?;
            }
            1 => funnel::sell::run(&store).await?,
            2 => {
                store.save_all(&seed_listings()).await?;
                info!("Demo data restored");
            }
            _ => break,
        }
    }

    info!("Goodbye 👋");
    Ok(())
}
