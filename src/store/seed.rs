use chrono::{TimeZone, Utc};
use tracing::debug;

use crate::models::{Category, Condition, Era, Listing, MakeModel};

/// The fixed demo listings used whenever no stored set can be read.
///
/// Timestamps are constants so the default newest-first ordering is
/// deterministic; ids are stable strings rather than fresh UUIDs for the
/// same reason.
pub fn seed_listings() -> Vec<Listing> {
    debug!("Building seed listing set");

    vec![
        Listing {
            id: "seed_jaguar_speedo_mk2".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 11, 6, 9, 30, 0).unwrap(),
            era: Era::Fifties,
            make: MakeModel::from("Jaguar"),
            model: MakeModel::from("Mk2"),
            category: Category::Electrical,
            title: "Smiths 120mph speedometer, Jaguar Mk2 3.4".to_string(),
            description: Some(
                "Original Smiths unit, correct SN6326/05 face. Smooth needle, \
                 odometer reads 62,410. Sold with drive cable."
                    .to_string(),
            ),
            condition: Condition::Original,
            price_gbp: 495.0,
            location: "Coventry".to_string(),
            postage_available: true,
            photos: Vec::new(),
        },
        Listing {
            id: "seed_bmw_steering_rack".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 11, 5, 18, 15, 0).unwrap(),
            era: Era::Eighties,
            make: MakeModel::from("BMW"),
            model: MakeModel::from("E30 3 Series"),
            category: Category::Suspension,
            title: "BMW E30 power steering rack".to_string(),
            description: Some(
                "Removed from a running 325i Sport. No play, boots intact.".to_string(),
            ),
            condition: Condition::UsedGood,
            price_gbp: 220.0,
            location: "Leeds".to_string(),
            postage_available: true,
            photos: Vec::new(),
        },
        Listing {
            id: "seed_jaguar_speedo_etype".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 11, 4, 11, 0, 0).unwrap(),
            era: Era::Fifties,
            make: MakeModel::from("Jaguar"),
            model: MakeModel::from("E-Type"),
            category: Category::Electrical,
            title: "Jaguar E-Type Series 1 speedometer, NOS".to_string(),
            description: Some(
                "New old stock in Smiths box, never fitted. 160mph face for the \
                 4.2 coupe."
                    .to_string(),
            ),
            condition: Condition::Nos,
            price_gbp: 640.0,
            location: "Bristol".to_string(),
            postage_available: false,
            photos: Vec::new(),
        },
        Listing {
            id: "seed_ford_pinto_engine".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 11, 2, 16, 45, 0).unwrap(),
            era: Era::Eighties,
            make: MakeModel::from("Ford"),
            model: MakeModel::from("Sierra"),
            category: Category::Engine,
            title: "Ford Sierra 2.0 Pinto engine, complete".to_string(),
            description: Some(
                "Turns freely on the bar, good compression on all four when last \
                 run. Carb to sump, collection preferred."
                    .to_string(),
            ),
            condition: Condition::ForRestoration,
            price_gbp: 350.0,
            location: "Swansea".to_string(),
            postage_available: false,
            photos: Vec::new(),
        },
    ]
}
