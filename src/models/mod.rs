use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Minimum title length accepted when listing a part
pub const MIN_TITLE_LEN: usize = 4;
/// Minimum location length accepted when listing a part
pub const MIN_LOCATION_LEN: usize = 2;
/// Maximum number of photos a single listing may carry
pub const MAX_PHOTOS: usize = 6;

/// Storage form of the catch-all make/model option
pub const OTHER_UNKNOWN_LABEL: &str = "Other / Unknown";

/// Production-era bucket for the vehicle a part belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Era {
    #[serde(rename = "pre50")]
    Pre1950,
    #[serde(rename = "50_70")]
    Fifties,
    #[serde(rename = "70_80")]
    Seventies,
    #[serde(rename = "80_2000")]
    Eighties,
}

impl Era {
    pub const ALL: [Era; 4] = [Era::Pre1950, Era::Fifties, Era::Seventies, Era::Eighties];

    pub fn label(&self) -> &'static str {
        match self {
            Era::Pre1950 => "Pre-1950",
            Era::Fifties => "1950-1970",
            Era::Seventies => "1970-1980",
            Era::Eighties => "1980-2000",
        }
    }
}

/// Part category a listing is filed under
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    #[serde(rename = "Engine")]
    Engine,
    #[serde(rename = "Transmission & Gearbox")]
    Transmission,
    #[serde(rename = "Suspension")]
    Suspension,
    #[serde(rename = "Brakes")]
    Brakes,
    #[serde(rename = "Electrical")]
    Electrical,
    #[serde(rename = "Body Panels")]
    BodyPanels,
    #[serde(rename = "Interior & Trim")]
    InteriorTrim,
    #[serde(rename = "Glass & Mirrors")]
    GlassMirrors,
    #[serde(rename = "Lighting")]
    Lighting,
    #[serde(rename = "Exhaust")]
    Exhaust,
    #[serde(rename = "Fuel System")]
    FuelSystem,
    #[serde(rename = "Cooling")]
    Cooling,
    #[serde(rename = "Wheels & Tyres")]
    WheelsTyres,
}

impl Category {
    pub const ALL: [Category; 13] = [
        Category::Engine,
        Category::Transmission,
        Category::Suspension,
        Category::Brakes,
        Category::Electrical,
        Category::BodyPanels,
        Category::InteriorTrim,
        Category::GlassMirrors,
        Category::Lighting,
        Category::Exhaust,
        Category::FuelSystem,
        Category::Cooling,
        Category::WheelsTyres,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Engine => "Engine",
            Category::Transmission => "Transmission & Gearbox",
            Category::Suspension => "Suspension",
            Category::Brakes => "Brakes",
            Category::Electrical => "Electrical",
            Category::BodyPanels => "Body Panels",
            Category::InteriorTrim => "Interior & Trim",
            Category::GlassMirrors => "Glass & Mirrors",
            Category::Lighting => "Lighting",
            Category::Exhaust => "Exhaust",
            Category::FuelSystem => "Fuel System",
            Category::Cooling => "Cooling",
            Category::WheelsTyres => "Wheels & Tyres",
        }
    }
}

/// Condition grade for a second-hand part
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Condition {
    #[serde(rename = "New Old Stock (NOS)")]
    Nos,
    #[serde(rename = "Original")]
    Original,
    #[serde(rename = "Used (Good)")]
    UsedGood,
    #[serde(rename = "Used (Fair)")]
    UsedFair,
    #[serde(rename = "Overhauled")]
    Overhauled,
    #[serde(rename = "For Restoration")]
    ForRestoration,
}

impl Condition {
    pub const ALL: [Condition; 6] = [
        Condition::Nos,
        Condition::Original,
        Condition::UsedGood,
        Condition::UsedFair,
        Condition::Overhauled,
        Condition::ForRestoration,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Condition::Nos => "New Old Stock (NOS)",
            Condition::Original => "Original",
            Condition::UsedGood => "Used (Good)",
            Condition::UsedFair => "Used (Fair)",
            Condition::Overhauled => "Overhauled",
            Condition::ForRestoration => "For Restoration",
        }
    }
}

/// Make or model facet value.
///
/// The catch-all option is its own variant so a real make named
/// "Other / Unknown" can never collide with it silently. On the wire both
/// forms are plain strings; `OTHER_UNKNOWN_LABEL` is the reserved spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MakeModel {
    Known(String),
    OtherUnknown,
}

impl MakeModel {
    /// Display form, also used for keyword matching
    pub fn display_name(&self) -> &str {
        match self {
            MakeModel::Known(name) => name,
            MakeModel::OtherUnknown => OTHER_UNKNOWN_LABEL,
        }
    }
}

impl From<&str> for MakeModel {
    fn from(value: &str) -> Self {
        if value == OTHER_UNKNOWN_LABEL {
            MakeModel::OtherUnknown
        } else {
            MakeModel::Known(value.to_string())
        }
    }
}

impl Serialize for MakeModel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}

impl<'de> Deserialize<'de> for MakeModel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(MakeModel::from(raw.as_str()))
    }
}

/// A part offered on the exchange.
///
/// Listings are immutable once created; the set they live in is replaced
/// wholesale on every store write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub era: Era,
    pub make: MakeModel,
    pub model: MakeModel,
    pub category: Category,
    pub title: String,
    pub description: Option<String>,
    pub condition: Condition,
    #[serde(rename = "priceGBP")]
    pub price_gbp: f64,
    pub location: String,
    pub postage_available: bool,
    /// Embedded photo payloads (data URLs), in upload order
    pub photos: Vec<String>,
}

/// Why a listing draft was refused
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ListingError {
    #[error("title must be at least {MIN_TITLE_LEN} characters")]
    TitleTooShort,
    #[error("location must be at least {MIN_LOCATION_LEN} characters")]
    LocationTooShort,
    #[error("price must be a positive amount in pounds")]
    InvalidPrice,
    #[error("a listing may carry at most {MAX_PHOTOS} photos")]
    TooManyPhotos,
}

/// Seller-entered fields of a listing, before it gets an id and timestamp
#[derive(Debug, Clone)]
pub struct ListingDraft {
    pub era: Era,
    pub make: MakeModel,
    pub model: MakeModel,
    pub category: Category,
    pub title: String,
    pub description: Option<String>,
    pub condition: Condition,
    pub price_gbp: f64,
    pub location: String,
    pub postage_available: bool,
    pub photos: Vec<String>,
}

impl ListingDraft {
    /// Validate the draft and mint a listing from it.
    ///
    /// Assigns a fresh id and the creation timestamp. Text fields are
    /// trimmed before the length checks, and a blank description collapses
    /// to none.
    pub fn build(self) -> Result<Listing, ListingError> {
        let title = self.title.trim().to_string();
        if title.chars().count() < MIN_TITLE_LEN {
            return Err(ListingError::TitleTooShort);
        }

        let location = self.location.trim().to_string();
        if location.chars().count() < MIN_LOCATION_LEN {
            return Err(ListingError::LocationTooShort);
        }

        if !self.price_gbp.is_finite() || self.price_gbp <= 0.0 {
            return Err(ListingError::InvalidPrice);
        }

        if self.photos.len() > MAX_PHOTOS {
            return Err(ListingError::TooManyPhotos);
        }

        let description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(Listing {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            era: self.era,
            make: self.make,
            model: self.model,
            category: self.category,
            title,
            description,
            condition: self.condition,
            price_gbp: self.price_gbp,
            location,
            postage_available: self.postage_available,
            photos: self.photos,
        })
    }
}
