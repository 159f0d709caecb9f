use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Food category offered by the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Fruits,
    Vegetables,
    Dairy,
    #[serde(rename = "Meat & Poultry")]
    MeatPoultry,
    Seafood,
    #[serde(rename = "Grains & Cereals")]
    GrainsCereals,
    Bakery,
    Beverages,
    #[serde(rename = "Condiments & Sauces")]
    CondimentsSauces,
    Other,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Fruits,
        Category::Vegetables,
        Category::Dairy,
        Category::MeatPoultry,
        Category::Seafood,
        Category::GrainsCereals,
        Category::Bakery,
        Category::Beverages,
        Category::CondimentsSauces,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Fruits => "Fruits",
            Category::Vegetables => "Vegetables",
            Category::Dairy => "Dairy",
            Category::MeatPoultry => "Meat & Poultry",
            Category::Seafood => "Seafood",
            Category::GrainsCereals => "Grains & Cereals",
            Category::Bakery => "Bakery",
            Category::Beverages => "Beverages",
            Category::CondimentsSauces => "Condiments & Sauces",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| AppError::Validation(format!("Unknown category: {}", s)))
    }
}

/// Measurement unit for a logged quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Grams,
    Kg,
    Pieces,
    Cups,
    Liters,
    Ml,
    Slices,
    Portions,
}

impl Unit {
    pub const ALL: [Unit; 8] = [
        Unit::Grams,
        Unit::Kg,
        Unit::Pieces,
        Unit::Cups,
        Unit::Liters,
        Unit::Ml,
        Unit::Slices,
        Unit::Portions,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Unit::Grams => "grams",
            Unit::Kg => "kg",
            Unit::Pieces => "pieces",
            Unit::Cups => "cups",
            Unit::Liters => "liters",
            Unit::Ml => "ml",
            Unit::Slices => "slices",
            Unit::Portions => "portions",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Unit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .into_iter()
            .find(|u| u.label() == s)
            .ok_or_else(|| AppError::Validation(format!("Unknown unit: {}", s)))
    }
}

/// Why the food was wasted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WasteReason {
    #[serde(rename = "Expired/Past due date")]
    Expired,
    #[serde(rename = "Spoiled/Moldy")]
    Spoiled,
    #[serde(rename = "Cooked too much")]
    CookedTooMuch,
    #[serde(rename = "Bought too much")]
    BoughtTooMuch,
    #[serde(rename = "Didn't like taste")]
    DidntLikeTaste,
    #[serde(rename = "Forgot about it")]
    ForgotAboutIt,
    #[serde(rename = "Poor quality")]
    PoorQuality,
    Other,
}

impl WasteReason {
    pub const ALL: [WasteReason; 8] = [
        WasteReason::Expired,
        WasteReason::Spoiled,
        WasteReason::CookedTooMuch,
        WasteReason::BoughtTooMuch,
        WasteReason::DidntLikeTaste,
        WasteReason::ForgotAboutIt,
        WasteReason::PoorQuality,
        WasteReason::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WasteReason::Expired => "Expired/Past due date",
            WasteReason::Spoiled => "Spoiled/Moldy",
            WasteReason::CookedTooMuch => "Cooked too much",
            WasteReason::BoughtTooMuch => "Bought too much",
            WasteReason::DidntLikeTaste => "Didn't like taste",
            WasteReason::ForgotAboutIt => "Forgot about it",
            WasteReason::PoorQuality => "Poor quality",
            WasteReason::Other => "Other",
        }
    }
}

impl fmt::Display for WasteReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single logged waste record. Immutable once created; the collection
/// only grows by prepend or is replaced wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WasteEntry {
    pub id: Uuid,
    pub food_item: String,
    pub category: Category,
    /// Raw form input, kept verbatim. Coerced through [`parse_quantity`]
    /// wherever it is summed.
    pub quantity: String,
    pub unit: Unit,
    pub reason: WasteReason,
    pub date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl WasteEntry {
    pub fn quantity_value(&self) -> u64 {
        parse_quantity(&self.quantity)
    }
}

/// Coerce a free-form quantity string to a non-negative integer.
///
/// Matches the form's display math: leading decimal digits parse
/// (`"2.5"` is 2, `"12 kg"` is 12) and anything else, whether empty,
/// signed, or non-numeric, coerces to 0. Never an error.
pub fn parse_quantity(raw: &str) -> u64 {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u64::MAX)
}

/// What the entry-capture form submits.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewEntryRequest {
    #[validate(length(min = 1, max = 200, message = "Food item must be 1-200 characters"))]
    pub food_item: String,

    pub category: Category,

    /// Free-form numeric input; invalid or empty coerces to 0.
    #[serde(default)]
    pub quantity: String,

    pub unit: Unit,

    pub reason: WasteReason,

    /// Default: today. Must not be in the future.
    pub date: Option<NaiveDate>,

    #[validate(length(max = 2000, message = "Notes must be under 2000 characters"))]
    pub notes: Option<String>,
}

impl NewEntryRequest {
    /// Validate and turn the submission into an immutable entry.
    pub fn into_entry(self, today: NaiveDate) -> AppResult<WasteEntry> {
        self.validate()?;

        let date = self.date.unwrap_or(today);
        if date > today {
            return Err(AppError::Validation("Date cannot be in the future".into()));
        }

        Ok(WasteEntry {
            id: Uuid::new_v4(),
            food_item: self.food_item,
            category: self.category,
            quantity: self.quantity,
            unit: self.unit,
            reason: self.reason,
            date,
            notes: self.notes.filter(|n| !n.is_empty()),
            created_at: Utc::now(),
        })
    }
}
