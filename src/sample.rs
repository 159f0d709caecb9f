use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::models::entry::{Category, Unit, WasteEntry, WasteReason};

// Plausible demo items with the unit the form would use and a sensible
// quantity range.
const SAMPLE_ITEMS: &[(&str, Category, Unit, u64, u64)] = &[
    ("Bananas", Category::Fruits, Unit::Pieces, 1, 4),
    ("Apples", Category::Fruits, Unit::Pieces, 1, 5),
    ("Spinach", Category::Vegetables, Unit::Grams, 50, 300),
    ("Tomatoes", Category::Vegetables, Unit::Pieces, 1, 6),
    ("Milk", Category::Dairy, Unit::Ml, 100, 500),
    ("Yogurt", Category::Dairy, Unit::Cups, 1, 2),
    ("Chicken breast", Category::MeatPoultry, Unit::Grams, 100, 400),
    ("Salmon fillet", Category::Seafood, Unit::Grams, 100, 250),
    ("Cooked rice", Category::GrainsCereals, Unit::Cups, 1, 3),
    ("Bread", Category::Bakery, Unit::Slices, 1, 6),
    ("Orange juice", Category::Beverages, Unit::Ml, 100, 500),
    ("Mayonnaise", Category::CondimentsSauces, Unit::Grams, 20, 100),
    ("Leftover pasta", Category::Other, Unit::Portions, 1, 2),
];

/// Generate a demo collection spread over the `days` trailing calendar
/// days ending at `today`, newest first. Roughly two days in three carry
/// one or two entries; today always does, so the demo opens with an
/// active streak.
pub fn seed_sample_entries<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    days: u32,
) -> Vec<WasteEntry> {
    let mut entries = Vec::new();
    for days_ago in 0..i64::from(days) {
        if days_ago > 0 && rng.gen_bool(0.3) {
            continue;
        }
        let date = today - Duration::days(days_ago);
        for _ in 0..rng.gen_range(1..=2) {
            entries.push(sample_entry(rng, date));
        }
    }
    entries
}

/// One random but plausible entry on the given day.
pub fn sample_entry<R: Rng + ?Sized>(rng: &mut R, date: NaiveDate) -> WasteEntry {
    let (food_item, category, unit, lo, hi) = SAMPLE_ITEMS[rng.gen_range(0..SAMPLE_ITEMS.len())];
    let reason = WasteReason::ALL[rng.gen_range(0..WasteReason::ALL.len())];

    WasteEntry {
        id: Uuid::new_v4(),
        food_item: food_item.into(),
        category,
        quantity: rng.gen_range(lo..=hi).to_string(),
        unit,
        reason,
        date,
        notes: None,
        created_at: Utc::now(),
    }
}
