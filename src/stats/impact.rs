use serde::Serialize;

use crate::models::entry::{Unit, WasteEntry};

// Rough footprint factors per kilogram of wasted food. These are
// deliberately coarse global averages, good enough for the dashboard's
// impact cards.
const CO2_KG_PER_KG: f64 = 2.5;
const WATER_L_PER_KG: f64 = 100.0;
const LAND_M2_PER_KG: f64 = 0.7;
const VALUE_CENTS_PER_KG: f64 = 850.0;

// Display equivalences used on the dashboard.
const CO2_KG_PER_TREE: f64 = 4.9;
const WATER_L_PER_SHOWER: f64 = 50.0;

/// Estimated environmental footprint of the logged waste.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactEstimate {
    pub waste_kg: f64,
    pub co2_kg: f64,
    pub water_liters: f64,
    pub land_m2: f64,
    /// Estimated value of the wasted food, in cents of the preferred
    /// currency. Display code formats it.
    pub value_cents: u64,
}

impl ImpactEstimate {
    pub fn from_entries(entries: &[WasteEntry]) -> Self {
        let grams: f64 = entries
            .iter()
            .map(|e| approximate_grams(e.unit, e.quantity_value()))
            .sum();
        let waste_kg = grams / 1000.0;

        Self {
            waste_kg,
            co2_kg: waste_kg * CO2_KG_PER_KG,
            water_liters: waste_kg * WATER_L_PER_KG,
            land_m2: waste_kg * LAND_M2_PER_KG,
            value_cents: (waste_kg * VALUE_CENTS_PER_KG).round() as u64,
        }
    }

    /// "Equivalent to N trees planted".
    pub fn trees_equivalent(&self) -> f64 {
        self.co2_kg / CO2_KG_PER_TREE
    }

    /// "Enough water for N showers".
    pub fn showers_equivalent(&self) -> f64 {
        self.water_liters / WATER_L_PER_SHOWER
    }
}

/// Approximate mass of a logged quantity, in grams.
pub fn approximate_grams(unit: Unit, quantity: u64) -> f64 {
    let grams_per_unit = match unit {
        Unit::Grams | Unit::Ml => 1.0,
        Unit::Kg | Unit::Liters => 1000.0,
        Unit::Pieces => 120.0,
        Unit::Cups => 240.0,
        Unit::Slices => 30.0,
        Unit::Portions => 350.0,
    };
    quantity as f64 * grams_per_unit
}
