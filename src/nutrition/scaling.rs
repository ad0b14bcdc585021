//! Nutrient scaling, calorie reconciliation and day aggregation.

use serde::{Deserialize, Serialize};

/// kcal per gram of protein.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// kcal per gram of carbohydrate.
pub const KCAL_PER_G_CARBS: f64 = 4.0;
/// kcal per gram of fat.
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Per-100g macronutrient profile of a food.
///
/// Deliberately has no calories field: the energy of any quantity is always
/// recomputed from the macros, so a stale or miskeyed stored calorie value
/// can never leak into a computed total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub fiber_g: Option<f64>,
    pub sodium_mg: Option<f64>,
}

/// Computed nutrient content of a quantity of food, or of a whole day.
///
/// `fiber_g`/`sodium_mg` stay `None` when the underlying food carries no
/// value for them; absence is not the same as a true zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub calories_kcal: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub fiber_g: Option<f64>,
    pub sodium_mg: Option<f64>,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Scale a per-100g profile to an actual consumed gram quantity.
///
/// Macros are rounded to 2 decimals; calories are then reconciled from the
/// rounded macros (4/4/9 kcal per gram). Non-positive or non-finite grams
/// yield a neutral all-zero result rather than an error, so the function is
/// safe to call while a form is half filled in.
pub fn scale_nutrients(profile: &NutrientProfile, grams: f64) -> NutrientTotals {
    if !grams.is_finite() || grams <= 0.0 {
        return NutrientTotals {
            fiber_g: profile.fiber_g.map(|_| 0.0),
            sodium_mg: profile.sodium_mg.map(|_| 0.0),
            ..NutrientTotals::default()
        };
    }

    let factor = grams / 100.0;
    let protein_g = round2(profile.protein_g * factor);
    let carbs_g = round2(profile.carbs_g * factor);
    let fat_g = round2(profile.fat_g * factor);
    let calories_kcal = round2(
        protein_g * KCAL_PER_G_PROTEIN + carbs_g * KCAL_PER_G_CARBS + fat_g * KCAL_PER_G_FAT,
    );

    NutrientTotals {
        calories_kcal,
        protein_g,
        carbs_g,
        fat_g,
        fiber_g: profile.fiber_g.map(|v| round2(v * factor)),
        sodium_mg: profile.sodium_mg.map(|v| round2(v * factor)),
    }
}

fn add_opt(acc: Option<f64>, v: Option<f64>) -> Option<f64> {
    match (acc, v) {
        (None, None) => None,
        (a, b) => Some(a.unwrap_or(0.0) + b.unwrap_or(0.0)),
    }
}

/// Sum entry contributions into period totals. Empty input is all zeros;
/// optional nutrients stay `None` only when no entry carried them.
pub fn aggregate<'a, I>(entries: I) -> NutrientTotals
where
    I: IntoIterator<Item = &'a NutrientTotals>,
{
    entries
        .into_iter()
        .fold(NutrientTotals::default(), |acc, e| NutrientTotals {
            calories_kcal: acc.calories_kcal + e.calories_kcal,
            protein_g: acc.protein_g + e.protein_g,
            carbs_g: acc.carbs_g + e.carbs_g,
            fat_g: acc.fat_g + e.fat_g,
            fiber_g: add_opt(acc.fiber_g, e.fiber_g),
            sodium_mg: add_opt(acc.sodium_mg, e.sodium_mg),
        })
}
