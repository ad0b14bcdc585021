use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::nutrition::NutrientTotals;

use super::services::AdherenceBreakdown;

#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    pub food_id: Uuid,
    pub quantity: f64,
    pub measure_code: String,
    pub entry_date: Date,
}

#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub id: Uuid,
    pub food_id: Uuid,
    pub quantity: f64,
    pub measure_code: String,
    pub entry_date: Date,
    pub grams: f64,
    pub totals: NutrientTotals,
    pub logged_at: OffsetDateTime,
}

impl From<super::repo::FoodEntry> for EntryResponse {
    fn from(e: super::repo::FoodEntry) -> Self {
        let totals = e.totals();
        Self {
            id: e.id,
            food_id: e.food_id,
            quantity: e.quantity,
            measure_code: e.measure_code,
            entry_date: e.entry_date,
            grams: e.grams,
            totals,
            logged_at: e.logged_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub date: Date,
}

/// Integer percentages for display; `None` renders as "no goal set".
#[derive(Debug, Serialize)]
pub struct AdherenceDisplay {
    pub calories_pct: Option<i64>,
    pub protein_pct: Option<i64>,
    pub carbs_pct: Option<i64>,
    pub fat_pct: Option<i64>,
}

impl From<AdherenceBreakdown> for AdherenceDisplay {
    fn from(b: AdherenceBreakdown) -> Self {
        let round = |v: Option<f64>| v.map(|p| p.round() as i64);
        Self {
            calories_pct: round(b.calories_pct),
            protein_pct: round(b.protein_pct),
            carbs_pct: round(b.carbs_pct),
            fat_pct: round(b.fat_pct),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DaySummaryResponse {
    pub date: Date,
    pub entry_count: usize,
    pub totals: NutrientTotals,
    pub prescription_id: Option<Uuid>,
    pub adherence: AdherenceDisplay,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_goal_serializes_as_null_not_zero() {
        let display = AdherenceDisplay::from(AdherenceBreakdown {
            calories_pct: Some(87.4),
            protein_pct: None,
            carbs_pct: None,
            fat_pct: None,
        });
        let json = serde_json::to_value(&display).expect("serialize");
        assert_eq!(json["calories_pct"], 87);
        assert_eq!(json["protein_pct"], serde_json::Value::Null);
        assert_eq!(json["fat_pct"], serde_json::Value::Null);
    }

    #[test]
    fn optional_nutrients_keep_null_distinct_from_zero_on_the_wire() {
        let totals = NutrientTotals {
            calories_kcal: 0.0,
            protein_g: 0.0,
            carbs_g: 0.0,
            fat_g: 0.0,
            fiber_g: Some(0.0),
            sodium_mg: None,
        };
        let json = serde_json::to_value(totals).expect("serialize");
        assert_eq!(json["fiber_g"], 0.0);
        assert_eq!(json["sodium_mg"], serde_json::Value::Null);
    }
}
