use thiserror::Error;
use uuid::Uuid;

use crate::nutrition::{
    adherence, quantity_to_grams, scale_nutrients, ConversionError, NutrientTotals,
};
use crate::prescriptions::repo::Prescription;
use crate::store::NutritionStore;

#[derive(Debug, Error)]
pub enum LogEntryError {
    #[error("food not found")]
    FoodNotFound,
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Values derived from a logging request before anything is persisted.
#[derive(Debug, Clone, Copy)]
pub struct EntryComputation {
    pub grams: f64,
    pub totals: NutrientTotals,
}

/// Resolve the food and measure, convert the quantity to grams and scale the
/// food's profile. A conversion failure blocks the save; it must never fall
/// back to quantity-as-grams.
pub async fn compute_entry(
    store: &dyn NutritionStore,
    food_id: Uuid,
    measure_code: &str,
    quantity: f64,
) -> Result<EntryComputation, LogEntryError> {
    let food = store
        .get_food(food_id)
        .await?
        .ok_or(LogEntryError::FoodNotFound)?;

    let override_g = store.get_override(food_id, measure_code).await?;
    let generic = store.get_measure(measure_code).await?;

    let grams = quantity_to_grams(
        quantity,
        measure_code,
        override_g,
        generic.map(|m| m.grams_equivalent),
    )?;
    let totals = scale_nutrients(&food.profile(), grams);

    Ok(EntryComputation { grams, totals })
}

/// Per-macro adherence against a prescription. Fields stay `None` when there
/// is no active prescription or the corresponding goal is not positive.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct AdherenceBreakdown {
    pub calories_pct: Option<f64>,
    pub protein_pct: Option<f64>,
    pub carbs_pct: Option<f64>,
    pub fat_pct: Option<f64>,
}

pub fn adherence_breakdown(
    totals: &NutrientTotals,
    prescription: Option<&Prescription>,
) -> AdherenceBreakdown {
    AdherenceBreakdown {
        calories_pct: adherence(totals.calories_kcal, prescription.map(|rx| rx.calories_kcal)),
        protein_pct: adherence(totals.protein_g, prescription.map(|rx| rx.protein_g)),
        carbs_pct: adherence(totals.carbs_g, prescription.map(|rx| rx.carbs_g)),
        fat_pct: adherence(totals.fat_g, prescription.map(|rx| rx.fat_g)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foods::repo::{Food, HouseholdMeasure};
    use crate::nutrition::aggregate;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use time::{Date, OffsetDateTime};

    struct FakeStore {
        foods: HashMap<Uuid, Food>,
        measures: HashMap<String, HouseholdMeasure>,
        overrides: HashMap<(Uuid, String), f64>,
    }

    #[async_trait]
    impl NutritionStore for FakeStore {
        async fn get_food(&self, id: Uuid) -> anyhow::Result<Option<Food>> {
            Ok(self.foods.get(&id).cloned())
        }
        async fn get_measure(&self, code: &str) -> anyhow::Result<Option<HouseholdMeasure>> {
            Ok(self.measures.get(code).cloned())
        }
        async fn get_override(
            &self,
            food_id: Uuid,
            measure_code: &str,
        ) -> anyhow::Result<Option<f64>> {
            Ok(self
                .overrides
                .get(&(food_id, measure_code.to_owned()))
                .copied())
        }
        async fn get_active_prescription(
            &self,
            _patient_id: Uuid,
            _date: Date,
        ) -> anyhow::Result<Option<Prescription>> {
            Ok(None)
        }
    }

    fn food(name: &str, protein: f64, carbs: f64, fat: f64) -> Food {
        Food {
            id: Uuid::new_v4(),
            name: name.into(),
            food_group: "test".into(),
            // Deliberately wrong stored calories; computations must ignore it.
            calories_kcal: 9999.0,
            protein_g: protein,
            carbs_g: carbs,
            fat_g: fat,
            fiber_g: None,
            sodium_mg: None,
            source: "custom".into(),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    fn store_with(foods: Vec<Food>) -> FakeStore {
        let tablespoon = HouseholdMeasure {
            code: "tablespoon".into(),
            display_name: "Tablespoon".into(),
            category: "volume".into(),
            grams_equivalent: 15.0,
            ml_equivalent: Some(15.0),
        };
        FakeStore {
            foods: foods.into_iter().map(|f| (f.id, f)).collect(),
            measures: [("tablespoon".to_owned(), tablespoon)].into(),
            overrides: HashMap::new(),
        }
    }

    #[tokio::test]
    async fn olive_oil_override_beats_generic_tablespoon() {
        let oil = food("Olive Oil", 0.0, 0.0, 100.0);
        let oil_id = oil.id;
        let mut store = store_with(vec![oil]);
        store.overrides.insert((oil_id, "tablespoon".into()), 8.0);

        let c = compute_entry(&store, oil_id, "tablespoon", 2.0)
            .await
            .expect("compute");
        assert_eq!(c.grams, 16.0);
        assert_eq!(c.totals.fat_g, 16.0);
        assert_eq!(c.totals.calories_kcal, 144.0);
    }

    #[tokio::test]
    async fn rice_in_grams_uses_macro_derived_calories() {
        let rice = food("Rice", 2.5, 28.0, 0.2);
        let rice_id = rice.id;
        let store = store_with(vec![rice]);

        let c = compute_entry(&store, rice_id, "gram", 150.0)
            .await
            .expect("compute");
        assert_eq!(c.grams, 150.0);
        assert_eq!(c.totals.carbs_g, 42.0);
        // Never the stored 9999 kcal.
        assert_eq!(c.totals.calories_kcal, 185.7);
    }

    #[tokio::test]
    async fn unknown_measure_blocks_the_save() {
        let rice = food("Rice", 2.5, 28.0, 0.2);
        let rice_id = rice.id;
        let store = store_with(vec![rice]);

        let err = compute_entry(&store, rice_id, "handful", 1.0)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LogEntryError::Conversion(ConversionError::UnknownMeasure(_))
        ));
    }

    #[tokio::test]
    async fn missing_food_is_a_missing_input_not_a_default() {
        let store = store_with(vec![]);
        let err = compute_entry(&store, Uuid::new_v4(), "gram", 100.0)
            .await
            .unwrap_err();
        assert!(matches!(err, LogEntryError::FoodNotFound));
    }

    #[tokio::test]
    async fn single_entry_aggregation_matches_direct_computation() {
        let rice = food("Rice", 2.5, 28.0, 0.2);
        let rice_id = rice.id;
        let store = store_with(vec![rice]);

        let c = compute_entry(&store, rice_id, "gram", 150.0)
            .await
            .expect("compute");
        assert_eq!(aggregate([&c.totals]), c.totals);
    }

    fn prescription(calories: f64, protein: f64, carbs: f64, fat: f64) -> Prescription {
        Prescription {
            id: Uuid::new_v4(),
            patient_id: Uuid::new_v4(),
            calories_kcal: calories,
            protein_g: protein,
            fat_g: fat,
            carbs_g: carbs,
            starts_on: Date::from_calendar_date(2025, time::Month::January, 1).expect("date"),
            ends_on: Date::from_calendar_date(2025, time::Month::December, 31).expect("date"),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn breakdown_without_prescription_is_all_none() {
        let totals = NutrientTotals {
            calories_kcal: 1800.0,
            protein_g: 120.0,
            carbs_g: 200.0,
            fat_g: 60.0,
            fiber_g: None,
            sodium_mg: None,
        };
        let b = adherence_breakdown(&totals, None);
        assert_eq!(b.calories_pct, None);
        assert_eq!(b.protein_pct, None);
        assert_eq!(b.carbs_pct, None);
        assert_eq!(b.fat_pct, None);
    }

    #[test]
    fn breakdown_computes_per_macro_percentages() {
        let totals = NutrientTotals {
            calories_kcal: 1000.0,
            protein_g: 75.0,
            carbs_g: 300.0,
            fat_g: 0.0,
            fiber_g: None,
            sodium_mg: None,
        };
        let rx = prescription(2000.0, 150.0, 200.0, 70.0);
        let b = adherence_breakdown(&totals, Some(&rx));
        assert_eq!(b.calories_pct, Some(50.0));
        assert_eq!(b.protein_pct, Some(50.0));
        assert_eq!(b.carbs_pct, Some(150.0));
        assert_eq!(b.fat_pct, Some(0.0));
    }

    #[test]
    fn breakdown_handles_a_zero_goal_per_field() {
        let totals = NutrientTotals {
            calories_kcal: 1000.0,
            protein_g: 75.0,
            carbs_g: 100.0,
            fat_g: 30.0,
            fiber_g: None,
            sodium_mg: None,
        };
        let rx = prescription(2000.0, 0.0, 200.0, 70.0);
        let b = adherence_breakdown(&totals, Some(&rx));
        assert_eq!(b.calories_pct, Some(50.0));
        assert_eq!(b.protein_pct, None);
    }
}
