//! Abstract lookup interface the calculation flows depend on.
//!
//! The engine itself is pure; everything it needs (food profiles, measure
//! conversions, active prescriptions) arrives through this trait. A failed
//! lookup surfaces as a missing-input condition to the caller; it is never
//! swallowed or defaulted.

use async_trait::async_trait;
use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

use crate::foods::repo::{Food, HouseholdMeasure};
use crate::prescriptions::repo::Prescription;
use crate::{foods, prescriptions};

#[async_trait]
pub trait NutritionStore: Send + Sync {
    async fn get_food(&self, id: Uuid) -> anyhow::Result<Option<Food>>;
    async fn get_measure(&self, code: &str) -> anyhow::Result<Option<HouseholdMeasure>>;
    async fn get_override(&self, food_id: Uuid, measure_code: &str)
        -> anyhow::Result<Option<f64>>;
    async fn get_active_prescription(
        &self,
        patient_id: Uuid,
        date: Date,
    ) -> anyhow::Result<Option<Prescription>>;
}

#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NutritionStore for PgStore {
    async fn get_food(&self, id: Uuid) -> anyhow::Result<Option<Food>> {
        foods::repo::get(&self.db, id).await
    }

    async fn get_measure(&self, code: &str) -> anyhow::Result<Option<HouseholdMeasure>> {
        foods::repo::get_measure(&self.db, code).await
    }

    async fn get_override(
        &self,
        food_id: Uuid,
        measure_code: &str,
    ) -> anyhow::Result<Option<f64>> {
        foods::repo::get_override(&self.db, food_id, measure_code).await
    }

    async fn get_active_prescription(
        &self,
        patient_id: Uuid,
        date: Date,
    ) -> anyhow::Result<Option<Prescription>> {
        prescriptions::repo::active_for_date(&self.db, patient_id, date).await
    }
}
