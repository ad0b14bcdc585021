use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::nutrition::NutrientTotals;

/// A logged consumption. The computed columns (grams and per-entry totals)
/// are written once at logging time; an edit replaces the row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FoodEntry {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub food_id: Uuid,
    pub quantity: f64,
    pub measure_code: String,
    pub entry_date: Date,
    pub grams: f64,
    pub calories_kcal: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub fiber_g: Option<f64>,
    pub sodium_mg: Option<f64>,
    pub logged_at: OffsetDateTime,
}

impl FoodEntry {
    pub fn totals(&self) -> NutrientTotals {
        NutrientTotals {
            calories_kcal: self.calories_kcal,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
            fiber_g: self.fiber_g,
            sodium_mg: self.sodium_mg,
        }
    }
}

pub struct NewEntry {
    pub patient_id: Uuid,
    pub food_id: Uuid,
    pub quantity: f64,
    pub measure_code: String,
    pub entry_date: Date,
    pub grams: f64,
    pub totals: NutrientTotals,
}

pub async fn insert(db: &PgPool, entry: NewEntry) -> anyhow::Result<FoodEntry> {
    let row = sqlx::query_as::<_, FoodEntry>(
        r#"
        INSERT INTO food_entries (patient_id, food_id, quantity, measure_code, entry_date,
                                  grams, calories_kcal, protein_g, carbs_g, fat_g,
                                  fiber_g, sodium_mg)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING id, patient_id, food_id, quantity, measure_code, entry_date,
                  grams, calories_kcal, protein_g, carbs_g, fat_g, fiber_g, sodium_mg,
                  logged_at
        "#,
    )
    .bind(entry.patient_id)
    .bind(entry.food_id)
    .bind(entry.quantity)
    .bind(&entry.measure_code)
    .bind(entry.entry_date)
    .bind(entry.grams)
    .bind(entry.totals.calories_kcal)
    .bind(entry.totals.protein_g)
    .bind(entry.totals.carbs_g)
    .bind(entry.totals.fat_g)
    .bind(entry.totals.fiber_g)
    .bind(entry.totals.sodium_mg)
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn list_for_day(
    db: &PgPool,
    patient_id: Uuid,
    date: Date,
) -> anyhow::Result<Vec<FoodEntry>> {
    let rows = sqlx::query_as::<_, FoodEntry>(
        r#"
        SELECT id, patient_id, food_id, quantity, measure_code, entry_date,
               grams, calories_kcal, protein_g, carbs_g, fat_g, fiber_g, sodium_mg,
               logged_at
        FROM food_entries
        WHERE patient_id = $1 AND entry_date = $2
        ORDER BY logged_at ASC
        "#,
    )
    .bind(patient_id)
    .bind(date)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn delete(db: &PgPool, patient_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM food_entries
        WHERE id = $1 AND patient_id = $2
        "#,
    )
    .bind(id)
    .bind(patient_id)
    .execute(db)
    .await?;
    Ok(result.rows_affected() > 0)
}
