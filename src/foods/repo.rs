use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::nutrition::NutrientProfile;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Food {
    pub id: Uuid,
    pub name: String,
    pub food_group: String,
    /// Informational only; computed totals always rederive energy from the
    /// macro columns.
    pub calories_kcal: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub fiber_g: Option<f64>,
    pub sodium_mg: Option<f64>,
    pub source: String,
    pub created_at: OffsetDateTime,
}

impl Food {
    pub fn profile(&self) -> NutrientProfile {
        NutrientProfile {
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
            fiber_g: self.fiber_g,
            sodium_mg: self.sodium_mg,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HouseholdMeasure {
    pub code: String,
    pub display_name: String,
    /// weight | volume | unit | other
    pub category: String,
    pub grams_equivalent: f64,
    pub ml_equivalent: Option<f64>,
}

pub struct NewFood<'a> {
    pub name: &'a str,
    pub food_group: &'a str,
    pub calories_kcal: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub fiber_g: Option<f64>,
    pub sodium_mg: Option<f64>,
    pub source: &'a str,
}

pub async fn insert(db: &PgPool, food: NewFood<'_>) -> anyhow::Result<Food> {
    let row = sqlx::query_as::<_, Food>(
        r#"
        INSERT INTO foods (name, food_group, calories_kcal, protein_g, carbs_g, fat_g,
                           fiber_g, sodium_mg, source)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id, name, food_group, calories_kcal, protein_g, carbs_g, fat_g,
                  fiber_g, sodium_mg, source, created_at
        "#,
    )
    .bind(food.name)
    .bind(food.food_group)
    .bind(food.calories_kcal)
    .bind(food.protein_g)
    .bind(food.carbs_g)
    .bind(food.fat_g)
    .bind(food.fiber_g)
    .bind(food.sodium_mg)
    .bind(food.source)
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn get(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Food>> {
    let row = sqlx::query_as::<_, Food>(
        r#"
        SELECT id, name, food_group, calories_kcal, protein_g, carbs_g, fat_g,
               fiber_g, sodium_mg, source, created_at
        FROM foods
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

pub async fn list(
    db: &PgPool,
    search: Option<&str>,
    limit: i64,
    offset: i64,
) -> anyhow::Result<Vec<Food>> {
    let pattern = search.map(|s| format!("%{s}%"));
    let rows = sqlx::query_as::<_, Food>(
        r#"
        SELECT id, name, food_group, calories_kcal, protein_g, carbs_g, fat_g,
               fiber_g, sodium_mg, source, created_at
        FROM foods
        WHERE $1::text IS NULL OR name ILIKE $1
        ORDER BY name ASC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(pattern)
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn list_measures(db: &PgPool) -> anyhow::Result<Vec<HouseholdMeasure>> {
    let rows = sqlx::query_as::<_, HouseholdMeasure>(
        r#"
        SELECT code, display_name, category, grams_equivalent, ml_equivalent
        FROM household_measures
        ORDER BY code ASC
        "#,
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn get_measure(db: &PgPool, code: &str) -> anyhow::Result<Option<HouseholdMeasure>> {
    let row = sqlx::query_as::<_, HouseholdMeasure>(
        r#"
        SELECT code, display_name, category, grams_equivalent, ml_equivalent
        FROM household_measures
        WHERE code = $1
        "#,
    )
    .bind(code)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

/// Grams for one unit of `measure_code` of this specific food, when a
/// food-level override exists.
pub async fn get_override(
    db: &PgPool,
    food_id: Uuid,
    measure_code: &str,
) -> anyhow::Result<Option<f64>> {
    let row: Option<(f64,)> = sqlx::query_as(
        r#"
        SELECT grams_per_unit
        FROM food_measure_overrides
        WHERE food_id = $1 AND measure_code = $2
        "#,
    )
    .bind(food_id)
    .bind(measure_code)
    .fetch_optional(db)
    .await?;
    Ok(row.map(|(g,)| g))
}

pub async fn upsert_override(
    db: &PgPool,
    food_id: Uuid,
    measure_code: &str,
    grams_per_unit: f64,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO food_measure_overrides (food_id, measure_code, grams_per_unit)
        VALUES ($1, $2, $3)
        ON CONFLICT (food_id, measure_code)
        DO UPDATE SET grams_per_unit = EXCLUDED.grams_per_unit
        "#,
    )
    .bind(food_id)
    .bind(measure_code)
    .bind(grams_per_unit)
    .execute(db)
    .await?;
    Ok(())
}
