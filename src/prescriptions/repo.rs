use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Prescription {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub calories_kcal: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
    pub starts_on: Date,
    pub ends_on: Date,
    pub created_at: OffsetDateTime,
}

pub struct NewPrescription {
    pub patient_id: Uuid,
    pub calories_kcal: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
    pub starts_on: Date,
    pub ends_on: Date,
}

pub async fn insert(db: &PgPool, rx: NewPrescription) -> anyhow::Result<Prescription> {
    let row = sqlx::query_as::<_, Prescription>(
        r#"
        INSERT INTO prescriptions (patient_id, calories_kcal, protein_g, fat_g, carbs_g,
                                   starts_on, ends_on)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, patient_id, calories_kcal, protein_g, fat_g, carbs_g,
                  starts_on, ends_on, created_at
        "#,
    )
    .bind(rx.patient_id)
    .bind(rx.calories_kcal)
    .bind(rx.protein_g)
    .bind(rx.fat_g)
    .bind(rx.carbs_g)
    .bind(rx.starts_on)
    .bind(rx.ends_on)
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn list_by_patient(db: &PgPool, patient_id: Uuid) -> anyhow::Result<Vec<Prescription>> {
    let rows = sqlx::query_as::<_, Prescription>(
        r#"
        SELECT id, patient_id, calories_kcal, protein_g, fat_g, carbs_g,
               starts_on, ends_on, created_at
        FROM prescriptions
        WHERE patient_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(patient_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// The active prescription for a date: the most recently created one whose
/// validity range contains it.
pub async fn active_for_date(
    db: &PgPool,
    patient_id: Uuid,
    date: Date,
) -> anyhow::Result<Option<Prescription>> {
    let row = sqlx::query_as::<_, Prescription>(
        r#"
        SELECT id, patient_id, calories_kcal, protein_g, fat_g, carbs_g,
               starts_on, ends_on, created_at
        FROM prescriptions
        WHERE patient_id = $1 AND starts_on <= $2 AND ends_on >= $2
        ORDER BY created_at DESC
        LIMIT 1
        "#,
    )
    .bind(patient_id)
    .bind(date)
    .fetch_optional(db)
    .await?;
    Ok(row)
}
