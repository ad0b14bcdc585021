use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

/// One measurement per patient per date. BMI is derived at read time from
/// weight and height, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnthropometricRecord {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub recorded_on: Date,
    pub weight_kg: f64,
    pub height_cm: Option<f64>,
    pub notes: Option<String>,
    pub created_at: OffsetDateTime,
}

pub struct NewRecord<'a> {
    pub patient_id: Uuid,
    pub recorded_on: Date,
    pub weight_kg: f64,
    pub height_cm: Option<f64>,
    pub notes: Option<&'a str>,
}

/// Re-measuring on the same date replaces that date's record.
pub async fn upsert(db: &PgPool, record: NewRecord<'_>) -> anyhow::Result<AnthropometricRecord> {
    let row = sqlx::query_as::<_, AnthropometricRecord>(
        r#"
        INSERT INTO anthropometric_records (patient_id, recorded_on, weight_kg, height_cm, notes)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (patient_id, recorded_on)
        DO UPDATE SET weight_kg = EXCLUDED.weight_kg,
                      height_cm = EXCLUDED.height_cm,
                      notes = EXCLUDED.notes
        RETURNING id, patient_id, recorded_on, weight_kg, height_cm, notes, created_at
        "#,
    )
    .bind(record.patient_id)
    .bind(record.recorded_on)
    .bind(record.weight_kg)
    .bind(record.height_cm)
    .bind(record.notes)
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn list_by_patient(
    db: &PgPool,
    patient_id: Uuid,
) -> anyhow::Result<Vec<AnthropometricRecord>> {
    let rows = sqlx::query_as::<_, AnthropometricRecord>(
        r#"
        SELECT id, patient_id, recorded_on, weight_kg, height_cm, notes, created_at
        FROM anthropometric_records
        WHERE patient_id = $1
        ORDER BY recorded_on DESC
        "#,
    )
    .bind(patient_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}
