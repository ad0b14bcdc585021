use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreatePrescriptionRequest {
    pub calories_kcal: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
    pub starts_on: Date,
    pub ends_on: Date,
}

#[derive(Debug, Serialize)]
pub struct PrescriptionResponse {
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

impl From<super::repo::Prescription> for PrescriptionResponse {
    fn from(rx: super::repo::Prescription) -> Self {
        Self {
            id: rx.id,
            patient_id: rx.patient_id,
            calories_kcal: rx.calories_kcal,
            protein_g: rx.protein_g,
            fat_g: rx.fat_g,
            carbs_g: rx.carbs_g,
            starts_on: rx.starts_on,
            ends_on: rx.ends_on,
            created_at: rx.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ActiveQuery {
    pub date: Date,
}
