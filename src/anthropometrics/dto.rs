use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::nutrition::{bmi, BmiCategory};

use super::repo::AnthropometricRecord;

#[derive(Debug, Deserialize)]
pub struct CreateRecordRequest {
    pub recorded_on: Date,
    pub weight_kg: f64,
    pub height_cm: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecordResponse {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub recorded_on: Date,
    pub weight_kg: f64,
    pub height_cm: Option<f64>,
    /// Derived; absent whenever height is absent.
    pub bmi: Option<f64>,
    pub bmi_category: Option<BmiCategory>,
    pub notes: Option<String>,
    pub created_at: OffsetDateTime,
}

impl From<AnthropometricRecord> for RecordResponse {
    fn from(r: AnthropometricRecord) -> Self {
        let derived = r.height_cm.and_then(|h| bmi(r.weight_kg, h));
        Self {
            id: r.id,
            patient_id: r.patient_id,
            recorded_on: r.recorded_on,
            weight_kg: r.weight_kg,
            height_cm: r.height_cm,
            bmi: derived.map(|v| (v * 100.0).round() / 100.0),
            bmi_category: derived.map(BmiCategory::classify),
            notes: r.notes,
            created_at: r.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(weight_kg: f64, height_cm: Option<f64>) -> AnthropometricRecord {
        AnthropometricRecord {
            id: Uuid::new_v4(),
            patient_id: Uuid::new_v4(),
            recorded_on: Date::from_calendar_date(2025, time::Month::June, 1).expect("date"),
            weight_kg,
            height_cm,
            notes: None,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn bmi_is_derived_and_classified() {
        let resp = RecordResponse::from(record(70.0, Some(175.0)));
        assert_eq!(resp.bmi, Some(22.86));
        assert_eq!(resp.bmi_category, Some(BmiCategory::Normal));
    }

    #[test]
    fn missing_height_yields_no_bmi() {
        let resp = RecordResponse::from(record(70.0, None));
        assert_eq!(resp.bmi, None);
        assert_eq!(resp.bmi_category, None);
    }
}
