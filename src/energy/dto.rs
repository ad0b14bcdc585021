use serde::{Deserialize, Serialize};

use crate::nutrition::{
    bmi, energy::GoalKind, ActivityLevel, BmiCategory, EnergyTargets, Sex, WeightProjection,
};

#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub sex: Sex,
    /// Either a named level or a raw factor; the level wins when both are
    /// present.
    pub activity_level: Option<ActivityLevel>,
    pub activity_factor: Option<f64>,
    pub goal: GoalKind,
    pub protein_ratio_g_per_kg: f64,
    pub fat_percent_of_calories: f64,
}

impl EstimateRequest {
    pub fn resolved_activity_factor(&self) -> Option<f64> {
        self.activity_level
            .map(ActivityLevel::factor)
            .or(self.activity_factor)
    }
}

#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub bmr_kcal: f64,
    pub tdee_kcal: f64,
    pub target_kcal: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
    pub bmi: Option<f64>,
    pub bmi_category: Option<BmiCategory>,
    /// Absent for a maintenance goal; a zero-change projection is rendered
    /// as a placeholder, not as "0.00 kg/week".
    pub projection: Option<WeightProjection>,
}

impl EstimateResponse {
    pub fn new(
        request: &EstimateRequest,
        targets: EnergyTargets,
        projection: Option<WeightProjection>,
    ) -> Self {
        let round2 = |v: f64| (v * 100.0).round() / 100.0;
        let derived_bmi = bmi(request.weight_kg, request.height_cm);
        Self {
            bmr_kcal: round2(targets.bmr_kcal),
            tdee_kcal: round2(targets.tdee_kcal),
            target_kcal: round2(targets.target_kcal),
            protein_g: round2(targets.protein_g),
            fat_g: round2(targets.fat_g),
            carbs_g: round2(targets.carbs_g),
            bmi: derived_bmi.map(round2),
            bmi_category: derived_bmi.map(BmiCategory::classify),
            projection,
        }
    }
}
