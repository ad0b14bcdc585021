//! Estimated body-mass change from a sustained daily calorie deficit or
//! surplus.

use serde::{Deserialize, Serialize};

/// Energy density of body mass (kcal per kg of adipose tissue).
pub const KCAL_PER_KG_BODY_MASS: f64 = 7700.0;
/// Average weeks per month.
pub const WEEKS_PER_MONTH: f64 = 4.33;
/// ±10% band around the weekly estimate; metabolic adaptation makes a single
/// point estimate false precision.
const UNCERTAINTY_FRACTION: f64 = 0.10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightTrend {
    Loss,
    Gain,
    Neutral,
}

/// Projected magnitudes are always non-negative; direction lives in `trend`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightProjection {
    pub weekly_avg_kg: f64,
    pub weekly_min_kg: f64,
    pub weekly_max_kg: f64,
    pub monthly_kg: f64,
    pub trend: WeightTrend,
}

/// Project weekly/monthly mass change from a daily energy balance.
///
/// Negative input is a deficit (loss), positive a surplus (gain). Zero yields
/// an all-zero neutral result the caller should render as a placeholder, not
/// as "0.00 kg/week".
pub fn project(daily_deficit_kcal: f64) -> WeightProjection {
    if daily_deficit_kcal == 0.0 {
        return WeightProjection {
            weekly_avg_kg: 0.0,
            weekly_min_kg: 0.0,
            weekly_max_kg: 0.0,
            monthly_kg: 0.0,
            trend: WeightTrend::Neutral,
        };
    }

    let weekly_avg_kg = daily_deficit_kcal.abs() * 7.0 / KCAL_PER_KG_BODY_MASS;
    WeightProjection {
        weekly_avg_kg,
        weekly_min_kg: weekly_avg_kg * (1.0 - UNCERTAINTY_FRACTION),
        weekly_max_kg: weekly_avg_kg * (1.0 + UNCERTAINTY_FRACTION),
        monthly_kg: weekly_avg_kg * WEEKS_PER_MONTH,
        trend: if daily_deficit_kcal < 0.0 {
            WeightTrend::Loss
        } else {
            WeightTrend::Gain
        },
    }
}
