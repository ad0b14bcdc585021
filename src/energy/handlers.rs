use axum::{http::StatusCode, routing::post, Json, Router};
use tracing::instrument;

use crate::nutrition::{calculate_targets, energy::GoalKind, project, EnergyInput};
use crate::state::AppState;

use super::dto::{EstimateRequest, EstimateResponse};

pub fn estimate_routes() -> Router<AppState> {
    Router::new().route("/energy/estimate", post(estimate))
}

/// Target-energy estimate: pure computation, no persistence. The result can
/// seed a new prescription but saving it is a separate call.
#[instrument(skip(body))]
pub async fn estimate(
    Json(body): Json<EstimateRequest>,
) -> Result<Json<EstimateResponse>, (StatusCode, String)> {
    let Some(activity_factor) = body.resolved_activity_factor() else {
        return Err((
            StatusCode::BAD_REQUEST,
            "activity_level or activity_factor is required".into(),
        ));
    };
    if activity_factor <= 0.0 {
        return Err((
            StatusCode::BAD_REQUEST,
            "activity_factor must be positive".into(),
        ));
    }
    if body.protein_ratio_g_per_kg < 0.0 {
        return Err((
            StatusCode::BAD_REQUEST,
            "protein_ratio_g_per_kg must be non-negative".into(),
        ));
    }
    if !(0.0..=100.0).contains(&body.fat_percent_of_calories) {
        return Err((
            StatusCode::BAD_REQUEST,
            "fat_percent_of_calories must be within 0..=100".into(),
        ));
    }

    let input = EnergyInput {
        weight_kg: body.weight_kg,
        height_cm: body.height_cm,
        age_years: body.age_years,
        sex: body.sex,
        activity_factor,
        goal: body.goal,
        protein_ratio_g_per_kg: body.protein_ratio_g_per_kg,
        fat_percent_of_calories: body.fat_percent_of_calories,
    };

    // The engine returns a sentinel for bad biometrics; an explicit estimate
    // request on bad input is a client error here.
    let Some(targets) = calculate_targets(&input) else {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            "weight_kg and height_cm must be positive".into(),
        ));
    };

    let projection = match body.goal {
        GoalKind::Maintain => None,
        _ => Some(project(targets.target_kcal - targets.tdee_kcal)),
    };

    Ok(Json(EstimateResponse::new(&body, targets, projection)))
}
