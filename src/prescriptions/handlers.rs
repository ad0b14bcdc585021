use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::state::AppState;

use super::dto::{ActiveQuery, CreatePrescriptionRequest, PrescriptionResponse};
use super::repo::{self, NewPrescription};

pub fn prescription_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/patients/:patient_id/prescriptions",
            get(list_prescriptions).post(create_prescription),
        )
        .route(
            "/patients/:patient_id/prescriptions/active",
            get(active_prescription),
        )
}

#[instrument(skip(state, body))]
pub async fn create_prescription(
    State(state): State<AppState>,
    Path(patient_id): Path<Uuid>,
    Json(body): Json<CreatePrescriptionRequest>,
) -> Result<(StatusCode, Json<PrescriptionResponse>), (StatusCode, String)> {
    if body.calories_kcal <= 0.0 || body.protein_g < 0.0 || body.fat_g < 0.0 || body.carbs_g < 0.0 {
        return Err((
            StatusCode::BAD_REQUEST,
            "calories must be positive, macros non-negative".into(),
        ));
    }
    if body.ends_on < body.starts_on {
        return Err((
            StatusCode::BAD_REQUEST,
            "ends_on must not precede starts_on".into(),
        ));
    }

    let rx = repo::insert(
        &state.db,
        NewPrescription {
            patient_id,
            calories_kcal: body.calories_kcal,
            protein_g: body.protein_g,
            fat_g: body.fat_g,
            carbs_g: body.carbs_g,
            starts_on: body.starts_on,
            ends_on: body.ends_on,
        },
    )
    .await
    .map_err(internal)?;

    Ok((StatusCode::CREATED, Json(rx.into())))
}

#[instrument(skip(state))]
pub async fn list_prescriptions(
    State(state): State<AppState>,
    Path(patient_id): Path<Uuid>,
) -> Result<Json<Vec<PrescriptionResponse>>, (StatusCode, String)> {
    let rows = repo::list_by_patient(&state.db, patient_id)
        .await
        .map_err(internal)?;
    Ok(Json(rows.into_iter().map(PrescriptionResponse::from).collect()))
}

#[instrument(skip(state))]
pub async fn active_prescription(
    State(state): State<AppState>,
    Path(patient_id): Path<Uuid>,
    Query(q): Query<ActiveQuery>,
) -> Result<Json<PrescriptionResponse>, (StatusCode, String)> {
    match repo::active_for_date(&state.db, patient_id, q.date)
        .await
        .map_err(internal)?
    {
        Some(rx) => Ok(Json(rx.into())),
        None => Err((
            StatusCode::NOT_FOUND,
            "No active prescription for that date".into(),
        )),
    }
}

fn internal<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
