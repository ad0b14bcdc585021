use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::state::AppState;

use super::dto::{CreateRecordRequest, RecordResponse};
use super::repo::{self, NewRecord};

pub fn record_routes() -> Router<AppState> {
    Router::new().route(
        "/patients/:patient_id/anthropometrics",
        get(list_records).post(create_record),
    )
}

#[instrument(skip(state, body))]
pub async fn create_record(
    State(state): State<AppState>,
    Path(patient_id): Path<Uuid>,
    Json(body): Json<CreateRecordRequest>,
) -> Result<(StatusCode, Json<RecordResponse>), (StatusCode, String)> {
    if body.weight_kg <= 0.0 {
        return Err((StatusCode::BAD_REQUEST, "weight_kg must be positive".into()));
    }
    if body.height_cm.is_some_and(|h| h <= 0.0) {
        return Err((
            StatusCode::BAD_REQUEST,
            "height_cm must be positive when present".into(),
        ));
    }

    let record = repo::upsert(
        &state.db,
        NewRecord {
            patient_id,
            recorded_on: body.recorded_on,
            weight_kg: body.weight_kg,
            height_cm: body.height_cm,
            notes: body.notes.as_deref(),
        },
    )
    .await
    .map_err(internal)?;

    Ok((StatusCode::CREATED, Json(record.into())))
}

#[instrument(skip(state))]
pub async fn list_records(
    State(state): State<AppState>,
    Path(patient_id): Path<Uuid>,
) -> Result<Json<Vec<RecordResponse>>, (StatusCode, String)> {
    let records = repo::list_by_patient(&state.db, patient_id)
        .await
        .map_err(internal)?;
    Ok(Json(records.into_iter().map(RecordResponse::from).collect()))
}

fn internal<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
