use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use tracing::{error, instrument, warn};
use uuid::Uuid;

use crate::state::AppState;

use super::dto::{CreateEntryRequest, DayQuery, DaySummaryResponse, EntryResponse};
use super::repo::{self, NewEntry};
use super::services::{self, LogEntryError};
use crate::nutrition::aggregate;

pub fn entry_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/patients/:patient_id/entries",
            get(list_entries).post(create_entry),
        )
        .route("/patients/:patient_id/entries/:id", delete(delete_entry))
}

pub fn day_routes() -> Router<AppState> {
    Router::new().route("/patients/:patient_id/days/:date", get(day_summary))
}

#[instrument(skip(state, body))]
pub async fn create_entry(
    State(state): State<AppState>,
    Path(patient_id): Path<Uuid>,
    Json(body): Json<CreateEntryRequest>,
) -> Result<(StatusCode, Json<EntryResponse>), (StatusCode, String)> {
    if body.quantity <= 0.0 || !body.quantity.is_finite() {
        return Err((StatusCode::BAD_REQUEST, "quantity must be positive".into()));
    }

    let computed = services::compute_entry(
        state.store.as_ref(),
        body.food_id,
        &body.measure_code,
        body.quantity,
    )
    .await
    .map_err(|e| match e {
        LogEntryError::FoodNotFound => (StatusCode::NOT_FOUND, "Food not found".into()),
        LogEntryError::Conversion(err) => {
            warn!(%patient_id, food_id = %body.food_id, error = %err, "conversion rejected");
            (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
        }
        LogEntryError::Store(err) => internal(err),
    })?;

    let entry = repo::insert(
        &state.db,
        NewEntry {
            patient_id,
            food_id: body.food_id,
            quantity: body.quantity,
            measure_code: body.measure_code,
            entry_date: body.entry_date,
            grams: computed.grams,
            totals: computed.totals,
        },
    )
    .await
    .map_err(internal)?;

    Ok((StatusCode::CREATED, Json(entry.into())))
}

#[instrument(skip(state))]
pub async fn list_entries(
    State(state): State<AppState>,
    Path(patient_id): Path<Uuid>,
    Query(q): Query<DayQuery>,
) -> Result<Json<Vec<EntryResponse>>, (StatusCode, String)> {
    let entries = repo::list_for_day(&state.db, patient_id, q.date)
        .await
        .map_err(internal)?;
    Ok(Json(entries.into_iter().map(EntryResponse::from).collect()))
}

#[instrument(skip(state))]
pub async fn delete_entry(
    State(state): State<AppState>,
    Path((patient_id, id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, (StatusCode, String)> {
    let removed = repo::delete(&state.db, patient_id, id)
        .await
        .map_err(internal)?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "Entry not found".into()))
    }
}

#[instrument(skip(state))]
pub async fn day_summary(
    State(state): State<AppState>,
    Path((patient_id, date)): Path<(Uuid, time::Date)>,
) -> Result<Json<DaySummaryResponse>, (StatusCode, String)> {
    let entries = repo::list_for_day(&state.db, patient_id, date)
        .await
        .map_err(internal)?;
    let entry_totals: Vec<_> = entries.iter().map(repo::FoodEntry::totals).collect();
    let totals = aggregate(&entry_totals);

    let prescription = state
        .store
        .get_active_prescription(patient_id, date)
        .await
        .map_err(|e| {
            error!(%patient_id, %date, error = %e, "active prescription lookup failed");
            internal(e)
        })?;

    let breakdown = services::adherence_breakdown(&totals, prescription.as_ref());

    Ok(Json(DaySummaryResponse {
        date,
        entry_count: entries.len(),
        totals,
        prescription_id: prescription.map(|rx| rx.id),
        adherence: breakdown.into(),
    }))
}

fn internal<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
