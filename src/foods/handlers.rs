use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::{error, instrument};
use uuid::Uuid;

use crate::state::AppState;

use super::dto::{CreateFoodRequest, FoodResponse, FoodSearch, PutOverrideRequest};
use super::repo::{self, HouseholdMeasure, NewFood};

pub fn food_routes() -> Router<AppState> {
    Router::new()
        .route("/foods", get(list_foods).post(create_food))
        .route("/foods/:id", get(get_food))
        .route("/foods/:id/measures/:code", put(put_override))
}

pub fn measure_routes() -> Router<AppState> {
    Router::new().route("/measures", get(list_measures))
}

#[instrument(skip(state))]
pub async fn list_foods(
    State(state): State<AppState>,
    Query(q): Query<FoodSearch>,
) -> Result<Json<Vec<FoodResponse>>, (StatusCode, String)> {
    let foods = repo::list(&state.db, q.search.as_deref(), q.limit, q.offset)
        .await
        .map_err(internal)?;
    Ok(Json(foods.into_iter().map(FoodResponse::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_food(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FoodResponse>, (StatusCode, String)> {
    match repo::get(&state.db, id).await.map_err(internal)? {
        Some(food) => Ok(Json(food.into())),
        None => Err((StatusCode::NOT_FOUND, "Food not found".into())),
    }
}

#[instrument(skip(state, body))]
pub async fn create_food(
    State(state): State<AppState>,
    Json(body): Json<CreateFoodRequest>,
) -> Result<(StatusCode, Json<FoodResponse>), (StatusCode, String)> {
    if body.name.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "name must be non-empty".into()));
    }
    if body.protein_g < 0.0
        || body.carbs_g < 0.0
        || body.fat_g < 0.0
        || body.fiber_g.is_some_and(|v| v < 0.0)
        || body.sodium_mg.is_some_and(|v| v < 0.0)
        || body.calories_kcal < 0.0
    {
        return Err((
            StatusCode::BAD_REQUEST,
            "nutrient values must be non-negative".into(),
        ));
    }

    let food = repo::insert(
        &state.db,
        NewFood {
            name: body.name.trim(),
            food_group: &body.food_group,
            calories_kcal: body.calories_kcal,
            protein_g: body.protein_g,
            carbs_g: body.carbs_g,
            fat_g: body.fat_g,
            fiber_g: body.fiber_g,
            sodium_mg: body.sodium_mg,
            source: &body.source,
        },
    )
    .await
    .map_err(internal)?;

    Ok((StatusCode::CREATED, Json(food.into())))
}

#[instrument(skip(state))]
pub async fn list_measures(
    State(state): State<AppState>,
) -> Result<Json<Vec<HouseholdMeasure>>, (StatusCode, String)> {
    let measures = repo::list_measures(&state.db).await.map_err(internal)?;
    Ok(Json(measures))
}

#[instrument(skip(state))]
pub async fn put_override(
    State(state): State<AppState>,
    Path((id, code)): Path<(Uuid, String)>,
    Json(body): Json<PutOverrideRequest>,
) -> Result<StatusCode, (StatusCode, String)> {
    if body.grams_per_unit <= 0.0 {
        return Err((
            StatusCode::BAD_REQUEST,
            "grams_per_unit must be positive".into(),
        ));
    }
    if repo::get(&state.db, id).await.map_err(internal)?.is_none() {
        return Err((StatusCode::NOT_FOUND, "Food not found".into()));
    }
    if repo::get_measure(&state.db, &code)
        .await
        .map_err(internal)?
        .is_none()
    {
        error!(%id, code, "override for unknown measure");
        return Err((StatusCode::NOT_FOUND, "Measure not found".into()));
    }

    repo::upsert_override(&state.db, id, &code, body.grams_per_unit)
        .await
        .map_err(internal)?;
    Ok(StatusCode::NO_CONTENT)
}

fn internal<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
