use super::models::{PlantingCreate, PlantingRecord, PlantingResponse};
use super::services::record_planting;
use crate::common::errors::BusinessError;
use crate::common::state::AppState;
use crate::trays::ledger::TrayKey;
use crate::trays::models::{VarietySelection, VarietySelectionQuery};
use crate::trays::services::variety_selection;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use chrono::Local;
use utoipa_axum::{router::OpenApiRouter, routes};

pub fn router(state: &AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(list_plantings, create_planting))
        .routes(routes!(planting_options))
        .with_state(state.clone())
}

/// Planting history
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "All planting records", body = Vec<PlantingRecord>)
    ),
    tag = "plantings"
)]
pub async fn list_plantings(State(state): State<AppState>) -> Json<Vec<PlantingRecord>> {
    let nursery = state.nursery.lock().await;
    Json(nursery.plantings.clone())
}

/// Varieties and codes that can be planted
#[utoipa::path(
    get,
    path = "/options",
    params(VarietySelectionQuery),
    responses(
        (status = 200, description = "Cascading variety selection", body = VarietySelection),
        (status = 400, description = "Variety not in stock"),
        (status = 409, description = "No trays registered yet")
    ),
    tag = "plantings"
)]
pub async fn planting_options(
    State(state): State<AppState>,
    Query(query): Query<VarietySelectionQuery>,
) -> Result<Json<VarietySelection>, BusinessError> {
    let nursery = state.nursery.lock().await;
    variety_selection(&nursery.ledger, query.variety_name.as_deref()).map(Json)
}

/// Record a planting and take the used trays out of stock
#[utoipa::path(
    post,
    path = "/",
    request_body = PlantingCreate,
    responses(
        (status = 201, description = "Planting recorded", body = PlantingResponse),
        (status = 400, description = "Missing or invalid field"),
        (status = 409, description = "No trays registered yet"),
        (status = 500, description = "Planting history or tray stock could not be saved")
    ),
    tag = "plantings"
)]
pub async fn create_planting(
    State(state): State<AppState>,
    Json(payload): Json<PlantingCreate>,
) -> Result<(StatusCode, Json<PlantingResponse>), BusinessError> {
    let mut nursery = state.nursery.lock().await;
    let planting = record_planting(&mut nursery, payload, Local::now().date_naive())?;
    let remaining_trays = nursery.ledger.quantity_on_hand(&TrayKey::new(
        planting.variety_code.as_str(),
        planting.variety_name.as_str(),
    ));

    Ok((
        StatusCode::CREATED,
        Json(PlantingResponse {
            message: format!(
                "Planting of {} pots of variety {} recorded successfully!",
                planting.pots_planted, planting.variety_name
            ),
            planting,
            remaining_trays,
        }),
    ))
}
