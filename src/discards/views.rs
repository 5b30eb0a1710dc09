use super::models::{DiscardCreate, DiscardRecord, DiscardResponse};
use super::services::record_discard;
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
        .routes(routes!(list_discards, create_discard))
        .routes(routes!(discard_options))
        .with_state(state.clone())
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "All discard records", body = Vec<DiscardRecord>)
    ),
    tag = "discards"
)]
pub async fn list_discards(State(state): State<AppState>) -> Json<Vec<DiscardRecord>> {
    let nursery = state.nursery.lock().await;
    Json(nursery.discards.clone())
}

#[utoipa::path(
    get,
    path = "/options",
    params(VarietySelectionQuery),
    responses(
        (status = 200, description = "Cascading variety selection", body = VarietySelection),
        (status = 400, description = "Variety not in stock"),
        (status = 409, description = "No trays registered yet")
    ),
    tag = "discards"
)]
pub async fn discard_options(
    State(state): State<AppState>,
    Query(query): Query<VarietySelectionQuery>,
) -> Result<Json<VarietySelection>, BusinessError> {
    let nursery = state.nursery.lock().await;
    variety_selection(&nursery.ledger, query.variety_name.as_deref()).map(Json)
}

/// Record discarded trays or pots
#[utoipa::path(
    post,
    path = "/",
    request_body = DiscardCreate,
    responses(
        (status = 201, description = "Discard recorded", body = DiscardResponse),
        (status = 400, description = "Missing or invalid field"),
        (status = 409, description = "No trays registered yet"),
        (status = 500, description = "Discard history or tray stock could not be saved")
    ),
    tag = "discards"
)]
pub async fn create_discard(
    State(state): State<AppState>,
    Json(payload): Json<DiscardCreate>,
) -> Result<(StatusCode, Json<DiscardResponse>), BusinessError> {
    let mut nursery = state.nursery.lock().await;
    let discard = record_discard(&mut nursery, payload, Local::now().date_naive())?;
    let remaining_trays = nursery.ledger.quantity_on_hand(&TrayKey::new(
        discard.variety_code.as_str(),
        discard.variety_name.as_str(),
    ));

    Ok((
        StatusCode::CREATED,
        Json(DiscardResponse {
            message: format!(
                "{} {} of variety {} discarded successfully!",
                discard.quantity_discarded,
                discard.discard_type.label(),
                discard.variety_name
            ),
            discard,
            remaining_trays,
        }),
    ))
}
