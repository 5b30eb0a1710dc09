use super::models::{TrayPurchaseCreate, TrayPurchaseResponse, TrayStock};
use super::services::purchase_trays;
use crate::common::errors::BusinessError;
use crate::common::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use utoipa_axum::{router::OpenApiRouter, routes};

pub fn router(state: &AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(list_trays, create_tray))
        .with_state(state.clone())
}

/// Trays currently in stock, in purchase order
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Trays in stock", body = Vec<TrayStock>)
    ),
    tag = "trays"
)]
pub async fn list_trays(State(state): State<AppState>) -> Json<Vec<TrayStock>> {
    let nursery = state.nursery.lock().await;
    Json(nursery.ledger.rows().to_vec())
}

/// Register a tray purchase
#[utoipa::path(
    post,
    path = "/",
    request_body = TrayPurchaseCreate,
    responses(
        (status = 201, description = "Tray purchase registered", body = TrayPurchaseResponse),
        (status = 400, description = "Missing or invalid field"),
        (status = 500, description = "Tray stock could not be saved")
    ),
    tag = "trays"
)]
pub async fn create_tray(
    State(state): State<AppState>,
    Json(payload): Json<TrayPurchaseCreate>,
) -> Result<(StatusCode, Json<TrayPurchaseResponse>), BusinessError> {
    let mut nursery = state.nursery.lock().await;
    let tray = purchase_trays(&mut nursery, payload)?;

    Ok((
        StatusCode::CREATED,
        Json(TrayPurchaseResponse {
            message: format!("Tray with code {} added successfully!", tray.code),
            tray,
        }),
    ))
}
