use super::models::{SowingCreate, SowingRecord, SowingResponse};
use super::services::record_sowing;
use crate::common::errors::BusinessError;
use crate::common::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use chrono::Local;
use utoipa_axum::{router::OpenApiRouter, routes};

pub fn router(state: &AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(list_sowings, create_sowing))
        .with_state(state.clone())
}

/// Sowing history
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "All sowing records", body = Vec<SowingRecord>)
    ),
    tag = "sowings"
)]
pub async fn list_sowings(State(state): State<AppState>) -> Json<Vec<SowingRecord>> {
    let nursery = state.nursery.lock().await;
    Json(nursery.sowings.clone())
}

#[utoipa::path(
    post,
    path = "/",
    request_body = SowingCreate,
    responses(
        (status = 201, description = "Sowing recorded", body = SowingResponse),
        (status = 400, description = "Missing field or variety code not in CFxxxx format"),
        (status = 500, description = "Sowing history could not be saved")
    ),
    tag = "sowings"
)]
pub async fn create_sowing(
    State(state): State<AppState>,
    Json(payload): Json<SowingCreate>,
) -> Result<(StatusCode, Json<SowingResponse>), BusinessError> {
    let mut nursery = state.nursery.lock().await;
    let sowing = record_sowing(&mut nursery, payload, Local::now().date_naive())?;

    Ok((
        StatusCode::CREATED,
        Json(SowingResponse {
            message: format!(
                "Sowing record for variety {} added successfully!",
                sowing.variety_name
            ),
            sowing,
        }),
    ))
}
