use crate::common::state::AppState;
use crate::config::Config;
use crate::services::nursery::Nursery;
use crate::{discards, plantings, sowings, trays};
use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

pub fn build_router(nursery: Nursery, config: &Config) -> Router {
    #[derive(OpenApi)]
    #[openapi(info(
        title = "Nursery Stock API",
        description = "Seedling tray stock, sowing, planting and discard records"
    ))]
    struct ApiDoc;

    let app_state = AppState::new(nursery, config.clone());

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(crate::common::views::router(&app_state)) // Root routes
        .nest("/api/trays", trays::views::router(&app_state))
        .nest("/api/sowings", sowings::views::router(&app_state))
        .nest("/api/plantings", plantings::views::router(&app_state))
        .nest("/api/discards", discards::views::router(&app_state))
        .split_for_parts();

    router.merge(Scalar::with_url("/api/docs", api))
}
