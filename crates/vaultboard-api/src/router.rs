use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;

use utoipa::OpenApi as OpenApiT;
use utoipa_swagger_ui::SwaggerUi;

use crate::{AppState, handlers};

pub fn api_router<T: OpenApiT>(_state: AppState) -> Router<AppState> {
    let open_api = T::openapi();

    let vaults_router = Router::new().route("/", get(handlers::list_vaults));

    let builders_router = Router::new().route("/", get(handlers::list_builders));

    let leaderboard_router = Router::new()
        .route("/builders", get(handlers::builders_board))
        .route("/vaults", get(handlers::vaults_board))
        .route("/challenge", get(handlers::challenge_board))
        .route("/challenge/export", get(handlers::export_challenge_board))
        .route("/migrations", get(handlers::migrations_board));

    Router::new()
        .route("/health", get(health))
        .nest("/v1/vaults", vaults_router)
        .nest("/v1/builders", builders_router)
        .nest("/v1/leaderboard", leaderboard_router)
        .merge(SwaggerUi::new("/v1/docs").url("/v1/docs/openapi.json", open_api))
        .fallback(handler_404)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
