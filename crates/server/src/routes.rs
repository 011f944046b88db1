use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod assets;
pub mod favorites;
pub mod users;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = Health)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Build the route table: `/user/*`, `/assets/*`, health and API docs.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let user_routes = Router::new()
        .route("/create", post(users::user_create))
        .route("/delete/:user_id", delete(users::user_delete))
        .route("/list", get(users::user_list))
        .route("/favorite/add", post(favorites::user_favorite_add))
        .route("/favorite/remove/:user_id", delete(favorites::user_favorite_remove));

    let asset_routes = Router::new().route("/day_summary/:user_id", get(assets::day_summary));

    Router::new()
        .route("/health", get(health))
        .nest("/user", user_routes)
        .nest("/assets", asset_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
