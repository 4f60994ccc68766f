use axum::{
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::{metrics, types::Health};

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod starred;

/// Base path the starred resource is mounted under.
pub const STARRED_BASE: &str = "/api/starred-restaurants";

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn metrics_handler() -> (axum::http::StatusCode, String) {
    metrics::encode_metrics()
}

/// Build the full application router: starred resource, health, metrics and
/// Swagger UI at `/docs` over `/api-docs/openapi.json`.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let starred_routes: Router<ServerState> = Router::new()
        .route("/", get(starred::list).post(starred::create))
        .route(
            "/:id",
            get(starred::get).put(starred::update_comment).delete(starred::delete),
        );

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics_handler))
        .nest(STARRED_BASE, starred_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
