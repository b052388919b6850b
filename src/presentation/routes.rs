//! Route definitions and middleware stack

use std::time::Duration;

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::presentation::controllers::{AppState, health_check, run_scan};
use crate::presentation::models::{ErrorResponse, HealthResponse, ScanResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::controllers::run_scan,
        crate::presentation::controllers::health_check
    ),
    components(schemas(
        crate::application::use_cases::ScanRequest,
        ScanResponse,
        ErrorResponse,
        HealthResponse
    )),
    tags(
        (name = "scan", description = "Segment discovery scan trigger"),
        (name = "health", description = "Service health monitoring")
    ),
    info(
        title = "netsweep API",
        description = "Triggers host-discovery scans of pre-configured network segments"
    )
)]
pub struct ApiDoc;

/// Builds the application router with routing, docs, and middleware.
pub fn create_router(state: AppState, config: &Config) -> Router {
    let cors = build_cors_layer(config);

    let mut router = Router::new()
        .route("/api/v1/scan", post(run_scan))
        .route("/health", get(health_check));

    if config.server.enable_docs {
        router =
            router.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.server.request_timeout_seconds,
                )))
                .layer(cors),
        )
        .with_state(state)
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    if config.server.allowed_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new().allow_origin(AllowOrigin::list(origins))
    }
}
