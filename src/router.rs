use axum::{Json, Router, extract::Request, routing::get};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info_span;
use utoipa::OpenApi;

use crate::{
    app_state::AppState,
    health::{self, HealthResponse},
    pages::{dtos, handlers},
    seo::{OpenGraph, OpenGraphImage, PageMetadata, TwitterCard},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::home,
        handlers::category,
        handlers::article,
        handlers::sitemap,
        health::health_check,
    ),
    components(schemas(
        dtos::HomePage,
        dtos::CategoryPage,
        dtos::ArticlePage,
        dtos::ArticleBody,
        dtos::ArticleCard,
        dtos::ErrorResponse,
        PageMetadata,
        OpenGraph,
        OpenGraphImage,
        TwitterCard,
        HealthResponse,
    )),
    tags(
        (name = "pages", description = "Page models for the BantuPilih site"),
        (name = "health", description = "Liveness of the service and its article store"),
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Every public route, with request tracing and `x-request-id` handling.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/kategori/{category}", get(handlers::category))
        .route("/artikel/{identifier}", get(handlers::article))
        .route("/sitemap.xml", get(handlers::sitemap))
        .route("/healthz", get(health::health_check))
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &Request| {
                        let request_id = request
                            .headers()
                            .get("x-request-id")
                            .and_then(|value| value.to_str().ok())
                            .unwrap_or("-");
                        info_span!(
                            "http_request",
                            method = %request.method(),
                            uri = %request.uri(),
                            request_id,
                        )
                    }),
                )
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}
