// API layer - HTTP endpoints
pub mod health;
pub mod polygons;

use std::sync::Arc;

pub use health::HealthApi;
pub use polygons::PolygonApi;
use poem::middleware::{Cors, Tracing};
use poem::{Endpoint, EndpointExt, Route};
use poem_openapi::error::ParseRequestPayloadError;
use poem_openapi::OpenApiService;

use crate::app_data::AppData;
use crate::errors::PolygonApiError;

/// Build the OpenAPI service for all API implementations
pub fn api_service(app_data: Arc<AppData>) -> OpenApiService<(HealthApi, PolygonApi), ()> {
    OpenApiService::new(
        (HealthApi::new(Arc::clone(&app_data)), PolygonApi::new(app_data)),
        "Polygon Manager API",
        env!("CARGO_PKG_VERSION"),
    )
}

/// Compose the full route tree
///
/// API under `/api`, Swagger UI under `/swagger`, wrapped in CORS and
/// request tracing. `cors_origin` of `*` allows any origin. Bodies that do
/// not deserialize get the same `validation_failed` JSON as rejected content.
pub fn build_routes(app_data: Arc<AppData>, public_url: &str, cors_origin: &str) -> impl Endpoint {
    let api_service = api_service(app_data).server(format!("{}/api", public_url));
    let ui = api_service.swagger_ui();

    let cors = if cors_origin == "*" {
        Cors::new()
    } else {
        Cors::new().allow_origin(cors_origin)
    };

    Route::new()
        .nest("/api", api_service)
        .nest("/swagger", ui)
        .catch_error(|err: ParseRequestPayloadError| async move {
            PolygonApiError::validation_failed(err.reason)
        })
        .with(cors)
        .with(Tracing)
}
