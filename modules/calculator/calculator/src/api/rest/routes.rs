use std::sync::Arc;

use abacus_errors::ErrorBody;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use utoipa::OpenApi;

use crate::api::rest::{dto, handlers};
use crate::domain::service::Service;

#[derive(OpenApi)]
#[openapi(
    info(title = "Abacus calculator API"),
    paths(
        handlers::calculate,
        handlers::history,
        handlers::status,
        handlers::hello,
    ),
    components(schemas(
        dto::CalculateRequest,
        dto::CalculateResponse,
        dto::CalculationDto,
        dto::StatusResponse,
        dto::HelloResponse,
        ErrorBody,
    )),
    tags((name = "Calculator", description = "Arithmetic with persisted history"))
)]
pub struct CalculatorApi;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(CalculatorApi::openapi())
}

pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        .route("/api/calculate", post(handlers::calculate))
        .route("/api/history", get(handlers::history))
        .route("/api/status", get(handlers::status))
        .route("/api/hello", get(handlers::hello))
        .route("/api/openapi.json", get(openapi_json))
        .layer(Extension(service))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_endpoint() {
        let doc = CalculatorApi::openapi();
        for path in ["/api/calculate", "/api/history", "/api/status", "/api/hello"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn openapi_has_error_schema() {
        let doc = CalculatorApi::openapi();
        let schemas = &doc.components.unwrap().schemas;
        assert!(schemas.contains_key("ErrorBody"));
        assert!(schemas.contains_key("CalculateRequest"));
    }
}
