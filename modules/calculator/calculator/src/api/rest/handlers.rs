use std::sync::Arc;

use abacus_errors::{finalize, ApiError, ErrorBody};
use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::{extract::Extension, Json};
use chrono::Utc;
use tracing::debug;

use crate::domain::service::Service;
use crate::errors::ErrorCode;

use super::dto::{
    CalculateRequest, CalculateResponse, CalculationDto, HelloResponse, StatusResponse,
};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// The `x-request-id` set by the gateway, echoed back in error bodies.
pub struct RequestId(pub Option<String>);

impl<S: Send + Sync> FromRequestParts<S> for RequestId {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(
            parts
                .headers
                .get(REQUEST_ID_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned),
        ))
    }
}

/// Compute one calculation and record it in the history.
///
/// # Errors
/// 400 for rejected input or an unreadable body, 500 when storage fails.
#[utoipa::path(
    post,
    path = "/api/calculate",
    tag = "Calculator",
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Calculation result", body = CalculateResponse),
        (status = 400, description = "Invalid input", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn calculate(
    Extension(svc): Extension<Arc<Service>>,
    RequestId(request_id): RequestId,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<CalculateResponse>, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        debug!(error = %rejection, "calculate body rejected");
        finalize(ErrorCode::MALFORMED_BODY.as_error(), request_id.clone())
    })?;

    let record = svc
        .calculate(req.into())
        .await
        .map_err(|e| finalize(e.into(), request_id))?;

    Ok(Json(CalculateResponse {
        result: record.result,
    }))
}

/// Most recent calculations, newest first.
///
/// # Errors
/// 500 when storage fails.
#[utoipa::path(
    get,
    path = "/api/history",
    tag = "Calculator",
    responses(
        (status = 200, description = "Recent calculations", body = Vec<CalculationDto>),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn history(
    Extension(svc): Extension<Arc<Service>>,
    RequestId(request_id): RequestId,
) -> Result<Json<Vec<CalculationDto>>, ApiError> {
    let records = svc
        .history()
        .await
        .map_err(|e| finalize(e.into(), request_id))?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/status",
    tag = "Calculator",
    responses((status = 200, description = "Server is up", body = StatusResponse))
)]
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_owned(),
        timestamp: Utc::now(),
    })
}

#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "Calculator",
    responses((status = 200, description = "Greeting", body = HelloResponse))
)]
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello from API!".to_owned(),
    })
}
