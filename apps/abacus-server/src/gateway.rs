//! HTTP gateway: health route, middleware stack, serve loop.

use std::time::Duration;

use abacus_bootstrap::ServerConfig;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue, Method, StatusCode, header};
use axum::routing::get;
use axum::Router;
use calculator::CalculatorModule;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::field::Empty;
use tracing::{info, warn};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Health route plus every module route, wrapped in the middleware stack.
pub fn build_router(cfg: &ServerConfig, module: &CalculatorModule) -> Router {
    let router = Router::new().route("/healthz", get(|| async { "ok" }));
    let router = module.register_rest(router);
    apply_middleware_stack(router, cfg)
}

/// Requests flow outermost to innermost:
/// `SetRequestId` → `PropagateRequestId` → Trace → Timeout → `BodyLimit` → CORS → Router.
fn apply_middleware_stack(mut router: Router, cfg: &ServerConfig) -> Router {
    // 5) CORS
    if let Some(cors) = build_cors_layer(&cfg.cors_allowed_origins) {
        router = router.layer(cors);
    }

    // 4) Body limit
    router = router.layer(RequestBodyLimitLayer::new(cfg.body_limit_bytes));
    router = router.layer(DefaultBodyLimit::max(cfg.body_limit_bytes));

    // 3) Timeout
    router = router.layer(TimeoutLayer::with_status_code(
        StatusCode::GATEWAY_TIMEOUT,
        Duration::from_secs(cfg.request_timeout_secs),
    ));

    // 2) Trace
    router = apply_trace_layer(router);

    // 1) Request id: set if absent, echo on the response
    let x_request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));
    router.layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
}

fn apply_trace_layer(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &axum::http::Request<axum::body::Body>| {
                let rid = req
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("n/a");

                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    request_id = %rid,
                    status = Empty,
                    latency_ms = Empty,
                )
            })
            .on_response(
                |res: &axum::http::Response<axum::body::Body>,
                 latency: Duration,
                 span: &tracing::Span| {
                    span.record("status", res.status().as_u16());
                    span.record("latency_ms", latency.as_millis());
                },
            ),
    )
}

/// CORS layer for the configured origins; `None` when CORS is off.
fn build_cors_layer(origins: &[String]) -> Option<CorsLayer> {
    if origins.is_empty() {
        return None;
    }

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)]);

    if origins.iter().any(|o| o == "*") {
        warn!(
            "CORS is configured with cors_allowed_origins=['*']. \
             Any website can call the API."
        );
        return Some(layer.allow_origin(Any));
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();
    Some(layer.allow_origin(origins))
}

/// Serve until `cancel` fires, then drain in-flight requests.
pub async fn serve(
    listener: TcpListener,
    router: Router,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    info!("HTTP server bound on {}", listener.local_addr()?);

    let shutdown = async move {
        cancel.cancelled().await;
        info!("HTTP server shutting down gracefully (cancellation)");
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
