#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

//! End-to-end: router + service + sea-orm on in-memory SQLite.

use abacus_bootstrap::{AppConfig, MEMORY_DSN};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use calculator::CalculatorModule;
use serde_json::{Value, json};
use tower::ServiceExt as _;

async fn setup(module_cfg: Option<Value>) -> (CalculatorModule, Router) {
    let mut app = AppConfig::default();
    app.database.dsn = MEMORY_DSN.to_owned();
    if let Some(cfg) = module_cfg {
        app.modules.insert("calculator".to_owned(), cfg);
    }

    let module = CalculatorModule::init(&app).await.expect("module init");
    let router = module.register_rest(Router::new());
    (module, router)
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn calculate(router: &Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/calculate")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

async fn history(router: &Router) -> Vec<Value> {
    let request = Request::builder()
        .uri("/api/history")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(router, request).await;
    assert_eq!(status, StatusCode::OK);
    json.as_array().unwrap().clone()
}

fn timestamps(items: &[Value]) -> Vec<chrono::DateTime<chrono::FixedOffset>> {
    items
        .iter()
        .map(|item| {
            chrono::DateTime::parse_from_rfc3339(item["timestamp"].as_str().unwrap()).unwrap()
        })
        .collect()
}

#[tokio::test]
async fn history_returns_newest_ten_in_order() {
    let (module, router) = setup(None).await;

    for i in 1..=12 {
        let (status, json) = calculate(
            &router,
            json!({"firstValue": i, "secondValue": 2, "operation": "*"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["result"], f64::from(i * 2));
    }

    let items = history(&router).await;
    assert_eq!(items.len(), 10);
    assert_eq!(items[0]["firstValue"], 12.0);
    assert_eq!(items[9]["firstValue"], 3.0);
    assert!(timestamps(&items).windows(2).all(|w| w[0] > w[1]));

    module.shutdown().await.unwrap();
}

#[tokio::test]
async fn history_shorter_than_limit_returns_everything() {
    let (module, router) = setup(None).await;
    assert!(history(&router).await.is_empty());

    for op in ["+", "-", "/"] {
        let (status, _) = calculate(
            &router,
            json!({"firstValue": 8, "secondValue": 4, "operation": op}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let items = history(&router).await;
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["operation"], "/");
    assert_eq!(items[0]["result"], 2.0);
    assert_eq!(items[2]["operation"], "+");
    assert!(items[0]["id"].as_i64().unwrap() > items[2]["id"].as_i64().unwrap());

    module.shutdown().await.unwrap();
}

#[tokio::test]
async fn rejected_requests_store_nothing() {
    let (module, router) = setup(None).await;

    let (status, _) = calculate(
        &router,
        json!({"firstValue": 1, "secondValue": 1, "operation": "+"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let rejected = [
        (
            json!({"firstValue": 9, "secondValue": 0, "operation": "/"}),
            "division_by_zero",
        ),
        (
            json!({"secondValue": 1, "operation": "+"}),
            "missing_parameters",
        ),
        (
            json!({"firstValue": 1, "secondValue": null, "operation": "+"}),
            "missing_parameters",
        ),
        (
            json!({"firstValue": "1", "secondValue": 1, "operation": "+"}),
            "invalid_number",
        ),
        (
            json!({"firstValue": 1, "secondValue": 1, "operation": "^"}),
            "invalid_operation",
        ),
        (
            json!({"firstValue": 1.0e308, "secondValue": 10, "operation": "*"}),
            "non_finite_result",
        ),
    ];

    for (body, code) in rejected {
        let (status, json) = calculate(&router, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], code);
    }

    assert_eq!(history(&router).await.len(), 1);
    module.shutdown().await.unwrap();
}

#[tokio::test]
async fn zero_operands_follow_module_config() {
    let (module, router) = setup(None).await;
    let (status, json) = calculate(
        &router,
        json!({"firstValue": 0, "secondValue": 5, "operation": "-"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"], -5.0);
    module.shutdown().await.unwrap();

    let (module, router) = setup(Some(json!({"reject_zero_operands": true}))).await;
    let (status, json) = calculate(
        &router,
        json!({"firstValue": 0, "secondValue": 5, "operation": "-"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Missing required parameters");
    assert!(history(&router).await.is_empty());
    module.shutdown().await.unwrap();
}

#[tokio::test]
async fn history_limit_is_configurable() {
    let (module, router) = setup(Some(json!({"history_limit": 2}))).await;
    for i in 0..4 {
        calculate(
            &router,
            json!({"firstValue": i, "secondValue": 1, "operation": "+"}),
        )
        .await;
    }
    assert_eq!(history(&router).await.len(), 2);
    module.shutdown().await.unwrap();
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (module, router) = setup(None).await;
    let request = Request::builder()
        .uri("/api/openapi.json")
        .body(Body::empty())
        .unwrap();

    let (status, json) = send(&router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["paths"]["/api/calculate"]["post"].is_object());
    module.shutdown().await.unwrap();
}
