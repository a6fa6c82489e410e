//! Integration tests for the API server.

use std::sync::OnceLock;

use axum::body::Body;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_METHOD,
    CONTENT_TYPE, ORIGIN,
};
use axum::http::{Request, Response, StatusCode};
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tower::ServiceExt;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

fn get_metrics_handle() -> PrometheusHandle {
    METRICS_HANDLE
        .get_or_init(|| {
            let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
            builder
                .install_recorder()
                .expect("failed to install Prometheus recorder")
        })
        .clone()
}

fn setup() -> axum::Router {
    let state = product_api::create_default_state();
    product_api::create_app(state, get_metrics_handle())
}

async fn get(app: axum::Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header(ORIGIN, "https://shop.example.com")
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[tokio::test]
async fn test_health_check() {
    let response = get(setup(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "application/json");

    let body = body_bytes(response).await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_list_products() {
    let response = get(setup(), "/products").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "application/json");

    let body = body_bytes(response).await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let products = json.as_array().expect("products should be an array");
    assert_eq!(products.len(), 3);

    let ids: Vec<u64> = products.iter().map(|p| p["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let names: Vec<&str> = products
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Dog Food", "Cat Food", "Bird Seeds"]);

    let prices: Vec<f64> = products
        .iter()
        .map(|p| p["price"].as_f64().unwrap())
        .collect();
    assert_eq!(prices, vec![19.99, 34.99, 10.99]);

    for product in products {
        let keys: Vec<&String> = product.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3);
    }
}

#[tokio::test]
async fn test_list_products_is_idempotent() {
    let app = setup();

    let first = body_bytes(get(app.clone(), "/products").await).await;
    let _ = get(app.clone(), "/health").await;
    let second = body_bytes(get(app.clone(), "/products").await).await;
    let third = body_bytes(get(app, "/products").await).await;

    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[tokio::test]
async fn test_unknown_route_returns_not_found() {
    let response = get(setup(), "/orders").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_returns_method_not_allowed() {
    let response = setup()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/products")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_cors_header_on_get_routes() {
    for uri in ["/products", "/health"] {
        let response = get(setup(), uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN],
            "*",
            "missing CORS header on {uri}"
        );
    }
}

#[tokio::test]
async fn test_cors_header_on_unknown_route() {
    let response = get(setup(), "/nope").await;
    assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn test_cors_preflight_allows_only_get() {
    let response = setup()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/products")
                .header(ORIGIN, "https://shop.example.com")
                .header(ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_METHODS], "GET");
}

#[tokio::test]
async fn test_metrics_endpoint_reports_counters() {
    let app = setup();
    let _ = get(app.clone(), "/products").await;
    let _ = get(app.clone(), "/health").await;

    let response = get(app, "/metrics").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain")
    );

    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(body.contains("catalog_listings_total"));
    assert!(body.contains("health_checks_total"));
}

#[tokio::test]
async fn test_serves_over_tcp() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    let server = tokio::spawn(product_api::server::serve_with_shutdown(
        listener,
        setup(),
        async move {
            let _ = shutdown_rx.await;
        },
    ));

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    let raw = String::from_utf8(raw).unwrap();

    assert!(raw.starts_with("HTTP/1.1 200 OK"), "unexpected response: {raw}");
    assert!(raw.contains(r#"{"status":"healthy"}"#));

    shutdown_tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}
