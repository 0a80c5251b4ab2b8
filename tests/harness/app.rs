use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
}

/// A POST with no `Content-Type` header.
pub fn bare_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .expect("build request")
}

pub fn form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("build request")
}

/// Form body for a complete new record.
pub fn record_form(name: &str, score: i64) -> String {
    format!("name={name}&address=1+Main+St&city=Springfield&country=US&pincode=12345&sat_score={score}")
}

pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

pub async fn send_json(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(router, request).await;
    let value = serde_json::from_str(&body)
        .unwrap_or_else(|e| panic!("expected JSON body, got {body:?}: {e}"));
    (status, value)
}

/// `(name, rank)` pairs from `GET /api/view-all-data`, in table order.
pub async fn ranks(router: &Router) -> Vec<(String, u64)> {
    let (status, body) = send_json(router, get("/api/view-all-data")).await;
    assert_eq!(status, StatusCode::OK);
    body["sat_scores"]
        .as_array()
        .expect("sat_scores array")
        .iter()
        .map(|r| {
            (
                r["name"].as_str().expect("name").to_string(),
                r["rank"].as_u64().expect("rank"),
            )
        })
        .collect()
}
