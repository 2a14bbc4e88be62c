use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::builder::TestBuilder;
use tower::ServiceExt;

use crate::server::test_support::{test_app, FakePaymentProcessor, StaticIdentityVerifier};


const ADMIN_TOKEN: &str = "admin-token";
const RIDER_TOKEN: &str = "rider-token";
const USER_TOKEN: &str = "user-token";

const ADMIN_EMAIL: &str = "admin@example.com";
const RIDER_EMAIL: &str = "rider@example.com";
const USER_EMAIL: &str = "sender@example.com";

/// Verifier accepting one token per role fixture.
fn verifier() -> StaticIdentityVerifier {
    StaticIdentityVerifier::new()
        .with_token(ADMIN_TOKEN, ADMIN_EMAIL)
        .with_token(RIDER_TOKEN, RIDER_EMAIL)
        .with_token(USER_TOKEN, USER_EMAIL)
}

/// Fresh in-memory database with every table.
async fn database() -> DatabaseConnection {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    test.db.unwrap()
}

fn app(db: &DatabaseConnection) -> Router {
    test_app(
        db.clone(),
        verifier(),
        Arc::new(FakePaymentProcessor::succeeding()),
    )
}

/// Sends one request and returns the status with the body parsed as JSON. Non-JSON
/// bodies come back as a JSON string.
async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    (status, body)
}

/// Creates a parcel through the API and returns its id.
async fn create_parcel(app: &Router, body: Value) -> String {
    let (status, created) = send(app, Method::POST, "/parcels", None, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    created["insertedId"].as_str().unwrap().to_string()
}

/// Liveness endpoint.
///
/// Expected: 200 with the plain-text banner
#[tokio::test]
async fn health_reports_running() {
    let db = database().await;
    let app = app(&db);

    let (status, body) = send(&app, Method::GET, "/", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Parcel Delivery Server is running..."));
}

/// A bearer token the verifier does not recognise.
///
/// Expected: 403 Forbidden
#[tokio::test]
async fn unknown_token_is_forbidden() {
    let db = database().await;
    let app = app(&db);

    let (status, body) = send(&app, Method::GET, "/parcels", Some("stranger-token"), None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["error"].is_string());
}
