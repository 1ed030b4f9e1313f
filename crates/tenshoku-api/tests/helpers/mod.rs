//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use tenshoku_api::{AppState, build_app, build_state};
use tenshoku_core::config::AppConfig;

/// Email of the seeded demo account.
pub const DEMO_EMAIL: &str = "test@example.com";
/// Password of the seeded demo account.
pub const DEMO_PASSWORD: &str = "password";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for direct inspection
    pub state: AppState,
}

impl TestApp {
    /// Create a test application over freshly seeded fixtures
    pub async fn new() -> Self {
        Self::with_config(AppConfig::default()).await
    }

    /// Create a test application with a custom configuration
    pub async fn with_config(config: AppConfig) -> Self {
        let state = build_state(config).await.expect("Failed to build state");
        let router = build_app(state.clone());
        Self { router, state }
    }

    /// Log in as the demo user and return the bearer token
    pub async fn login(&self) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({
                    "email": DEMO_EMAIL,
                    "password": DEMO_PASSWORD,
                })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed: {}", response.body);

        response.body["data"]["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        self.send_raw(method, path, body_str, token).await
    }

    /// Make an HTTP request with a raw (possibly malformed) body
    pub async fn send_raw(
        &self,
        method: &str,
        path: &str,
        body: String,
        token: Option<&str>,
    ) -> TestResponse {
        let authorization = token.map(|token| format!("Bearer {token}"));
        self.send(method, path, body, authorization.as_deref()).await
    }

    /// Make a bodiless GET request with an arbitrary `Authorization` header
    pub async fn get_with_authorization(&self, path: &str, authorization: &str) -> TestResponse {
        self.send("GET", path, String::new(), Some(authorization))
            .await
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        body: String,
        authorization: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(authorization) = authorization {
            req = req.header("Authorization", authorization);
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
