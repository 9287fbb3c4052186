//! Database and router fixtures
//!
//! Every `TestApp` gets its own in-memory SQLite database, so tests are
//! isolated without any cleanup.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use kanban_board::backend::routes::create_router;
use kanban_board::backend::server::config::connect_database;
use kanban_board::backend::server::AppState;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use super::auth_helpers::{auth_header, token_for, TEST_SECRET};

/// Create an in-memory pool with the schema applied
pub async fn create_test_pool() -> SqlitePool {
    connect_database("sqlite::memory:", 1)
        .await
        .expect("Failed to create test database pool")
}

/// Status and parsed JSON body of a response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// The full router over a fresh database
pub struct TestApp {
    router: Router,
    pool: SqlitePool,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = create_test_pool().await;
        let router = create_router(AppState::new(pool.clone(), TEST_SECRET));
        Self { router, pool }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Send a request with an optional bearer token and JSON body
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, auth_header(token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        TestResponse { status, body }
    }

    /// Send a request authenticated as `user_id`
    pub async fn send_as(
        &self,
        user_id: &str,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> TestResponse {
        let token = token_for(user_id);
        self.send(method, uri, Some(&token), body).await
    }
}
