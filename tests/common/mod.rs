//! Shared helpers for integration tests.
//!
//! Every helper builds on a fresh in-memory SQLite database with all
//! migrations applied, so tests never share state.

#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use sea_orm::ConnectOptions;
use sea_orm_migration::MigratorTrait;
use serde_json::Value;
use tower::ServiceExt;

use todo_expert::api::{create_router, AppState};
use todo_expert::errors::AppResult;
use todo_expert::infra::{Database, Migrator, WeatherSource};
use todo_expert::services::Services;
use todo_expert::Config;

pub const TEST_JWT_SECRET: &str = "test-secret-key-for-testing-only-32chars";
pub const TEST_WEATHER: &str = "Sunny";

/// Weather source that always reports the same weather
pub struct StubWeather;

#[async_trait]
impl WeatherSource for StubWeather {
    async fn today_weather(&self) -> AppResult<String> {
        Ok(TEST_WEATHER.to_string())
    }
}

pub fn test_config() -> Config {
    Config::new("sqlite::memory:", TEST_JWT_SECRET).expect("valid test config")
}

pub async fn test_database() -> Arc<Database> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let connection = sea_orm::Database::connect(options)
        .await
        .expect("in-memory sqlite");
    Migrator::up(&connection, None)
        .await
        .expect("migrations apply");

    Arc::new(Database::from_connection(connection))
}

pub async fn test_services() -> Services {
    test_services_with_database().await.0
}

/// Services plus the database behind them, for tests that edit rows directly
pub async fn test_services_with_database() -> (Services, Arc<Database>) {
    let database = test_database().await;
    let services =
        Services::from_connection(database.get_connection(), &test_config(), Arc::new(StubWeather));
    (services, database)
}

pub async fn test_app() -> Router {
    let database = test_database().await;
    let state = AppState::from_config(database, &test_config(), Arc::new(StubWeather));
    create_router(state)
}

/// Send a request through the router and decode the JSON body (if any)
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("valid request");

    let response = app.clone().oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    (status, json)
}

/// Log lines written by a test subscriber
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().expect("log buffer lock");
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Route this thread's tracing output into the buffer until the guard drops
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let logs = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .with_writer(move || logs.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
