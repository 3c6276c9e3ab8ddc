//! Common test utilities for e2e tests
//!
//! Provides an application wired to a fresh in-memory SQLite database with
//! migrations applied, plus request helpers.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde::Serialize;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::util::ServiceExt;

use hero_powers_registry::infrastructure::driven_adapters::config::DatabaseConfig;
use hero_powers_registry::infrastructure::driven_adapters::database;
use hero_powers_registry::infrastructure::driving_adapters::api_rest::{self, AppState};

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub pool: SqlitePool,
}

impl TestApp {
    /// Create a new test application with a fresh in-memory database
    pub async fn new() -> Self {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
        };

        let pool = database::create_pool(&config)
            .await
            .expect("Failed to open test database");

        database::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let state = AppState::from_pool(pool.clone());
        let router = api_rest::router(state.clone());

        Self {
            router,
            state,
            pool,
        }
    }

    /// Send a request and return the status with the body parsed as JSON
    /// (`Value::Null` for an empty or non-JSON body)
    pub async fn request(&self, method: Method, uri: &str, body: Option<String>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }
        let request = builder
            .body(body.map_or_else(Body::empty, Body::from))
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post<T: Serialize>(&self, uri: &str, body: &T) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(serde_json::to_string(body).unwrap()))
            .await
    }

    /// Create a hero through the API and return its id
    pub async fn create_hero(&self, name: &str, super_name: &str) -> i64 {
        let (status, body) = self
            .post("/heroes", &CreateHeroRequest::new(name, super_name))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_i64().unwrap()
    }

    /// Create a power through the API and return its id
    pub async fn create_power(&self, name: &str, description: &str) -> i64 {
        let (status, body) = self
            .post("/powers", &CreatePowerRequest::new(name, description))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_i64().unwrap()
    }

    /// Link a hero to a power through the API and return the association id
    pub async fn create_hero_power(&self, hero_id: i64, power_id: i64, strength: &str) -> i64 {
        let (status, body) = self
            .post(
                "/hero_powers",
                &CreateHeroPowerRequest {
                    strength: strength.to_string(),
                    hero_id,
                    power_id,
                },
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_i64().unwrap()
    }

    /// Count rows in a table
    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}

/// Helper struct for creating hero request bodies
#[derive(Debug, Serialize)]
pub struct CreateHeroRequest {
    pub name: String,
    pub super_name: String,
}

impl CreateHeroRequest {
    pub fn new(name: &str, super_name: &str) -> Self {
        Self {
            name: name.to_string(),
            super_name: super_name.to_string(),
        }
    }
}

/// Helper struct for creating power request bodies
#[derive(Debug, Serialize)]
pub struct CreatePowerRequest {
    pub name: String,
    pub description: String,
}

impl CreatePowerRequest {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

/// Helper struct for creating hero power request bodies
#[derive(Debug, Serialize)]
pub struct CreateHeroPowerRequest {
    pub strength: String,
    pub hero_id: i64,
    pub power_id: i64,
}
