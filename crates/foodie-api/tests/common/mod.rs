//! Shared helpers for router-level tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use foodie_api::{AppState, router};
use foodie_db::CatalogDb;
use serde_json::Value;
use tower::ServiceExt;

/// Five restaurants and four dishes.
pub const CATALOG_FIXTURE: &str = include_str!("../../../foodie-db/fixtures/catalog.sql");

pub const RESTAURANTS_TABLE: &str = "CREATE TABLE restaurants (
    id INTEGER PRIMARY KEY, name TEXT, cuisine TEXT,
    isVeg TEXT, hasOutdoorSeating TEXT, isLuxury TEXT, rating REAL);";

pub const DISHES_TABLE: &str =
    "CREATE TABLE dishes (id INTEGER PRIMARY KEY, name TEXT, price REAL, isVeg TEXT);";

/// Router over an in-memory catalog built from `sql`.
pub async fn app_with(sql: &str) -> Router {
    let db = CatalogDb::open_local(":memory:").await.expect("open catalog");
    db.conn().execute_batch(sql).await.expect("seed catalog");
    router(AppState::new(db))
}

/// Router over the shared fixture.
pub async fn seeded_app() -> Router {
    app_with(CATALOG_FIXTURE).await
}

/// Router over both tables with no rows.
pub async fn empty_app() -> Router {
    app_with(&format!("{RESTAURANTS_TABLE}\n{DISHES_TABLE}")).await
}

pub async fn get_raw(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    (status, body.to_vec())
}

/// Issue a GET and decode the JSON body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get_raw(app, uri).await;
    let payload = serde_json::from_slice(&body).expect("json payload");
    (status, payload)
}

/// Ids of every object in `payload[key]`.
pub fn ids(payload: &Value, key: &str) -> Vec<i64> {
    payload[key]
        .as_array()
        .expect("array payload")
        .iter()
        .map(|row| row["id"].as_i64().expect("integer id"))
        .collect()
}
