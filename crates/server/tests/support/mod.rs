//! Shared fixtures: in-memory database, router wiring and request helpers.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use common::reporting::mock::RecordingReporter;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::Service;

use server::routes;
use server::state::{AiUpstream, ServerState};

pub struct TestApp {
    pub router: Router,
    pub db: DatabaseConnection,
    pub reporter: Arc<RecordingReporter>,
}

fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

/// Migrated in-memory database.
pub async fn test_db() -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(&DatabaseConfig::sqlite_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Router over `db` with a recording reporter; the catalog is bootstrapped
/// exactly as at startup.
pub async fn build_app_with(db: DatabaseConnection, ai_endpoint: &str) -> anyhow::Result<TestApp> {
    let reporter = Arc::new(RecordingReporter::default());
    let state = ServerState::from_db(db.clone(), AiUpstream::new(ai_endpoint), reporter.clone());
    state.catalog.bootstrap_or_report(state.reporter.as_ref()).await;
    let router = routes::build_router(state, cors());
    Ok(TestApp { router, db, reporter })
}

pub async fn build_app(ai_endpoint: &str) -> anyhow::Result<TestApp> {
    build_app_with(test_db().await?, ai_endpoint).await
}

pub fn post_json(uri: &str, body: &Value) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body)?))?)
}

pub fn get(uri: &str) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder().method("GET").uri(uri).body(Body::empty())?)
}

/// Send `req` through the router and decode the JSON body.
pub async fn send(app: &TestApp, req: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let resp = app.router.clone().call(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let json = serde_json::from_slice(&bytes)?;
    Ok((status, json))
}

/// Insert a user and return `(id, token)`.
pub async fn seed_user(db: &DatabaseConnection, name: &str) -> anyhow::Result<(i32, String)> {
    let token = format!("tok-{}", name.to_lowercase());
    let u = models::user::create(db, &format!("{}@example.com", name.to_lowercase()), name, &token).await?;
    Ok((u.id, token))
}
