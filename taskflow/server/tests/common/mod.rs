use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, header};
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use taskflow_server::task::web::{TaskState, create_task_router};
use tower::ServiceExt;

/// Opens a private in-memory SQLite store with the schema applied.
///
/// The pool is capped at one connection because every SQLite in-memory
/// connection sees its own database.
pub async fn setup_db() -> anyhow::Result<DatabaseConnection> {
    // Allow multiple calls to init for tests.
    let _ = tracing_subscriber::fmt().try_init();

    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(options).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[allow(dead_code)]
pub fn create_test_router(db: DatabaseConnection) -> Router {
    create_task_router(Arc::new(TaskState { db: Arc::new(db) }))
}

#[allow(dead_code)]
pub async fn get_page(app: &Router) -> (Response<Body>, String) {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    send(app, request).await
}

#[allow(dead_code)]
pub async fn post_form(app: &Router, body: &str) -> (Response<Body>, String) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (Response<Body>, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let (parts, body) = response.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    let body_text = String::from_utf8(bytes.to_vec()).unwrap();
    (Response::from_parts(parts, Body::empty()), body_text)
}
