use axum::body::Body;
use axum::http::{Request, StatusCode};
use taskflow_server::web::create_app;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn can_check_health_endpoint() {
    let db = common::setup_db().await.expect("Failed to setup test db");
    let app = create_app(db);

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(std::str::from_utf8(&body).unwrap(), "OK");
}

#[tokio::test]
async fn can_serve_task_page_from_application_router() {
    let db = common::setup_db().await.expect("Failed to setup test db");
    let app = create_app(db);

    let (response, body) = common::get_page(&app).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body.contains("TaskFlow"));
    assert!(body.contains("No tasks yet"));
}

#[tokio::test]
async fn can_reject_unsupported_method() {
    let db = common::setup_db().await.expect("Failed to setup test db");
    let app = create_app(db);

    let request = Request::builder()
        .method("DELETE")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
