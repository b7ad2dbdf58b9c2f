use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;

use crate::support::app_builder::create_test_app;
use crate::support::test_state::build_test_state;

#[actix_web::test]
async fn health_reports_database() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get("x-request-id").is_some());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert!(body.get("db_error").is_none());
    assert_ne!(body["migrations"], "none");
    assert!(body["time"].as_str().is_some_and(|t| !t.is_empty()));

    Ok(())
}

#[actix_web::test]
async fn health_needs_no_token() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header(("Authorization", "Bearer not-a-jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
