use actix_web::http::StatusCode;
use actix_web::test;
use beqst::db::require_db;
use beqst::db::txn::SharedTxn;
use serde_json::Value;

use crate::common::{assert_problem_details_structure, assert_trace_id_matches};
use crate::support::app_builder::{call_in_txn, create_test_app};
use crate::support::auth::bearer_header;
use crate::support::factory::seed_user;
use crate::support::test_state::{build_test_state, test_security};

#[actix_web::test]
async fn malformed_json_is_problem_details() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(require_db(&state)?).await?;
    let user = seed_user(shared.transaction()).await?;
    let auth = bearer_header(user.id, &user.email, &test_security());
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/assets")
        .insert_header(("Authorization", auth.clone()))
        .insert_header(("Content-Type", "application/json"))
        .set_payload(r#"{"name": "House", "#);
    let resp = call_in_txn(&app, &shared, req).await;
    assert_problem_details_structure(
        resp,
        400,
        "BAD_REQUEST",
        "Invalid JSON: unexpected end of input",
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/assets")
        .insert_header(("Authorization", auth))
        .insert_header(("Content-Type", "application/json"))
        .set_payload(r#"{"name": "House", "category": "YACHT", "subType": "OTHER"}"#);
    let resp = call_in_txn(&app, &shared, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["detail"]
        .as_str()
        .is_some_and(|d| d.contains("unknown variant `YACHT`")));

    shared.rollback().await?;
    Ok(())
}

#[actix_web::test]
async fn error_body_carries_header_trace_id() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/api/assets").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let trace_id = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("trace id header");

    let body: Value = test::read_body_json(resp).await;
    assert_trace_id_matches(&body, &trace_id);
    assert_eq!(body["status"], 401);
    assert_eq!(
        body["type"],
        "https://beqst.app/errors/UNAUTHORIZED_MISSING_BEARER"
    );

    Ok(())
}

#[actix_web::test]
async fn responses_carry_security_headers() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.headers()
            .get("x-content-type-options")
            .and_then(|v| v.to_str().ok()),
        Some("nosniff")
    );

    Ok(())
}

#[actix_web::test]
async fn rollback_while_error_response_is_held() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(require_db(&state)?).await?;
    let user = seed_user(shared.transaction()).await?;
    let auth = bearer_header(user.id, &user.email, &test_security());
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri("/api/assets/999999")
        .insert_header(("Authorization", auth));
    let resp = call_in_txn(&app, &shared, req).await;

    // The response and the app are both still alive here
    shared.rollback().await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    drop(app);
    Ok(())
}

#[actix_web::test]
async fn non_numeric_ids_are_problem_details() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(require_db(&state)?).await?;
    let user = seed_user(shared.transaction()).await?;
    let auth = bearer_header(user.id, &user.email, &test_security());
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri("/api/assets/abc")
        .insert_header(("Authorization", auth.clone()));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_problem_details_structure(resp, 400, "INVALID_ID", "Invalid id: abc").await;

    let req = test::TestRequest::delete()
        .uri("/api/assets/1/allocations/bob")
        .insert_header(("Authorization", auth.clone()));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_problem_details_structure(resp, 400, "INVALID_ID", "Invalid id: bob").await;

    let req = test::TestRequest::delete()
        .uri("/api/executors/1.5")
        .insert_header(("Authorization", auth));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_problem_details_structure(resp, 400, "INVALID_ID", "Invalid id: 1.5").await;

    shared.rollback().await?;
    Ok(())
}
