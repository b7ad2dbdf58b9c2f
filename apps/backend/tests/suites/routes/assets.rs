use actix_web::http::StatusCode;
use actix_web::test;
use beqst::db::require_db;
use beqst::db::txn::SharedTxn;
use serde_json::{json, Value};

use crate::common::assert_problem_details_structure;
use crate::support::app_builder::{call_in_txn, create_test_app};
use crate::support::auth::bearer_header;
use crate::support::factory::seed_user;
use crate::support::test_state::{build_test_state, test_security};

#[actix_web::test]
async fn asset_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(require_db(&state)?).await?;
    let user = seed_user(shared.transaction()).await?;
    let auth = bearer_header(user.id, &user.email, &test_security());
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/assets")
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({
            "name": "  Family Home ",
            "category": "PROPERTY",
            "subType": "UK_PROPERTY",
            "value": 450000.0,
            "metadata": { "postcode": "AB1 2CD" }
        }));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["name"], "Family Home");
    assert_eq!(created["subType"], "UK_PROPERTY");
    assert_eq!(created["value"], 450000.0);
    assert_eq!(created["metadata"]["postcode"], "AB1 2CD");
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri("/api/assets")
        .insert_header(("Authorization", auth.clone()));
    let resp = call_in_txn(&app, &shared, req).await;
    let list: Value = test::read_body_json(resp).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["id"], id);
    assert_eq!(list[0]["allocations"], json!([]));
    assert_eq!(list[0]["allocatedPercentage"], 0.0);

    // null clears the value; absent fields stay as they were
    let req = test::TestRequest::patch()
        .uri(&format!("/api/assets/{id}"))
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "value": null, "name": "Cottage" }));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["name"], "Cottage");
    assert!(updated["value"].is_null());
    assert_eq!(updated["category"], "PROPERTY");
    assert_eq!(updated["metadata"]["postcode"], "AB1 2CD");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/assets/{id}"))
        .insert_header(("Authorization", auth.clone()));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": true }));

    let req = test::TestRequest::get()
        .uri(&format!("/api/assets/{id}"))
        .insert_header(("Authorization", auth));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_problem_details_structure(resp, 404, "ASSET_NOT_FOUND", "Asset not found").await;

    shared.rollback().await?;
    Ok(())
}

#[actix_web::test]
async fn asset_input_is_validated() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(require_db(&state)?).await?;
    let user = seed_user(shared.transaction()).await?;
    let auth = bearer_header(user.id, &user.email, &test_security());
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/assets")
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "name": "House", "category": "PROPERTY" }));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_problem_details_structure(
        resp,
        400,
        "BAD_REQUEST",
        "Invalid request: missing field `subType`",
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/assets")
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "name": "   ", "category": "PROPERTY", "subType": "UK_PROPERTY" }));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_problem_details_structure(resp, 400, "MISSING_FIELD", "Name is required").await;

    let req = test::TestRequest::post()
        .uri("/api/assets")
        .insert_header(("Authorization", auth))
        .set_json(json!({
            "name": "Debt",
            "category": "OTHER",
            "subType": "OTHER",
            "value": -5.0
        }));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_problem_details_structure(
        resp,
        400,
        "INVALID_AMOUNT",
        "Value must be a non-negative number",
    )
    .await;

    shared.rollback().await?;
    Ok(())
}

#[actix_web::test]
async fn lists_are_empty_before_any_estate_exists() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(require_db(&state)?).await?;
    let user = seed_user(shared.transaction()).await?;
    let auth = bearer_header(user.id, &user.email, &test_security());
    let app = create_test_app(state).with_prod_routes().build().await;

    for uri in [
        "/api/assets",
        "/api/liabilities",
        "/api/beneficiaries",
        "/api/executors",
        "/api/documents",
    ] {
        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(("Authorization", auth.clone()));
        let resp = call_in_txn(&app, &shared, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]), "{uri}");
    }

    shared.rollback().await?;
    Ok(())
}
