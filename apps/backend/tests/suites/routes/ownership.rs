use actix_web::test;
use beqst::db::require_db;
use beqst::db::txn::SharedTxn;
use beqst::services::{assets, beneficiaries, documents, executors};
use serde_json::json;

use crate::common::assert_problem_details_structure;
use crate::support::app_builder::{call_in_txn, create_test_app};
use crate::support::auth::bearer_header;
use crate::support::factory::{
    asset_input, beneficiary_input, document_input, executor_input, seed_user,
};
use crate::support::test_state::{build_test_state, test_security};

#[actix_web::test]
async fn other_users_records_are_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(require_db(&state)?).await?;
    let txn = shared.transaction();

    let owner = seed_user(txn).await?;
    let house = assets::create(txn, owner.id, asset_input("House", Some(1.0))).await?;
    let alice = beneficiaries::create(txn, owner.id, beneficiary_input("Alice")).await?;
    let exec = executors::create(txn, owner.id, executor_input("Eve")).await?;
    let will = documents::record(txn, owner.id, &owner.email, document_input("will.pdf", 10))
        .await?;

    // The intruder has an estate of their own
    let intruder = seed_user(txn).await?;
    let own_asset = assets::create(txn, intruder.id, asset_input("Car", None)).await?;
    let auth = bearer_header(intruder.id, &intruder.email, &test_security());
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/assets/{}", house.id))
        .insert_header(("Authorization", auth.clone()));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_problem_details_structure(resp, 404, "ASSET_NOT_FOUND", "Asset not found").await;

    let req = test::TestRequest::patch()
        .uri(&format!("/api/assets/{}", house.id))
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "name": "Mine now" }));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_problem_details_structure(resp, 404, "ASSET_NOT_FOUND", "Asset not found").await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/beneficiaries/{}", alice.id))
        .insert_header(("Authorization", auth.clone()));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_problem_details_structure(resp, 404, "BENEFICIARY_NOT_FOUND", "Beneficiary not found")
        .await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/executors/{}", exec.id))
        .insert_header(("Authorization", auth.clone()));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_problem_details_structure(resp, 404, "EXECUTOR_NOT_FOUND", "Executor not found").await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/documents/{}/access", will.id))
        .insert_header(("Authorization", auth.clone()));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_problem_details_structure(resp, 404, "DOCUMENT_NOT_FOUND", "Document not found").await;

    // Allocating the intruder's asset to someone else's beneficiary
    let req = test::TestRequest::put()
        .uri(&format!(
            "/api/assets/{}/allocations/{}",
            own_asset.id, alice.id
        ))
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "percentage": 10.0 }));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_problem_details_structure(resp, 404, "BENEFICIARY_NOT_FOUND", "Beneficiary not found")
        .await;

    let req = test::TestRequest::post()
        .uri("/api/liabilities")
        .insert_header(("Authorization", auth))
        .set_json(json!({
            "name": "Loan",
            "type": "LOAN",
            "amount": 100.0,
            "linkedAssetId": house.id
        }));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_problem_details_structure(
        resp,
        400,
        "INVALID_LINK",
        "Linked asset does not belong to this estate",
    )
    .await;

    // The owner's records survived
    assert!(assets::get(shared.transaction(), owner.id, house.id).await.is_ok());

    shared.rollback().await?;
    Ok(())
}
