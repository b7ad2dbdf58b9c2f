use actix_web::http::StatusCode;
use actix_web::test;
use beqst::db::require_db;
use beqst::db::txn::SharedTxn;
use beqst::services::{assets, beneficiaries};
use serde_json::{json, Value};

use crate::common::assert_problem_details_structure;
use crate::support::app_builder::{call_in_txn, create_test_app};
use crate::support::auth::bearer_header;
use crate::support::factory::{asset_input, beneficiary_input, seed_user};
use crate::support::test_state::{build_test_state, test_security};

#[actix_web::test]
async fn allocations_are_capped_at_one_hundred_percent() -> Result<(), Box<dyn std::error::Error>>
{
    let state = build_test_state().await?;
    let shared = SharedTxn::open(require_db(&state)?).await?;
    let txn = shared.transaction();
    let user = seed_user(txn).await?;
    let house = assets::create(txn, user.id, asset_input("House", Some(300_000.0))).await?;
    let alice = beneficiaries::create(txn, user.id, beneficiary_input("Alice")).await?;
    let bob = beneficiaries::create(txn, user.id, beneficiary_input("Bob")).await?;
    let auth = bearer_header(user.id, &user.email, &test_security());
    let app = create_test_app(state).with_prod_routes().build().await;

    let uri = |beneficiary_id: i64| format!("/api/assets/{}/allocations/{beneficiary_id}", house.id);

    let req = test::TestRequest::put()
        .uri(&uri(alice.id))
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "percentage": 60.0 }));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let allocation: Value = test::read_body_json(resp).await;
    assert_eq!(allocation["assetId"], house.id);
    assert_eq!(allocation["beneficiaryId"], alice.id);
    assert_eq!(allocation["percentage"], 60.0);

    let req = test::TestRequest::put()
        .uri(&uri(bob.id))
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "percentage": 50.0 }));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_problem_details_structure(
        resp,
        400,
        "ALLOCATION_EXCEEDS_TOTAL",
        "Allocations for this asset would total 110.00%, which exceeds 100%",
    )
    .await;

    // Replacing Alice's share does not count her old value
    let req = test::TestRequest::put()
        .uri(&uri(alice.id))
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "percentage": 50.0 }));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::put()
        .uri(&uri(bob.id))
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "percentage": 50.0 }));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/assets/{}", house.id))
        .insert_header(("Authorization", auth.clone()));
    let resp = call_in_txn(&app, &shared, req).await;
    let asset: Value = test::read_body_json(resp).await;
    assert_eq!(asset["allocatedPercentage"], 100.0);
    assert_eq!(asset["allocations"][0]["beneficiaryName"], "Alice");
    assert_eq!(asset["allocations"][1]["beneficiaryName"], "Bob");

    let req = test::TestRequest::get()
        .uri("/api/beneficiaries")
        .insert_header(("Authorization", auth.clone()));
    let resp = call_in_txn(&app, &shared, req).await;
    let list: Value = test::read_body_json(resp).await;
    assert_eq!(list[0]["totalInheritance"], 150_000.0);
    assert_eq!(list[0]["allocations"][0]["assetName"], "House");

    let req = test::TestRequest::delete()
        .uri(&uri(bob.id))
        .insert_header(("Authorization", auth.clone()));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri(&uri(bob.id))
        .insert_header(("Authorization", auth));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_problem_details_structure(resp, 404, "ALLOCATION_NOT_FOUND", "Allocation not found")
        .await;

    shared.rollback().await?;
    Ok(())
}

#[actix_web::test]
async fn percentage_must_be_positive() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(require_db(&state)?).await?;
    let txn = shared.transaction();
    let user = seed_user(txn).await?;
    let house = assets::create(txn, user.id, asset_input("House", None)).await?;
    let alice = beneficiaries::create(txn, user.id, beneficiary_input("Alice")).await?;
    let auth = bearer_header(user.id, &user.email, &test_security());
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/assets/{}/allocations/{}", house.id, alice.id))
        .insert_header(("Authorization", auth))
        .set_json(json!({ "percentage": 0 }));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_problem_details_structure(
        resp,
        400,
        "INVALID_PERCENTAGE",
        "Percentage must be greater than 0 and at most 100",
    )
    .await;

    shared.rollback().await?;
    Ok(())
}
