use actix_web::http::StatusCode;
use actix_web::test;
use beqst::db::require_db;
use beqst::db::txn::SharedTxn;
use beqst::domain::LiabilityType;
use beqst::services::liabilities::LiabilityInput;
use beqst::services::{allocations, assets, beneficiaries, liabilities};
use serde_json::Value;

use crate::support::app_builder::{call_in_txn, create_test_app};
use crate::support::auth::bearer_header;
use crate::support::factory::{asset_input, beneficiary_input, seed_user};
use crate::support::test_state::{build_test_state, test_security};

#[actix_web::test]
async fn dashboard_without_estate_is_empty() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(require_db(&state)?).await?;
    let user = seed_user(shared.transaction()).await?;
    let auth = bearer_header(user.id, &user.email, &test_security());
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri("/api/dashboard")
        .insert_header(("Authorization", auth));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["estateId"].is_null());
    assert_eq!(body["netWorth"], 0.0);
    assert_eq!(body["completionPercentage"], 0);
    assert_eq!(body["nextAction"]["action"], "ADD_ASSET");
    assert_eq!(body["nextAction"]["href"], "/assets/new");

    shared.rollback().await?;
    Ok(())
}

#[actix_web::test]
async fn dashboard_totals_and_inheritance() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(require_db(&state)?).await?;
    let txn = shared.transaction();
    let user = seed_user(txn).await?;

    let house = assets::create(txn, user.id, asset_input("House", Some(200_000.0))).await?;
    assets::create(txn, user.id, asset_input("Car", Some(10_000.0))).await?;
    let alice = beneficiaries::create(txn, user.id, beneficiary_input("Alice")).await?;
    let bob = beneficiaries::create(txn, user.id, beneficiary_input("Bob")).await?;
    allocations::set(txn, user.id, house.id, alice.id, 50.0).await?;
    allocations::set(txn, user.id, house.id, bob.id, 25.0).await?;
    liabilities::create(
        txn,
        user.id,
        LiabilityInput {
            name: "Mortgage".to_string(),
            liability_type: LiabilityType::Mortgage,
            amount: Some(50_000.0),
            creditor: Some("Bank".to_string()),
            linked_asset_id: Some(house.id),
        },
    )
    .await?;

    let auth = bearer_header(user.id, &user.email, &test_security());
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri("/api/dashboard")
        .insert_header(("Authorization", auth));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["counts"]["assets"], 2);
    assert_eq!(body["counts"]["liabilities"], 1);
    assert_eq!(body["counts"]["beneficiaries"], 2);
    assert_eq!(body["counts"]["executors"], 0);
    assert_eq!(body["totalAssets"], 210_000.0);
    assert_eq!(body["totalLiabilities"], 50_000.0);
    assert_eq!(body["netWorth"], 160_000.0);
    assert_eq!(body["unallocated"], 60_000.0);

    let inheritance = body["inheritance"].as_array().expect("inheritance");
    assert_eq!(inheritance.len(), 2);
    assert_eq!(inheritance[0]["beneficiaryName"], "Alice");
    assert_eq!(inheritance[0]["amount"], 100_000.0);
    assert_eq!(inheritance[1]["beneficiaryName"], "Bob");
    assert_eq!(inheritance[1]["amount"], 50_000.0);

    assert_eq!(body["completionPercentage"], 65);
    assert_eq!(body["nextAction"]["action"], "ADD_EXECUTOR");
    assert_eq!(body["nextAction"]["label"], "Designate an executor");

    shared.rollback().await?;
    Ok(())
}
