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
async fn record_view_and_delete_document() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(require_db(&state)?).await?;
    let user = seed_user(shared.transaction()).await?;
    let house = assets::create(shared.transaction(), user.id, asset_input("House", Some(1.0)))
        .await?;
    let auth = bearer_header(user.id, &user.email, &test_security());
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/documents")
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({
            "fileName": "deed.pdf",
            "fileSize": 2048,
            "documentType": "DEED",
            "linkType": "ASSET",
            "linkId": house.id
        }));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let doc: Value = test::read_body_json(resp).await;
    let doc_id = doc["id"].as_i64().expect("document id");
    assert_eq!(doc["name"], "deed.pdf");
    assert_eq!(doc["fileType"], "application/pdf");
    assert_eq!(doc["assetId"], house.id);
    let url = doc["fileUrl"].as_str().expect("file url");
    assert!(url.starts_with("/uploads/"));
    assert!(url.ends_with("/deed.pdf"));

    let req = test::TestRequest::post()
        .uri(&format!("/api/documents/{doc_id}/access"))
        .insert_header(("Authorization", auth.clone()));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri("/api/documents")
        .insert_header(("Authorization", auth.clone()));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let list: Value = test::read_body_json(resp).await;
    let listed = &list[0];
    assert_eq!(listed["asset"]["name"], "House");
    assert!(listed["beneficiary"].is_null());
    let actions: Vec<&str> = listed["accessLogs"]
        .as_array()
        .expect("access logs")
        .iter()
        .filter_map(|l| l["action"].as_str())
        .collect();
    assert_eq!(actions.len(), 2);
    assert!(actions.contains(&"UPLOAD"));
    assert!(actions.contains(&"VIEW"));
    assert_eq!(listed["accessLogs"][0]["accessedBy"], user.email.as_str());

    let req = test::TestRequest::delete()
        .uri(&format!("/api/documents/{doc_id}"))
        .insert_header(("Authorization", auth.clone()));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);

    let req = test::TestRequest::post()
        .uri(&format!("/api/documents/{doc_id}/access"))
        .insert_header(("Authorization", auth));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_problem_details_structure(resp, 404, "DOCUMENT_NOT_FOUND", "Document not found").await;

    shared.rollback().await?;
    Ok(())
}

#[actix_web::test]
async fn invalid_links_are_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(require_db(&state)?).await?;
    let user = seed_user(shared.transaction()).await?;
    let auth = bearer_header(user.id, &user.email, &test_security());
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/documents")
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "fileName": "id.png", "linkType": "BENEFICIARY" }));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_problem_details_structure(
        resp,
        400,
        "INVALID_LINK",
        "linkId is required when linkType is BENEFICIARY",
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/documents")
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "fileName": "id.png", "linkType": "EXECUTOR", "linkId": 987654 }));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_problem_details_structure(
        resp,
        400,
        "INVALID_LINK",
        "Linked executor does not belong to this estate",
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/documents")
        .insert_header(("Authorization", auth))
        .set_json(json!({ "fileName": "id.png", "linkType": "SPACESHIP" }));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    shared.rollback().await?;
    Ok(())
}

#[actix_web::test]
async fn storage_and_linkage_reports() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(require_db(&state)?).await?;
    let user = seed_user(shared.transaction()).await?;
    let house = assets::create(shared.transaction(), user.id, asset_input("House", None)).await?;
    let alice =
        beneficiaries::create(shared.transaction(), user.id, beneficiary_input("Alice")).await?;
    let auth = bearer_header(user.id, &user.email, &test_security());
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/documents")
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({
            "name": "Letter of wishes",
            "fileName": "wishes.pdf",
            "fileType": "application/pdf",
            "fileSize": 1_048_576,
            "linkType": "BENEFICIARY",
            "linkId": alice.id
        }));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri("/api/documents/storage")
        .insert_header(("Authorization", auth.clone()));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let storage: Value = test::read_body_json(resp).await;
    assert_eq!(storage["usedBytes"], 1_048_576);
    assert_eq!(storage["limitBytes"], 50 * 1024 * 1024);
    let pct = storage["usedPercentage"].as_f64().expect("percentage");
    assert!((pct - 2.0).abs() < 1e-9);
    assert_eq!(storage["nearLimit"], false);
    assert_eq!(storage["documentCount"], 1);
    assert_eq!(storage["documentLimit"], 3);
    assert_eq!(storage["atDocumentLimit"], false);

    let req = test::TestRequest::get()
        .uri("/api/documents/linkage")
        .insert_header(("Authorization", auth));
    let resp = call_in_txn(&app, &shared, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let linkage: Value = test::read_body_json(resp).await;
    assert_eq!(linkage["assets"][0]["id"], house.id);
    assert_eq!(linkage["assets"][0]["hasDocument"], false);
    assert_eq!(linkage["beneficiaries"][0]["hasDocument"], true);
    assert_eq!(linkage["executors"].as_array().map(Vec::len), Some(0));
    assert_eq!(linkage["unlinkedCount"], 1);

    shared.rollback().await?;
    Ok(())
}
