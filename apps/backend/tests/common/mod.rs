#![allow(dead_code)]

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{HeaderName, CONTENT_TYPE};
use actix_web::test;
use serde_json::Value;

pub mod proptest_prelude;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

// Rollback by default; `BEQST_TXN_POLICY=commit` flips it per binary.
#[ctor::ctor]
fn init_txn_policy() {
    let policy = match std::env::var("BEQST_TXN_POLICY")
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "commit" => beqst::db::txn_policy::TxnPolicy::CommitOnOk,
        _ => beqst::db::txn_policy::TxnPolicy::RollbackOnOk,
    };

    beqst::db::txn_policy::set_txn_policy(policy);
}

pub fn assert_trace_id_matches(json: &Value, header_trace_id: &str) {
    let trace_id_in_body = json["trace_id"]
        .as_str()
        .expect("trace_id field should be a string");
    assert_eq!(
        trace_id_in_body, header_trace_id,
        "trace_id in body should match X-Trace-Id header"
    );
}

/// Checks status, code, the exact detail, the content type, the trace id
/// parity and the status-specific headers (401 WWW-Authenticate, 503 Retry-After).
pub async fn assert_problem_details_structure(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_code: &str,
    expected_detail: &str,
) {
    assert_eq!(resp.status().as_u16(), expected_status);

    let headers = resp.headers().clone();

    let trace_hdr = HeaderName::from_static("x-trace-id");
    let trace_id = headers
        .get(&trace_hdr)
        .and_then(|v| v.to_str().ok())
        .expect("X-Trace-Id header should be present and valid UTF-8")
        .to_string();
    assert!(!trace_id.is_empty());

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/problem+json"),
        "Content-Type must be application/problem+json (got {content_type})"
    );

    match expected_status {
        401 => {
            let www_auth = headers
                .get("WWW-Authenticate")
                .expect("401 responses must have WWW-Authenticate");
            assert_eq!(www_auth.to_str().unwrap(), "Bearer");
            assert!(headers.get("Retry-After").is_none());
        }
        503 => {
            assert!(headers.get("Retry-After").is_some());
            assert!(headers.get("WWW-Authenticate").is_none());
        }
        _ => {
            assert!(headers.get("WWW-Authenticate").is_none());
            assert!(headers.get("Retry-After").is_none());
        }
    }

    let body = test::read_body(resp).await;
    let body_str = std::str::from_utf8(&body).expect("Response body should be valid UTF-8");
    let problem: Value = serde_json::from_str(body_str).unwrap_or_else(|_| {
        panic!("Failed to parse error body as ProblemDetails. Raw body: {body_str}")
    });

    for key in ["type", "title", "status", "detail", "code", "trace_id"] {
        assert!(problem.get(key).is_some(), "{key} field should be present");
    }

    assert_eq!(problem["code"], expected_code);
    assert_eq!(problem["detail"], expected_detail);
    assert_eq!(problem["status"], expected_status);
    assert_trace_id_matches(&problem, &trace_id);

    let type_value = problem["type"].as_str().expect("type should be a string");
    assert_eq!(type_value, format!("https://beqst.app/errors/{expected_code}"));
}
