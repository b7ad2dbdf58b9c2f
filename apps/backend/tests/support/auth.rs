//! JWT helpers for tests

use std::time::{Duration, SystemTime};

use beqst::auth::mint_access_token;
use beqst::state::security_config::SecurityConfig;

pub fn mint_test_token(user_id: i64, email: &str, sec: &SecurityConfig) -> String {
    mint_access_token(user_id, email, SystemTime::now(), sec).expect("should mint token")
}

/// Full `Authorization` header value
pub fn bearer_header(user_id: i64, email: &str, sec: &SecurityConfig) -> String {
    format!("Bearer {}", mint_test_token(user_id, email, sec))
}

/// Issued two hours ago, so already past the TTL
pub fn mint_expired_token(user_id: i64, email: &str, sec: &SecurityConfig) -> String {
    let past = SystemTime::now()
        .checked_sub(Duration::from_secs(7200))
        .unwrap();
    mint_access_token(user_id, email, past, sec).expect("should mint expired token")
}
