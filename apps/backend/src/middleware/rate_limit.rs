//! Per-IP rate limit windows.
//!
//! Auth endpoints get 5 requests per minute, the rest of the API 100.
//! `/health` is not limited. The limiters themselves are assembled in
//! `main.rs` over a shared `InMemoryBackend`.

use std::time::Duration;

use actix_extensible_rate_limit::backend::SimpleInputFunctionBuilder;

pub const AUTH_REQUESTS_PER_MINUTE: u64 = 5;
pub const API_REQUESTS_PER_MINUTE: u64 = 100;

pub fn auth_rate_limit_config() -> SimpleInputFunctionBuilder {
    SimpleInputFunctionBuilder::new(Duration::from_secs(60), AUTH_REQUESTS_PER_MINUTE)
        .real_ip_key()
}

pub fn api_rate_limit_config() -> SimpleInputFunctionBuilder {
    SimpleInputFunctionBuilder::new(Duration::from_secs(60), API_REQUESTS_PER_MINUTE)
        .real_ip_key()
}
