use actix_web::web;
use serde::Serialize;

use crate::extractors::path_ids::path_config;

pub mod assets;
pub mod auth;
pub mod beneficiaries;
pub mod dashboard;
pub mod documents;
pub mod estates;
pub mod executors;
pub mod health;
pub mod liabilities;
pub mod user;

/// Body returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Authenticated resource routes, mounted under `/api`.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(path_config())
        .service(web::scope("/estates").configure(estates::configure_routes))
        .service(web::scope("/assets").configure(assets::configure_routes))
        .service(web::scope("/liabilities").configure(liabilities::configure_routes))
        .service(web::scope("/beneficiaries").configure(beneficiaries::configure_routes))
        .service(web::scope("/executors").configure(executors::configure_routes))
        .service(web::scope("/documents").configure(documents::configure_routes))
        .service(web::scope("/dashboard").configure(dashboard::configure_routes))
        .service(web::scope("/user").configure(user::configure_routes));
}

/// Configure application routes for tests and non-HttpServer contexts.
///
/// `main.rs` mounts the same scopes with rate limiting on top.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes);
    cfg.service(web::scope("/api/auth").configure(auth::configure_routes));
    cfg.service(web::scope("/api").configure(configure_api));
}
