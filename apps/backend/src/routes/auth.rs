use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::repos::users::User;
use crate::services::users;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

async fn register(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    body: ValidatedJson<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let RegisterRequest { email, password } = body.into_inner();

    let user = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move { users::register(txn, &email, &password).await })
    })
    .await?;

    Ok(HttpResponse::Created().json(user))
}

/// Email and password in, access token out.
async fn login(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    body: ValidatedJson<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let LoginRequest { email, password } = body.into_inner();
    let security = app_state.security.clone();

    let (user, token) = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move { users::login(txn, &email, &password, &security).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(LoginResponse { token, user }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(register))
        .route("/login", web::post().to(login));
}
