use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpMessage, HttpRequest};
use serde::Serialize;

use crate::auth::jwt::verify_access_token;
use crate::db::require_db;
use crate::db::txn::SharedTxn;
use crate::error::AppError;
use crate::repos::users;
use crate::state::app_state::AppState;

/// The authenticated caller, loaded from the database on every request.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
}

/// Token from `Authorization: Bearer <token>`.
pub fn bearer_token(req: &HttpRequest) -> Result<String, AppError> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(AppError::unauthorized_missing_bearer)?
        .to_str()
        .map_err(|_| AppError::unauthorized_missing_bearer())?;

    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(AppError::unauthorized_missing_bearer()),
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available"))?;

            let token = bearer_token(&req)?;
            let claims = verify_access_token(&token, &app_state.security)?;
            let user_id = claims.user_id()?;

            // A test-injected transaction must be reused or SQLite would deadlock on it.
            let shared_txn = req.extensions().get::<SharedTxn>().cloned();
            let user = match shared_txn {
                Some(shared) => users::find_by_id(shared.transaction(), user_id).await?,
                None => users::find_by_id(require_db(app_state)?, user_id).await?,
            };

            let user = user.ok_or_else(AppError::forbidden_user_not_found)?;

            Ok(CurrentUser {
                id: user.id,
                email: user.email,
                name: user.name,
            })
        })
    }
}
