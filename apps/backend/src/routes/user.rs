use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{CurrentUser, ValidatedJson};
use crate::services::{limits, users};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub first_name: String,
    pub last_name: String,
}

async fn update_profile(
    req: HttpRequest,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
    body: ValidatedJson<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    let user_id = current_user.id;
    let UpdateProfileRequest {
        first_name,
        last_name,
    } = body.into_inner();

    let user = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            users::update_profile(txn, user_id, &first_name, &last_name)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(user))
}

async fn get_limits(
    req: HttpRequest,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = current_user.id;
    let usage = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move { limits::usage(txn, user_id).await.map_err(AppError::from) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(usage))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/profile", web::patch().to(update_profile))
        .route("/limits", web::get().to(get_limits));
}
