use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use super::SuccessResponse;
use crate::db::txn::with_txn;
use crate::domain::LiabilityType;
use crate::error::AppError;
use crate::extractors::{CurrentUser, ValidatedJson};
use crate::services::liabilities::{self, LiabilityInput};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLiabilityRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub liability_type: LiabilityType,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub creditor: Option<String>,
    #[serde(default)]
    pub linked_asset_id: Option<i64>,
}

async fn list_liabilities(
    req: HttpRequest,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = current_user.id;
    let liabilities = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            liabilities::list(txn, user_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(liabilities))
}

async fn create_liability(
    req: HttpRequest,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateLiabilityRequest>,
) -> Result<HttpResponse, AppError> {
    let user_id = current_user.id;
    let body = body.into_inner();
    let input = LiabilityInput {
        name: body.name,
        liability_type: body.liability_type,
        amount: body.amount,
        creditor: body.creditor,
        linked_asset_id: body.linked_asset_id,
    };

    let liability = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            liabilities::create(txn, user_id, input)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(liability))
}

async fn delete_liability(
    req: HttpRequest,
    path: web::Path<i64>,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = current_user.id;
    let liability_id = path.into_inner();
    with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            liabilities::delete(txn, user_id, liability_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_liabilities))
            .route(web::post().to(create_liability)),
    )
    .service(web::resource("/{liability_id}").route(web::delete().to(delete_liability)));
}
