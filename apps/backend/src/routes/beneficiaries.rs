use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use super::SuccessResponse;
use crate::db::txn::with_txn;
use crate::domain::BeneficiaryType;
use crate::error::AppError;
use crate::extractors::{CurrentUser, ValidatedJson};
use crate::services::beneficiaries::{self, BeneficiaryInput};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBeneficiaryRequest {
    pub name: String,
    pub relationship: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(rename = "type", default)]
    pub beneficiary_type: BeneficiaryType,
}

async fn list_beneficiaries(
    req: HttpRequest,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = current_user.id;
    let beneficiaries = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            beneficiaries::list(txn, user_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(beneficiaries))
}

async fn create_beneficiary(
    req: HttpRequest,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateBeneficiaryRequest>,
) -> Result<HttpResponse, AppError> {
    let user_id = current_user.id;
    let body = body.into_inner();
    let input = BeneficiaryInput {
        name: body.name,
        relationship: body.relationship,
        email: body.email,
        phone: body.phone,
        beneficiary_type: body.beneficiary_type,
    };

    let beneficiary = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            beneficiaries::create(txn, user_id, input)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(beneficiary))
}

async fn delete_beneficiary(
    req: HttpRequest,
    path: web::Path<i64>,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = current_user.id;
    let beneficiary_id = path.into_inner();
    with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            beneficiaries::delete(txn, user_id, beneficiary_id)
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
            .route(web::get().to(list_beneficiaries))
            .route(web::post().to(create_beneficiary)),
    )
    .service(web::resource("/{beneficiary_id}").route(web::delete().to(delete_beneficiary)));
}
