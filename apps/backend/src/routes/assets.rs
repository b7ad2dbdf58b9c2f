use actix_web::{web, HttpRequest, HttpResponse};
use sea_orm::prelude::Json;
use serde::Deserialize;
use serde_with::rust::double_option;

use super::SuccessResponse;
use crate::db::txn::with_txn;
use crate::domain::{AssetCategory, AssetSubType};
use crate::error::AppError;
use crate::extractors::{CurrentUser, ValidatedJson};
use crate::services::allocations;
use crate::services::assets::{self, AssetInput, AssetPatch};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetRequest {
    pub name: String,
    pub category: AssetCategory,
    pub sub_type: AssetSubType,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub metadata: Option<Json>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssetRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<AssetCategory>,
    #[serde(default)]
    pub sub_type: Option<AssetSubType>,
    // absent = unchanged, null = clear
    #[serde(default, with = "double_option")]
    pub value: Option<Option<f64>>,
    #[serde(default, with = "double_option")]
    pub metadata: Option<Option<Json>>,
}

#[derive(Debug, Deserialize)]
pub struct SetAllocationRequest {
    pub percentage: f64,
}

async fn list_assets(
    req: HttpRequest,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = current_user.id;
    let assets = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move { assets::list(txn, user_id).await.map_err(AppError::from) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(assets))
}

async fn create_asset(
    req: HttpRequest,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateAssetRequest>,
) -> Result<HttpResponse, AppError> {
    let user_id = current_user.id;
    let body = body.into_inner();
    let input = AssetInput {
        name: body.name,
        category: body.category,
        sub_type: body.sub_type,
        value: body.value,
        metadata: body.metadata,
    };

    let asset = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            assets::create(txn, user_id, input)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(asset))
}

async fn get_asset(
    req: HttpRequest,
    path: web::Path<i64>,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = current_user.id;
    let asset_id = path.into_inner();
    let asset = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            assets::get(txn, user_id, asset_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(asset))
}

async fn update_asset(
    req: HttpRequest,
    path: web::Path<i64>,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
    body: ValidatedJson<UpdateAssetRequest>,
) -> Result<HttpResponse, AppError> {
    let user_id = current_user.id;
    let asset_id = path.into_inner();
    let body = body.into_inner();
    let patch = AssetPatch {
        name: body.name,
        category: body.category,
        sub_type: body.sub_type,
        value: body.value,
        metadata: body.metadata,
    };

    let asset = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            assets::update(txn, user_id, asset_id, patch)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(asset))
}

async fn delete_asset(
    req: HttpRequest,
    path: web::Path<i64>,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = current_user.id;
    let asset_id = path.into_inner();
    with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            assets::delete(txn, user_id, asset_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

async fn set_allocation(
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
    body: ValidatedJson<SetAllocationRequest>,
) -> Result<HttpResponse, AppError> {
    let user_id = current_user.id;
    let (asset_id, beneficiary_id) = path.into_inner();
    let percentage = body.percentage;

    let allocation = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            allocations::set(txn, user_id, asset_id, beneficiary_id, percentage)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(allocation))
}

async fn remove_allocation(
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = current_user.id;
    let (asset_id, beneficiary_id) = path.into_inner();
    with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            allocations::remove(txn, user_id, asset_id, beneficiary_id)
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
            .route(web::get().to(list_assets))
            .route(web::post().to(create_asset)),
    )
    .service(
        web::resource("/{asset_id}")
            .route(web::get().to(get_asset))
            .route(web::patch().to(update_asset))
            .route(web::delete().to(delete_asset)),
    )
    .service(
        web::resource("/{asset_id}/allocations/{beneficiary_id}")
            .route(web::put().to(set_allocation))
            .route(web::delete().to(remove_allocation)),
    );
}
