use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use super::SuccessResponse;
use crate::db::txn::with_txn;
use crate::domain::ExecutorRole;
use crate::error::AppError;
use crate::extractors::{CurrentUser, ValidatedJson};
use crate::services::executors::{self, ExecutorInput};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExecutorRequest {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: ExecutorRole,
    #[serde(default)]
    pub instructions: Option<String>,
}

async fn list_executors(
    req: HttpRequest,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = current_user.id;
    let executors = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move { executors::list(txn, user_id).await.map_err(AppError::from) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(executors))
}

async fn create_executor(
    req: HttpRequest,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateExecutorRequest>,
) -> Result<HttpResponse, AppError> {
    let user_id = current_user.id;
    let body = body.into_inner();
    let input = ExecutorInput {
        name: body.name,
        email: body.email,
        phone: body.phone,
        role: body.role,
        instructions: body.instructions,
    };

    let executor = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            executors::create(txn, user_id, input)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(executor))
}

async fn delete_executor(
    req: HttpRequest,
    path: web::Path<i64>,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = current_user.id;
    let executor_id = path.into_inner();
    with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            executors::delete(txn, user_id, executor_id)
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
            .route(web::get().to(list_executors))
            .route(web::post().to(create_executor)),
    )
    .service(web::resource("/{executor_id}").route(web::delete().to(delete_executor)));
}
