use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use super::SuccessResponse;
use crate::db::txn::with_txn;
use crate::domain::{DocumentLinkType, DocumentType};
use crate::error::AppError;
use crate::extractors::{CurrentUser, ValidatedJson};
use crate::services::documents::{self, DocumentInput};
use crate::state::app_state::AppState;

/// Metadata for an uploaded file. Only the metadata is kept.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
    #[serde(default)]
    pub name: Option<String>,
    pub file_name: String,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub file_size: i64,
    #[serde(default)]
    pub document_type: DocumentType,
    #[serde(default)]
    pub link_type: DocumentLinkType,
    #[serde(default)]
    pub link_id: Option<i64>,
}

async fn list_documents(
    req: HttpRequest,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = current_user.id;
    let documents = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move { documents::list(txn, user_id).await.map_err(AppError::from) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(documents))
}

async fn create_document(
    req: HttpRequest,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateDocumentRequest>,
) -> Result<HttpResponse, AppError> {
    let CurrentUser { id: user_id, email, .. } = current_user;
    let body = body.into_inner();
    let input = DocumentInput {
        name: body.name,
        file_name: body.file_name,
        file_type: body.file_type,
        file_size: body.file_size,
        document_type: body.document_type,
        link_type: body.link_type,
        link_id: body.link_id,
    };

    let document = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            documents::record(txn, user_id, &email, input)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(document))
}

async fn delete_document(
    req: HttpRequest,
    path: web::Path<i64>,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = current_user.id;
    let document_id = path.into_inner();
    with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            documents::delete(txn, user_id, document_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

async fn log_access(
    req: HttpRequest,
    path: web::Path<i64>,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let CurrentUser { id: user_id, email, .. } = current_user;
    let document_id = path.into_inner();
    with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            documents::log_view(txn, user_id, &email, document_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

async fn storage_usage(
    req: HttpRequest,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = current_user.id;
    let usage = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            documents::storage(txn, user_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(usage))
}

async fn linkage_status(
    req: HttpRequest,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = current_user.id;
    let status = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            documents::linkage(txn, user_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(status))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Literal paths before `/{document_id}`
    cfg.service(web::resource("/storage").route(web::get().to(storage_usage)))
        .service(web::resource("/linkage").route(web::get().to(linkage_status)))
        .service(
            web::resource("")
                .route(web::get().to(list_documents))
                .route(web::post().to(create_document)),
        )
        .service(web::resource("/{document_id}").route(web::delete().to(delete_document)))
        .service(web::resource("/{document_id}/access").route(web::post().to(log_access)));
}
