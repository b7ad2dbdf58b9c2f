use actix_web::{web, HttpRequest, HttpResponse};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::CurrentUser;
use crate::services::estates;
use crate::state::app_state::AppState;

/// The caller's estates; the first call creates one.
async fn list_estates(
    req: HttpRequest,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = current_user.id;
    let estates = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            estates::list_or_create(txn, user_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(estates))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_estates));
}
