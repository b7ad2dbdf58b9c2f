use actix_web::{web, HttpRequest, HttpResponse};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::CurrentUser;
use crate::services::dashboard;
use crate::state::app_state::AppState;

async fn get_dashboard(
    req: HttpRequest,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = current_user.id;
    let summary = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            dashboard::summary(txn, user_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(summary))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(get_dashboard));
}
