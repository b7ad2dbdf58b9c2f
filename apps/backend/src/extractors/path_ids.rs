use actix_web::error::PathError;
use actix_web::{web, HttpRequest};
use tracing::debug;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Path extractor config for the `/api` scope: an id segment that does not
/// parse renders as a 400 ProblemDetails instead of actix's plain-text 404.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error)
}

fn path_error(err: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!(path = %req.path(), error = %err, "path parameter rejected");
    AppError::bad_request(ErrorCode::InvalidId, invalid_id_detail(req)).into()
}

fn invalid_id_detail(req: &HttpRequest) -> String {
    let bad = req
        .match_info()
        .iter()
        .find(|(_, v)| v.parse::<i64>().is_err())
        .map(|(_, v)| v.to_string());
    match bad {
        Some(v) => format!("Invalid id: {v}"),
        None => "Invalid id".to_string(),
    }
}
