use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

/// Requests slower than this are logged at WARN even when they succeed.
const SLOW_REQUEST_MS: u128 = 1_000;

/// Emits one `request_completed` event per request, at a level chosen by status class.
///
/// `http.route` is the matched pattern (`/api/assets/{asset_id}`), so record
/// ids only appear in `url.path`.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let route = req
            .match_pattern()
            .unwrap_or_else(|| "unmatched".to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let (status, trace_id) = match &result {
                Ok(res) => (
                    res.status(),
                    res.request()
                        .extensions()
                        .get::<String>()
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string()),
                ),
                Err(err) => (
                    err.as_response_error().status_code(),
                    "unknown".to_string(),
                ),
            };

            let elapsed = start.elapsed();
            let duration_us = elapsed.as_micros() as u64;
            let status_code = status.as_u16();
            let slow = elapsed.as_millis() > SLOW_REQUEST_MS;

            if status.is_server_error() {
                error!(http.method = %method, http.route = %route, url.path = %path, http.status_code = status_code, duration_us, trace_id = %trace_id, "request_completed");
            } else if status.is_client_error() || slow {
                warn!(http.method = %method, http.route = %route, url.path = %path, http.status_code = status_code, duration_us, slow, trace_id = %trace_id, "request_completed");
            } else {
                info!(http.method = %method, http.route = %route, url.path = %path, http.status_code = status_code, duration_us, trace_id = %trace_id, "request_completed");
            }

            result
        })
    }
}
