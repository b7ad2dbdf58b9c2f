use std::ops::{Deref, DerefMut};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use tracing::debug;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;

/// JSON body extractor whose failures render as 400 `BAD_REQUEST`
/// ProblemDetails instead of actix's plain-text JSON errors.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

/// Largest body `ValidatedJson` accepts. Registered as app data; absent
/// means [`JsonBodyLimit::DEFAULT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonBodyLimit(pub usize);

impl JsonBodyLimit {
    pub const DEFAULT: JsonBodyLimit = JsonBodyLimit(256 * 1024);
}

impl Default for JsonBodyLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let mut payload = payload.take();
        let limit = req
            .app_data::<JsonBodyLimit>()
            .copied()
            .unwrap_or_default()
            .0;

        Box::pin(async move {
            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|_| {
                    AppError::bad_request(ErrorCode::BadRequest, "Failed to read request body")
                })?;
                if body.len() + chunk.len() > limit {
                    return Err(AppError::bad_request(
                        ErrorCode::BadRequest,
                        format!("Request body exceeds {limit} bytes"),
                    ));
                }
                body.extend_from_slice(&chunk);
            }

            let parsed = serde_json::from_slice::<T>(&body).map_err(|e| {
                debug!(
                    error = %Redacted(&e.to_string()),
                    body_size = body.len(),
                    "JSON parsing failed"
                );
                AppError::bad_request(ErrorCode::BadRequest, classify_json_error(&e))
            })?;

            Ok(ValidatedJson(parsed))
        })
    }
}

/// A sanitized message; serde's own text can echo request content.
fn classify_json_error(error: &serde_json::Error) -> String {
    match error.classify() {
        Category::Syntax => format!("Invalid JSON at line {}", error.line()),
        Category::Eof => "Invalid JSON: unexpected end of input".to_string(),
        Category::Data => {
            let msg = error.to_string();
            // serde names missing fields and unknown enum variants; surface those
            if msg.starts_with("missing field") || msg.starts_with("unknown variant") {
                let head = msg.split(" at line").next().unwrap_or(&msg);
                format!("Invalid request: {head}")
            } else {
                "Invalid JSON: wrong types for one or more fields".to_string()
            }
        }
        Category::Io => "Invalid JSON: I/O error while reading body".to_string(),
    }
}
