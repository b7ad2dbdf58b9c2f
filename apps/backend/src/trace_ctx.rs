//! Task-local trace id for the request being served.
//!
//! `RequestTrace` establishes the scope; error rendering and `db_errors`
//! read it so logs and ProblemDetails bodies carry the same id.

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// Current trace id, or `"unknown"` outside a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|id| id.clone())
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Runs `future` with `trace_id` as the task-local trace id.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
