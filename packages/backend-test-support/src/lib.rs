//! Helpers shared by the backend's unit and integration tests: idempotent
//! logging setup, ProblemDetails assertions and unique test data.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
