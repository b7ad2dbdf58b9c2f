//! Infrastructure layer: state construction and database error translation.

pub mod db_errors;
pub mod state;
