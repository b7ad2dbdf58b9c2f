//! Use-cases. Each function expects to run inside the caller's transaction
//! and checks that every record it touches belongs to the caller's estate.

pub mod allocations;
pub mod assets;
pub mod beneficiaries;
pub mod dashboard;
pub mod documents;
pub mod estates;
pub mod executors;
pub mod liabilities;
pub mod limits;
pub mod users;
