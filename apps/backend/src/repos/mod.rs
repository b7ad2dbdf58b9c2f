//! Repository functions: domain models over the SeaORM adapters.

pub mod allocations;
pub mod assets;
pub mod beneficiaries;
pub mod documents;
pub mod estates;
pub mod executors;
pub mod liabilities;
pub mod users;
