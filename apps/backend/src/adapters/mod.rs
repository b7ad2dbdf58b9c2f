//! SeaORM query adapters. Each returns `DbErr`; repos map to `DomainError`.

pub mod allocations_sea;
pub mod assets_sea;
pub mod beneficiaries_sea;
pub mod documents_sea;
pub mod estates_sea;
pub mod executors_sea;
pub mod liabilities_sea;
pub mod users_sea;
