//! Free-tier quotas.

use serde::Serialize;

/// Document storage allowance on the free tier (50 MiB).
pub const FREE_STORAGE_BYTES: u64 = 50 * 1024 * 1024;

/// Share of the storage allowance above which usage is reported as near the limit.
pub const NEAR_LIMIT_RATIO: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    Free,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LimitedResource {
    Assets,
    Beneficiaries,
    Executors,
    Documents,
}

impl LimitedResource {
    pub const ALL: [LimitedResource; 4] = [
        LimitedResource::Assets,
        LimitedResource::Beneficiaries,
        LimitedResource::Executors,
        LimitedResource::Documents,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Assets => "ASSETS",
            Self::Beneficiaries => "BENEFICIARIES",
            Self::Executors => "EXECUTORS",
            Self::Documents => "DOCUMENTS",
        }
    }
}

impl Tier {
    pub const fn ceiling(&self, resource: LimitedResource) -> u64 {
        match (self, resource) {
            (Tier::Free, LimitedResource::Assets) => 3,
            (Tier::Free, LimitedResource::Beneficiaries) => 3,
            (Tier::Free, LimitedResource::Executors) => 1,
            (Tier::Free, LimitedResource::Documents) => 3,
        }
    }

    pub const fn storage_bytes(&self) -> u64 {
        match self {
            Tier::Free => FREE_STORAGE_BYTES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitCheck {
    Allowed,
    Reached { limit: u64 },
}

impl LimitCheck {
    pub fn is_allowed(&self) -> bool {
        matches!(self, LimitCheck::Allowed)
    }
}

/// Reached once the current count has met the ceiling.
pub fn check_limit(tier: Tier, resource: LimitedResource, current_count: u64) -> LimitCheck {
    let limit = tier.ceiling(resource);
    if current_count >= limit {
        LimitCheck::Reached { limit }
    } else {
        LimitCheck::Allowed
    }
}

pub fn limit_reached_message(limit: u64) -> String {
    format!("Free Allowed limit reached ({limit}). Upgrade to Premium for unlimited access.")
}

/// `(percentage_used, near_limit)` for `used_bytes` against the tier allowance.
pub fn storage_usage(tier: Tier, used_bytes: u64) -> (f64, bool) {
    let limit = tier.storage_bytes() as f64;
    let ratio = used_bytes as f64 / limit;
    (ratio * 100.0, ratio > NEAR_LIMIT_RATIO)
}
