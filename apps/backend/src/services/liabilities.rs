use sea_orm::ConnectionTrait;
use tracing::info;

use crate::domain::validation::{money, optional_text, required};
use crate::domain::LiabilityType;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::assets;
use crate::repos::liabilities::{self, Liability, NewLiability};
use crate::services::estates;

#[derive(Debug, Clone)]
pub struct LiabilityInput {
    pub name: String,
    pub liability_type: LiabilityType,
    pub amount: Option<f64>,
    pub creditor: Option<String>,
    pub linked_asset_id: Option<i64>,
}

/// Newest first.
pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<Liability>, DomainError> {
    match estates::primary(conn, user_id).await? {
        Some(estate) => liabilities::list_by_estate(conn, estate.id).await,
        None => Ok(Vec::new()),
    }
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    input: LiabilityInput,
) -> Result<Liability, DomainError> {
    let new_liability = NewLiability {
        name: required("Name", &input.name)?,
        liability_type: input.liability_type,
        amount: money("Amount", input.amount)?,
        creditor: optional_text(input.creditor),
        linked_asset_id: input.linked_asset_id,
    };

    let estate = estates::ensure_primary(conn, user_id).await?;

    if let Some(asset_id) = new_liability.linked_asset_id {
        if assets::find_in_estate(conn, estate.id, asset_id).await?.is_none() {
            return Err(DomainError::validation(
                ValidationKind::InvalidLink,
                "Linked asset does not belong to this estate",
            ));
        }
    }

    let liability = liabilities::create_liability(conn, estate.id, new_liability).await?;
    info!(user_id, estate_id = estate.id, liability_id = liability.id, "liability created");
    Ok(liability)
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    liability_id: i64,
) -> Result<(), DomainError> {
    let not_found = || DomainError::not_found(NotFoundKind::Liability, "Liability not found");
    let Some(estate) = estates::primary(conn, user_id).await? else {
        return Err(not_found());
    };
    if !liabilities::delete_liability(conn, estate.id, liability_id).await? {
        return Err(not_found());
    }
    info!(user_id, liability_id, "liability deleted");
    Ok(())
}
