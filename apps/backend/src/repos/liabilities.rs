//! Liability repository functions.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::liabilities_sea::{self as liabilities_adapter, LiabilityCreate};
use crate::domain::LiabilityType;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Liability {
    pub id: i64,
    pub estate_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub liability_type: LiabilityType,
    pub amount: Option<f64>,
    pub creditor: Option<String>,
    pub linked_asset_id: Option<i64>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewLiability {
    pub name: String,
    pub liability_type: LiabilityType,
    pub amount: Option<f64>,
    pub creditor: Option<String>,
    pub linked_asset_id: Option<i64>,
}

pub async fn list_by_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
) -> Result<Vec<Liability>, DomainError> {
    liabilities_adapter::list_by_estate(conn, estate_id)
        .await?
        .into_iter()
        .map(Liability::try_from)
        .collect()
}

pub async fn count_by_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
) -> Result<u64, DomainError> {
    Ok(liabilities_adapter::count_by_estate(conn, estate_id).await?)
}

pub async fn create_liability<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
    liability: NewLiability,
) -> Result<Liability, DomainError> {
    let dto = LiabilityCreate {
        estate_id,
        name: liability.name,
        liability_type: liability.liability_type.as_str().to_string(),
        amount: liability.amount,
        creditor: liability.creditor,
        linked_asset_id: liability.linked_asset_id,
    };
    Liability::try_from(liabilities_adapter::create_liability(conn, dto).await?)
}

pub async fn delete_liability<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
    liability_id: i64,
) -> Result<bool, DomainError> {
    Ok(liabilities_adapter::delete_in_estate(conn, estate_id, liability_id).await? > 0)
}

impl TryFrom<crate::entities::liabilities::Model> for Liability {
    type Error = DomainError;

    fn try_from(model: crate::entities::liabilities::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            liability_type: LiabilityType::from_db(&model.liability_type, model.id)?,
            id: model.id,
            estate_id: model.estate_id,
            name: model.name,
            amount: model.amount,
            creditor: model.creditor,
            linked_asset_id: model.linked_asset_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
