//! Beneficiary repository functions.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::beneficiaries_sea::{self as beneficiaries_adapter, BeneficiaryCreate};
use crate::domain::BeneficiaryType;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Beneficiary {
    pub id: i64,
    pub estate_id: i64,
    pub name: String,
    pub relationship: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "type")]
    pub beneficiary_type: BeneficiaryType,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewBeneficiary {
    pub name: String,
    pub relationship: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub beneficiary_type: BeneficiaryType,
}

pub async fn list_by_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
) -> Result<Vec<Beneficiary>, DomainError> {
    beneficiaries_adapter::list_by_estate(conn, estate_id)
        .await?
        .into_iter()
        .map(Beneficiary::try_from)
        .collect()
}

pub async fn find_in_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
    beneficiary_id: i64,
) -> Result<Option<Beneficiary>, DomainError> {
    beneficiaries_adapter::find_in_estate(conn, estate_id, beneficiary_id)
        .await?
        .map(Beneficiary::try_from)
        .transpose()
}

pub async fn count_by_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
) -> Result<u64, DomainError> {
    Ok(beneficiaries_adapter::count_by_estate(conn, estate_id).await?)
}

pub async fn create_beneficiary<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
    beneficiary: NewBeneficiary,
) -> Result<Beneficiary, DomainError> {
    let dto = BeneficiaryCreate {
        estate_id,
        name: beneficiary.name,
        relationship: beneficiary.relationship,
        email: beneficiary.email,
        phone: beneficiary.phone,
        beneficiary_type: beneficiary.beneficiary_type.as_str().to_string(),
    };
    Beneficiary::try_from(beneficiaries_adapter::create_beneficiary(conn, dto).await?)
}

pub async fn delete_beneficiary<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
    beneficiary_id: i64,
) -> Result<bool, DomainError> {
    Ok(beneficiaries_adapter::delete_in_estate(conn, estate_id, beneficiary_id).await? > 0)
}

impl TryFrom<crate::entities::beneficiaries::Model> for Beneficiary {
    type Error = DomainError;

    fn try_from(model: crate::entities::beneficiaries::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            beneficiary_type: BeneficiaryType::from_db(&model.beneficiary_type, model.id)?,
            id: model.id,
            estate_id: model.estate_id,
            name: model.name,
            relationship: model.relationship,
            email: model.email,
            phone: model.phone,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
