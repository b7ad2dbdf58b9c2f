//! Document and access-log repository functions.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::documents_sea::{self as documents_adapter, AccessLogCreate, DocumentCreate};
use crate::domain::{AccessAction, DocumentType};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: i64,
    pub estate_id: i64,
    pub name: String,
    pub file_url: String,
    pub file_type: String,
    pub file_size: i64,
    pub document_type: DocumentType,
    pub asset_id: Option<i64>,
    pub beneficiary_id: Option<i64>,
    pub executor_id: Option<i64>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessLog {
    pub id: i64,
    pub document_id: i64,
    pub accessed_by: String,
    pub action: AccessAction,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// Validated input for a new document. At most one link is set.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub name: String,
    pub file_url: String,
    pub file_type: String,
    pub file_size: i64,
    pub document_type: DocumentType,
    pub asset_id: Option<i64>,
    pub beneficiary_id: Option<i64>,
    pub executor_id: Option<i64>,
}

pub async fn list_by_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
) -> Result<Vec<Document>, DomainError> {
    documents_adapter::list_by_estate(conn, estate_id)
        .await?
        .into_iter()
        .map(Document::try_from)
        .collect()
}

pub async fn find_in_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
    document_id: i64,
) -> Result<Option<Document>, DomainError> {
    documents_adapter::find_in_estate(conn, estate_id, document_id)
        .await?
        .map(Document::try_from)
        .transpose()
}

pub async fn count_by_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
) -> Result<u64, DomainError> {
    Ok(documents_adapter::count_by_estate(conn, estate_id).await?)
}

/// Total bytes recorded for the estate, saturating at `u64::MAX`. Negative
/// sizes count as zero.
pub async fn total_file_size<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
) -> Result<u64, DomainError> {
    let sizes = documents_adapter::file_sizes(conn, estate_id).await?;
    Ok(sum_sizes(sizes))
}

fn sum_sizes(sizes: impl IntoIterator<Item = i64>) -> u64 {
    sizes
        .into_iter()
        .fold(0u64, |acc, s| acc.saturating_add(s.max(0) as u64))
}

pub async fn create_document<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
    document: NewDocument,
) -> Result<Document, DomainError> {
    let dto = DocumentCreate {
        estate_id,
        name: document.name,
        file_url: document.file_url,
        file_type: document.file_type,
        file_size: document.file_size,
        document_type: document.document_type.as_str().to_string(),
        asset_id: document.asset_id,
        beneficiary_id: document.beneficiary_id,
        executor_id: document.executor_id,
    };
    Document::try_from(documents_adapter::create_document(conn, dto).await?)
}

pub async fn delete_document<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
    document_id: i64,
) -> Result<bool, DomainError> {
    Ok(documents_adapter::delete_in_estate(conn, estate_id, document_id).await? > 0)
}

pub async fn log_access<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    document_id: i64,
    accessed_by: &str,
    action: AccessAction,
) -> Result<AccessLog, DomainError> {
    let dto = AccessLogCreate {
        document_id,
        accessed_by: accessed_by.to_string(),
        action: action.as_str().to_string(),
    };
    AccessLog::try_from(documents_adapter::create_access_log(conn, dto).await?)
}

pub async fn recent_access_logs<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    document_id: i64,
    limit: u64,
) -> Result<Vec<AccessLog>, DomainError> {
    documents_adapter::recent_access_logs(conn, document_id, limit)
        .await?
        .into_iter()
        .map(AccessLog::try_from)
        .collect()
}

impl TryFrom<crate::entities::documents::Model> for Document {
    type Error = DomainError;

    fn try_from(model: crate::entities::documents::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            document_type: DocumentType::from_db(&model.document_type, model.id)?,
            id: model.id,
            estate_id: model.estate_id,
            name: model.name,
            file_url: model.file_url,
            file_type: model.file_type,
            file_size: model.file_size,
            asset_id: model.asset_id,
            beneficiary_id: model.beneficiary_id,
            executor_id: model.executor_id,
            created_at: model.created_at,
        })
    }
}

impl TryFrom<crate::entities::document_access_logs::Model> for AccessLog {
    type Error = DomainError;

    fn try_from(model: crate::entities::document_access_logs::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            action: AccessAction::from_db(&model.action, model.id)?,
            id: model.id,
            document_id: model.document_id,
            accessed_by: model.accessed_by,
            timestamp: model.timestamp,
        })
    }
}
