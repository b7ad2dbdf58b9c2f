//! Document metadata, access logs and the linkage report.
//!
//! File bytes are never stored. A recorded document gets a placeholder URL
//! under `/uploads/`.

use std::collections::{HashMap, HashSet};

use rand::distr::Alphanumeric;
use rand::Rng;
use sea_orm::ConnectionTrait;
use serde::Serialize;
use tracing::info;

use crate::domain::validation::{optional_text, required};
use crate::domain::{AccessAction, DocumentLinkType, DocumentType, LimitedResource};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::logging::pii::Redacted;
use crate::repos::documents::{self, AccessLog, Document, NewDocument};
use crate::repos::{assets, beneficiaries, executors};
use crate::services::{estates, limits};

/// Access logs returned with each listed document.
pub const RECENT_ACCESS_LOGS: u64 = 5;

pub const DEFAULT_FILE_TYPE: &str = "application/pdf";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedItem {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentView {
    #[serde(flatten)]
    pub document: Document,
    pub asset: Option<LinkedItem>,
    pub beneficiary: Option<LinkedItem>,
    pub executor: Option<LinkedItem>,
    pub access_logs: Vec<AccessLog>,
}

#[derive(Debug, Clone)]
pub struct DocumentInput {
    /// Display name; the file name when absent
    pub name: Option<String>,
    pub file_name: String,
    pub file_type: Option<String>,
    pub file_size: i64,
    pub document_type: DocumentType,
    pub link_type: DocumentLinkType,
    pub link_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkageItem {
    pub id: i64,
    pub name: String,
    pub has_document: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkageStatus {
    pub assets: Vec<LinkageItem>,
    pub beneficiaries: Vec<LinkageItem>,
    pub executors: Vec<LinkageItem>,
    /// Items above without any document
    pub unlinked_count: usize,
}

fn document_not_found() -> DomainError {
    DomainError::not_found(NotFoundKind::Document, "Document not found")
}

fn placeholder_url(file_name: &str) -> String {
    let token: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(7)
        .map(char::from)
        .collect();
    format!("/uploads/{token}/{file_name}")
}

/// The `(asset, beneficiary, executor)` columns for a link. A link other than
/// NONE needs an id.
fn link_columns(
    link_type: DocumentLinkType,
    link_id: Option<i64>,
) -> Result<(Option<i64>, Option<i64>, Option<i64>), DomainError> {
    let missing = || {
        DomainError::validation(
            ValidationKind::InvalidLink,
            format!("linkId is required when linkType is {link_type}"),
        )
    };
    Ok(match link_type {
        DocumentLinkType::None => (None, None, None),
        DocumentLinkType::Asset => (Some(link_id.ok_or_else(missing)?), None, None),
        DocumentLinkType::Beneficiary => (None, Some(link_id.ok_or_else(missing)?), None),
        DocumentLinkType::Executor => (None, None, Some(link_id.ok_or_else(missing)?)),
    })
}

async fn ensure_link_in_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
    link_type: DocumentLinkType,
    link_id: Option<i64>,
) -> Result<(), DomainError> {
    let Some(id) = link_id else {
        return Ok(());
    };
    let found = match link_type {
        DocumentLinkType::None => true,
        DocumentLinkType::Asset => assets::find_in_estate(conn, estate_id, id).await?.is_some(),
        DocumentLinkType::Beneficiary => beneficiaries::find_in_estate(conn, estate_id, id)
            .await?
            .is_some(),
        DocumentLinkType::Executor => executors::find_in_estate(conn, estate_id, id)
            .await?
            .is_some(),
    };
    if found {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::InvalidLink,
            format!("Linked {} does not belong to this estate", link_type.as_str().to_lowercase()),
        ))
    }
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<DocumentView>, DomainError> {
    let Some(estate) = estates::primary(conn, user_id).await? else {
        return Ok(Vec::new());
    };

    let asset_names: HashMap<i64, String> = assets::list_by_estate(conn, estate.id)
        .await?
        .into_iter()
        .map(|a| (a.id, a.name))
        .collect();
    let beneficiary_names: HashMap<i64, String> = beneficiaries::list_by_estate(conn, estate.id)
        .await?
        .into_iter()
        .map(|b| (b.id, b.name))
        .collect();
    let executor_names: HashMap<i64, String> = executors::list_by_estate(conn, estate.id)
        .await?
        .into_iter()
        .map(|e| (e.id, e.name))
        .collect();

    let linked = |names: &HashMap<i64, String>, id: Option<i64>| {
        id.and_then(|id| {
            names.get(&id).map(|name| LinkedItem {
                id,
                name: name.clone(),
            })
        })
    };

    let mut out = Vec::new();
    for document in documents::list_by_estate(conn, estate.id).await? {
        let access_logs =
            documents::recent_access_logs(conn, document.id, RECENT_ACCESS_LOGS).await?;
        out.push(DocumentView {
            asset: linked(&asset_names, document.asset_id),
            beneficiary: linked(&beneficiary_names, document.beneficiary_id),
            executor: linked(&executor_names, document.executor_id),
            access_logs,
            document,
        });
    }
    Ok(out)
}

/// Records document metadata and an UPLOAD access entry by `actor_email`.
pub async fn record<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    actor_email: &str,
    input: DocumentInput,
) -> Result<Document, DomainError> {
    let file_name = required("File name", &input.file_name)?;
    let name = match optional_text(input.name) {
        Some(name) => name,
        None => file_name.clone(),
    };
    if input.file_size < 0 {
        return Err(DomainError::validation(
            ValidationKind::InvalidAmount,
            "File size must be a non-negative number",
        ));
    }
    let (asset_id, beneficiary_id, executor_id) = link_columns(input.link_type, input.link_id)?;

    limits::ensure_within_limit(conn, user_id, LimitedResource::Documents).await?;
    let estate = estates::ensure_primary(conn, user_id).await?;
    ensure_link_in_estate(conn, estate.id, input.link_type, input.link_id).await?;

    let document = documents::create_document(
        conn,
        estate.id,
        NewDocument {
            name,
            file_url: placeholder_url(&file_name),
            file_type: optional_text(input.file_type)
                .unwrap_or_else(|| DEFAULT_FILE_TYPE.to_string()),
            file_size: input.file_size,
            document_type: input.document_type,
            asset_id,
            beneficiary_id,
            executor_id,
        },
    )
    .await?;
    documents::log_access(conn, document.id, actor_email, AccessAction::Upload).await?;

    info!(
        user_id,
        estate_id = estate.id,
        document_id = document.id,
        accessed_by = %Redacted(actor_email),
        "document recorded"
    );
    Ok(document)
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    document_id: i64,
) -> Result<(), DomainError> {
    let estate_id =
        estates::require_primary_id(conn, user_id, NotFoundKind::Document, "Document not found")
            .await?;
    if !documents::delete_document(conn, estate_id, document_id).await? {
        return Err(document_not_found());
    }
    info!(user_id, document_id, "document deleted");
    Ok(())
}

/// Appends a VIEW entry to the document's access log.
pub async fn log_view<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    actor_email: &str,
    document_id: i64,
) -> Result<AccessLog, DomainError> {
    let estate_id =
        estates::require_primary_id(conn, user_id, NotFoundKind::Document, "Document not found")
            .await?;
    documents::find_in_estate(conn, estate_id, document_id)
        .await?
        .ok_or_else(document_not_found)?;
    documents::log_access(conn, document_id, actor_email, AccessAction::View).await
}

pub async fn storage<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<limits::StorageUsage, DomainError> {
    limits::storage(conn, user_id).await
}

fn linkage_items<I>(items: I, linked: &HashSet<i64>) -> Vec<LinkageItem>
where
    I: IntoIterator<Item = (i64, String)>,
{
    items
        .into_iter()
        .map(|(id, name)| LinkageItem {
            has_document: linked.contains(&id),
            id,
            name,
        })
        .collect()
}

/// Which assets, beneficiaries and executors have at least one document.
pub async fn linkage<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<LinkageStatus, DomainError> {
    let Some(estate) = estates::primary(conn, user_id).await? else {
        return Ok(LinkageStatus {
            assets: Vec::new(),
            beneficiaries: Vec::new(),
            executors: Vec::new(),
            unlinked_count: 0,
        });
    };

    let docs = documents::list_by_estate(conn, estate.id).await?;
    let linked_assets: HashSet<i64> = docs.iter().filter_map(|d| d.asset_id).collect();
    let linked_beneficiaries: HashSet<i64> =
        docs.iter().filter_map(|d| d.beneficiary_id).collect();
    let linked_executors: HashSet<i64> = docs.iter().filter_map(|d| d.executor_id).collect();

    let assets = linkage_items(
        assets::list_by_estate(conn, estate.id)
            .await?
            .into_iter()
            .map(|a| (a.id, a.name)),
        &linked_assets,
    );
    let beneficiaries = linkage_items(
        beneficiaries::list_by_estate(conn, estate.id)
            .await?
            .into_iter()
            .map(|b| (b.id, b.name)),
        &linked_beneficiaries,
    );
    let executors = linkage_items(
        executors::list_by_estate(conn, estate.id)
            .await?
            .into_iter()
            .map(|e| (e.id, e.name)),
        &linked_executors,
    );

    let unlinked_count = assets
        .iter()
        .chain(&beneficiaries)
        .chain(&executors)
        .filter(|i| !i.has_document)
        .count();

    Ok(LinkageStatus {
        assets,
        beneficiaries,
        executors,
        unlinked_count,
    })
}
