//! DTOs for documents_sea adapter.

#[derive(Debug, Clone)]
pub struct DocumentCreate {
    pub estate_id: i64,
    pub name: String,
    pub file_url: String,
    pub file_type: String,
    pub file_size: i64,
    pub document_type: String,
    pub asset_id: Option<i64>,
    pub beneficiary_id: Option<i64>,
    pub executor_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct AccessLogCreate {
    pub document_id: i64,
    pub accessed_by: String,
    pub action: String,
}
