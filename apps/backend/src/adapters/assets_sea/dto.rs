//! DTOs for assets_sea adapter. Enum fields are already in storage form.

use sea_orm::prelude::Json;

#[derive(Debug, Clone)]
pub struct AssetCreate {
    pub estate_id: i64,
    pub name: String,
    pub category: String,
    pub sub_type: String,
    pub value: Option<f64>,
    pub metadata: Option<Json>,
}

/// Partial update. `value` and `metadata` use `Some(None)` to clear.
#[derive(Debug, Clone, Default)]
pub struct AssetUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub sub_type: Option<String>,
    pub value: Option<Option<f64>>,
    pub metadata: Option<Option<Json>>,
}

impl AssetUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.sub_type.is_none()
            && self.value.is_none()
            && self.metadata.is_none()
    }
}
