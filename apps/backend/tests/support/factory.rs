use backend_test_support::unique_helpers::unique_email;
use beqst::domain::{
    AssetCategory, AssetSubType, BeneficiaryType, DocumentLinkType, DocumentType, ExecutorRole,
};
use beqst::repos::users::{self, User};
use beqst::services::assets::AssetInput;
use beqst::services::beneficiaries::BeneficiaryInput;
use beqst::services::documents::DocumentInput;
use beqst::services::executors::ExecutorInput;
use beqst::DomainError;
use sea_orm::ConnectionTrait;

/// Stored hash for seeded users; they never log in with a password.
const SEEDED_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c2VlZGVkc2FsdA$c2VlZGVkaGFzaA";

pub async fn seed_user<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<User, DomainError> {
    users::create_user(conn, &unique_email("owner"), SEEDED_HASH).await
}

pub fn asset_input(name: &str, value: Option<f64>) -> AssetInput {
    AssetInput {
        name: name.to_string(),
        category: AssetCategory::Property,
        sub_type: AssetSubType::UkProperty,
        value,
        metadata: None,
    }
}

pub fn beneficiary_input(name: &str) -> BeneficiaryInput {
    BeneficiaryInput {
        name: name.to_string(),
        relationship: "Child".to_string(),
        email: None,
        phone: None,
        beneficiary_type: BeneficiaryType::Residuary,
    }
}

pub fn executor_input(name: &str) -> ExecutorInput {
    ExecutorInput {
        name: name.to_string(),
        email: Some("executor@example.com".to_string()),
        phone: None,
        role: ExecutorRole::Primary,
        instructions: None,
    }
}

pub fn document_input(file_name: &str, size: i64) -> DocumentInput {
    DocumentInput {
        name: None,
        file_name: file_name.to_string(),
        file_type: None,
        file_size: size,
        document_type: DocumentType::Will,
        link_type: DocumentLinkType::None,
        link_id: None,
    }
}
