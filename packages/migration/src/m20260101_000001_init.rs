use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    PasswordHash,
    Name,
    FirstName,
    LastName,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Estates {
    Table,
    Id,
    OwnerId,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Assets {
    Table,
    Id,
    EstateId,
    Name,
    Category,
    SubType,
    Value,
    Metadata,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Liabilities {
    Table,
    Id,
    EstateId,
    Name,
    LiabilityType,
    Amount,
    Creditor,
    LinkedAssetId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Beneficiaries {
    Table,
    Id,
    EstateId,
    Name,
    Relationship,
    Email,
    Phone,
    BeneficiaryType,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Executors {
    Table,
    Id,
    EstateId,
    Name,
    Email,
    Phone,
    Role,
    Instructions,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Allocations {
    Table,
    Id,
    AssetId,
    BeneficiaryId,
    Percentage,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Documents {
    Table,
    Id,
    EstateId,
    Name,
    FileUrl,
    FileType,
    FileSize,
    DocumentType,
    AssetId,
    BeneficiaryId,
    ExecutorId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum DocumentAccessLogs {
    Table,
    Id,
    DocumentId,
    AccessedBy,
    Action,
    Timestamp,
}

fn pk(col: impl IntoIden) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .primary_key()
        .auto_increment()
        .to_owned()
}

fn timestamp(col: impl IntoIden) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // users
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk(Users::Id))
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::PasswordHash).string().null())
                    .col(ColumnDef::new(Users::Name).string().null())
                    .col(ColumnDef::new(Users::FirstName).string().null())
                    .col(ColumnDef::new(Users::LastName).string().null())
                    .col(timestamp(Users::CreatedAt))
                    .col(timestamp(Users::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // estates
        manager
            .create_table(
                Table::create()
                    .table(Estates::Table)
                    .if_not_exists()
                    .col(pk(Estates::Id))
                    .col(ColumnDef::new(Estates::OwnerId).big_integer().not_null())
                    .col(ColumnDef::new(Estates::Name).string().not_null())
                    .col(timestamp(Estates::CreatedAt))
                    .col(timestamp(Estates::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_estates_owner_id")
                            .from(Estates::Table, Estates::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_estates_owner_id")
                    .table(Estates::Table)
                    .col(Estates::OwnerId)
                    .to_owned(),
            )
            .await?;

        // assets
        manager
            .create_table(
                Table::create()
                    .table(Assets::Table)
                    .if_not_exists()
                    .col(pk(Assets::Id))
                    .col(ColumnDef::new(Assets::EstateId).big_integer().not_null())
                    .col(ColumnDef::new(Assets::Name).string().not_null())
                    .col(ColumnDef::new(Assets::Category).string().not_null())
                    .col(ColumnDef::new(Assets::SubType).string().not_null())
                    .col(ColumnDef::new(Assets::Value).double().null())
                    .col(ColumnDef::new(Assets::Metadata).json().null())
                    .col(timestamp(Assets::CreatedAt))
                    .col(timestamp(Assets::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assets_estate_id")
                            .from(Assets::Table, Assets::EstateId)
                            .to(Estates::Table, Estates::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_assets_estate_id")
                    .table(Assets::Table)
                    .col(Assets::EstateId)
                    .to_owned(),
            )
            .await?;

        // liabilities
        manager
            .create_table(
                Table::create()
                    .table(Liabilities::Table)
                    .if_not_exists()
                    .col(pk(Liabilities::Id))
                    .col(
                        ColumnDef::new(Liabilities::EstateId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Liabilities::Name).string().not_null())
                    .col(
                        ColumnDef::new(Liabilities::LiabilityType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Liabilities::Amount).double().null())
                    .col(ColumnDef::new(Liabilities::Creditor).string().null())
                    .col(
                        ColumnDef::new(Liabilities::LinkedAssetId)
                            .big_integer()
                            .null(),
                    )
                    .col(timestamp(Liabilities::CreatedAt))
                    .col(timestamp(Liabilities::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_liabilities_estate_id")
                            .from(Liabilities::Table, Liabilities::EstateId)
                            .to(Estates::Table, Estates::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_liabilities_linked_asset_id")
                            .from(Liabilities::Table, Liabilities::LinkedAssetId)
                            .to(Assets::Table, Assets::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_liabilities_estate_id")
                    .table(Liabilities::Table)
                    .col(Liabilities::EstateId)
                    .to_owned(),
            )
            .await?;

        // beneficiaries
        manager
            .create_table(
                Table::create()
                    .table(Beneficiaries::Table)
                    .if_not_exists()
                    .col(pk(Beneficiaries::Id))
                    .col(
                        ColumnDef::new(Beneficiaries::EstateId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Beneficiaries::Name).string().not_null())
                    .col(
                        ColumnDef::new(Beneficiaries::Relationship)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Beneficiaries::Email).string().null())
                    .col(ColumnDef::new(Beneficiaries::Phone).string().null())
                    .col(
                        ColumnDef::new(Beneficiaries::BeneficiaryType)
                            .string()
                            .not_null()
                            .default("RESIDUARY"),
                    )
                    .col(timestamp(Beneficiaries::CreatedAt))
                    .col(timestamp(Beneficiaries::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_beneficiaries_estate_id")
                            .from(Beneficiaries::Table, Beneficiaries::EstateId)
                            .to(Estates::Table, Estates::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_beneficiaries_estate_id")
                    .table(Beneficiaries::Table)
                    .col(Beneficiaries::EstateId)
                    .to_owned(),
            )
            .await?;

        // executors
        manager
            .create_table(
                Table::create()
                    .table(Executors::Table)
                    .if_not_exists()
                    .col(pk(Executors::Id))
                    .col(ColumnDef::new(Executors::EstateId).big_integer().not_null())
                    .col(ColumnDef::new(Executors::Name).string().not_null())
                    .col(ColumnDef::new(Executors::Email).string().null())
                    .col(ColumnDef::new(Executors::Phone).string().null())
                    .col(
                        ColumnDef::new(Executors::Role)
                            .string()
                            .not_null()
                            .default("PRIMARY"),
                    )
                    .col(ColumnDef::new(Executors::Instructions).text().null())
                    .col(timestamp(Executors::CreatedAt))
                    .col(timestamp(Executors::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_executors_estate_id")
                            .from(Executors::Table, Executors::EstateId)
                            .to(Estates::Table, Estates::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_executors_estate_id")
                    .table(Executors::Table)
                    .col(Executors::EstateId)
                    .to_owned(),
            )
            .await?;

        // allocations
        manager
            .create_table(
                Table::create()
                    .table(Allocations::Table)
                    .if_not_exists()
                    .col(pk(Allocations::Id))
                    .col(ColumnDef::new(Allocations::AssetId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Allocations::BeneficiaryId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Allocations::Percentage).double().not_null())
                    .col(timestamp(Allocations::CreatedAt))
                    .col(timestamp(Allocations::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_allocations_asset_id")
                            .from(Allocations::Table, Allocations::AssetId)
                            .to(Assets::Table, Assets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_allocations_beneficiary_id")
                            .from(Allocations::Table, Allocations::BeneficiaryId)
                            .to(Beneficiaries::Table, Beneficiaries::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_allocations_asset_beneficiary")
                    .table(Allocations::Table)
                    .col(Allocations::AssetId)
                    .col(Allocations::BeneficiaryId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // documents
        manager
            .create_table(
                Table::create()
                    .table(Documents::Table)
                    .if_not_exists()
                    .col(pk(Documents::Id))
                    .col(ColumnDef::new(Documents::EstateId).big_integer().not_null())
                    .col(ColumnDef::new(Documents::Name).string().not_null())
                    .col(ColumnDef::new(Documents::FileUrl).string().not_null())
                    .col(ColumnDef::new(Documents::FileType).string().not_null())
                    .col(
                        ColumnDef::new(Documents::FileSize)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Documents::DocumentType)
                            .string()
                            .not_null()
                            .default("OTHER"),
                    )
                    .col(ColumnDef::new(Documents::AssetId).big_integer().null())
                    .col(ColumnDef::new(Documents::BeneficiaryId).big_integer().null())
                    .col(ColumnDef::new(Documents::ExecutorId).big_integer().null())
                    .col(timestamp(Documents::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_documents_estate_id")
                            .from(Documents::Table, Documents::EstateId)
                            .to(Estates::Table, Estates::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_documents_asset_id")
                            .from(Documents::Table, Documents::AssetId)
                            .to(Assets::Table, Assets::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_documents_beneficiary_id")
                            .from(Documents::Table, Documents::BeneficiaryId)
                            .to(Beneficiaries::Table, Beneficiaries::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_documents_executor_id")
                            .from(Documents::Table, Documents::ExecutorId)
                            .to(Executors::Table, Executors::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_documents_estate_id")
                    .table(Documents::Table)
                    .col(Documents::EstateId)
                    .to_owned(),
            )
            .await?;

        // document_access_logs
        manager
            .create_table(
                Table::create()
                    .table(DocumentAccessLogs::Table)
                    .if_not_exists()
                    .col(pk(DocumentAccessLogs::Id))
                    .col(
                        ColumnDef::new(DocumentAccessLogs::DocumentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DocumentAccessLogs::AccessedBy)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DocumentAccessLogs::Action).string().not_null())
                    .col(timestamp(DocumentAccessLogs::Timestamp))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_access_logs_document_id")
                            .from(DocumentAccessLogs::Table, DocumentAccessLogs::DocumentId)
                            .to(Documents::Table, Documents::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_document_access_logs_document_ts")
                    .table(DocumentAccessLogs::Table)
                    .col(DocumentAccessLogs::DocumentId)
                    .col(DocumentAccessLogs::Timestamp)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse dependency order; indexes go with their tables
        manager
            .drop_table(
                Table::drop()
                    .table(DocumentAccessLogs::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Documents::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Allocations::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Executors::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(Beneficiaries::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Liabilities::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assets::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Estates::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
