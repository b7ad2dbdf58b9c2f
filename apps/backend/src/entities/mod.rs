pub mod allocations;
pub mod assets;
pub mod beneficiaries;
pub mod document_access_logs;
pub mod documents;
pub mod estates;
pub mod executors;
pub mod liabilities;
pub mod users;

pub use allocations::Entity as Allocations;
pub use assets::Entity as Assets;
pub use beneficiaries::Entity as Beneficiaries;
pub use document_access_logs::Entity as DocumentAccessLogs;
pub use documents::Entity as Documents;
pub use estates::Entity as Estates;
pub use executors::Entity as Executors;
pub use liabilities::Entity as Liabilities;
pub use users::Entity as Users;
pub use users::Model as User;
