//! Enumerations stored as strings and exchanged as SCREAMING_SNAKE_CASE.

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, InfraErrorKind};

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $s:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $s)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $s,)+
                }
            }

            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($s => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// Parses a stored value; an unknown string means the row is corrupt.
            pub fn from_db(value: &str, row_id: i64) -> Result<Self, DomainError> {
                Self::parse(value).ok_or_else(|| {
                    DomainError::infra(
                        InfraErrorKind::DataCorruption,
                        format!(
                            "invalid {} '{value}' stored for id={row_id}",
                            stringify!($name)
                        ),
                    )
                })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum! {
    AssetCategory {
        CashSavings => "CASH_SAVINGS",
        Property => "PROPERTY",
        Investments => "INVESTMENTS",
        Pension => "PENSION",
        Insurance => "INSURANCE",
        Digital => "DIGITAL",
        Other => "OTHER",
    }
}

string_enum! {
    AssetSubType {
        CurrentAccount => "CURRENT_ACCOUNT",
        SavingsAccount => "SAVINGS_ACCOUNT",
        Isa => "ISA",
        Gia => "GIA",
        PremiumBonds => "PREMIUM_BONDS",
        UkProperty => "UK_PROPERTY",
        OverseasProperty => "OVERSEAS_PROPERTY",
        Stocks => "STOCKS",
        Bonds => "BONDS",
        Funds => "FUNDS",
        Etfs => "ETFS",
        WorkplacePension => "WORKPLACE_PENSION",
        PrivatePension => "PRIVATE_PENSION",
        Sipp => "SIPP",
        LifeInsurance => "LIFE_INSURANCE",
        CriticalIllness => "CRITICAL_ILLNESS",
        Cryptocurrency => "CRYPTOCURRENCY",
        OnlineAccounts => "ONLINE_ACCOUNTS",
        Domain => "DOMAIN",
        Vehicle => "VEHICLE",
        Valuables => "VALUABLES",
        Other => "OTHER",
    }
}

string_enum! {
    LiabilityType {
        Mortgage => "MORTGAGE",
        Loan => "LOAN",
        CreditCard => "CREDIT_CARD",
        StudentLoan => "STUDENT_LOAN",
        Tax => "TAX",
        Other => "OTHER",
    }
}

string_enum! {
    BeneficiaryType {
        Residuary => "RESIDUARY",
        Specific => "SPECIFIC",
        Contingent => "CONTINGENT",
    }
}

string_enum! {
    ExecutorRole {
        Primary => "PRIMARY",
        CoExecutor => "CO_EXECUTOR",
        Alternate => "ALTERNATE",
    }
}

string_enum! {
    DocumentType {
        Will => "WILL",
        Deed => "DEED",
        Policy => "POLICY",
        Insurance => "INSURANCE",
        Id => "ID",
        Certificate => "CERTIFICATE",
        Statement => "STATEMENT",
        Other => "OTHER",
    }
}

string_enum! {
    /// Which kind of record a document is attached to.
    DocumentLinkType {
        None => "NONE",
        Asset => "ASSET",
        Beneficiary => "BENEFICIARY",
        Executor => "EXECUTOR",
    }
}

string_enum! {
    AccessAction {
        Upload => "UPLOAD",
        View => "VIEW",
    }
}

impl Default for BeneficiaryType {
    fn default() -> Self {
        Self::Residuary
    }
}

impl Default for ExecutorRole {
    fn default() -> Self {
        Self::Primary
    }
}

impl Default for DocumentType {
    fn default() -> Self {
        Self::Other
    }
}

impl Default for DocumentLinkType {
    fn default() -> Self {
        Self::None
    }
}
