//! Domain records and the immutable `Dataset` they live in.
//!
//! RULE: Nothing mutates a Dataset after it is built.
//! Evaluators and views borrow it and return fresh values.

use crate::{
    error::{DeskError, DeskResult},
    types::{AccountId, CustomerId, ProductId, StaffId, StatusId, TransactionId},
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Closed label sets. Each variant has one stable label used for
/// display, JSON and the SQLite columns alike.
macro_rules! labelled_enum {
    ($(#[$meta:meta])* $name:ident, $kind:literal { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DeskError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err(DeskError::UnknownVariant {
                        kind:  $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

labelled_enum!(
    /// Know-Your-Customer verification state.
    KycStatus, "kyc status" {
        Pending  => "Pending",
        Verified => "Verified",
        Rejected => "Rejected",
    }
);

labelled_enum!(
    /// Account type. Selects the fraud amount band.
    AccountType, "account type" {
        Checking => "Checking",
        Savings  => "Savings",
        Loan     => "Loan",
    }
);

labelled_enum!(
    AccountStatus, "account status" {
        Active    => "Active",
        Inactive  => "Inactive",
        Suspended => "Suspended",
    }
);

labelled_enum!(
    TransactionType, "transaction type" {
        Deposit      => "Deposit",
        Withdrawal   => "Withdrawal",
        Transfer     => "Transfer",
        Purchase     => "Purchase",
        Disbursement => "Disbursement",
    }
);

labelled_enum!(
    /// Name carried by a `TransactionStatus` lookup row.
    StatusName, "transaction status" {
        Pending  => "Pending",
        Posted   => "Posted",
        Failed   => "Failed",
        Reversed => "Reversed",
    }
);

labelled_enum!(
    Channel, "channel" {
        Mobile => "Mobile",
        Atm    => "ATM",
        Branch => "Branch",
        Online => "Online",
        Pos    => "POS",
        System => "System",
    }
);

labelled_enum!(
    ProductType, "product type" {
        Checking   => "Checking",
        Savings    => "Savings",
        Investment => "Investment",
        Loan       => "Loan",
    }
);

impl TransactionType {
    /// Money leaving the account from the holder's point of view.
    pub fn is_outflow(&self) -> bool {
        matches!(self, Self::Withdrawal | Self::Transfer | Self::Purchase)
    }

    /// Money arriving in the account. Everything else counts as spending
    /// in the customer's history totals.
    pub fn is_credit(&self) -> bool {
        matches!(self, Self::Deposit | Self::Disbursement)
    }
}

// ── Records ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id:   CustomerId,
    pub customer_name: String,
    pub email:         String,
    pub phone:         String,
    pub address:       String,
    pub kyc_status:    KycStatus,
    /// Always within [0, 1].
    pub risk_rating:   f64,
    pub created_at:    DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub account_id:     AccountId,
    pub customer_id:    CustomerId,
    pub account_number: String,
    pub account_type:   AccountType,
    pub open_date:      NaiveDate,
    /// Never negative.
    pub balance:        Decimal,
    pub currency:       String,
    pub status:         AccountStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id:   TransactionId,
    pub account_id:       AccountId,
    pub customer_id:      CustomerId,
    pub transaction_type: TransactionType,
    pub status_id:        StatusId,
    pub total_amount:     Decimal,
    pub channel:          Channel,
    pub device_used:      String,
    pub location:         String,
    pub transaction_date: DateTime<Utc>,
    /// Precomputed in the source data. Advisory only: the fraud
    /// evaluator recomputes its own verdict.
    pub fraud_flag:       bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionStatus {
    pub status_id:   StatusId,
    pub status:      StatusName,
    pub description: String,
    pub is_final:    bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankProduct {
    pub product_id:    ProductId,
    pub product_name:  String,
    pub product_type:  ProductType,
    pub interest_rate: f64,
    pub fee_schedule:  String,
    pub active:        bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankStaff {
    pub staff_id:   StaffId,
    pub first_name: String,
    pub last_name:  String,
    pub role_title: String,
    pub branch_id:  String,
    pub email:      String,
    pub active:     bool,
}

// ── Dataset ──────────────────────────────────────────────────────────────────

/// Every collection the dashboards read, seeded once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub customers:             Vec<Customer>,
    pub accounts:              Vec<Account>,
    pub transactions:          Vec<Transaction>,
    pub transaction_statuses:  Vec<TransactionStatus>,
    pub products:              Vec<BankProduct>,
    pub staff:                 Vec<BankStaff>,
}

impl Dataset {
    /// Check the record-level invariants: risk rating in [0, 1],
    /// non-negative balances and unique primary keys.
    ///
    /// Dangling foreign keys are accepted here. Enrichment resolves
    /// them to sentinels instead of failing.
    pub fn validate(&self) -> DeskResult<()> {
        for c in &self.customers {
            if !(0.0..=1.0).contains(&c.risk_rating) {
                return Err(DeskError::InvalidRecord {
                    entity: "customer",
                    id:     c.customer_id.to_string(),
                    reason: format!("risk rating {} outside [0, 1]", c.risk_rating),
                });
            }
        }
        for a in &self.accounts {
            if a.balance.is_sign_negative() && !a.balance.is_zero() {
                return Err(DeskError::InvalidRecord {
                    entity: "account",
                    id:     a.account_id.to_string(),
                    reason: format!("negative balance {}", a.balance),
                });
            }
        }

        ensure_unique("customer", self.customers.iter().map(|c| c.customer_id.to_string()))?;
        ensure_unique("account", self.accounts.iter().map(|a| a.account_id.to_string()))?;
        ensure_unique("transaction", self.transactions.iter().map(|t| t.transaction_id.clone()))?;
        ensure_unique(
            "transaction status",
            self.transaction_statuses.iter().map(|s| s.status_id.to_string()),
        )?;
        ensure_unique("product", self.products.iter().map(|p| p.product_id.to_string()))?;
        ensure_unique("staff", self.staff.iter().map(|s| s.staff_id.to_string()))?;
        Ok(())
    }
}

fn ensure_unique(entity: &'static str, ids: impl Iterator<Item = String>) -> DeskResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id.clone()) {
            return Err(DeskError::DuplicateId { entity, id });
        }
    }
    Ok(())
}

// ── Lookups ──────────────────────────────────────────────────────────────────
//
// Linear scans, first match wins. A miss is `None`, never an error.

pub fn find_customer(customers: &[Customer], id: CustomerId) -> Option<&Customer> {
    customers.iter().find(|c| c.customer_id == id)
}

pub fn find_account(accounts: &[Account], id: AccountId) -> Option<&Account> {
    accounts.iter().find(|a| a.account_id == id)
}

pub fn find_status(statuses: &[TransactionStatus], id: StatusId) -> Option<&TransactionStatus> {
    statuses.iter().find(|s| s.status_id == id)
}
