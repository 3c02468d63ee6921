//! Search and filter predicates for the admin tables.
//!
//! Search terms match case-insensitively as substrings. An empty
//! term or a `None` criterion matches everything.

use crate::{
    enrichment::{EnrichedAccount, EnrichedCustomer, EnrichedTransaction},
    model::{AccountType, KycStatus, TransactionType},
    types::{AccountId, StatusId},
};
use serde::{Deserialize, Serialize};

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountFilter {
    pub search:       String,
    pub account_type: Option<AccountType>,
}

impl AccountFilter {
    /// Search covers account number and owner name.
    pub fn matches(&self, row: &EnrichedAccount) -> bool {
        let term = self.search.to_lowercase();
        let search_hit = contains_ci(&row.account.account_number, &term)
            || contains_ci(row.customer_name_or_unknown(), &term);
        let type_hit = self.account_type.map_or(true, |t| row.account.account_type == t);
        search_hit && type_hit
    }

    pub fn apply<'a>(&self, rows: &'a [EnrichedAccount]) -> Vec<&'a EnrichedAccount> {
        rows.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Filter on the stored fraud flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FraudFilter {
    #[default]
    All,
    Flagged,
    Clean,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFilter {
    pub search:           String,
    pub status_id:        Option<StatusId>,
    pub transaction_type: Option<TransactionType>,
    pub fraud:            FraudFilter,
}

impl TransactionFilter {
    /// Search covers transaction id, customer name and account number.
    pub fn matches(&self, row: &EnrichedTransaction) -> bool {
        let t = &row.transaction;
        let term = self.search.to_lowercase();
        let search_hit = contains_ci(&t.transaction_id, &term)
            || contains_ci(row.customer_name_or_unknown(), &term)
            || contains_ci(row.account_number_or_unknown(), &term);
        let status_hit = self.status_id.map_or(true, |s| t.status_id == s);
        let type_hit = self.transaction_type.map_or(true, |k| t.transaction_type == k);
        let fraud_hit = match self.fraud {
            FraudFilter::All => true,
            FraudFilter::Flagged => t.fraud_flag,
            FraudFilter::Clean => !t.fraud_flag,
        };
        search_hit && status_hit && type_hit && fraud_hit
    }

    pub fn apply<'a>(&self, rows: &'a [EnrichedTransaction]) -> Vec<&'a EnrichedTransaction> {
        rows.iter().filter(|r| self.matches(r)).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerFilter {
    pub search:     String,
    pub kyc_status: Option<KycStatus>,
}

impl CustomerFilter {
    /// Search covers name and email.
    pub fn matches(&self, row: &EnrichedCustomer) -> bool {
        let c = &row.customer;
        let term = self.search.to_lowercase();
        let search_hit = contains_ci(&c.customer_name, &term) || contains_ci(&c.email, &term);
        let kyc_hit = self.kyc_status.map_or(true, |k| c.kyc_status == k);
        search_hit && kyc_hit
    }

    pub fn apply<'a>(&self, rows: &'a [EnrichedCustomer]) -> Vec<&'a EnrichedCustomer> {
        rows.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Filter over one customer's own transaction history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryFilter {
    /// Matched against the transaction id.
    pub search:           String,
    pub transaction_type: Option<TransactionType>,
    pub account_id:       Option<AccountId>,
}

impl HistoryFilter {
    pub fn matches(&self, row: &EnrichedTransaction) -> bool {
        let t = &row.transaction;
        contains_ci(&t.transaction_id, &self.search.to_lowercase())
            && self.transaction_type.map_or(true, |k| t.transaction_type == k)
            && self.account_id.map_or(true, |a| t.account_id == a)
    }
}
