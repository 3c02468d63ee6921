//! Foreign-key joins that attach display fields to records.
//!
//! A join that finds nothing yields `None`. Rendering `None` as
//! `"Unknown"` (or `"N/A"` for contact fields) is the job of the
//! `*_or_unknown` accessors, so callers can still tell a real name
//! from a dangling reference.

use crate::{
    model::{
        find_account, find_customer, find_status, Account, AccountType, Customer, Dataset,
        StatusName, Transaction, TransactionStatus,
    },
    types::{AccountId, StatusId},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Display value for an unresolved name or number.
pub const UNKNOWN: &str = "Unknown";

/// Display value for unresolved contact details.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedAccount {
    #[serde(flatten)]
    pub account:           Account,
    pub customer_name:     Option<String>,
    pub transaction_count: usize,
    pub is_high_balance:   bool,
}

impl EnrichedAccount {
    pub fn customer_name_or_unknown(&self) -> &str {
        self.customer_name.as_deref().unwrap_or(UNKNOWN)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedTransaction {
    #[serde(flatten)]
    pub transaction:    Transaction,
    pub customer_name:  Option<String>,
    pub account_number: Option<String>,
    pub account_type:   Option<AccountType>,
}

impl EnrichedTransaction {
    pub fn customer_name_or_unknown(&self) -> &str {
        self.customer_name.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn account_number_or_unknown(&self) -> &str {
        self.account_number.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn account_type_or_unknown(&self) -> &str {
        self.account_type.map(|t| t.as_str()).unwrap_or(UNKNOWN)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedCustomer {
    #[serde(flatten)]
    pub customer:      Customer,
    pub account_count: usize,
    pub total_balance: Decimal,
}

/// Attach owner name, transaction count and the high-balance flag.
pub fn enrich_account(
    account: &Account,
    customers: &[Customer],
    transactions: &[Transaction],
    high_balance_threshold: Decimal,
) -> EnrichedAccount {
    EnrichedAccount {
        account:           account.clone(),
        customer_name:     find_customer(customers, account.customer_id)
            .map(|c| c.customer_name.clone()),
        transaction_count: transaction_count(account.account_id, transactions),
        is_high_balance:   account.balance > high_balance_threshold,
    }
}

/// Attach customer name plus account number and type.
pub fn enrich_transaction(
    transaction: &Transaction,
    accounts: &[Account],
    customers: &[Customer],
) -> EnrichedTransaction {
    let account = find_account(accounts, transaction.account_id);
    EnrichedTransaction {
        transaction:    transaction.clone(),
        customer_name:  find_customer(customers, transaction.customer_id)
            .map(|c| c.customer_name.clone()),
        account_number: account.map(|a| a.account_number.clone()),
        account_type:   account.map(|a| a.account_type),
    }
}

/// Attach account count and summed balance across the customer's accounts.
pub fn enrich_customer(customer: &Customer, accounts: &[Account]) -> EnrichedCustomer {
    let owned = accounts.iter().filter(|a| a.customer_id == customer.customer_id);
    let (account_count, total_balance) = owned
        .fold((0usize, Decimal::ZERO), |(n, sum), a| (n + 1, sum + a.balance));
    EnrichedCustomer {
        customer: customer.clone(),
        account_count,
        total_balance,
    }
}

pub fn transaction_count(account_id: AccountId, transactions: &[Transaction]) -> usize {
    transactions
        .iter()
        .filter(|t| t.account_id == account_id)
        .count()
}

pub fn transaction_status_name(
    status_id: StatusId,
    statuses: &[TransactionStatus],
) -> Option<StatusName> {
    find_status(statuses, status_id).map(|s| s.status)
}

// ── Whole-collection views ───────────────────────────────────────────────────

pub fn enriched_accounts(dataset: &Dataset, high_balance_threshold: Decimal) -> Vec<EnrichedAccount> {
    dataset
        .accounts
        .iter()
        .map(|a| enrich_account(a, &dataset.customers, &dataset.transactions, high_balance_threshold))
        .collect()
}

/// Every transaction, enriched, newest first. Equal timestamps keep
/// their dataset order.
pub fn enriched_transactions(dataset: &Dataset) -> Vec<EnrichedTransaction> {
    let mut out: Vec<EnrichedTransaction> = dataset
        .transactions
        .iter()
        .map(|t| enrich_transaction(t, &dataset.accounts, &dataset.customers))
        .collect();
    out.sort_by(|a, b| b.transaction.transaction_date.cmp(&a.transaction.transaction_date));
    out
}

pub fn enriched_customers(dataset: &Dataset) -> Vec<EnrichedCustomer> {
    dataset
        .customers
        .iter()
        .map(|c| enrich_customer(c, &dataset.accounts))
        .collect()
}
