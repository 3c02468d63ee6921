//! Dashboard totals and per-category breakdowns.

use crate::{
    config::RuleConfig,
    enrichment::{enrich_transaction, EnrichedTransaction},
    model::{AccountType, Channel, Dataset, KycStatus, StatusName, TransactionType},
    types::StatusId,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Risk rating bands: Low < 0.3, Medium [0.3, 0.6), High >= 0.6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    pub const ALL: &'static [RiskBand] = &[RiskBand::Low, RiskBand::Medium, RiskBand::High];

    pub fn from_rating(rating: f64) -> Self {
        if rating < 0.3 {
            Self::Low
        } else if rating < 0.6 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_customers:       usize,
    pub total_accounts:        usize,
    pub total_balance:         Decimal,
    pub total_transactions:    usize,
    pub total_volume:          Decimal,
    /// Count of the stored `fraud_flag`, not the live evaluator.
    pub stored_fraud_flags:    usize,
    pub high_balance_accounts: usize,
    pub verified_customers:    usize,
    pub high_risk_customers:   usize,
}

impl DashboardStats {
    pub fn compute(dataset: &Dataset, config: &RuleConfig) -> Self {
        Self {
            total_customers:       dataset.customers.len(),
            total_accounts:        dataset.accounts.len(),
            total_balance:         dataset.accounts.iter().map(|a| a.balance).sum(),
            total_transactions:    dataset.transactions.len(),
            total_volume:          dataset.transactions.iter().map(|t| t.total_amount).sum(),
            stored_fraud_flags:    dataset.transactions.iter().filter(|t| t.fraud_flag).count(),
            high_balance_accounts: dataset
                .accounts
                .iter()
                .filter(|a| a.balance > config.high_balance_threshold)
                .count(),
            verified_customers:    dataset
                .customers
                .iter()
                .filter(|c| c.kyc_status == KycStatus::Verified)
                .count(),
            high_risk_customers:   dataset
                .customers
                .iter()
                .filter(|c| RiskBand::from_rating(c.risk_rating) == RiskBand::High)
                .count(),
        }
    }
}

/// One bar of a breakdown chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Count<K> {
    pub key:   K,
    pub count: usize,
}

/// Counts for every variant, zeros included, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdowns {
    pub transactions_by_type:    Vec<Count<TransactionType>>,
    /// Keyed by status name. Transactions with an unknown status id
    /// are not counted.
    pub transactions_by_status:  Vec<Count<StatusName>>,
    pub transactions_by_channel: Vec<Count<Channel>>,
    pub accounts_by_type:        Vec<Count<AccountType>>,
    pub customers_by_risk:       Vec<Count<RiskBand>>,
    pub customers_by_kyc:        Vec<Count<KycStatus>>,
}

impl Breakdowns {
    pub fn compute(dataset: &Dataset) -> Self {
        let txns = &dataset.transactions;
        let status_of = |status_id: StatusId| {
            dataset
                .transaction_statuses
                .iter()
                .find(|s| s.status_id == status_id)
                .map(|s| s.status)
        };

        Self {
            transactions_by_type: tally(TransactionType::ALL, |k| {
                txns.iter().filter(|t| t.transaction_type == k).count()
            }),
            transactions_by_status: tally(StatusName::ALL, |k| {
                txns.iter().filter(|t| status_of(t.status_id) == Some(k)).count()
            }),
            transactions_by_channel: tally(Channel::ALL, |k| {
                txns.iter().filter(|t| t.channel == k).count()
            }),
            accounts_by_type: tally(AccountType::ALL, |k| {
                dataset.accounts.iter().filter(|a| a.account_type == k).count()
            }),
            customers_by_risk: tally(RiskBand::ALL, |k| {
                dataset
                    .customers
                    .iter()
                    .filter(|c| RiskBand::from_rating(c.risk_rating) == k)
                    .count()
            }),
            customers_by_kyc: tally(KycStatus::ALL, |k| {
                dataset.customers.iter().filter(|c| c.kyc_status == k).count()
            }),
        }
    }
}

fn tally<K: Copy>(keys: &[K], count: impl Fn(K) -> usize) -> Vec<Count<K>> {
    keys.iter()
        .map(|&key| Count { key, count: count(key) })
        .collect()
}

/// Newest `limit` transactions, enriched.
pub fn recent_transactions(dataset: &Dataset, limit: usize) -> Vec<EnrichedTransaction> {
    let mut txns: Vec<_> = dataset.transactions.iter().collect();
    txns.sort_by(|a, b| b.transaction_date.cmp(&a.transaction_date));
    txns.into_iter()
        .take(limit)
        .map(|t| enrich_transaction(t, &dataset.accounts, &dataset.customers))
        .collect()
}
