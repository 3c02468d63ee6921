//! The rule engine: runs every evaluator over one dataset snapshot.
//!
//! EVALUATORS (independent; order never changes results):
//!   1. Fraud          amount band per account type
//!   2. High balance   balance cutoff + investment recommendations
//!   3. Inactivity     days since last transaction
//!
//! RULES:
//!   - The dataset is borrowed immutably; nothing is cached between runs.
//!   - Every threshold comes from the engine's RuleConfig.
//!   - Same dataset, config and `now` → identical report.

use crate::{
    analytics::DashboardStats,
    config::RuleConfig,
    fraud_evaluator::{evaluate_fraud, stored_flag_mismatches, FlagMismatch, FlaggedTransaction},
    high_balance_evaluator::{evaluate_high_balance, HighBalanceAccount, HighBalanceSummary},
    inactivity_evaluator::{evaluate_inactivity, InactiveAccount, InactivitySummary},
    model::Dataset,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything one engine run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleReport {
    pub evaluated_at:         DateTime<Utc>,
    pub fraud:                Vec<FlaggedTransaction>,
    pub flag_mismatches:      Vec<FlagMismatch>,
    pub high_balance:         Vec<HighBalanceAccount>,
    pub high_balance_summary: HighBalanceSummary,
    pub inactive:             Vec<InactiveAccount>,
    pub inactivity_summary:   InactivitySummary,
    pub stats:                DashboardStats,
}

pub struct RuleEngine {
    pub config: RuleConfig,
}

impl RuleEngine {
    pub fn new(config: RuleConfig) -> Self {
        Self { config }
    }

    /// Run all evaluators against `dataset` as of `now`.
    pub fn run(&self, dataset: &Dataset, now: DateTime<Utc>) -> RuleReport {
        let cfg = &self.config;

        let fraud = evaluate_fraud(
            &dataset.transactions,
            &dataset.accounts,
            &dataset.customers,
            &cfg.fraud_thresholds,
        );
        log::info!("fraud: {} flagged transaction(s)", fraud.len());

        let flag_mismatches =
            stored_flag_mismatches(&dataset.transactions, &dataset.accounts, &cfg.fraud_thresholds);
        if !flag_mismatches.is_empty() {
            log::info!(
                "fraud: stored flag disagrees with live check on {} transaction(s)",
                flag_mismatches.len()
            );
        }

        let high_balance = evaluate_high_balance(
            &dataset.accounts,
            &dataset.customers,
            &dataset.products,
            cfg.high_balance_threshold,
        );
        log::info!("high_balance: {} account(s) above threshold", high_balance.len());

        let inactive = evaluate_inactivity(
            &dataset.accounts,
            &dataset.transactions,
            &dataset.customers,
            now,
            cfg.inactivity_days,
        );
        log::info!("inactivity: {} account(s) need follow-up", inactive.len());

        RuleReport {
            evaluated_at: now,
            fraud,
            flag_mismatches,
            high_balance_summary: HighBalanceSummary::from_rows(&high_balance),
            high_balance,
            inactivity_summary: InactivitySummary::from_rows(&inactive),
            inactive,
            stats: DashboardStats::compute(dataset, cfg),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(RuleConfig::default())
    }
}
