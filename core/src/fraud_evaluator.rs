//! Fraud evaluator: per-transaction amount band check.
//!
//! Each transaction is checked against the band configured for the
//! type of the account it posts to:
//!   1. amount > max  →  "Exceeds <Type> Limit ($<max>)"
//!   2. amount < min  →  "Below <Type> Minimum ($<min>)"
//!   3. otherwise valid
//!
//! Both band edges are valid amounts. A transaction whose account
//! cannot be resolved, or whose account type has no band, passes.

use crate::{
    config::{AmountBand, FraudThresholds},
    enrichment::{enrich_transaction, EnrichedTransaction},
    model::{find_account, Account, AccountType, Customer, Transaction},
    money,
    types::TransactionId,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FraudAlertKind {
    ExceedsLimit,
    BelowMinimum,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FraudVerdict {
    Valid,
    Flagged {
        kind:   FraudAlertKind,
        reason: String,
        band:   AmountBand,
    },
}

impl FraudVerdict {
    pub fn is_flagged(&self) -> bool {
        matches!(self, Self::Flagged { .. })
    }

    /// Status text shown next to the transaction.
    pub fn reason(&self) -> &str {
        match self {
            Self::Valid => "Valid",
            Self::Flagged { reason, .. } => reason,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlaggedTransaction {
    #[serde(flatten)]
    pub transaction:   EnrichedTransaction,
    pub alert:         FraudAlertKind,
    pub reason:        String,
    pub min_threshold: Decimal,
    pub max_threshold: Decimal,
}

/// A transaction whose stored `fraud_flag` disagrees with the live check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagMismatch {
    pub transaction_id: TransactionId,
    pub stored_flag:    bool,
    pub live_flag:      bool,
}

/// Decide a single amount against the band for `account_type`.
pub fn check_transaction(
    amount: Decimal,
    account_type: Option<AccountType>,
    thresholds: &FraudThresholds,
) -> FraudVerdict {
    let Some(account_type) = account_type else {
        return FraudVerdict::Valid;
    };
    let Some(band) = thresholds.band_for(account_type) else {
        return FraudVerdict::Valid;
    };

    if amount > band.max {
        FraudVerdict::Flagged {
            kind:   FraudAlertKind::ExceedsLimit,
            reason: format!("Exceeds {account_type} Limit (${})", money::grouped(band.max)),
            band:   *band,
        }
    } else if amount < band.min {
        FraudVerdict::Flagged {
            kind:   FraudAlertKind::BelowMinimum,
            reason: format!("Below {account_type} Minimum (${})", money::plain(band.min)),
            band:   *band,
        }
    } else {
        FraudVerdict::Valid
    }
}

/// Flag every transaction outside its account type's band.
/// Output keeps input order.
pub fn evaluate_fraud(
    transactions: &[Transaction],
    accounts: &[Account],
    customers: &[Customer],
    thresholds: &FraudThresholds,
) -> Vec<FlaggedTransaction> {
    let mut flagged = Vec::new();
    let mut unresolved = 0usize;

    for txn in transactions {
        let enriched = enrich_transaction(txn, accounts, customers);
        if enriched.account_type.is_none() {
            unresolved += 1;
        }

        let verdict = check_transaction(txn.total_amount, enriched.account_type, thresholds);
        if let FraudVerdict::Flagged { kind, reason, band } = verdict {
            flagged.push(FlaggedTransaction {
                transaction:   enriched,
                alert:         kind,
                reason,
                min_threshold: band.min,
                max_threshold: band.max,
            });
        }
    }

    if unresolved > 0 {
        log::warn!("fraud: {unresolved} transaction(s) reference unknown accounts; passed unchecked");
    }
    log::debug!(
        "fraud: {} of {} transactions outside their band",
        flagged.len(),
        transactions.len()
    );
    flagged
}

/// Transactions where the stored flag and the live verdict differ.
/// Neither side is treated as authoritative; the list is for review.
pub fn stored_flag_mismatches(
    transactions: &[Transaction],
    accounts: &[Account],
    thresholds: &FraudThresholds,
) -> Vec<FlagMismatch> {
    transactions
        .iter()
        .filter_map(|txn| {
            let account_type = find_account(accounts, txn.account_id)
                .map(|a| a.account_type);
            let live_flag = check_transaction(txn.total_amount, account_type, thresholds).is_flagged();
            (live_flag != txn.fraud_flag).then(|| FlagMismatch {
                transaction_id: txn.transaction_id.clone(),
                stored_flag:    txn.fraud_flag,
                live_flag,
            })
        })
        .collect()
}
