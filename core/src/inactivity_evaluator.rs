//! Inactivity evaluator: accounts without recent transactions.
//!
//! For each account:
//!   - last activity = latest transaction timestamp on the account
//!   - no transactions ever  →  days counted from the open date,
//!     flagged unconditionally ("never active" is itself the signal)
//!   - otherwise             →  flagged iff days inactive > threshold
//!
//! Day counts are floored whole days. Open dates count from UTC midnight.

use crate::{
    enrichment::{NOT_AVAILABLE, UNKNOWN},
    model::{find_customer, Account, Customer, Transaction},
    types::AccountId,
};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Where `days_inactive` was measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InactivityBasis {
    LastTransaction,
    /// The account has never transacted.
    OpenDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InactiveAccount {
    #[serde(flatten)]
    pub account:               Account,
    pub customer_name:         Option<String>,
    pub customer_phone:        Option<String>,
    pub customer_email:        Option<String>,
    pub last_transaction_date: Option<DateTime<Utc>>,
    pub days_inactive:         i64,
    pub basis:                 InactivityBasis,
}

impl InactiveAccount {
    pub fn customer_name_or_unknown(&self) -> &str {
        self.customer_name.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn customer_phone_or_na(&self) -> &str {
        self.customer_phone.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn customer_email_or_na(&self) -> &str {
        self.customer_email.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

/// Headline figures above the inactive-accounts table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InactivitySummary {
    pub account_count:         usize,
    /// Combined balance of every listed account.
    pub at_risk_balance:       Decimal,
    /// Mean of `days_inactive`, rounded half up. 0 for an empty list.
    pub average_days_inactive: i64,
}

impl InactivitySummary {
    pub fn from_rows(rows: &[InactiveAccount]) -> Self {
        let n = rows.len() as i64;
        let total_days: i64 = rows.iter().map(|r| r.days_inactive).sum();
        let average_days_inactive = if n == 0 {
            0
        } else {
            (total_days * 2 + n).div_euclid(2 * n)
        };
        Self {
            account_count: rows.len(),
            at_risk_balance: rows.iter().map(|r| r.account.balance).sum(),
            average_days_inactive,
        }
    }
}

/// Latest transaction timestamp on `account_id`, if any.
pub fn last_activity(account_id: AccountId, transactions: &[Transaction]) -> Option<DateTime<Utc>> {
    transactions
        .iter()
        .filter(|t| t.account_id == account_id)
        .map(|t| t.transaction_date)
        .max()
}

/// Whole days from `from` to `to`, floored. Negative when `from` is later.
pub fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::default()))
}

/// Accounts that never transacted or whose last transaction is more
/// than `threshold_days` before `now`, most dormant first.
pub fn evaluate_inactivity(
    accounts: &[Account],
    transactions: &[Transaction],
    customers: &[Customer],
    now: DateTime<Utc>,
    threshold_days: i64,
) -> Vec<InactiveAccount> {
    let mut out: Vec<InactiveAccount> = accounts
        .iter()
        .filter_map(|account| {
            let last = last_activity(account.account_id, transactions);
            let (days_inactive, basis, flagged) = match last {
                Some(ts) => {
                    let days = days_between(ts, now);
                    (days, InactivityBasis::LastTransaction, days > threshold_days)
                }
                None => (
                    days_between(start_of_day(account.open_date), now),
                    InactivityBasis::OpenDate,
                    true,
                ),
            };
            if !flagged {
                return None;
            }

            let customer = find_customer(customers, account.customer_id);
            Some(InactiveAccount {
                account:               account.clone(),
                customer_name:         customer.map(|c| c.customer_name.clone()),
                customer_phone:        customer.map(|c| c.phone.clone()),
                customer_email:        customer.map(|c| c.email.clone()),
                last_transaction_date: last,
                days_inactive,
                basis,
            })
        })
        .collect();

    out.sort_by(|a, b| b.days_inactive.cmp(&a.days_inactive));

    log::debug!(
        "inactivity: {} of {} accounts idle > {threshold_days} days or never active (as of {now})",
        out.len(),
        accounts.len()
    );
    out
}
