//! High-balance evaluator: balance cutoff plus investment recommendations.
//!
//! Every account with a balance strictly above the threshold receives
//! the full list of active Investment products. The recommendation is
//! not ranked or personalised.

use crate::{
    enrichment::{NOT_AVAILABLE, UNKNOWN},
    model::{find_customer, Account, BankProduct, Customer, ProductType},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighBalanceAccount {
    #[serde(flatten)]
    pub account:              Account,
    pub customer_name:        Option<String>,
    pub customer_email:       Option<String>,
    pub recommended_products: Vec<BankProduct>,
}

impl HighBalanceAccount {
    pub fn customer_name_or_unknown(&self) -> &str {
        self.customer_name.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn customer_email_or_na(&self) -> &str {
        self.customer_email.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

/// Headline figures above the high-balance table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighBalanceSummary {
    pub account_count:     usize,
    pub total_value:       Decimal,
    /// Management-fee income at `potential_revenue_rate()` of `total_value`.
    pub potential_revenue: Decimal,
}

/// 1% of balance under management.
pub fn potential_revenue_rate() -> Decimal {
    Decimal::new(1, 2)
}

impl HighBalanceSummary {
    pub fn from_rows(rows: &[HighBalanceAccount]) -> Self {
        let total_value: Decimal = rows.iter().map(|r| r.account.balance).sum();
        Self {
            account_count: rows.len(),
            total_value,
            potential_revenue: total_value * potential_revenue_rate(),
        }
    }
}

/// Active products of one type, catalog order.
pub fn active_products_by_type(products: &[BankProduct], product_type: ProductType) -> Vec<BankProduct> {
    products
        .iter()
        .filter(|p| p.product_type == product_type && p.active)
        .cloned()
        .collect()
}

/// Accounts above `threshold`, richest first, each with every active
/// Investment product attached.
pub fn evaluate_high_balance(
    accounts: &[Account],
    customers: &[Customer],
    products: &[BankProduct],
    threshold: Decimal,
) -> Vec<HighBalanceAccount> {
    let investments = active_products_by_type(products, ProductType::Investment);

    let mut out: Vec<HighBalanceAccount> = accounts
        .iter()
        .filter(|a| a.balance > threshold)
        .map(|a| {
            let customer = find_customer(customers, a.customer_id);
            HighBalanceAccount {
                account:              a.clone(),
                customer_name:        customer.map(|c| c.customer_name.clone()),
                customer_email:       customer.map(|c| c.email.clone()),
                recommended_products: investments.clone(),
            }
        })
        .collect();

    // Stable: equal balances keep dataset order.
    out.sort_by(|a, b| b.account.balance.cmp(&a.account.balance));

    log::debug!(
        "high_balance: {} of {} accounts above {threshold}, {} product(s) recommended each",
        out.len(),
        accounts.len(),
        investments.len()
    );
    out
}
