//! Customer-facing views: one customer's accounts, balances and
//! recent activity.

use crate::{
    config::RuleConfig,
    enrichment::{enrich_transaction, EnrichedTransaction},
    filter::HistoryFilter,
    model::{find_customer, Account, Customer, Dataset, Transaction, TransactionType},
    types::CustomerId,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub account:           Account,
    pub last_transaction:  Option<Transaction>,
    /// Sum of Deposit amounts.
    pub total_deposits:    Decimal,
    /// Sum of Withdrawal, Transfer and Purchase amounts.
    pub total_withdrawals: Decimal,
}

impl AccountSummary {
    pub fn build(account: &Account, transactions: &[Transaction]) -> Self {
        let mut last: Option<&Transaction> = None;
        let mut total_deposits = Decimal::ZERO;
        let mut total_withdrawals = Decimal::ZERO;

        for t in transactions.iter().filter(|t| t.account_id == account.account_id) {
            if last.map_or(true, |l| t.transaction_date > l.transaction_date) {
                last = Some(t);
            }
            if t.transaction_type == TransactionType::Deposit {
                total_deposits += t.total_amount;
            } else if t.transaction_type.is_outflow() {
                total_withdrawals += t.total_amount;
            }
        }

        Self {
            account: account.clone(),
            last_transaction: last.cloned(),
            total_deposits,
            total_withdrawals,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerPortfolio {
    pub customer_id:         CustomerId,
    /// `None` when the id matches no customer; the remaining fields
    /// are still computed from whatever references the id.
    pub customer:            Option<Customer>,
    pub accounts:            Vec<AccountSummary>,
    pub total_balance:       Decimal,
    /// Combined balance strictly above the high-balance threshold.
    pub has_high_balance:    bool,
    pub recent_transactions: Vec<Transaction>,
}

impl CustomerPortfolio {
    pub fn for_customer(customer_id: CustomerId, dataset: &Dataset, config: &RuleConfig) -> Self {
        let accounts: Vec<AccountSummary> = dataset
            .accounts
            .iter()
            .filter(|a| a.customer_id == customer_id)
            .map(|a| AccountSummary::build(a, &dataset.transactions))
            .collect();
        let total_balance: Decimal = accounts.iter().map(|s| s.account.balance).sum();

        let mut recent: Vec<&Transaction> = dataset
            .transactions
            .iter()
            .filter(|t| t.customer_id == customer_id)
            .collect();
        recent.sort_by(|a, b| b.transaction_date.cmp(&a.transaction_date));
        recent.truncate(config.recent_transactions);

        Self {
            customer_id,
            customer: find_customer(&dataset.customers, customer_id).cloned(),
            accounts,
            total_balance,
            has_high_balance: total_balance > config.high_balance_threshold,
            recent_transactions: recent.into_iter().cloned().collect(),
        }
    }

    /// First word of the customer's name, for greetings.
    pub fn first_name(&self) -> Option<&str> {
        self.customer
            .as_ref()
            .and_then(|c| c.customer_name.split_whitespace().next())
    }
}

/// One customer's transactions as the customer sees them: joined with
/// account number and type, newest first, narrowed by a `HistoryFilter`.
///
/// Account details resolve only against the customer's own accounts, so
/// a transaction posted to someone else's account shows as unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionHistory {
    pub customer_id:    CustomerId,
    pub rows:           Vec<EnrichedTransaction>,
    /// Deposits and disbursements among `rows`.
    pub total_credits:  Decimal,
    /// Every other transaction type among `rows`.
    pub total_spending: Decimal,
}

impl TransactionHistory {
    pub fn for_customer(customer_id: CustomerId, dataset: &Dataset, filter: &HistoryFilter) -> Self {
        let own_accounts: Vec<Account> = dataset
            .accounts
            .iter()
            .filter(|a| a.customer_id == customer_id)
            .cloned()
            .collect();

        let mut rows: Vec<EnrichedTransaction> = dataset
            .transactions
            .iter()
            .filter(|t| t.customer_id == customer_id)
            .map(|t| enrich_transaction(t, &own_accounts, &dataset.customers))
            .filter(|row| filter.matches(row))
            .collect();
        rows.sort_by(|a, b| b.transaction.transaction_date.cmp(&a.transaction.transaction_date));

        let (total_credits, total_spending) =
            rows.iter()
                .fold((Decimal::ZERO, Decimal::ZERO), |(credits, spending), row| {
                    let t = &row.transaction;
                    if t.transaction_type.is_credit() {
                        (credits + t.total_amount, spending)
                    } else {
                        (credits, spending + t.total_amount)
                    }
                });

        Self {
            customer_id,
            rows,
            total_credits,
            total_spending,
        }
    }
}
