//! Per-customer portfolio view.

use bankdesk_core::{
    filter::HistoryFilter,
    fixtures::{self, usd},
    model::{AccountType, TransactionType},
    portfolio::{AccountSummary, CustomerPortfolio, TransactionHistory},
    RuleConfig,
};
use rust_decimal::Decimal;

#[test]
fn two_account_customer_totals_and_flags() {
    let d = fixtures::sample_dataset();
    let p = CustomerPortfolio::for_customer(2, &d, &RuleConfig::default());

    assert_eq!(p.first_name(), Some("Jane"));
    assert_eq!(p.accounts.len(), 2);
    assert_eq!(p.total_balance, usd(15_250_000));
    assert!(p.has_high_balance, "152,500 combined must exceed 100,000");
}

#[test]
fn account_summaries_split_deposits_from_outflows() {
    let d = fixtures::sample_dataset();
    let p = CustomerPortfolio::for_customer(2, &d, &RuleConfig::default());

    let savings = &p.accounts[0];
    assert_eq!(savings.account.account_number, "SAV-2001");
    assert_eq!(savings.total_deposits, usd(5_000_000));
    assert_eq!(savings.total_withdrawals, usd(150_000));
    assert_eq!(
        savings.last_transaction.as_ref().map(|t| t.transaction_id.as_str()),
        Some("TXN-0005")
    );

    let checking = &p.accounts[1];
    assert_eq!(checking.total_deposits, Decimal::ZERO);
    assert_eq!(checking.total_withdrawals, usd(42_050));
}

#[test]
fn recent_transactions_are_newest_first_and_capped() {
    let d = fixtures::sample_dataset();
    let p = CustomerPortfolio::for_customer(2, &d, &RuleConfig::default());
    let ids: Vec<&str> = p.recent_transactions.iter().map(|t| t.transaction_id.as_str()).collect();
    assert_eq!(ids, vec!["TXN-0006", "TXN-0005", "TXN-0007", "TXN-0004"]);

    let config = RuleConfig { recent_transactions: 2, ..RuleConfig::default() };
    let p = CustomerPortfolio::for_customer(2, &d, &config);
    assert_eq!(p.recent_transactions.len(), 2);
}

#[test]
fn disbursements_count_as_neither_side() {
    let d = fixtures::sample_dataset();
    let loan = d.accounts.iter().find(|a| a.account_id == 5).expect("fixture present");
    let summary = AccountSummary::build(loan, &d.transactions);

    assert_eq!(summary.total_deposits, Decimal::ZERO);
    assert_eq!(summary.total_withdrawals, Decimal::ZERO);
    assert!(summary.last_transaction.is_some());
}

#[test]
fn unknown_customer_yields_an_empty_portfolio() {
    let d = fixtures::sample_dataset();
    let p = CustomerPortfolio::for_customer(404, &d, &RuleConfig::default());

    assert!(p.customer.is_none());
    assert_eq!(p.first_name(), None);
    assert!(p.accounts.is_empty());
    assert_eq!(p.total_balance, Decimal::ZERO);
    assert!(!p.has_high_balance);
}

#[test]
fn history_lists_every_account_newest_first() {
    let d = fixtures::sample_dataset();
    let h = TransactionHistory::for_customer(2, &d, &HistoryFilter::default());

    let ids: Vec<&str> = h.rows.iter().map(|r| r.transaction.transaction_id.as_str()).collect();
    assert_eq!(ids, vec!["TXN-0006", "TXN-0005", "TXN-0007", "TXN-0004"]);
    assert_eq!(h.rows[0].account_number_or_unknown(), "CHK-2002");
    assert_eq!(h.rows[0].account_type, Some(AccountType::Checking));
    assert_eq!(h.total_credits, usd(5_000_000));
    assert_eq!(h.total_spending, usd(192_050));
}

#[test]
fn history_filters_narrow_rows_and_totals() {
    let d = fixtures::sample_dataset();

    let checking = HistoryFilter { account_id: Some(3), ..HistoryFilter::default() };
    let h = TransactionHistory::for_customer(2, &d, &checking);
    let ids: Vec<&str> = h.rows.iter().map(|r| r.transaction.transaction_id.as_str()).collect();
    assert_eq!(ids, vec!["TXN-0006", "TXN-0007"]);
    assert_eq!(h.total_credits, Decimal::ZERO);
    assert_eq!(h.total_spending, usd(42_050));

    let deposits = HistoryFilter { transaction_type: Some(TransactionType::Deposit), ..HistoryFilter::default() };
    let h = TransactionHistory::for_customer(2, &d, &deposits);
    assert_eq!(h.rows.len(), 1);
    assert_eq!(h.rows[0].transaction.transaction_id, "TXN-0004");

    let search = HistoryFilter { search: "0007".into(), ..HistoryFilter::default() };
    let h = TransactionHistory::for_customer(2, &d, &search);
    assert_eq!(h.rows.len(), 1);
    assert_eq!(h.total_spending, usd(30_000));
}

#[test]
fn history_counts_disbursements_as_credits() {
    let d = fixtures::sample_dataset();
    let h = TransactionHistory::for_customer(4, &d, &HistoryFilter::default());

    assert_eq!(h.rows.len(), 1);
    assert_eq!(h.total_credits, usd(2_500_000));
    assert_eq!(h.total_spending, Decimal::ZERO);
}

#[test]
fn history_only_joins_the_customers_own_accounts() {
    let mut d = fixtures::sample_dataset();
    // Posted under customer 2 but against John's checking account.
    d.transactions[0].customer_id = 2;

    let h = TransactionHistory::for_customer(2, &d, &HistoryFilter::default());
    let stray = h
        .rows
        .iter()
        .find(|r| r.transaction.transaction_id == "TXN-0001")
        .expect("row kept");
    assert_eq!(stray.account_number_or_unknown(), "Unknown");
    assert_eq!(stray.account_type_or_unknown(), "Unknown");
}

#[test]
fn unknown_customer_has_empty_history() {
    let d = fixtures::sample_dataset();
    let h = TransactionHistory::for_customer(404, &d, &HistoryFilter::default());
    assert!(h.rows.is_empty());
    assert_eq!(h.total_credits + h.total_spending, Decimal::ZERO);
}
