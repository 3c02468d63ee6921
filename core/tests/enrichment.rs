//! Foreign-key joins and their fail-soft sentinels.

use bankdesk_core::{
    enrichment::{
        enrich_account, enrich_customer, enrich_transaction, enriched_accounts, enriched_customers,
        enriched_transactions, transaction_status_name,
    },
    fixtures::{self, usd},
    model::{AccountType, StatusName},
};
use rust_decimal::Decimal;

#[test]
fn account_join_resolves_owner_and_counts_transactions() {
    let d = fixtures::sample_dataset();
    let row = enrich_account(&d.accounts[0], &d.customers, &d.transactions, Decimal::from(100_000));

    assert_eq!(row.customer_name.as_deref(), Some("John Doe"));
    assert_eq!(row.transaction_count, 3);
    assert!(!row.is_high_balance);
}

#[test]
fn transaction_join_resolves_account_and_customer() {
    let d = fixtures::sample_dataset();
    let txn = d
        .transactions
        .iter()
        .find(|t| t.transaction_id == "TXN-0013")
        .expect("fixture present");
    let row = enrich_transaction(txn, &d.accounts, &d.customers);

    assert_eq!(row.customer_name_or_unknown(), "Violator Savings Fraud");
    assert_eq!(row.account_number_or_unknown(), "VIO-SAV-9002");
    assert_eq!(row.account_type, Some(AccountType::Savings));
}

#[test]
fn dangling_references_become_unknown() {
    let d = fixtures::sample_dataset();
    let mut txn = d.transactions[0].clone();
    txn.account_id = 404;
    txn.customer_id = 404;

    let row = enrich_transaction(&txn, &d.accounts, &d.customers);
    assert_eq!(row.customer_name, None);
    assert_eq!(row.account_number, None);
    assert_eq!(row.customer_name_or_unknown(), "Unknown");
    assert_eq!(row.account_number_or_unknown(), "Unknown");
    assert_eq!(row.account_type_or_unknown(), "Unknown");

    let mut account = d.accounts[0].clone();
    account.customer_id = 404;
    let row = enrich_account(&account, &d.customers, &d.transactions, Decimal::from(100_000));
    assert_eq!(row.customer_name_or_unknown(), "Unknown");
}

#[test]
fn customer_join_sums_every_owned_account() {
    let d = fixtures::sample_dataset();
    let jane = d.customers.iter().find(|c| c.customer_id == 2).expect("fixture present");
    let row = enrich_customer(jane, &d.accounts);

    assert_eq!(row.account_count, 2);
    assert_eq!(row.total_balance, usd(15_250_000));
}

#[test]
fn customer_without_accounts_has_zero_totals() {
    let mut d = fixtures::sample_dataset();
    d.accounts.clear();

    for row in enriched_customers(&d) {
        assert_eq!(row.account_count, 0);
        assert_eq!(row.total_balance, Decimal::ZERO);
    }
}

#[test]
fn transaction_view_is_newest_first() {
    let d = fixtures::sample_dataset();
    let rows = enriched_transactions(&d);

    assert_eq!(rows.len(), d.transactions.len());
    assert_eq!(rows[0].transaction.transaction_id, "TXN-0006");
    assert_eq!(rows.last().map(|r| r.transaction.transaction_id.as_str()), Some("TXN-0008"));
    assert!(rows
        .windows(2)
        .all(|w| w[0].transaction.transaction_date >= w[1].transaction.transaction_date));
}

#[test]
fn account_view_marks_high_balances() {
    let d = fixtures::sample_dataset();
    let high: Vec<u32> = enriched_accounts(&d, Decimal::from(100_000))
        .into_iter()
        .filter(|r| r.is_high_balance)
        .map(|r| r.account.account_id)
        .collect();
    assert_eq!(high, vec![2, 10]);
}

#[test]
fn status_name_lookup() {
    let statuses = fixtures::transaction_statuses();
    assert_eq!(transaction_status_name(fixtures::STATUS_FAILED, &statuses), Some(StatusName::Failed));
    assert_eq!(transaction_status_name(99, &statuses), None);
}
