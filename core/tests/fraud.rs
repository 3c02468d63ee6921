//! Fraud evaluator: amount bands per account type.

use bankdesk_core::{
    config::{AmountBand, FraudThresholds},
    fixtures::{self, at, usd},
    fraud_evaluator::{
        check_transaction, evaluate_fraud, stored_flag_mismatches, FraudAlertKind, FraudVerdict,
    },
    model::{AccountType, Channel, Transaction, TransactionType},
};
use rust_decimal::Decimal;

fn ids<T>(rows: &[T], id: impl Fn(&T) -> &str) -> Vec<String> {
    rows.iter().map(|r| id(r).to_string()).collect()
}

fn orphan_transaction(amount: Decimal) -> Transaction {
    Transaction {
        transaction_id:   "TXN-ORPHAN".into(),
        account_id:       999,
        customer_id:      999,
        transaction_type: TransactionType::Withdrawal,
        status_id:        fixtures::STATUS_POSTED,
        total_amount:     amount,
        channel:          Channel::Online,
        device_used:      "Desktop".into(),
        location:         "Singapore - Online".into(),
        transaction_date: at(2026, 1, 1, 12, 0),
        fraud_flag:       false,
    }
}

#[test]
fn sample_flags_one_violator_per_band_in_input_order() {
    let d = fixtures::sample_dataset();
    let flagged = evaluate_fraud(
        &d.transactions,
        &d.accounts,
        &d.customers,
        &FraudThresholds::default(),
    );

    assert_eq!(
        ids(&flagged, |f| f.transaction.transaction.transaction_id.as_str()),
        vec!["TXN-0011", "TXN-0012", "TXN-0013", "TXN-0014"],
        "Unexpected flagged set: {flagged:#?}"
    );
}

#[test]
fn reasons_name_the_type_and_the_violated_edge() {
    let d = fixtures::sample_dataset();
    let flagged = evaluate_fraud(
        &d.transactions,
        &d.accounts,
        &d.customers,
        &FraudThresholds::default(),
    );
    let reasons: Vec<&str> = flagged.iter().map(|f| f.reason.as_str()).collect();

    assert_eq!(
        reasons,
        vec![
            "Below Checking Minimum ($0.01)",
            "Exceeds Checking Limit ($10,000)",
            "Exceeds Savings Limit ($50,000)",
            "Exceeds Loan Limit ($100,000)",
        ]
    );
    assert_eq!(flagged[0].alert, FraudAlertKind::BelowMinimum);
    assert!(flagged[1..].iter().all(|f| f.alert == FraudAlertKind::ExceedsLimit));
}

#[test]
fn flagged_rows_carry_band_and_joined_fields() {
    let d = fixtures::sample_dataset();
    let flagged = evaluate_fraud(
        &d.transactions,
        &d.accounts,
        &d.customers,
        &FraudThresholds::default(),
    );
    let loan = flagged
        .iter()
        .find(|f| f.transaction.transaction.transaction_id == "TXN-0014")
        .expect("loan violator flagged");

    assert_eq!(loan.min_threshold, usd(1));
    assert_eq!(loan.max_threshold, Decimal::from(100_000));
    assert_eq!(loan.transaction.customer_name_or_unknown(), "Violator Loan Fraud");
    assert_eq!(loan.transaction.account_number_or_unknown(), "VIO-LN-9003");
    assert_eq!(loan.transaction.account_type, Some(AccountType::Loan));
}

#[test]
fn both_band_edges_are_valid() {
    let t = FraudThresholds::default();

    assert_eq!(check_transaction(usd(1_000_000), Some(AccountType::Checking), &t), FraudVerdict::Valid);
    assert_eq!(check_transaction(usd(1), Some(AccountType::Checking), &t), FraudVerdict::Valid);
    assert_eq!(check_transaction(usd(5_000_000), Some(AccountType::Savings), &t), FraudVerdict::Valid);

    let just_over = check_transaction(usd(1_000_001), Some(AccountType::Checking), &t);
    assert!(just_over.is_flagged(), "10,000.01 must exceed the checking band");
    assert_eq!(just_over.reason(), "Exceeds Checking Limit ($10,000)");

    let zero = check_transaction(Decimal::ZERO, Some(AccountType::Loan), &t);
    assert_eq!(zero.reason(), "Below Loan Minimum ($0.01)");
}

#[test]
fn unresolved_account_passes_unchecked() {
    let d = fixtures::sample_dataset();
    let orphan = orphan_transaction(Decimal::from(1_000_000));

    let flagged = evaluate_fraud(
        std::slice::from_ref(&orphan),
        &d.accounts,
        &d.customers,
        &FraudThresholds::default(),
    );
    assert!(flagged.is_empty(), "A dangling account reference must never be flagged");
    assert_eq!(check_transaction(orphan.total_amount, None, &FraudThresholds::default()).reason(), "Valid");
}

#[test]
fn type_without_a_band_is_never_flagged() {
    let d = fixtures::sample_dataset();
    let thresholds = FraudThresholds::default().without(AccountType::Loan);

    let flagged = evaluate_fraud(&d.transactions, &d.accounts, &d.customers, &thresholds);
    assert!(
        flagged.iter().all(|f| f.transaction.account_type != Some(AccountType::Loan)),
        "Loan transactions flagged despite having no band"
    );
    assert_eq!(flagged.len(), 3);
}

#[test]
fn tighter_band_changes_the_verdicts() {
    let d = fixtures::sample_dataset();
    let thresholds = FraudThresholds::empty()
        .with_band(AccountType::Checking, AmountBand::new(usd(1), Decimal::from(1_000)));

    let flagged = evaluate_fraud(&d.transactions, &d.accounts, &d.customers, &thresholds);
    assert_eq!(
        ids(&flagged, |f| f.transaction.transaction.transaction_id.as_str()),
        vec!["TXN-0001", "TXN-0003", "TXN-0011", "TXN-0012"],
    );
    assert_eq!(flagged[0].reason, "Exceeds Checking Limit ($1,000)");
}

#[test]
fn stored_flags_are_compared_not_trusted() {
    let d = fixtures::sample_dataset();
    let mismatches = stored_flag_mismatches(&d.transactions, &d.accounts, &FraudThresholds::default());

    assert_eq!(ids(&mismatches, |m| m.transaction_id.as_str()), vec!["TXN-0003", "TXN-0011"]);

    // TXN-0003 sits exactly on the checking maximum but was stored as fraud.
    assert!(mismatches[0].stored_flag && !mismatches[0].live_flag);
    // TXN-0011 is a zero-amount purchase nobody flagged.
    assert!(!mismatches[1].stored_flag && mismatches[1].live_flag);
}

#[test]
fn flagged_rows_serialize_flat() {
    let d = fixtures::sample_dataset();
    let flagged = evaluate_fraud(
        &d.transactions,
        &d.accounts,
        &d.customers,
        &FraudThresholds::default(),
    );
    let json = serde_json::to_value(&flagged[1]).expect("serialize");

    assert_eq!(json["transaction_id"], "TXN-0012");
    assert_eq!(json["total_amount"], "12000.00");
    assert_eq!(json["account_type"], "Checking");
    assert_eq!(json["alert"], "exceeds_limit");
    assert_eq!(json["reason"], "Exceeds Checking Limit ($10,000)");
}
