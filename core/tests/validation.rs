//! Record-level invariants checked by `Dataset::validate`.

use bankdesk_core::{fixtures, DeskError};
use rust_decimal::Decimal;

#[test]
fn risk_rating_above_one_is_rejected() {
    let mut d = fixtures::sample_dataset();
    d.customers[4].risk_rating = 1.2;

    match d.validate() {
        Err(DeskError::InvalidRecord { entity, id, .. }) => {
            assert_eq!(entity, "customer");
            assert_eq!(id, "5");
        }
        other => panic!("Expected InvalidRecord, got {other:?}"),
    }
}

#[test]
fn negative_balance_is_rejected() {
    let mut d = fixtures::sample_dataset();
    d.accounts[0].balance = Decimal::new(-1, 2);

    let err = d.validate().expect_err("negative balance");
    assert!(matches!(err, DeskError::InvalidRecord { entity: "account", .. }), "Got {err}");
}

#[test]
fn duplicate_transaction_id_is_rejected() {
    let mut d = fixtures::sample_dataset();
    d.transactions[1].transaction_id = d.transactions[0].transaction_id.clone();

    let err = d.validate().expect_err("duplicate id");
    assert_eq!(err.to_string(), "Duplicate transaction id 'TXN-0001'");
}

#[test]
fn dangling_references_are_not_validation_errors() {
    let mut d = fixtures::sample_dataset();
    d.customers.retain(|c| c.customer_id != 10);
    d.validate().expect("missing owners degrade to sentinels, not errors");
}
