//! Inactivity evaluator: days since last activity, as of a fixed `now`.

use bankdesk_core::{
    fixtures::{self, at, day, usd},
    inactivity_evaluator::{evaluate_inactivity, last_activity, InactivityBasis},
    model::{Account, AccountStatus, AccountType},
};

#[test]
fn never_used_account_leads_with_days_from_open_date() {
    let d = fixtures::sample_dataset();
    let rows = evaluate_inactivity(&d.accounts, &d.transactions, &d.customers, fixtures::sample_now(), 90);

    let first = &rows[0];
    assert_eq!(first.account.account_number, "VIO-INACT-9020");
    assert_eq!(first.days_inactive, 400);
    assert_eq!(first.basis, InactivityBasis::OpenDate);
    assert_eq!(first.last_transaction_date, None);
    assert_eq!(first.customer_name_or_unknown(), "Violator Inactive");
    assert_eq!(first.customer_phone_or_na(), "555-9020");
}

#[test]
fn dormant_account_is_measured_from_its_last_transaction() {
    let d = fixtures::sample_dataset();
    let rows = evaluate_inactivity(&d.accounts, &d.transactions, &d.customers, fixtures::sample_now(), 90);

    assert_eq!(rows.len(), 2, "Unexpected inactive set: {rows:#?}");
    let dormant = &rows[1];
    assert_eq!(dormant.account.account_id, 4);
    assert_eq!(dormant.basis, InactivityBasis::LastTransaction);
    assert_eq!(dormant.last_transaction_date, Some(at(2025, 9, 15, 10, 0)));
    // 114 calendar days, but the last transaction was at 10:00.
    assert_eq!(dormant.days_inactive, 113);
}

#[test]
fn threshold_is_strict() {
    let d = fixtures::sample_dataset();
    let now = fixtures::sample_now();

    let at_113 = evaluate_inactivity(&d.accounts, &d.transactions, &d.customers, now, 113);
    assert!(
        at_113.iter().all(|r| r.account.account_id != 4),
        "113 idle days must not exceed a 113-day threshold"
    );

    let at_112 = evaluate_inactivity(&d.accounts, &d.transactions, &d.customers, now, 112);
    assert!(at_112.iter().any(|r| r.account.account_id == 4));
}

#[test]
fn never_used_account_is_flagged_at_any_threshold() {
    let d = fixtures::sample_dataset();
    let rows = evaluate_inactivity(&d.accounts, &d.transactions, &d.customers, fixtures::sample_now(), 10_000);

    let ids: Vec<u32> = rows.iter().map(|r| r.account.account_id).collect();
    assert_eq!(ids, vec![11]);
}

#[test]
fn brand_new_account_without_transactions_is_still_flagged() {
    let mut d = fixtures::sample_dataset();
    d.accounts.push(Account {
        account_id:     12,
        customer_id:    1,
        account_number: "CHK-1002".into(),
        account_type:   AccountType::Checking,
        open_date:      day(2026, 1, 7),
        balance:        usd(0),
        currency:       "USD".into(),
        status:         AccountStatus::Active,
    });

    let rows = evaluate_inactivity(&d.accounts, &d.transactions, &d.customers, fixtures::sample_now(), 90);
    let fresh = rows.iter().find(|r| r.account.account_id == 12).expect("never-active account listed");
    assert_eq!(fresh.days_inactive, 0);
    assert_eq!(fresh.basis, InactivityBasis::OpenDate);
    assert_eq!(rows.last().map(|r| r.account.account_id), Some(12), "Sorted most dormant first");
}

#[test]
fn moving_now_forward_adds_more_accounts() {
    let d = fixtures::sample_dataset();
    let later = at(2026, 4, 1, 0, 0);

    let rows = evaluate_inactivity(&d.accounts, &d.transactions, &d.customers, later, 90);
    let days: Vec<i64> = rows.iter().map(|r| r.days_inactive).collect();
    assert!(days.windows(2).all(|w| w[0] >= w[1]), "Not sorted descending: {days:?}");
    // Loan fraud violator: last activity 2025-11-10 09:00 → 141 full days.
    let loan = rows.iter().find(|r| r.account.account_id == 9).expect("loan violator now idle");
    assert_eq!(loan.days_inactive, 141);
}

#[test]
fn last_activity_is_the_latest_timestamp() {
    let d = fixtures::sample_dataset();
    assert_eq!(last_activity(1, &d.transactions), Some(at(2026, 1, 2, 14, 5)));
    assert_eq!(last_activity(11, &d.transactions), None);
}
