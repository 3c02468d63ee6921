//! Seeded synthetic datasets.

use bankdesk_core::{
    fixtures,
    inactivity_evaluator::{days_between, last_activity},
    model::{find_account, find_customer},
    population::{generate, PopulationParams},
    RuleConfig, RuleEngine,
};
use std::collections::HashSet;

fn params(seed: u64, customers: u32) -> PopulationParams {
    PopulationParams { seed, customers, ..PopulationParams::default() }
}

#[test]
fn generated_dataset_passes_validation() {
    let d = generate(&params(42, 200));
    d.validate().expect("generated data satisfies record invariants");
    assert_eq!(d.customers.len(), 200);
    assert!(d.accounts.len() >= 200 && d.accounts.len() <= 600);
}

#[test]
fn every_reference_resolves() {
    let d = generate(&params(99, 120));
    for a in &d.accounts {
        assert!(find_customer(&d.customers, a.customer_id).is_some(), "Account {} has no owner", a.account_id);
    }
    for t in &d.transactions {
        let account = find_account(&d.accounts, t.account_id)
            .unwrap_or_else(|| panic!("{} posts to a missing account", t.transaction_id));
        assert_eq!(t.customer_id, account.customer_id, "{} owner mismatch", t.transaction_id);
    }
}

#[test]
fn nothing_is_dated_after_now() {
    let p = params(5, 150);
    let d = generate(&p);
    assert!(d.customers.iter().all(|c| c.created_at <= p.now));
    assert!(d.accounts.iter().all(|a| a.open_date <= p.now.date_naive()));
    assert!(d.transactions.iter().all(|t| t.transaction_date <= p.now));
}

#[test]
fn large_population_contains_rule_violators() {
    let d = generate(&params(2024, 500));

    let transacting: HashSet<u32> = d.transactions.iter().map(|t| t.account_id).collect();
    assert!(
        d.accounts.iter().any(|a| !transacting.contains(&a.account_id)),
        "Expected some never-used accounts"
    );
    assert!(d.transactions.iter().any(|t| t.fraud_flag), "Expected some stored fraud flags");
}

#[test]
fn lookup_tables_come_from_the_sample() {
    let d = generate(&params(1, 10));
    assert_eq!(d.transaction_statuses, fixtures::transaction_statuses());
    assert_eq!(d.products, fixtures::bank_products());
    assert_eq!(d.staff, fixtures::bank_staff());
}

#[test]
fn zero_customers_is_an_empty_population() {
    let d = generate(&params(1, 0));
    assert!(d.customers.is_empty());
    assert!(d.accounts.is_empty());
    assert!(d.transactions.is_empty());
}

#[test]
fn rules_agree_with_their_definitions_on_a_large_population() {
    let p = params(9, 800);
    let d = generate(&p);
    let config = RuleConfig::default();
    let report = RuleEngine::new(config.clone()).run(&d, p.now);

    // Fraud: flagged exactly when the amount leaves its account type's band.
    let flagged: HashSet<&str> = report
        .fraud
        .iter()
        .map(|f| f.transaction.transaction.transaction_id.as_str())
        .collect();
    let outside: HashSet<&str> = d
        .transactions
        .iter()
        .filter(|t| {
            let account = find_account(&d.accounts, t.account_id).expect("generated references resolve");
            config
                .fraud_thresholds
                .band_for(account.account_type)
                .map_or(false, |band| !band.contains(t.total_amount))
        })
        .map(|t| t.transaction_id.as_str())
        .collect();
    assert!(!outside.is_empty(), "Seed 9 should produce out-of-band amounts");
    assert_eq!(flagged, outside);

    // High balance: strictly above the threshold, richest first.
    let rich: HashSet<u32> = report.high_balance.iter().map(|h| h.account.account_id).collect();
    let above: HashSet<u32> = d
        .accounts
        .iter()
        .filter(|a| a.balance > config.high_balance_threshold)
        .map(|a| a.account_id)
        .collect();
    assert_eq!(rich, above);
    assert!(report
        .high_balance
        .windows(2)
        .all(|w| w[0].account.balance >= w[1].account.balance));

    // Inactivity: never transacted, or idle longer than the threshold.
    let idle: HashSet<u32> = report.inactive.iter().map(|i| i.account.account_id).collect();
    let expected_idle: HashSet<u32> = d
        .accounts
        .iter()
        .filter(|a| match last_activity(a.account_id, &d.transactions) {
            None => true,
            Some(last) => days_between(last, p.now) > config.inactivity_days,
        })
        .map(|a| a.account_id)
        .collect();
    assert!(!expected_idle.is_empty(), "Seed 9 should produce idle accounts");
    assert_eq!(idle, expected_idle);
    assert!(report
        .inactive
        .windows(2)
        .all(|w| w[0].days_inactive >= w[1].days_inactive));
}
