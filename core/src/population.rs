//! Seeded synthetic datasets.
//!
//! Produces customers, accounts and transactions of arbitrary size
//! with the same shape as the bundled sample: heavy-tailed balances
//! and amounts, a few never-used accounts, occasional out-of-band
//! amounts and a small rate of stored fraud flags. Status codes and
//! the product catalog are the sample's own.
//!
//! Same parameters → identical Dataset.

use crate::{
    fixtures::{self, STATUS_FAILED, STATUS_PENDING, STATUS_POSTED, STATUS_REVERSED},
    inactivity_evaluator::start_of_day,
    model::{
        Account, AccountStatus, AccountType, Channel, Customer, Dataset, KycStatus, Transaction,
        TransactionType,
    },
    name_generator::NameGenerator,
    rng::{RngBank, Stream, StreamRng},
};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;

/// Share of accounts that never transact.
const DORMANT_ACCOUNT_RATE: f64 = 0.12;
/// Share of transactions whose amount is inflated far past any band.
const OUTLIER_AMOUNT_RATE: f64 = 0.02;
const ZERO_AMOUNT_RATE: f64 = 0.01;
const STORED_FRAUD_FLAG_RATE: f64 = 0.03;
const MAX_TRANSACTIONS_PER_ACCOUNT: u64 = 10;

#[derive(Debug, Clone)]
pub struct PopulationParams {
    pub seed:      u64,
    pub customers: u32,
    /// Earliest customer creation date.
    pub start:     NaiveDate,
    /// Nothing is dated after this instant.
    pub now:       DateTime<Utc>,
}

impl Default for PopulationParams {
    fn default() -> Self {
        Self {
            seed:      42,
            customers: 50,
            start:     fixtures::day(2023, 1, 1),
            now:       fixtures::sample_now(),
        }
    }
}

pub fn generate(params: &PopulationParams) -> Dataset {
    let bank = RngBank::new(params.seed);
    let mut customer_rng = bank.stream(Stream::Customer);
    let mut account_rng = bank.stream(Stream::Account);
    let mut txn_rng = bank.stream(Stream::Transaction);

    let start = start_of_day(params.start);
    let mut customers = Vec::with_capacity(params.customers as usize);
    let mut accounts = Vec::new();
    let mut transactions = Vec::new();

    for customer_id in 1..=params.customers {
        let customer = generate_customer(&mut customer_rng, customer_id, start, params.now);

        let account_count = account_rng.range_inclusive(1, 3);
        for _ in 0..account_count {
            let account_id = accounts.len() as u32 + 1;
            let account = generate_account(&mut account_rng, account_id, &customer, params.now);

            if !txn_rng.chance(DORMANT_ACCOUNT_RATE) {
                let n = txn_rng.range_inclusive(1, MAX_TRANSACTIONS_PER_ACCOUNT);
                for _ in 0..n {
                    let seq = transactions.len() + 1;
                    transactions.push(generate_transaction(&mut txn_rng, seq, &account, params.now));
                }
            }
            accounts.push(account);
        }
        customers.push(customer);
    }

    log::debug!(
        "population: seed {} → {} customers, {} accounts, {} transactions",
        params.seed,
        customers.len(),
        accounts.len(),
        transactions.len()
    );

    Dataset {
        customers,
        accounts,
        transactions,
        transaction_statuses: fixtures::transaction_statuses(),
        products:             fixtures::bank_products(),
        staff:                fixtures::bank_staff(),
    }
}

fn generate_customer(
    rng: &mut StreamRng,
    customer_id: u32,
    start: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Customer {
    let customer_name = NameGenerator::full_name(rng);
    let email = NameGenerator::email(&customer_name, customer_id);
    let kyc_status = *rng.pick_weighted(&[
        (KycStatus::Verified, 0.70),
        (KycStatus::Pending, 0.20),
        (KycStatus::Rejected, 0.10),
    ]);
    // Two decimal places, always within [0, 0.99].
    let risk_rating = (rng.next_f64() * 100.0).floor() / 100.0;

    Customer {
        customer_id,
        phone: NameGenerator::phone(rng),
        address: NameGenerator::address(rng),
        customer_name,
        email,
        kyc_status,
        risk_rating,
        created_at: random_instant(rng, start, now),
    }
}

fn generate_account(
    rng: &mut StreamRng,
    account_id: u32,
    owner: &Customer,
    now: DateTime<Utc>,
) -> Account {
    let account_type = *rng.pick_weighted(&[
        (AccountType::Checking, 0.50),
        (AccountType::Savings, 0.35),
        (AccountType::Loan, 0.15),
    ]);
    let (prefix, balance) = match account_type {
        AccountType::Checking => ("CHK", rng.pareto(200.0, 1.6).min(500_000.0)),
        AccountType::Savings => ("SAV", rng.pareto(1_000.0, 1.1).min(2_000_000.0)),
        AccountType::Loan => {
            let outstanding = if rng.chance(0.5) { 0.0 } else { rng.pareto(1_000.0, 1.5).min(750_000.0) };
            ("LN", outstanding)
        }
    };
    let status = *rng.pick_weighted(&[
        (AccountStatus::Active, 0.90),
        (AccountStatus::Inactive, 0.07),
        (AccountStatus::Suspended, 0.03),
    ]);

    Account {
        account_id,
        customer_id: owner.customer_id,
        account_number: format!("{prefix}-{account_id:05}"),
        account_type,
        open_date: random_instant(rng, owner.created_at, now).date_naive(),
        balance: cents(balance),
        currency: "USD".to_string(),
        status,
    }
}

fn generate_transaction(
    rng: &mut StreamRng,
    seq: usize,
    account: &Account,
    now: DateTime<Utc>,
) -> Transaction {
    let transaction_type = match account.account_type {
        AccountType::Loan => *rng.pick_weighted(&[
            (TransactionType::Disbursement, 0.6),
            (TransactionType::Deposit, 0.4),
        ]),
        _ => *rng.pick_weighted(&[
            (TransactionType::Deposit, 0.35),
            (TransactionType::Withdrawal, 0.28),
            (TransactionType::Transfer, 0.25),
            (TransactionType::Purchase, 0.12),
        ]),
    };

    let mut amount = match transaction_type {
        TransactionType::Disbursement => rng.pareto(5_000.0, 1.8),
        TransactionType::Deposit => rng.pareto(100.0, 1.3),
        _ => rng.pareto(20.0, 1.4),
    }
    .min(90_000.0);
    if rng.chance(OUTLIER_AMOUNT_RATE) {
        amount *= 20.0;
    } else if rng.chance(ZERO_AMOUNT_RATE) {
        amount = 0.0;
    }

    let channel = if transaction_type == TransactionType::Disbursement {
        Channel::System
    } else {
        *rng.pick_weighted(&[
            (Channel::Mobile, 0.35),
            (Channel::Atm, 0.15),
            (Channel::Branch, 0.15),
            (Channel::Online, 0.25),
            (Channel::Pos, 0.10),
        ])
    };
    let device_used = match channel {
        Channel::Mobile => "Mobile",
        Channel::Atm => "ATM Terminal",
        Channel::Branch => "Teller",
        Channel::Online => "Desktop",
        Channel::Pos => "POS Terminal",
        Channel::System => "Core Banking",
    };
    let status_id = *rng.pick_weighted(&[
        (STATUS_POSTED, 0.85),
        (STATUS_PENDING, 0.08),
        (STATUS_FAILED, 0.05),
        (STATUS_REVERSED, 0.02),
    ]);

    Transaction {
        transaction_id: format!("TXN-{seq:06}"),
        account_id: account.account_id,
        customer_id: account.customer_id,
        transaction_type,
        status_id,
        total_amount: cents(amount),
        channel,
        device_used: device_used.to_string(),
        location: NameGenerator::location(rng),
        transaction_date: random_instant(rng, start_of_day(account.open_date), now),
        fraud_flag: rng.chance(STORED_FRAUD_FLAG_RATE),
    }
}

/// Uniform instant in [from, to). Collapses to `from` when the window is empty.
fn random_instant(rng: &mut StreamRng, from: DateTime<Utc>, to: DateTime<Utc>) -> DateTime<Utc> {
    let span = (to - from).num_seconds();
    if span <= 0 {
        return from;
    }
    from + Duration::seconds(rng.next_u64_below(span as u64) as i64)
}

fn cents(amount: f64) -> Decimal {
    Decimal::new((amount * 100.0).round() as i64, 2)
}
