//! The bundled sample dataset.
//!
//! Ten customers, eleven accounts and sixteen transactions, including
//! deliberate violators for each rule: an over-limit transaction per
//! account type, a zero-amount purchase, two high-balance accounts, a
//! dormant account and one that has never transacted. Day counts in
//! the tests are taken against `SAMPLE_REFERENCE_DATE`.

use crate::model::{
    Account, AccountStatus, AccountType, BankProduct, BankStaff, Channel, Customer, Dataset,
    KycStatus, ProductType, StatusName, Transaction, TransactionStatus, TransactionType,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

/// The "today" the sample data was written against.
pub const SAMPLE_REFERENCE_DATE: (i32, u32, u32) = (2026, 1, 7);

pub const STATUS_PENDING: u32 = 1;
pub const STATUS_POSTED: u32 = 2;
pub const STATUS_FAILED: u32 = 3;
pub const STATUS_REVERSED: u32 = 4;

/// UTC midnight of `SAMPLE_REFERENCE_DATE`.
pub fn sample_now() -> DateTime<Utc> {
    let (y, m, d) = SAMPLE_REFERENCE_DATE;
    at(y, m, d, 0, 0)
}

pub fn sample_dataset() -> Dataset {
    Dataset {
        customers:            customers(),
        accounts:             accounts(),
        transactions:         transactions(),
        transaction_statuses: transaction_statuses(),
        products:             bank_products(),
        staff:                bank_staff(),
    }
}

pub fn transaction_statuses() -> Vec<TransactionStatus> {
    vec![
        status(STATUS_PENDING, StatusName::Pending, "Transaction initiated but not cleared", false),
        status(STATUS_POSTED, StatusName::Posted, "Transaction completed successfully", true),
        status(STATUS_FAILED, StatusName::Failed, "Transaction failed due to error or funds", true),
        status(STATUS_REVERSED, StatusName::Reversed, "Transaction reversed by admin", true),
    ]
}

pub fn bank_products() -> Vec<BankProduct> {
    vec![
        product(1, "Standard Checking", ProductType::Checking, 0.0010, "Monthly: $10"),
        product(2, "Gold Saver", ProductType::Savings, 0.0250, "None"),
        product(3, "Platinum Investment", ProductType::Investment, 0.0500, "Management: 1%"),
        product(4, "Home Starter Loan", ProductType::Loan, 0.0350, "Origination: 2%"),
        product(5, "Tech Startup Loan", ProductType::Loan, 0.0650, "Origination: 3%"),
        product(6, "VIOLATE Investment Max", ProductType::Investment, 0.0999, "Management: 2%"),
    ]
}

pub fn bank_staff() -> Vec<BankStaff> {
    vec![
        staff(1, "Sarah", "Lee", "Branch Manager", "SG-001"),
        staff(2, "Mike", "Tan", "Senior Teller", "SG-001"),
        staff(3, "Jessica", "Chen", "Loan Officer", "SG-002"),
    ]
}

fn customers() -> Vec<Customer> {
    use KycStatus::*;
    vec![
        customer(1, "John Doe", "john.doe@example.com", "555-0101", "123 Maple St, Singapore", Verified, 0.10, at(2024, 1, 15, 10, 0)),
        customer(2, "Jane Smith", "jane.smith@example.com", "555-0102", "456 Oak Rd, Singapore", Verified, 0.05, at(2024, 6, 20, 14, 30)),
        customer(3, "Robert Brown", "bob.brown@example.com", "555-0103", "789 Pine Ln, Singapore", Pending, 0.45, at(2025, 3, 10, 9, 15)),
        customer(4, "Alice Wong", "alice.wong@example.com", "555-0104", "321 Birch Blvd, Singapore", Verified, 0.02, at(2025, 11, 5, 16, 45)),
        customer(5, "Charlie Cho", "charlie.cho@example.com", "555-0105", "654 Cedar Ave, Singapore", Pending, 0.80, at(2025, 12, 1, 11, 20)),
        customer(6, "Violator Checking Fraud", "violate.fraud.checking@example.com", "555-9001", "Violation St 1, Singapore", Verified, 0.90, at(2025, 11, 7, 8, 0)),
        customer(7, "Violator Savings Fraud", "violate.fraud.savings@example.com", "555-9002", "Violation St 2, Singapore", Verified, 0.90, at(2025, 10, 23, 12, 0)),
        customer(8, "Violator Loan Fraud", "violate.fraud.loan@example.com", "555-9003", "Violation St 3, Singapore", Verified, 0.90, at(2025, 10, 8, 9, 30)),
        customer(9, "Violator High Balance", "violate.highbalance@example.com", "555-9010", "Rich St 10, Singapore", Verified, 0.10, at(2025, 7, 11, 15, 0)),
        customer(10, "Violator Inactive", "violate.inactive@example.com", "555-9020", "Quiet St 20, Singapore", Verified, 0.10, at(2024, 12, 3, 10, 0)),
    ]
}

fn accounts() -> Vec<Account> {
    use AccountType::*;
    vec![
        account(1, 1, "CHK-1001", Checking, day(2025, 1, 7), usd(550_000)),
        account(2, 2, "SAV-2001", Savings, day(2025, 7, 7), usd(15_000_000)),
        account(3, 2, "CHK-2002", Checking, day(2024, 1, 7), usd(250_000)),
        account(4, 3, "CHK-3001", Checking, day(2025, 6, 21), usd(10_000)),
        account(5, 4, "LN-4001", Loan, day(2025, 12, 7), usd(0)),
        account(6, 5, "CHK-5001", Checking, day(2025, 12, 31), usd(100_000)),
        account(7, 6, "VIO-CHK-9001", Checking, day(2025, 12, 8), usd(50_000)),
        account(8, 7, "VIO-SAV-9002", Savings, day(2025, 11, 23), usd(100_000)),
        account(9, 8, "VIO-LN-9003", Loan, day(2025, 11, 8), usd(0)),
        account(10, 9, "VIO-HIBAL-9010", Savings, day(2025, 7, 11), usd(25_000_001)),
        account(11, 10, "VIO-INACT-9020", Checking, day(2024, 12, 3), usd(4_200)),
    ]
}

fn transactions() -> Vec<Transaction> {
    use Channel::*;
    use TransactionType::*;
    vec![
        txn(1, 1, 1, Deposit, STATUS_POSTED, usd(300_000), Branch, "Teller", "Singapore - Orchard", at(2025, 12, 15, 10, 0), false),
        txn(2, 1, 1, Withdrawal, STATUS_POSTED, usd(20_000), Atm, "ATM Terminal", "Singapore - Tampines", at(2025, 12, 20, 9, 30), false),
        txn(3, 1, 1, Purchase, STATUS_POSTED, usd(1_000_000), Online, "Desktop", "Singapore - Online", at(2026, 1, 2, 14, 5), true),
        txn(4, 2, 2, Deposit, STATUS_POSTED, usd(5_000_000), Branch, "Teller", "Singapore - Raffles Place", at(2025, 11, 30, 11, 0), false),
        txn(5, 2, 2, Transfer, STATUS_PENDING, usd(150_000), Online, "Desktop", "Singapore - Online", at(2025, 12, 28, 19, 45), false),
        txn(6, 3, 2, Purchase, STATUS_POSTED, usd(12_050), Pos, "POS Terminal", "Singapore - Bugis", at(2026, 1, 5, 12, 10), false),
        txn(7, 3, 2, Withdrawal, STATUS_REVERSED, usd(30_000), Atm, "ATM Terminal", "Singapore - Jurong", at(2025, 12, 22, 8, 15), false),
        txn(8, 4, 3, Deposit, STATUS_POSTED, usd(10_000), Branch, "Teller", "Singapore - Orchard", at(2025, 9, 15, 10, 0), false),
        txn(9, 5, 4, Disbursement, STATUS_POSTED, usd(2_500_000), System, "Core Banking", "Singapore - HQ", at(2025, 12, 8, 0, 0), false),
        txn(10, 6, 5, Deposit, STATUS_POSTED, usd(100_000), Mobile, "Mobile", "Singapore - Woodlands", at(2026, 1, 1, 10, 30), false),
        txn(11, 6, 5, Purchase, STATUS_FAILED, usd(0), Pos, "POS Terminal", "Singapore - Woodlands", at(2026, 1, 3, 16, 20), false),
        txn(12, 7, 6, Withdrawal, STATUS_POSTED, usd(1_200_000), Branch, "Teller", "Singapore - Geylang", at(2025, 12, 10, 13, 0), true),
        txn(13, 8, 7, Transfer, STATUS_POSTED, usd(6_500_000), Online, "Desktop", "Unknown VPN Exit", at(2025, 11, 25, 22, 40), true),
        txn(14, 9, 8, Disbursement, STATUS_POSTED, usd(15_000_000), System, "Core Banking", "Singapore - HQ", at(2025, 11, 10, 9, 0), true),
        txn(15, 10, 9, Deposit, STATUS_POSTED, usd(4_500_000), Branch, "Teller", "Singapore - Marina Bay", at(2025, 12, 30, 15, 0), false),
        txn(16, 10, 9, Transfer, STATUS_PENDING, usd(500_000), Mobile, "Mobile", "Singapore - Marina Bay", at(2026, 1, 4, 18, 25), false),
    ]
}

// ── Builders ─────────────────────────────────────────────────────────────────

/// Amount from a whole number of cents.
pub fn usd(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// UTC timestamp from a fixture literal. Panics on an impossible date
/// or time; a bad literal would otherwise shift every day count.
pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    match Utc.with_ymd_and_hms(y, m, d, h, min, 0).single() {
        Some(ts) => ts,
        None => panic!("invalid fixture timestamp {y:04}-{m:02}-{d:02} {h:02}:{min:02}"),
    }
}

/// Calendar date from a fixture literal. Panics like [`at`].
pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(y, m, d) {
        Some(date) => date,
        None => panic!("invalid fixture date {y:04}-{m:02}-{d:02}"),
    }
}

#[allow(clippy::too_many_arguments)]
fn customer(
    customer_id: u32,
    name: &str,
    email: &str,
    phone: &str,
    address: &str,
    kyc_status: KycStatus,
    risk_rating: f64,
    created_at: DateTime<Utc>,
) -> Customer {
    Customer {
        customer_id,
        customer_name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        address: address.to_string(),
        kyc_status,
        risk_rating,
        created_at,
    }
}

fn account(
    account_id: u32,
    customer_id: u32,
    number: &str,
    account_type: AccountType,
    open_date: NaiveDate,
    balance: Decimal,
) -> Account {
    Account {
        account_id,
        customer_id,
        account_number: number.to_string(),
        account_type,
        open_date,
        balance,
        currency: "USD".to_string(),
        status: AccountStatus::Active,
    }
}

#[allow(clippy::too_many_arguments)]
fn txn(
    seq: u32,
    account_id: u32,
    customer_id: u32,
    transaction_type: TransactionType,
    status_id: u32,
    total_amount: Decimal,
    channel: Channel,
    device: &str,
    location: &str,
    transaction_date: DateTime<Utc>,
    fraud_flag: bool,
) -> Transaction {
    Transaction {
        transaction_id: format!("TXN-{seq:04}"),
        account_id,
        customer_id,
        transaction_type,
        status_id,
        total_amount,
        channel,
        device_used: device.to_string(),
        location: location.to_string(),
        transaction_date,
        fraud_flag,
    }
}

fn status(status_id: u32, name: StatusName, description: &str, is_final: bool) -> TransactionStatus {
    TransactionStatus {
        status_id,
        status: name,
        description: description.to_string(),
        is_final,
    }
}

fn product(
    product_id: u32,
    name: &str,
    product_type: ProductType,
    interest_rate: f64,
    fee_schedule: &str,
) -> BankProduct {
    BankProduct {
        product_id,
        product_name: name.to_string(),
        product_type,
        interest_rate,
        fee_schedule: fee_schedule.to_string(),
        active: true,
    }
}

fn staff(staff_id: u32, first: &str, last: &str, role: &str, branch: &str) -> BankStaff {
    BankStaff {
        staff_id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        role_title: role.to_string(),
        branch_id: branch.to_string(),
        email: format!("{}.{}@bank.com", first.to_lowercase(), last.to_lowercase()),
        active: true,
    }
}
