//! SQLite fixture store.
//!
//! RULE: Only the store talks to the database.
//! Evaluators never see SQL; they read the Dataset loaded from here.
//!
//! The database is always in-memory. Seeding happens once, inside a
//! single SQLite transaction; afterwards the store is only read.

mod account;
mod catalog;
mod customer;
mod transaction;

use crate::{
    error::{DeskError, DeskResult},
    model::Dataset,
};
use rusqlite::Connection;
use rust_decimal::Decimal;
use std::str::FromStr;

pub struct FixtureStore {
    conn: Connection,
}

/// Tables the store can count, without handing out raw SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureTable {
    Customer,
    Account,
    Transaction,
    TransactionStatus,
    Product,
    Staff,
}

impl FixtureTable {
    fn table_name(&self) -> &'static str {
        match self {
            Self::Customer          => "customer",
            Self::Account           => "account",
            Self::Transaction       => "txn",
            Self::TransactionStatus => "transaction_status",
            Self::Product           => "bank_product",
            Self::Staff             => "bank_staff",
        }
    }
}

impl FixtureStore {
    /// Open an empty in-memory database. Call migrate() before use.
    pub fn in_memory() -> DeskResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Open, migrate and seed in one step.
    pub fn with_dataset(dataset: &Dataset) -> DeskResult<Self> {
        let store = Self::in_memory()?;
        store.migrate()?;
        store.seed(dataset)?;
        Ok(store)
    }

    /// Apply the schema.
    pub fn migrate(&self) -> DeskResult<()> {
        self.conn
            .execute_batch(include_str!("../../../migrations/001_fixtures.sql"))?;
        Ok(())
    }

    /// Insert every record of `dataset`. All-or-nothing.
    pub fn seed(&self, dataset: &Dataset) -> DeskResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        for c in &dataset.customers {
            self.insert_customer(c)?;
        }
        for a in &dataset.accounts {
            self.insert_account(a)?;
        }
        for s in &dataset.transaction_statuses {
            self.insert_transaction_status(s)?;
        }
        for t in &dataset.transactions {
            self.insert_transaction(t)?;
        }
        for p in &dataset.products {
            self.insert_product(p)?;
        }
        for s in &dataset.staff {
            self.insert_staff(s)?;
        }
        tx.commit()?;

        log::debug!(
            "store: seeded {} customers, {} accounts, {} transactions",
            dataset.customers.len(),
            dataset.accounts.len(),
            dataset.transactions.len()
        );
        Ok(())
    }

    /// Read every table back into a Dataset.
    pub fn load_dataset(&self) -> DeskResult<Dataset> {
        Ok(Dataset {
            customers:            self.customers()?,
            accounts:             self.accounts()?,
            transactions:         self.transactions()?,
            transaction_statuses: self.transaction_statuses()?,
            products:             self.products()?,
            staff:                self.staff()?,
        })
    }

    pub fn row_count(&self, table: FixtureTable) -> DeskResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", table.table_name());
        let count = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count)
    }
}

/// Money columns are TEXT so no precision is lost.
pub(crate) fn parse_decimal(raw: &str) -> DeskResult<Decimal> {
    Decimal::from_str(raw).map_err(|source| DeskError::InvalidDecimal {
        value: raw.to_string(),
        source,
    })
}
