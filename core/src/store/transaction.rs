use super::{parse_decimal, FixtureStore};
use crate::{
    error::DeskResult,
    model::Transaction,
    types::{AccountId, CustomerId, StatusId},
};
use chrono::{DateTime, Utc};
use rusqlite::{params, Row};

const TXN_COLUMNS: &str = "transaction_id, account_id, customer_id, transaction_type, status_id,
     total_amount, channel, device_used, location, transaction_date, fraud_flag";

struct TxnRow {
    transaction_id:   String,
    account_id:       AccountId,
    customer_id:      CustomerId,
    transaction_type: String,
    status_id:        StatusId,
    total_amount:     String,
    channel:          String,
    device_used:      String,
    location:         String,
    transaction_date: DateTime<Utc>,
    fraud_flag:       bool,
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<TxnRow> {
    Ok(TxnRow {
        transaction_id:   row.get(0)?,
        account_id:       row.get(1)?,
        customer_id:      row.get(2)?,
        transaction_type: row.get(3)?,
        status_id:        row.get(4)?,
        total_amount:     row.get(5)?,
        channel:          row.get(6)?,
        device_used:      row.get(7)?,
        location:         row.get(8)?,
        transaction_date: row.get(9)?,
        fraud_flag:       row.get(10)?,
    })
}

impl TxnRow {
    fn into_transaction(self) -> DeskResult<Transaction> {
        Ok(Transaction {
            transaction_id:   self.transaction_id,
            account_id:       self.account_id,
            customer_id:      self.customer_id,
            transaction_type: self.transaction_type.parse()?,
            status_id:        self.status_id,
            total_amount:     parse_decimal(&self.total_amount)?,
            channel:          self.channel.parse()?,
            device_used:      self.device_used,
            location:         self.location,
            transaction_date: self.transaction_date,
            fraud_flag:       self.fraud_flag,
        })
    }
}

impl FixtureStore {
    // ── Transaction ───────────────────────────────────────────────

    pub(super) fn insert_transaction(&self, t: &Transaction) -> DeskResult<()> {
        self.conn.execute(
            "INSERT INTO txn (
                transaction_id, account_id, customer_id, transaction_type, status_id,
                total_amount, channel, device_used, location, transaction_date, fraud_flag
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                &t.transaction_id,
                t.account_id,
                t.customer_id,
                t.transaction_type.as_str(),
                t.status_id,
                t.total_amount.to_string(),
                t.channel.as_str(),
                &t.device_used,
                &t.location,
                t.transaction_date,
                t.fraud_flag,
            ],
        )?;
        Ok(())
    }

    /// All transactions, in seeding order.
    pub fn transactions(&self) -> DeskResult<Vec<Transaction>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {TXN_COLUMNS} FROM txn ORDER BY rowid"))?;
        let rows = stmt.query_map([], read_row)?;
        rows.map(|raw| -> DeskResult<Transaction> { raw?.into_transaction() })
            .collect()
    }

    /// Transactions on one account, newest first.
    pub fn transactions_for_account(&self, account_id: AccountId) -> DeskResult<Vec<Transaction>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {TXN_COLUMNS} FROM txn WHERE account_id = ?1
             ORDER BY transaction_date DESC, rowid ASC"
        ))?;
        let rows = stmt.query_map(params![account_id], read_row)?;
        rows.map(|raw| -> DeskResult<Transaction> { raw?.into_transaction() })
            .collect()
    }

    /// Rows carrying the stored fraud flag.
    pub fn stored_fraud_flag_count(&self) -> DeskResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM txn WHERE fraud_flag = 1", [], |row| row.get(0))?;
        Ok(count)
    }
}
