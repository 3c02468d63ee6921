use super::{parse_decimal, FixtureStore};
use crate::{
    error::DeskResult,
    model::Account,
    types::{AccountId, CustomerId},
};
use chrono::NaiveDate;
use rusqlite::{params, Row};

const ACCOUNT_COLUMNS: &str =
    "account_id, customer_id, account_number, account_type, open_date, balance, currency, account_status";

type AccountRow = (AccountId, CustomerId, String, String, NaiveDate, String, String, String);

fn read_row(row: &Row<'_>) -> rusqlite::Result<AccountRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
        row.get(7)?,
    ))
}

fn into_account(raw: AccountRow) -> DeskResult<Account> {
    let (account_id, customer_id, account_number, account_type, open_date, balance, currency, status) =
        raw;
    Ok(Account {
        account_id,
        customer_id,
        account_number,
        account_type: account_type.parse()?,
        open_date,
        balance: parse_decimal(&balance)?,
        currency,
        status: status.parse()?,
    })
}

impl FixtureStore {
    // ── Account ───────────────────────────────────────────────────

    pub(super) fn insert_account(&self, a: &Account) -> DeskResult<()> {
        self.conn.execute(
            "INSERT INTO account (
                account_id, customer_id, account_number, account_type,
                open_date, balance, currency, account_status
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                a.account_id,
                a.customer_id,
                &a.account_number,
                a.account_type.as_str(),
                a.open_date,
                a.balance.to_string(),
                &a.currency,
                a.status.as_str(),
            ],
        )?;
        Ok(())
    }

    /// All accounts, by id.
    pub fn accounts(&self) -> DeskResult<Vec<Account>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM account ORDER BY account_id"
        ))?;
        let rows = stmt.query_map([], read_row)?;
        rows.map(|raw| -> DeskResult<Account> { into_account(raw?) })
            .collect()
    }

    pub fn accounts_for_customer(&self, customer_id: CustomerId) -> DeskResult<Vec<Account>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM account WHERE customer_id = ?1 ORDER BY account_id"
        ))?;
        let rows = stmt.query_map(params![customer_id], read_row)?;
        rows.map(|raw| -> DeskResult<Account> { into_account(raw?) })
            .collect()
    }
}
