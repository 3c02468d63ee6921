use super::FixtureStore;
use crate::{error::DeskResult, model::Customer, types::CustomerId};
use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension, Row};

const CUSTOMER_COLUMNS: &str =
    "customer_id, customer_name, email, phone, address, kyc_status, risk_rating, created_at";

type CustomerRow = (CustomerId, String, String, String, String, String, f64, DateTime<Utc>);

fn read_row(row: &Row<'_>) -> rusqlite::Result<CustomerRow> {
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

fn into_customer(raw: CustomerRow) -> DeskResult<Customer> {
    let (customer_id, customer_name, email, phone, address, kyc, risk_rating, created_at) = raw;
    Ok(Customer {
        customer_id,
        customer_name,
        email,
        phone,
        address,
        kyc_status: kyc.parse()?,
        risk_rating,
        created_at,
    })
}

impl FixtureStore {
    // ── Customer ──────────────────────────────────────────────────

    pub(super) fn insert_customer(&self, c: &Customer) -> DeskResult<()> {
        self.conn.execute(
            "INSERT INTO customer (
                customer_id, customer_name, email, phone, address,
                kyc_status, risk_rating, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                c.customer_id,
                &c.customer_name,
                &c.email,
                &c.phone,
                &c.address,
                c.kyc_status.as_str(),
                c.risk_rating,
                c.created_at,
            ],
        )?;
        Ok(())
    }

    /// All customers, by id.
    pub fn customers(&self) -> DeskResult<Vec<Customer>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customer ORDER BY customer_id"
        ))?;
        let rows = stmt.query_map([], read_row)?;
        rows.map(|raw| -> DeskResult<Customer> { into_customer(raw?) })
            .collect()
    }

    pub fn customer_by_id(&self, customer_id: CustomerId) -> DeskResult<Option<Customer>> {
        let raw = self
            .conn
            .query_row(
                &format!("SELECT {CUSTOMER_COLUMNS} FROM customer WHERE customer_id = ?1"),
                params![customer_id],
                read_row,
            )
            .optional()?;
        raw.map(into_customer).transpose()
    }
}
