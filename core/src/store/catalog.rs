//! Lookup tables: transaction statuses, the product catalog and staff.

use super::FixtureStore;
use crate::{
    error::DeskResult,
    model::{BankProduct, BankStaff, TransactionStatus},
};
use rusqlite::params;

impl FixtureStore {
    // ── Transaction status ────────────────────────────────────────

    pub(super) fn insert_transaction_status(&self, s: &TransactionStatus) -> DeskResult<()> {
        self.conn.execute(
            "INSERT INTO transaction_status (status_id, status_name, status_description, is_final)
             VALUES (?1, ?2, ?3, ?4)",
            params![s.status_id, s.status.as_str(), &s.description, s.is_final],
        )?;
        Ok(())
    }

    pub fn transaction_statuses(&self) -> DeskResult<Vec<TransactionStatus>> {
        let mut stmt = self.conn.prepare(
            "SELECT status_id, status_name, status_description, is_final
             FROM transaction_status ORDER BY status_id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, u32>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, bool>(3)?,
            ))
        })?;
        rows.map(|raw| -> DeskResult<TransactionStatus> {
            let (status_id, name, description, is_final) = raw?;
            Ok(TransactionStatus {
                status_id,
                status: name.parse()?,
                description,
                is_final,
            })
        })
        .collect()
    }

    // ── Product ───────────────────────────────────────────────────

    pub(super) fn insert_product(&self, p: &BankProduct) -> DeskResult<()> {
        self.conn.execute(
            "INSERT INTO bank_product (
                product_id, product_name, product_type, interest_rate, fee_schedule, active_flag
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                p.product_id,
                &p.product_name,
                p.product_type.as_str(),
                p.interest_rate,
                &p.fee_schedule,
                p.active,
            ],
        )?;
        Ok(())
    }

    pub fn products(&self) -> DeskResult<Vec<BankProduct>> {
        let mut stmt = self.conn.prepare(
            "SELECT product_id, product_name, product_type, interest_rate, fee_schedule, active_flag
             FROM bank_product ORDER BY product_id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, u32>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, f64>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, bool>(5)?,
            ))
        })?;
        rows.map(|raw| -> DeskResult<BankProduct> {
            let (product_id, product_name, product_type, interest_rate, fee_schedule, active) = raw?;
            Ok(BankProduct {
                product_id,
                product_name,
                product_type: product_type.parse()?,
                interest_rate,
                fee_schedule,
                active,
            })
        })
        .collect()
    }

    // ── Staff ─────────────────────────────────────────────────────

    pub(super) fn insert_staff(&self, s: &BankStaff) -> DeskResult<()> {
        self.conn.execute(
            "INSERT INTO bank_staff (
                staff_id, first_name, last_name, role_title, branch_id, email, active
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                s.staff_id,
                &s.first_name,
                &s.last_name,
                &s.role_title,
                &s.branch_id,
                &s.email,
                s.active,
            ],
        )?;
        Ok(())
    }

    pub fn staff(&self) -> DeskResult<Vec<BankStaff>> {
        let mut stmt = self.conn.prepare(
            "SELECT staff_id, first_name, last_name, role_title, branch_id, email, active
             FROM bank_staff ORDER BY staff_id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(BankStaff {
                staff_id:   row.get(0)?,
                first_name: row.get(1)?,
                last_name:  row.get(2)?,
                role_title: row.get(3)?,
                branch_id:  row.get(4)?,
                email:      row.get(5)?,
                active:     row.get(6)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
