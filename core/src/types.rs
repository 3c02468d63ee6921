//! Shared primitive types used across the whole crate.

/// Primary key of a customer record.
pub type CustomerId = u32;

/// Primary key of an account record.
pub type AccountId = u32;

/// Primary key of a transaction status lookup row.
pub type StatusId = u32;

pub type ProductId = u32;

pub type StaffId = u32;

/// Transaction ids are opaque strings such as `TXN-0001`.
pub type TransactionId = String;
