//! bankdesk-core: rule evaluation and derived views for a banking
//! operations desk.
//!
//! Layering, leaves first:
//!   model / fixtures / population  →  the immutable Dataset
//!   enrichment                     →  foreign-key joins
//!   *_evaluator                    →  fraud, high balance, inactivity
//!   analytics / portfolio / filter →  dashboard and table views
//!   engine                         →  one run of every evaluator
//!
//! store is an optional in-memory SQLite mirror of a Dataset.

pub mod analytics;
pub mod config;
pub mod engine;
pub mod enrichment;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod fraud_evaluator;
pub mod high_balance_evaluator;
pub mod inactivity_evaluator;
pub mod model;
pub mod money;
pub mod name_generator;
pub mod population;
pub mod portfolio;
pub mod rng;
pub mod store;
pub mod types;

pub use config::RuleConfig;
pub use engine::{RuleEngine, RuleReport};
pub use error::{DeskError, DeskResult};
pub use model::Dataset;
