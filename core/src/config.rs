//! Rule thresholds.
//!
//! Every limit the evaluators apply lives here and is passed in
//! explicitly. `RuleConfig::default()` carries the production values;
//! `RuleConfig::load()` reads overrides from `<data_dir>/rules.json`.

use crate::model::AccountType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_HIGH_BALANCE_THRESHOLD: i64 = 100_000;
pub const DEFAULT_INACTIVITY_DAYS: i64 = 90;
pub const DEFAULT_RECENT_TRANSACTIONS: usize = 5;

/// Permitted transaction amount range. Both ends are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountBand {
    pub min: Decimal,
    pub max: Decimal,
}

impl AmountBand {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, amount: Decimal) -> bool {
        amount >= self.min && amount <= self.max
    }
}

/// Amount band per account type. A type without a band is never flagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FraudThresholds {
    bands: BTreeMap<AccountType, AmountBand>,
}

impl FraudThresholds {
    pub fn empty() -> Self {
        Self { bands: BTreeMap::new() }
    }

    pub fn band_for(&self, account_type: AccountType) -> Option<&AmountBand> {
        self.bands.get(&account_type)
    }

    pub fn with_band(mut self, account_type: AccountType, band: AmountBand) -> Self {
        self.bands.insert(account_type, band);
        self
    }

    pub fn without(mut self, account_type: AccountType) -> Self {
        self.bands.remove(&account_type);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AccountType, &AmountBand)> {
        self.bands.iter()
    }
}

impl Default for FraudThresholds {
    fn default() -> Self {
        let min = Decimal::new(1, 2); // 0.01
        Self::empty()
            .with_band(AccountType::Checking, AmountBand::new(min, Decimal::from(10_000)))
            .with_band(AccountType::Savings, AmountBand::new(min, Decimal::from(50_000)))
            .with_band(AccountType::Loan, AmountBand::new(min, Decimal::from(100_000)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    pub fraud_thresholds:       FraudThresholds,
    /// Balances strictly above this are high-balance.
    pub high_balance_threshold: Decimal,
    /// Days since last activity strictly above this are inactive.
    pub inactivity_days:        i64,
    /// Row count for "recent transactions" panels.
    pub recent_transactions:    usize,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            fraud_thresholds:       FraudThresholds::default(),
            high_balance_threshold: Decimal::from(DEFAULT_HIGH_BALANCE_THRESHOLD),
            inactivity_days:        DEFAULT_INACTIVITY_DAYS,
            recent_transactions:    DEFAULT_RECENT_TRANSACTIONS,
        }
    }
}

impl RuleConfig {
    /// Load from the data/ directory.
    /// In tests, use RuleConfig::default() or RuleConfig::from_json().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = format!("{data_dir}/rules.json");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        Self::from_json(&content).map_err(|e| anyhow::anyhow!("Invalid {path}: {e}"))
    }

    /// Parse a rules document. Missing keys keep their default values.
    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: RuleConfig = serde_json::from_str(content)?;
        if config.inactivity_days < 0 {
            anyhow::bail!("inactivity_days must be >= 0, got {}", config.inactivity_days);
        }
        for (account_type, band) in config.fraud_thresholds.iter() {
            if band.min > band.max {
                anyhow::bail!(
                    "{account_type} band has min {} above max {}",
                    band.min,
                    band.max
                );
            }
        }
        Ok(config)
    }
}
