//! desk-report: headless rule evaluation for the banking operations desk.
//!
//! Usage:
//!   desk-report                              # bundled sample, as of 2026-01-07
//!   desk-report --now 2026-03-01 --json
//!   desk-report --seed 12345 --customers 500 --data-dir ./data
//!   desk-report --via-store                  # round-trip through SQLite first
//!   desk-report --customer 2 --type Deposit --account 2 --search 0004

use anyhow::{Context, Result};
use bankdesk_core::{
    analytics::{recent_transactions, Breakdowns},
    enrichment::enriched_transactions,
    filter::HistoryFilter,
    fixtures,
    inactivity_evaluator::start_of_day,
    model::{Dataset, TransactionType},
    money,
    population::{self, PopulationParams},
    portfolio::{CustomerPortfolio, TransactionHistory},
    store::FixtureStore,
    RuleConfig, RuleEngine, RuleReport,
};
use chrono::{DateTime, NaiveDate, Utc};
use std::env;

#[derive(serde::Serialize)]
struct JsonReport<'a> {
    source:     &'a str,
    report:     &'a RuleReport,
    breakdowns: Breakdowns,
    portfolio:  Option<CustomerPortfolio>,
    history:    Option<TransactionHistory>,
}

/// Parsed command line. Malformed values are errors, never defaults.
#[derive(Debug, PartialEq)]
struct RunArgs {
    json:         bool,
    via_store:    bool,
    seed:         Option<u64>,
    customers:    u32,
    portfolio_id: Option<u32>,
    history:      HistoryFilter,
    now:          DateTime<Utc>,
    data_dir:     Option<String>,
}

impl RunArgs {
    fn parse(args: &[String]) -> Result<Self> {
        let seed = flag_value(args, "--seed")
            .map(str::parse::<u64>)
            .transpose()
            .context("--seed expects a whole number")?;
        let customers = flag_value(args, "--customers")
            .map(str::parse::<u32>)
            .transpose()
            .context("--customers expects a whole number")?
            .unwrap_or(PopulationParams::default().customers);
        let portfolio_id = flag_value(args, "--customer")
            .map(str::parse::<u32>)
            .transpose()
            .context("--customer expects a customer id")?;
        let history = HistoryFilter {
            search:           flag_value(args, "--search").unwrap_or_default().to_string(),
            transaction_type: flag_value(args, "--type")
                .map(str::parse::<TransactionType>)
                .transpose()
                .context("--type expects a transaction type")?,
            account_id:       flag_value(args, "--account")
                .map(str::parse::<u32>)
                .transpose()
                .context("--account expects an account id")?,
        };
        let now = match flag_value(args, "--now") {
            Some(raw) => parse_now(raw)?,
            None => fixtures::sample_now(),
        };

        Ok(Self {
            json: args.iter().any(|a| a == "--json"),
            via_store: args.iter().any(|a| a == "--via-store"),
            seed,
            customers,
            portfolio_id,
            history,
            now,
            data_dir: flag_value(args, "--data-dir").map(str::to_string),
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let RunArgs { json, via_store, seed, customers, portfolio_id, history, now, data_dir } =
        RunArgs::parse(&args)?;

    let config = match data_dir {
        Some(dir) => RuleConfig::load(&dir)?,
        None => RuleConfig::default(),
    };

    let (source, mut dataset) = match seed {
        Some(seed) => {
            let params = PopulationParams { seed, customers, now, ..PopulationParams::default() };
            (format!("generated (seed {seed}, {customers} customers)"), population::generate(&params))
        }
        None => ("bundled sample".to_string(), fixtures::sample_dataset()),
    };
    dataset.validate().context("dataset failed validation")?;

    if via_store {
        let store = FixtureStore::with_dataset(&dataset)?;
        dataset = store.load_dataset()?;
        log::info!("dataset reloaded from in-memory store");
    }

    let engine = RuleEngine::new(config);
    let report = engine.run(&dataset, now);
    let portfolio =
        portfolio_id.map(|id| CustomerPortfolio::for_customer(id, &dataset, &engine.config));
    let history = portfolio_id.map(|id| TransactionHistory::for_customer(id, &dataset, &history));

    if json {
        let out = JsonReport {
            source: &source,
            report: &report,
            breakdowns: Breakdowns::compute(&dataset),
            portfolio,
            history,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_summary(&source, &dataset, &report, &engine.config);
        if let Some(p) = &portfolio {
            print_portfolio(p);
        }
        if let Some(h) = &history {
            print_history(h);
        }
    }

    Ok(())
}

fn print_summary(source: &str, dataset: &Dataset, report: &RuleReport, config: &RuleConfig) {
    let stats = &report.stats;

    println!("Banking Operations Desk: desk-report");
    println!("  source:       {source}");
    println!("  evaluated at: {}", report.evaluated_at.format("%Y-%m-%d %H:%M UTC"));
    println!();
    println!("=== OVERVIEW ===");
    println!("  customers:          {}", stats.total_customers);
    println!("  accounts:           {}", stats.total_accounts);
    println!("  total balance:      ${}", money::currency(stats.total_balance));
    println!("  transactions:       {}", stats.total_transactions);
    println!("  volume:             ${}", money::currency(stats.total_volume));
    println!("  stored fraud flags: {}", stats.stored_fraud_flags);

    println!();
    println!("=== POTENTIAL FRAUD ({}) ===", report.fraud.len());
    for f in &report.fraud {
        let t = &f.transaction;
        println!(
            "  {} | {:<24} | {:<16} | ${:>14} | {}",
            t.transaction.transaction_id,
            t.customer_name_or_unknown(),
            t.account_number_or_unknown(),
            money::currency(t.transaction.total_amount),
            f.reason
        );
    }
    if !report.flag_mismatches.is_empty() {
        println!("  stored flag disagrees with live check:");
        for m in &report.flag_mismatches {
            println!("    {} stored={} live={}", m.transaction_id, m.stored_flag, m.live_flag);
        }
    }

    println!();
    println!(
        "=== HIGH BALANCE > ${} ({}) ===",
        money::grouped(config.high_balance_threshold),
        report.high_balance.len()
    );
    for h in &report.high_balance {
        let products: Vec<&str> = h
            .recommended_products
            .iter()
            .map(|p| p.product_name.as_str())
            .collect();
        println!(
            "  {:<16} | {:<24} | ${:>14} | {}",
            h.account.account_number,
            h.customer_name_or_unknown(),
            money::currency(h.account.balance),
            products.join(", ")
        );
    }
    let hb = &report.high_balance_summary;
    println!(
        "  total value: ${} | potential revenue at 1%: ${}",
        money::currency(hb.total_value),
        money::currency(hb.potential_revenue)
    );

    println!();
    println!(
        "=== INACTIVE > {} DAYS ({}) ===",
        config.inactivity_days,
        report.inactive.len()
    );
    for i in &report.inactive {
        let last = i
            .last_transaction_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "never".to_string());
        println!(
            "  {:<16} | {:<24} | {:>5} days | last: {:<10} | {}",
            i.account.account_number,
            i.customer_name_or_unknown(),
            i.days_inactive,
            last,
            i.customer_phone_or_na()
        );
    }
    let idle = &report.inactivity_summary;
    println!(
        "  at-risk balance: ${} | average inactive: {} days",
        money::currency(idle.at_risk_balance),
        idle.average_days_inactive
    );

    println!();
    println!("=== RECENT ACTIVITY ===");
    for t in recent_transactions(dataset, config.recent_transactions) {
        println!(
            "  {} | {} | {:<12} | ${:>12} | {}",
            t.transaction.transaction_date.format("%Y-%m-%d"),
            t.transaction.transaction_id,
            t.transaction.transaction_type,
            money::currency(t.transaction.total_amount),
            t.customer_name_or_unknown()
        );
    }
    log::debug!("{} enriched transaction rows available", enriched_transactions(dataset).len());
}

fn print_portfolio(p: &CustomerPortfolio) {
    println!();
    match p.first_name() {
        Some(name) => println!("=== PORTFOLIO: {name} (customer {}) ===", p.customer_id),
        None => println!("=== PORTFOLIO: customer {} (not found) ===", p.customer_id),
    }
    println!("  total balance: ${}", money::currency(p.total_balance));
    if p.has_high_balance {
        println!("  eligible for investment products");
    }
    for s in &p.accounts {
        println!(
            "  {:<16} {:<9} ${:>14} | in ${} | out ${}",
            s.account.account_number,
            s.account.account_type,
            money::currency(s.account.balance),
            money::currency(s.total_deposits),
            money::currency(s.total_withdrawals)
        );
    }
}

fn print_history(h: &TransactionHistory) {
    println!();
    println!("=== TRANSACTION HISTORY: customer {} ({}) ===", h.customer_id, h.rows.len());
    println!(
        "  credits: ${} | spending: ${}",
        money::currency(h.total_credits),
        money::currency(h.total_spending)
    );
    for row in &h.rows {
        let t = &row.transaction;
        println!(
            "  {} | {} | {:<16} | {:<8} | {:<12} | ${:>12}",
            t.transaction_date.format("%Y-%m-%d"),
            t.transaction_id,
            row.account_number_or_unknown(),
            row.account_type_or_unknown(),
            t.transaction_type,
            money::currency(t.total_amount)
        );
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

/// Accepts `YYYY-MM-DD` (UTC midnight) or a full RFC 3339 timestamp.
fn parse_now(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(start_of_day(date));
    }
    let ts = DateTime::parse_from_rfc3339(raw)
        .with_context(|| format!("--now expects YYYY-MM-DD or RFC 3339, got '{raw}'"))?;
    Ok(ts.with_timezone(&Utc))
}
