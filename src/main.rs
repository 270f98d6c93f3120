use anyhow::Context;
use serde::Serialize;
use std::path::PathBuf;
use trade_ledger::{config::Config, evaluate, Evaluation, LedgerSummary};

#[derive(Serialize)]
struct LedgerReport {
    ledger: PathBuf,
    summary: LedgerSummary,
}

#[derive(Serialize)]
struct Report {
    ledgers: Vec<LedgerReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    evaluation: Option<Evaluation>,
}

fn run(config: &Config) -> anyhow::Result<Report> {
    let mut ledgers = Vec::with_capacity(config.ledger_paths.len());
    for path in &config.ledger_paths {
        let summary = LedgerSummary::from_ledger(path)
            .with_context(|| format!("failed to summarize ledger {}", path.display()))?;
        tracing::info!(
            ledger = %path.display(),
            transactions = summary.total_transactions,
            net_cash = %summary.net_cash.to_money_string(),
            "ledger summarized"
        );
        ledgers.push(LedgerReport {
            ledger: path.clone(),
            summary,
        });
    }

    let evaluation = (ledgers.len() > 1).then(|| {
        let stocks = config.stock_count.unwrap_or_else(|| {
            ledgers
                .iter()
                .map(|l| l.summary.implied_stocks())
                .max()
                .unwrap_or(0)
        });
        let summaries: Vec<LedgerSummary> = ledgers.iter().map(|l| l.summary.clone()).collect();
        evaluate(&summaries, stocks)
    });

    Ok(Report {
        ledgers,
        evaluation,
    })
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let report = match run(&config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to render report: {}", e);
            std::process::exit(1);
        }
    }
}
