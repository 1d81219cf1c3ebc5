mod config;
mod script;

use anyhow::Context;

use config::{Config, ReportFormat};
use revledger_ledger::{Ledger, LedgerReport};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("invalid configuration")?;
    revledger_observability::init(config.log_format);

    tracing::info!(
        ledger = %config.ledger_name,
        report_format = ?config.report_format,
        "Replaying reference script"
    );

    let mut ledger = Ledger::new(config.ledger_name.clone());
    script::replay(&mut ledger, script::reference_script(), |report| {
        print_report(report, config.report_format)
    })?;

    Ok(())
}

fn print_report(report: &LedgerReport, format: ReportFormat) -> anyhow::Result<()> {
    match format {
        ReportFormat::Text => println!("{report}"),
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(report).context("serializing report")?;
            println!("{json}");
        }
    }
    Ok(())
}
