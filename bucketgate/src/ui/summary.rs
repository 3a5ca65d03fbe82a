//! End-of-run summary table.

use bucketgate_core::{Clock, RefillPolicy, TokenBucketLimiter};
use comfy_table::Table;
use std::io::{self, Write};

use crate::commands::simulate::SimulationReport;

/// Prints the limiter settings and what the run admitted.
pub fn print_summary<C: Clock, W: Write>(
    limiter: &TokenBucketLimiter<C>,
    report: &SimulationReport,
    writer: &mut W,
) -> io::Result<()> {
    let stats = limiter.stats();
    let policy = match limiter.refill_policy() {
        RefillPolicy::Truncate => "truncate",
        RefillPolicy::CarryFraction => "carry_fraction",
    };

    let mut table = Table::new();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Capacity".to_string(), limiter.capacity().to_string()]);
    table.add_row(vec!["Refill rate (tokens/s)".to_string(), limiter.refill_rate().to_string()]);
    table.add_row(vec!["Refill policy".to_string(), policy.to_string()]);
    table.add_row(vec!["Requests".to_string(), report.outcomes.len().to_string()]);
    table.add_row(vec!["Admitted".to_string(), report.admitted().to_string()]);
    table.add_row(vec!["Rejected".to_string(), report.rejected().to_string()]);
    table.add_row(vec!["Tokens admitted".to_string(), stats.admitted_tokens.to_string()]);
    table.add_row(vec!["Tokens remaining".to_string(), limiter.available_tokens().to_string()]);

    writeln!(writer, "{}", table)
}
