use colored::*;
use ipbeacon_common::config::Config;
use ipbeacon_common::report::RunSummary;
use ipbeacon_core::runner::Runner;

use crate::terminal::{colors, format, print};

const KEY_WIDTH: usize = 14;
const CREATED: &str = "Run summary created";

/// Completes with `Ok` whenever a summary was produced, a failed submission included.
pub async fn run(cfg: &Config, json: bool) -> anyhow::Result<()> {
    let runner = Runner::from_config(cfg)?;
    let summary: RunSummary = runner.run().await;

    if json {
        println!("{}", render_json(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn render_json(summary: &RunSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}

fn summary_rows(summary: &RunSummary) -> Vec<(&'static str, String)> {
    vec![
        ("Size", format!("~{} bytes", summary.approx_size())),
        ("Elapsed", format!("{:.6}s", summary.elapsed_seconds)),
        ("Local time", summary.report.local_time().to_string()),
        ("Global IP", format::addresses(summary.report.global_addresses())),
        ("Local IP", format::addresses(summary.report.local_addresses())),
        ("Webhook status", format::submit_status(&summary.submit_status).to_string()),
    ]
}

fn print_summary(summary: &RunSummary) {
    print::header("run summary");
    print::print_status(CREATED);
    for (key, value) in summary_rows(summary) {
        print::aligned_line(key, value, KEY_WIDTH);
    }

    let elapsed: ColoredString = format!("{:.2}s", summary.elapsed_seconds).bold().yellow();
    let output: ColoredString =
        format!("Report finished in {elapsed}").color(colors::TEXT_DEFAULT);
    print::fat_separator();
    print::centerln(&output.to_string());
}
