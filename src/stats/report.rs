// Text report for descriptive statistics

use super::Statistics;
use std::time::Duration;

/// Default results file name
pub const RESULTS_FILE: &str = "StatisticsResults.txt";

const RULE_WIDTH: usize = 60;

/// Format the statistics report (no trailing newline)
pub fn format_report(stats: &Statistics, elapsed: Duration) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        rule.clone(),
        "DESCRIPTIVE STATISTICS RESULTS".to_string(),
        rule.clone(),
        format!("Count of numbers: {}", stats.count),
        format!("Mean: {:.4}", stats.mean),
        format!("Median: {:.4}", stats.median),
    ];

    match stats.mode {
        Some(mode) => lines.push(format!("Mode: {:.4}", mode)),
        None => lines.push("Mode: No mode (all values appear once)".to_string()),
    }

    lines.push(format!("Standard Deviation: {:.4}", stats.std_dev));
    lines.push(format!("Variance: {:.4}", stats.variance));
    lines.push(rule.clone());
    lines.push(format!("Elapsed Time: {:.6} seconds", elapsed.as_secs_f64()));
    lines.push(rule);

    lines.join("\n")
}
