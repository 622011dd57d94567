// Results file and screen layout for number conversion

use super::ConversionBatch;
use std::fmt::Write;
use std::time::Duration;

/// Default results file name
pub const RESULTS_FILE: &str = "ConvertionResults.txt";

const RULE_WIDTH: usize = 70;

/// Results beyond this count are elided on screen
const DISPLAY_LIMIT: usize = 20;
const DISPLAY_EDGE: usize = 10;

fn statistics_block(out: &mut String, batch: &ConversionBatch, elapsed: Duration) {
    let rule = "=".repeat(RULE_WIDTH);
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "STATISTICS");
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "Total items processed: {}", batch.total_processed());
    let _ = writeln!(out, "Total errors: {}", batch.total_errors());
    let _ = writeln!(out, "Execution time: {:.6} seconds", elapsed.as_secs_f64());
    let _ = writeln!(out, "{}", rule);
}

/// Full contents of the results file
pub fn format_results_file(batch: &ConversionBatch, elapsed: Duration) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "NUMBER BASE CONVERSION RESULTS");
    let _ = writeln!(out, "{}\n", rule);

    if batch.conversions.is_empty() {
        out.push_str("No valid numbers were processed.\n");
    } else {
        for conversion in &batch.conversions {
            let _ = writeln!(out, "{}", conversion.format_line());
        }
    }

    out.push('\n');
    statistics_block(&mut out, batch, elapsed);

    if !batch.errors.is_empty() {
        let _ = writeln!(out, "\nERRORS ENCOUNTERED:");
        let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
        for error in &batch.errors {
            let _ = writeln!(out, "{}", error);
        }
    }

    out
}

/// Screen summary; long result lists show only the first and last ten
pub fn format_display(batch: &ConversionBatch, elapsed: Duration) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    let _ = writeln!(out, "\nCONVERSION RESULTS:");
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));

    let lines: Vec<String> = batch.conversions.iter().map(|c| c.format_line()).collect();
    if lines.is_empty() {
        out.push_str("No valid numbers were processed.\n");
    } else if lines.len() <= DISPLAY_LIMIT {
        for line in &lines {
            let _ = writeln!(out, "{}", line);
        }
    } else {
        for line in &lines[..DISPLAY_EDGE] {
            let _ = writeln!(out, "{}", line);
        }
        let _ = writeln!(out, "\n... ({} more results) ...\n", lines.len() - DISPLAY_LIMIT);
        for line in &lines[lines.len() - DISPLAY_EDGE..] {
            let _ = writeln!(out, "{}", line);
        }
    }

    out.push('\n');
    statistics_block(&mut out, batch, elapsed);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::convert_lines;

    #[test]
    fn test_results_file_layout() {
        let batch = convert_lines("10\nxyz\n", |_| {});
        let text = format_results_file(&batch, Duration::from_micros(1500));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "NUMBER BASE CONVERSION RESULTS");
        assert_eq!(lines[3], "");
        assert!(lines[4].starts_with("Decimal:"));
        assert!(text.contains("Total items processed: 1\n"));
        assert!(text.contains("Total errors: 1\n"));
        assert!(text.contains("Execution time: 0.001500 seconds\n"));
        assert!(text.contains("\nERRORS ENCOUNTERED:\n"));
        assert!(text.ends_with("Line 2: Invalid number format: 'xyz'\n"));
    }

    #[test]
    fn test_results_file_without_numbers() {
        let batch = convert_lines("", |_| {});
        let text = format_results_file(&batch, Duration::ZERO);
        assert!(text.contains("No valid numbers were processed.\n"));
        assert!(!text.contains("ERRORS ENCOUNTERED"));
    }

    #[test]
    fn test_display_elides_long_lists() {
        let input: String = (1..=25).map(|n| format!("{}\n", n)).collect();
        let batch = convert_lines(&input, |_| {});
        let text = format_display(&batch, Duration::ZERO);

        assert!(text.contains("... (5 more results) ..."));
        assert_eq!(text.matches("Decimal:").count(), 20);
        assert!(text.contains(&crate::convert::Conversion::new(25).format_line()));
        assert!(!text.contains(&crate::convert::Conversion::new(11).format_line()));
    }

    #[test]
    fn test_display_shows_exactly_twenty_in_full() {
        let input: String = (1..=20).map(|n| format!("{}\n", n)).collect();
        let batch = convert_lines(&input, |_| {});
        let text = format_display(&batch, Duration::ZERO);

        assert_eq!(text.matches("Decimal:").count(), 20);
        assert!(!text.contains("more results"));
    }

    #[test]
    fn test_display_elides_from_twenty_one() {
        let input: String = (1..=21).map(|n| format!("{}\n", n)).collect();
        let batch = convert_lines(&input, |_| {});
        let text = format_display(&batch, Duration::ZERO);

        assert!(text.contains("\n... (1 more results) ...\n"));
        assert_eq!(text.matches("Decimal:").count(), 20);
        assert!(!text.contains(&crate::convert::Conversion::new(11).format_line()));
        assert!(text.contains(&crate::convert::Conversion::new(12).format_line()));
    }

    #[test]
    fn test_display_shows_short_lists_in_full() {
        let batch = convert_lines("1\n2\n3\n", |_| {});
        let text = format_display(&batch, Duration::ZERO);
        assert_eq!(text.matches("Decimal:").count(), 3);
        assert!(!text.contains("more results"));
    }
}
