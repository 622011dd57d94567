// Word frequency report

use super::WordCount;
use std::fmt::Write;
use std::time::Duration;

/// Default results file name
pub const RESULTS_FILE: &str = "WordCountResults.txt";

const RULE_WIDTH: usize = 60;

pub fn format_report(counts: &[WordCount], elapsed: Duration) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let thin = "-".repeat(RULE_WIDTH);
    let total_words: usize = counts.iter().map(|c| c.frequency).sum();

    let mut out = String::new();
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "WORD FREQUENCY ANALYSIS RESULTS");
    let _ = writeln!(out, "{}\n", rule);
    let _ = writeln!(out, "Total words processed: {}", total_words);
    let _ = writeln!(out, "Distinct words found: {}", counts.len());
    let _ = writeln!(out, "Execution time: {:.4} seconds", elapsed.as_secs_f64());
    let _ = writeln!(out, "\n{}", thin);
    let _ = writeln!(out, "{:<30} {:>10}", "WORD", "FREQUENCY");
    let _ = writeln!(out, "{}", thin);

    for count in counts {
        let _ = writeln!(out, "{:<30} {:>10}", count.word, count.frequency);
    }

    let _ = writeln!(out, "{}", rule);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_report() {
        let counts = vec![
            WordCount { word: "the".to_string(), frequency: 3 },
            WordCount { word: "cat".to_string(), frequency: 1 },
        ];
        let text = format_report(&counts, Duration::from_millis(12));

        assert!(text.contains("Total words processed: 4\n"));
        assert!(text.contains("Distinct words found: 2\n"));
        assert!(text.contains("Execution time: 0.0120 seconds\n"));
        assert!(text.contains(&format!("{:<30} {:>10}\n", "WORD", "FREQUENCY")));
        assert!(text.contains(&format!("{:<30} {:>10}\n", "the", 3)));
        assert!(text.ends_with(&format!("{}\n", "=".repeat(60))));
    }

    #[test]
    fn test_format_empty_report() {
        let text = format_report(&[], Duration::ZERO);
        assert!(text.contains("Total words processed: 0\n"));
        assert!(text.contains("Distinct words found: 0\n"));
    }
}
