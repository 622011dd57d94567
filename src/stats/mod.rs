//! Descriptive statistics over a file of numbers (one per line).
//!
//! Parsing tolerates junk: blank lines are skipped and lines that are not a
//! finite number are collected as [`InvalidEntry`] values so the caller can
//! warn about them.

pub mod report;

use serde::Serialize;
use std::collections::HashMap;

pub use report::{format_report, RESULTS_FILE};

/// A line that could not be read as a number
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvalidEntry {
    pub line: usize,
    pub text: String,
}

/// Numbers read from an input file plus the lines that were skipped
#[derive(Debug, Default)]
pub struct ParsedData {
    pub values: Vec<f64>,
    pub invalid: Vec<InvalidEntry>,
}

/// Parse one number per line, skipping blank lines
pub fn parse_values(text: &str) -> ParsedData {
    let mut parsed = ParsedData::default();
    for (line_num, line) in crate::input::numbered_lines(text) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.parse::<f64>() {
            Ok(value) if value.is_finite() => parsed.values.push(value),
            _ => parsed.invalid.push(InvalidEntry {
                line: line_num,
                text: line.to_string(),
            }),
        }
    }
    parsed
}

/// Summary statistics for a data set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: Option<f64>,
    pub std_dev: f64,
    pub variance: f64,
}

impl Statistics {
    pub fn compute(data: &[f64]) -> Self {
        let mean = mean(data);
        let variance = variance(data, mean);
        Self {
            count: data.len(),
            mean,
            median: median(data),
            mode: mode(data),
            std_dev: std_deviation(variance),
            variance,
        }
    }
}

pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

pub fn median(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Most frequent value; ties go to the value seen first.
/// Returns None when every value occurs exactly once.
pub fn mode(data: &[f64]) -> Option<f64> {
    // key -> (frequency, first index)
    let mut frequency: HashMap<u64, (usize, usize)> = HashMap::new();
    for (index, value) in data.iter().enumerate() {
        frequency.entry(value_key(*value)).or_insert((0, index)).0 += 1;
    }

    let max_freq = frequency.values().map(|(freq, _)| *freq).max()?;
    if max_freq == 1 {
        return None;
    }

    frequency
        .values()
        .filter(|(freq, _)| *freq == max_freq)
        .map(|(_, first)| *first)
        .min()
        .map(|first| data[first])
}

// 0.0 and -0.0 compare equal and must count as one value
fn value_key(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// Sample variance (n - 1 denominator)
pub fn variance(data: &[f64], mean: f64) -> f64 {
    if data.len() <= 1 {
        return 0.0;
    }
    let sum_squared_diff: f64 = data.iter().map(|v| (v - mean) * (v - mean)).sum();
    sum_squared_diff / (data.len() - 1) as f64
}

pub fn std_deviation(variance: f64) -> f64 {
    if variance <= 0.0 {
        return 0.0;
    }
    variance.sqrt()
}
