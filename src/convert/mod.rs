//! Decimal to binary / hexadecimal conversion.
//!
//! Values are read as `i128`, so any unsigned 64-bit input converts. Negative
//! numbers are shown in two's complement: 32 bits when the value fits an
//! `i32`, 64 bits when it fits an `i64`, 128 bits below that.

pub mod report;

use serde::{Serialize, Serializer};

pub use report::{format_display, format_results_file, RESULTS_FILE};

// JSON numbers beyond the 64-bit range are emitted as strings
fn serialize_decimal<S: Serializer>(value: &i128, serializer: S) -> Result<S::Ok, S::Error> {
    if let Ok(v) = i64::try_from(*value) {
        serializer.serialize_i64(v)
    } else if let Ok(v) = u64::try_from(*value) {
        serializer.serialize_u64(v)
    } else {
        serializer.collect_str(value)
    }
}

/// One successfully converted input line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    #[serde(serialize_with = "serialize_decimal")]
    pub decimal: i128,
    pub binary: String,
    pub hexadecimal: String,
}

impl Conversion {
    pub fn new(decimal: i128) -> Self {
        Self {
            decimal,
            binary: to_binary(decimal),
            hexadecimal: to_hexadecimal(decimal),
        }
    }

    /// Fixed-width line used in both the screen output and the results file
    pub fn format_line(&self) -> String {
        format!(
            "Decimal: {:>15} | Binary: {:>20} | Hexadecimal: {:>15}",
            self.decimal, self.binary, self.hexadecimal
        )
    }
}

/// A line that failed validation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionError {
    pub line: usize,
    pub message: String,
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

/// Outcome of converting a whole input file
#[derive(Debug, Default, Serialize)]
pub struct ConversionBatch {
    pub conversions: Vec<Conversion>,
    pub errors: Vec<ConversionError>,
}

impl ConversionBatch {
    pub fn total_processed(&self) -> usize {
        self.conversions.len()
    }

    pub fn total_errors(&self) -> usize {
        self.errors.len()
    }
}

/// Validate a single value and return it as an integer
pub fn parse_decimal(value: &str) -> Result<i128, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Empty value".to_string());
    }
    value
        .parse::<i128>()
        .map_err(|_| format!("Invalid number format: '{}'", value))
}

/// Convert every non-blank line; `on_error` sees each failure as it happens
pub fn convert_lines<F>(text: &str, mut on_error: F) -> ConversionBatch
where
    F: FnMut(&ConversionError),
{
    let mut batch = ConversionBatch::default();
    for (line_num, line) in crate::input::numbered_lines(text) {
        if line.trim().is_empty() {
            continue;
        }
        match parse_decimal(line) {
            Ok(num) => batch.conversions.push(Conversion::new(num)),
            Err(message) => {
                let error = ConversionError { line: line_num, message };
                on_error(&error);
                batch.errors.push(error);
            }
        }
    }
    batch
}

// Unsigned bit pattern shown for a value
fn unsigned_repr(num: i128) -> u128 {
    if num >= 0 {
        num as u128
    } else if num >= i32::MIN as i128 {
        (num as i32) as u32 as u128
    } else if num >= i64::MIN as i128 {
        (num as i64) as u64 as u128
    } else {
        num as u128
    }
}

pub fn to_binary(num: i128) -> String {
    format!("{:b}", unsigned_repr(num))
}

pub fn to_hexadecimal(num: i128) -> String {
    format!("{:X}", unsigned_repr(num))
}
