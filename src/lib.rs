//! Triad - descriptive statistics, number base conversion and word frequency
//! tools, plus a checker for the program result archive layout
//!
//! This library provides:
//! - Input file loading with typed errors
//! - Descriptive statistics (mean, median, mode, variance, standard deviation)
//! - Decimal to binary / hexadecimal conversion with two's complement negatives
//! - Word extraction and frequency counting
//! - Archive layout checking, scaffolding and inventory
//! - rc-file configuration and CLI command handling
//!
//! # Example
//!
//! ```no_run
//! use triad::cli::{run, exit_code};
//!
//! fn main() {
//!     if let Err(e) = run() {
//!         eprintln!("Error: {:#}", e);
//!         std::process::exit(exit_code(&e));
//!     }
//! }
//! ```

pub mod archive;
pub mod cli;
pub mod config;
pub mod convert;
pub mod input;
pub mod stats;
pub mod words;
