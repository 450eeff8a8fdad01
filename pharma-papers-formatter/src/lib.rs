#![deny(
    clippy::panic,
    clippy::absolute_paths,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # Pharma Papers Formatter
//!
//! Report output for filtered papers:
//!
//! - **CSV**: one row per paper with the non-academic authors and company affiliations
//! - **Console**: one summary line per paper
//! - **JSON**: the papers as a pretty-printed array

pub mod console;
pub mod csv_report;
pub mod error;
pub mod json;

// Re-export main types for convenience
pub use console::{console_line, render_console};
pub use csv_report::{CSV_HEADERS, LIST_SEPARATOR, write_csv, write_csv_file};
pub use error::{FormatError, Result};
pub use json::papers_to_json;
