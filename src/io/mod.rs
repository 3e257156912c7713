//! Report output

pub mod output;

pub use output::{create_writer, CheckReport, OutputFormat, ReportWriter};
