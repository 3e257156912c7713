//! Report writers: terminal and JSON renderings of a check run

use crate::core::Diagnostic;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Output of one full check run over one class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub class: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    pub fn has_violations(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait ReportWriter {
    fn write_report(&mut self, report: &CheckReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &CheckReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &CheckReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}",
            format!("Surface check: {}", report.class).bold().blue()
        )?;

        if report.diagnostics.is_empty() {
            writeln!(self.writer, "{}", "no violations".green())?;
            return Ok(());
        }

        for diagnostic in &report.diagnostics {
            writeln!(
                self.writer,
                "  {} {} {}",
                diagnostic.location,
                diagnostic.key.as_str().yellow(),
                diagnostic.args.join(", ")
            )?;
        }

        writeln!(
            self.writer,
            "{}",
            format!("{} violation(s)", report.diagnostics.len())
                .red()
                .bold()
        )?;
        Ok(())
    }
}

/// Create a writer for the requested format, targeting stdout or a file
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn ReportWriter>> {
    let target: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(target)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(target)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Location, MessageKey};

    fn report() -> CheckReport {
        CheckReport {
            class: "ArrayIntList".into(),
            diagnostics: vec![Diagnostic::new(
                Location::new(4, 8),
                MessageKey::MalformedField,
                ["count", "protected", "private"],
            )],
        }
    }

    #[test]
    fn json_writer_round_trips_report() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_report(&report()).unwrap();
        let parsed: CheckReport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.class, "ArrayIntList");
        assert_eq!(parsed.diagnostics[0].key, MessageKey::MalformedField);
    }

    #[test]
    fn terminal_writer_includes_key_and_args() {
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer)
            .write_report(&report())
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("malformed.field"));
        assert!(text.contains("count, protected, private"));
        assert!(text.contains("1 violation(s)"));
    }
}
