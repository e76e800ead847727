use crate::ports::outbound::ReportWriter;
use crate::shared::Result;
use anyhow::Context;
use std::io::{self, Write};

/// StdoutReportWriter adapter for writing the report to stdout
///
/// Each line is flushed immediately so rows show up as hosts complete.
pub struct StdoutReportWriter;

impl StdoutReportWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportWriter for StdoutReportWriter {
    fn write_line(&self, line: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)
            .and_then(|_| stdout.flush())
            .context("Failed to write to stdout")?;
        Ok(())
    }
}
