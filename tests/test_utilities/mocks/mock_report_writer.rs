use sat6_currency::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ReportWriter collecting lines in memory
#[derive(Default, Clone)]
pub struct MockReportWriter {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MockReportWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// Lines split into fields (plain comma split; fixtures avoid quoting)
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.lines()
            .iter()
            .map(|line| line.split(',').map(str::to_string).collect())
            .collect()
    }
}

impl ReportWriter for MockReportWriter {
    fn write_line(&self, line: &str) -> Result<()> {
        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }
}
