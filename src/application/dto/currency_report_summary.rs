/// CurrencyReportSummary - Response DTO of the currency report use case
///
/// Rows themselves are streamed to the writer; this only counts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CurrencyReportSummary {
    /// Hosts returned by the hosts listing
    pub hosts_total: usize,
    /// Rows written to the report
    pub rows_written: usize,
    /// Hosts left out (not registered for content)
    pub hosts_skipped: usize,
}

impl CurrencyReportSummary {
    pub fn new(hosts_total: usize) -> Self {
        Self {
            hosts_total,
            ..Self::default()
        }
    }

    pub fn record_row(&mut self) {
        self.rows_written += 1;
    }

    pub fn record_skip(&mut self) {
        self.hosts_skipped += 1;
    }
}
