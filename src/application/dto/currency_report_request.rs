use crate::currency_scoring::domain::ReportMode;

/// CurrencyReportRequest - Request DTO for the currency report use case
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CurrencyReportRequest {
    /// Simple or advanced report
    pub mode: ReportMode,
    /// Raw query suffix for the hosts endpoint (may be empty)
    pub search: String,
}

impl CurrencyReportRequest {
    pub fn new(mode: ReportMode, search: impl Into<String>) -> Self {
        Self {
            mode,
            search: search.into(),
        }
    }
}
