use crate::currency_scoring::domain::{AdvancedCurrencyRow, ReportMode, SimpleCurrencyRow};

/// ReportFormatter port for rendering report lines
///
/// Each method returns one line without the trailing newline.
pub trait ReportFormatter {
    /// Column header line for the given report
    fn header(&self, mode: ReportMode) -> String;

    fn format_simple_row(&self, row: &SimpleCurrencyRow) -> String;

    fn format_advanced_row(&self, row: &AdvancedCurrencyRow) -> String;
}
