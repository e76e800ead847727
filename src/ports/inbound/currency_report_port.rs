use crate::application::dto::{CurrencyReportRequest, CurrencyReportSummary};
use crate::shared::Result;

/// CurrencyReportPort - Inbound port for the currency report use case
///
/// This is what the CLI drives. Rows are streamed to the configured
/// writer while the report runs; the returned summary only carries counts.
pub trait CurrencyReportPort {
    /// Generates the report selected by `request.mode`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The API cannot be reached (`CurrencyError::ApiConnection`)
    /// - A response does not have the expected shape
    /// - A registered host lacks a field its row needs
    /// - Writing a row fails
    fn generate_report(&self, request: CurrencyReportRequest) -> Result<CurrencyReportSummary>;
}
