/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod currency_report_request;
mod currency_report_summary;

pub use currency_report_request::CurrencyReportRequest;
pub use currency_report_summary::CurrencyReportSummary;
