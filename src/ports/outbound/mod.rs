/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (Satellite API, console, stdout).
pub mod progress_reporter;
pub mod report_formatter;
pub mod report_writer;
pub mod satellite_repository;

pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use report_writer::ReportWriter;
pub use satellite_repository::SatelliteRepository;
