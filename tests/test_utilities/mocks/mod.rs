/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_report_writer;
mod mock_satellite_repository;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_report_writer::MockReportWriter;
pub use mock_satellite_repository::MockSatelliteRepository;
