/// Console adapters - stderr diagnostics and stdout report output
mod progress_reporter;
mod stdout_writer;

pub use progress_reporter::{SilentProgressReporter, StderrProgressReporter};
pub use stdout_writer::StdoutReportWriter;
