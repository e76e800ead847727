use crate::shared::Result;

/// ReportWriter port for the report destination
///
/// Lines are written one at a time as hosts are processed, so output
/// produced before a failure is kept.
pub trait ReportWriter {
    /// Writes one line, appending the line terminator
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written
    fn write_line(&self, line: &str) -> Result<()>;
}
