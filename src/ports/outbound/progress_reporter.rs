/// ProgressReporter port for diagnostics during a report run
///
/// Everything reported here goes to stderr so stdout stays pure CSV.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports position within the host loop
    ///
    /// # Arguments
    /// * `current` - Hosts processed so far
    /// * `total` - Total number of hosts
    /// * `message` - Optional message to include (usually the host name)
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning that does not stop the run
    fn report_warning(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
