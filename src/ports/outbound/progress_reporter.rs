/// ProgressReporter port for operator feedback on stderr
///
/// Nothing reported here ends up in the generated documents.
pub trait ProgressReporter {
    /// Plain informational line
    fn report(&self, message: &str);

    /// Per-port progress while resolving (`current` is 1-based)
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Warning or error line
    fn report_error(&self, message: &str);

    /// Final line of a phase; also clears any progress display
    fn report_completion(&self, message: &str);
}
