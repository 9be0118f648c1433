/// ProgressReporter port for user-facing progress output
///
/// Everything the audit wants a human to see while it runs goes through here,
/// keeping stdout free for the final summary.
pub trait ProgressReporter {
    /// Reports an informational step
    fn report(&self, message: &str);

    /// Reports how many repositories have been processed so far
    ///
    /// # Arguments
    /// * `current` - Repositories finished
    /// * `total` - Repositories found by the search
    /// * `message` - Optional label for the repository in progress
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a diagnostic line (e.g. a failed poll body)
    fn report_error(&self, message: &str);

    /// Reports the end of the batch
    fn report_completion(&self, message: &str);
}
