/// ProgressReporter port for user-facing progress while a page loads
///
/// Output goes somewhere that does not mix with the rendered view (stderr),
/// so piping `orbyte ... > report.md` keeps the report clean.
pub trait ProgressReporter: Send + Sync {
    /// Reports a one-off progress message
    fn report(&self, message: &str);

    /// Shows that a request is in flight (the page's `Loading` state)
    fn report_waiting(&self, message: &str);

    /// Reports an error or warning message, clearing any waiting indicator
    fn report_error(&self, message: &str);

    /// Reports completion, clearing any waiting indicator
    fn report_completion(&self, message: &str);
}
