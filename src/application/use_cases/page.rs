use crate::dashboard::state::ViewState;
use crate::ports::outbound::ProgressReporter;
use crate::shared::Result;
use log::error;

/// Settles a page fetch into its view state.
///
/// Errors are logged and swallowed: the caller gets `ViewState::Error`
/// and renders the page's failure placeholder.
pub(super) fn settle<T, PR: ProgressReporter>(
    progress_reporter: &PR,
    page: &str,
    result: Result<T>,
) -> ViewState<T> {
    match result {
        Ok(data) => {
            progress_reporter.report_completion(&format!("✅ Loaded {}", page));
            ViewState::Success(data)
        }
        Err(e) => {
            error!("Failed to load {}: {:#}", page, e);
            progress_reporter.report_error(&format!("❌ Failed to load {}", page));
            ViewState::from_result(Err(e))
        }
    }
}
