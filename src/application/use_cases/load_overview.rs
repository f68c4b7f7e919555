use super::page::settle;
use crate::dashboard::domain::OverviewData;
use crate::dashboard::state::ViewState;
use crate::ports::outbound::{DashboardApi, ProgressReporter};

/// LoadOverviewUseCase - overview page
///
/// Scores, open risks, trends and top issues from a single fetch.
pub struct LoadOverviewUseCase<A, PR> {
    api: A,
    progress_reporter: PR,
}

impl<A, PR> LoadOverviewUseCase<A, PR>
where
    A: DashboardApi,
    PR: ProgressReporter,
{
    pub fn new(api: A, progress_reporter: PR) -> Self {
        Self {
            api,
            progress_reporter,
        }
    }

    pub async fn execute(&self) -> ViewState<OverviewData> {
        self.progress_reporter.report_waiting("Loading overview...");
        let result = self.api.fetch_overview().await;
        settle(&self.progress_reporter, "overview", result)
    }
}
