use super::page::settle;
use crate::application::read_models::ComplianceView;
use crate::dashboard::state::ViewState;
use crate::ports::outbound::{DashboardApi, ProgressReporter};

/// LoadComplianceUseCase - compliance center page
///
/// Fetches the control list and derives the framework cards and open-risk
/// counts from it. Controls keep the order the server sent.
pub struct LoadComplianceUseCase<A, PR> {
    api: A,
    progress_reporter: PR,
}

impl<A, PR> LoadComplianceUseCase<A, PR>
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

    pub async fn execute(&self) -> ViewState<ComplianceView> {
        self.progress_reporter
            .report_waiting("Loading compliance controls...");
        let result = self
            .api
            .fetch_compliance_controls()
            .await
            .map(ComplianceView::from_controls);
        settle(&self.progress_reporter, "compliance controls", result)
    }
}
