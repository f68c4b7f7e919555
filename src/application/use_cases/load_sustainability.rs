use super::page::settle;
use crate::dashboard::domain::SustainabilityMetrics;
use crate::dashboard::state::ViewState;
use crate::ports::outbound::{DashboardApi, ProgressReporter};

/// LoadSustainabilityUseCase - sustainability page
pub struct LoadSustainabilityUseCase<A, PR> {
    api: A,
    progress_reporter: PR,
}

impl<A, PR> LoadSustainabilityUseCase<A, PR>
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

    pub async fn execute(&self) -> ViewState<SustainabilityMetrics> {
        self.progress_reporter
            .report_waiting("Loading sustainability metrics...");
        let result = self.api.fetch_sustainability_metrics().await;
        settle(&self.progress_reporter, "sustainability metrics", result)
    }
}
