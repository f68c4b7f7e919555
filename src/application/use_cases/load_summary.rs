use super::page::settle;
use crate::application::read_models::SummaryView;
use crate::ports::outbound::{DashboardApi, ProgressReporter};

/// LoadSummaryUseCase - overview and sustainability pages together
///
/// Both fetches are in flight at once. Each result fills its own slot, so
/// one failing endpoint does not blank the other half of the summary.
pub struct LoadSummaryUseCase<A, PR> {
    api: A,
    progress_reporter: PR,
}

impl<A, PR> LoadSummaryUseCase<A, PR>
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

    pub async fn execute(&self) -> SummaryView {
        self.progress_reporter
            .report_waiting("Loading overview and sustainability metrics...");

        let (overview, sustainability) = futures::join!(
            self.api.fetch_overview(),
            self.api.fetch_sustainability_metrics()
        );

        SummaryView {
            overview: settle(&self.progress_reporter, "overview", overview),
            sustainability: settle(
                &self.progress_reporter,
                "sustainability metrics",
                sustainability,
            ),
        }
    }
}
