use super::page::settle;
use crate::application::read_models::SimulationReport;
use crate::dashboard::domain::SimulationRequest;
use crate::dashboard::state::ViewState;
use crate::ports::outbound::{DashboardApi, ProgressReporter};

/// RunSimulationUseCase - scenario simulation page
///
/// The estimate itself is computed server-side; this page submits the
/// scenario and pairs the answer with what was asked.
pub struct RunSimulationUseCase<A, PR> {
    api: A,
    progress_reporter: PR,
}

impl<A, PR> RunSimulationUseCase<A, PR>
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

    pub async fn execute(&self, request: SimulationRequest) -> ViewState<SimulationReport> {
        self.progress_reporter.report_waiting(&format!(
            "Running {} simulation at {}% scope...",
            request.simulation_type.label(),
            request.workload_percent
        ));
        let result = self
            .api
            .run_simulation(&request)
            .await
            .map(|result| SimulationReport { request, result });
        settle(&self.progress_reporter, "simulation", result)
    }
}
