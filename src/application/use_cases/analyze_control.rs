use crate::dashboard::domain::AnalysisResult;
use crate::dashboard::state::{LatestSlot, ViewState};
use crate::ports::outbound::{DashboardApi, ProgressReporter};
use log::{debug, error};

/// AnalyzeControlUseCase - per-control analysis panel of the compliance page
///
/// Selecting a control starts a server-side analysis. The panel shows only
/// the most recent selection: responses are routed through a [`LatestSlot`],
/// so a slow analysis for an earlier control is discarded instead of
/// overwriting the one the user selected afterwards.
pub struct AnalyzeControlUseCase<A, PR> {
    api: A,
    progress_reporter: PR,
    slot: LatestSlot<AnalysisResult>,
}

impl<A, PR> AnalyzeControlUseCase<A, PR>
where
    A: DashboardApi,
    PR: ProgressReporter,
{
    pub fn new(api: A, progress_reporter: PR) -> Self {
        Self {
            api,
            progress_reporter,
            slot: LatestSlot::new(),
        }
    }

    /// Selects `control_id` and waits for its analysis.
    ///
    /// # Returns
    /// The panel's state once this request settles. If another selection
    /// happened meanwhile, that is the newer selection's state, not this one's.
    ///
    /// The newest selection owns the progress spinner: a superseded request
    /// reports neither completion nor error, and the spinner is cleared when
    /// the latest selection settles.
    pub async fn select(&self, control_id: &str) -> ViewState<AnalysisResult> {
        let ticket = self.slot.begin(control_id);
        self.progress_reporter
            .report_waiting(&format!("Analyzing control {}...", control_id));

        let result = self.api.analyze_control(control_id).await;

        if !self.slot.is_current(&ticket) {
            debug!(
                "Discarding stale analysis for {} (generation {}, current {})",
                control_id,
                ticket.generation(),
                self.slot.generation()
            );
            return self.slot.snapshot();
        }

        let outcome = match result {
            Ok(analysis) => {
                self.progress_reporter
                    .report_completion(&format!("✅ Analyzed control {}", control_id));
                ViewState::Success(analysis)
            }
            Err(e) => {
                error!("Failed to analyze control {}: {:#}", control_id, e);
                self.progress_reporter
                    .report_error(&format!("❌ Failed to analyze control {}", control_id));
                ViewState::from_result(Err(e))
            }
        };

        if !self.slot.settle(&ticket, outcome) {
            debug!("Discarding stale analysis for {}", control_id);
        }
        self.slot.snapshot()
    }

    /// What the panel currently shows
    pub fn current(&self) -> ViewState<AnalysisResult> {
        self.slot.snapshot()
    }

    /// The control most recently selected
    pub fn selected_control(&self) -> Option<String> {
        self.slot.current_key()
    }
}
