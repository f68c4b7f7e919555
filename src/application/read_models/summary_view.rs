use crate::dashboard::domain::{OverviewData, SustainabilityMetrics};
use crate::dashboard::state::ViewState;
use serde::Serialize;

/// Overview and sustainability side by side.
///
/// Each half owns its own slot: one failing fetch leaves the other intact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    pub overview: ViewState<OverviewData>,
    pub sustainability: ViewState<SustainabilityMetrics>,
}

impl SummaryView {
    pub fn has_errors(&self) -> bool {
        self.overview.is_error() || self.sustainability.is_error()
    }
}
