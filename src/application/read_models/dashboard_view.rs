use super::{ComplianceView, SimulationReport, SummaryView};
use crate::dashboard::domain::{AnalysisResult, OverviewData, SustainabilityMetrics};
use serde::Serialize;

/// Any page the console can render.
///
/// Serializes as the inner view, without a wrapping tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DashboardView {
    Overview(OverviewData),
    Compliance(ComplianceView),
    Analysis(AnalysisResult),
    Sustainability(SustainabilityMetrics),
    Simulation(SimulationReport),
    Summary(SummaryView),
}

impl DashboardView {
    pub fn title(&self) -> &'static str {
        match self {
            DashboardView::Overview(_) => "Overview",
            DashboardView::Compliance(_) => "Compliance Center",
            DashboardView::Analysis(_) => "Control Analysis",
            DashboardView::Sustainability(_) => "Sustainability",
            DashboardView::Simulation(_) => "Scenario Simulation",
            DashboardView::Summary(_) => "Dashboard Summary",
        }
    }

    /// True when part of the view failed to load even though the page settled.
    pub fn has_partial_failure(&self) -> bool {
        match self {
            DashboardView::Summary(summary) => summary.has_errors(),
            _ => false,
        }
    }
}
