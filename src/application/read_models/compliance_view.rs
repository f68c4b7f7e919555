use crate::dashboard::domain::Control;
use crate::dashboard::services::{FrameworkScore, FrameworkScorer, OpenRisks};
use serde::Serialize;

/// Compliance page: the control list plus the framework cards derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceView {
    pub overall_score: f64,
    pub framework_scores: Vec<FrameworkScore>,
    pub open_risks: OpenRisks,
    /// In server order
    pub controls: Vec<Control>,
}

impl ComplianceView {
    pub fn from_controls(controls: Vec<Control>) -> Self {
        Self {
            overall_score: FrameworkScorer::overall_score(&controls),
            framework_scores: FrameworkScorer::score_frameworks(&controls),
            open_risks: FrameworkScorer::open_risks(&controls),
            controls,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::domain::{ControlSeverity, ControlStatus};

    #[test]
    fn test_from_controls_keeps_server_order() {
        let controls: Vec<Control> = ["SI-4", "AC-2", "AU-6"]
            .iter()
            .map(|id| Control {
                id: id.to_string(),
                name: id.to_string(),
                framework: "NIST 800-53".to_string(),
                severity: ControlSeverity::Low,
                status: ControlStatus::Fail,
                evidence_count: 0,
                description: None,
            })
            .collect();

        let view = ComplianceView::from_controls(controls);
        let ids: Vec<&str> = view.controls.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["SI-4", "AC-2", "AU-6"]);
        assert_eq!(view.overall_score, 0.0);
        assert_eq!(view.open_risks.low, 3);
        assert_eq!(view.framework_scores.len(), 1);
    }

    #[test]
    fn test_from_empty_controls() {
        let view = ComplianceView::from_controls(vec![]);
        assert_eq!(view.overall_score, 100.0);
        assert!(view.framework_scores.is_empty());
        assert_eq!(view.open_risks.total(), 0);
    }
}
