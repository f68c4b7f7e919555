use crate::application::read_models::DashboardView;
use crate::dashboard::state::ViewState;
use crate::ports::outbound::ViewFormatter;
use crate::shared::Result;

/// JsonFormatter adapter for machine-readable output
///
/// A loaded page serializes as its contract data unchanged, so the output of
/// `orbyte controls -f json` is the same array the API returned plus the
/// derived framework scores. Non-success states serialize as
/// `{"state": ..., "reason": ...}`.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewFormatter for JsonFormatter {
    fn format(&self, state: &ViewState<DashboardView>) -> Result<String> {
        let mut output = serde_json::to_string_pretty(state)?;
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::SummaryView;
    use crate::dashboard::domain::AnalysisResult;
    use serde_json::json;

    #[test]
    fn test_format_analysis_is_contract_shaped() {
        let state = ViewState::Success(DashboardView::Analysis(AnalysisResult {
            control_id: "AC-2".to_string(),
            status: "implemented".to_string(),
            implementation_statement: "Accounts are reviewed.".to_string(),
            analysis_confidence: 0.9,
        }));
        let output = JsonFormatter::new().format(&state).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            json!({
                "control_id": "AC-2",
                "status": "implemented",
                "implementation_statement": "Accounts are reviewed.",
                "analysis_confidence": 0.9
            })
        );
    }

    #[test]
    fn test_format_error_state() {
        let state: ViewState<DashboardView> =
            ViewState::Error("Request failed: fetch overview".to_string());
        let output = JsonFormatter::new().format(&state).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            json!({"state": "error", "reason": "Request failed: fetch overview"})
        );
    }

    #[test]
    fn test_format_summary_with_nested_error() {
        let state = ViewState::Success(DashboardView::Summary(SummaryView {
            overview: ViewState::Error("boom".to_string()),
            sustainability: ViewState::Loading,
        }));
        let output = JsonFormatter::new().format(&state).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["overview"]["state"], "error");
        assert_eq!(value["overview"]["reason"], "boom");
        assert_eq!(value["sustainability"]["state"], "loading");
    }

    #[test]
    fn test_output_ends_with_newline() {
        let state: ViewState<DashboardView> = ViewState::Idle;
        let output = JsonFormatter::new().format(&state).unwrap();
        assert!(output.ends_with('\n'));
    }
}
