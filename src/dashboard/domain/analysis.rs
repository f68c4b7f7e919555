use serde::{Deserialize, Serialize};

/// Server-side analysis of one control's evidence.
///
/// `status` is free text from the analysis engine, not a `ControlStatus`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub control_id: String,
    pub status: String,
    pub implementation_statement: String,
    /// Confidence reported by the backend, 0.0 - 1.0
    pub analysis_confidence: f64,
}

impl AnalysisResult {
    /// Confidence as a whole percentage, clamped to 0-100 for display.
    pub fn confidence_percent(&self) -> u32 {
        (self.analysis_confidence.clamp(0.0, 1.0) * 100.0).round() as u32
    }
}
