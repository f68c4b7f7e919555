use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a compliance control, as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ControlSeverity {
    /// Weight used when scoring frameworks: critical 5, high 3, medium 2, low 1.
    pub fn weight(self) -> u32 {
        match self {
            ControlSeverity::Critical => 5,
            ControlSeverity::High => 3,
            ControlSeverity::Medium => 2,
            ControlSeverity::Low => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ControlSeverity::Critical => "critical",
            ControlSeverity::High => "high",
            ControlSeverity::Medium => "medium",
            ControlSeverity::Low => "low",
        }
    }
}

impl fmt::Display for ControlSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evaluation status of a compliance control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlStatus {
    Pass,
    Fail,
    AtRisk,
}

impl ControlStatus {
    pub fn is_passing(self) -> bool {
        matches!(self, ControlStatus::Pass)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ControlStatus::Pass => "pass",
            ControlStatus::Fail => "fail",
            ControlStatus::AtRisk => "at_risk",
        }
    }
}

impl fmt::Display for ControlStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single compliance requirement tracked by the backend (e.g. NIST AC-2).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Control {
    pub id: String,
    pub name: String,
    pub framework: String,
    pub severity: ControlSeverity,
    pub status: ControlStatus,
    pub evidence_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
