use serde::{Deserialize, Serialize};
use std::fmt;

/// One point of the compliance score trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompliancePoint {
    pub timestamp: String,
    pub score: f64,
}

/// One point of the emissions trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionsPoint {
    pub timestamp: String,
    pub emissions_kg: f64,
}

/// Which side of the dashboard an issue belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Compliance,
    Sustainability,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::Compliance => f.write_str("compliance"),
            IssueKind::Sustainability => f.write_str("sustainability"),
        }
    }
}

/// Issue severity. Issues only use three levels, unlike controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Low,
    Medium,
    High,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueSeverity::Low => f.write_str("low"),
            IssueSeverity::Medium => f.write_str("medium"),
            IssueSeverity::High => f.write_str("high"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopIssue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub description: String,
    pub severity: IssueSeverity,
    pub status: String,
    pub last_updated: String,
}

/// Snapshot rendered by the overview page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewData {
    pub compliance_score: f64,
    pub sustainability_score: f64,
    pub open_risks: u32,
    pub compliance_trend: Vec<CompliancePoint>,
    pub emissions_trend: Vec<EmissionsPoint>,
    pub top_issues: Vec<TopIssue>,
}
