//! Canned API payloads shared by the HTTP and use case tests
use serde_json::{json, Value};

pub fn overview_json() -> Value {
    json!({
        "compliance_score": 78.5,
        "sustainability_score": 64,
        "open_risks": 7,
        "compliance_trend": [
            {"timestamp": "2025-01-01T00:00:00Z", "score": 72},
            {"timestamp": "2025-02-01T00:00:00Z", "score": 78.5}
        ],
        "emissions_trend": [
            {"timestamp": "2025-01-01T00:00:00Z", "emissions_kg": 1250.4}
        ],
        "top_issues": [
            {
                "type": "compliance",
                "description": "MFA not enforced for admin accounts",
                "severity": "high",
                "status": "open",
                "last_updated": "2025-02-01T09:30:00Z"
            }
        ]
    })
}

/// Listed deliberately out of id order so ordering assertions mean something.
pub fn controls_json() -> Value {
    json!([
        {
            "id": "SC-28",
            "name": "Protection of Information at Rest",
            "framework": "NIST 800-53",
            "severity": "critical",
            "status": "fail",
            "evidence_count": 1
        },
        {
            "id": "AC-2",
            "name": "Account Management",
            "framework": "NIST 800-53",
            "severity": "high",
            "status": "pass",
            "evidence_count": 4,
            "description": "Manage system accounts"
        },
        {
            "id": "CC6.1",
            "name": "Logical Access Security",
            "framework": "SOC 2",
            "severity": "medium",
            "status": "at_risk",
            "evidence_count": 2
        }
    ])
}

pub fn analysis_json(control_id: &str) -> Value {
    json!({
        "control_id": control_id,
        "status": "Implemented",
        "implementation_statement": format!("{} is enforced through IAM policies.", control_id),
        "analysis_confidence": 0.92
    })
}

pub fn sustainability_json() -> Value {
    json!({
        "total_monthly_emissions_kg": 4200.5,
        "emissions_by_region": [
            {"region": "us-central1", "emissions_kg": 3000},
            {"region": "us-west1", "emissions_kg": 1200.5}
        ],
        "idle_resources": [
            {
                "id": "vm-1",
                "name": "batch-worker-1",
                "type": "compute_instance",
                "region": "us-central1",
                "instance_type": "n2-standard-8",
                "avg_cpu_7d": 0.03,
                "daily_cost_usd": 9.12
            }
        ],
        "potential_monthly_emissions_savings_kg": 310.2,
        "potential_monthly_cost_savings_usd": 273.6,
        "sustainability_score": 64,
        "ai_insight": "Shut down idle batch workers in us-central1."
    })
}

pub fn simulation_json() -> Value {
    json!({
        "estimated_emissions_reduction_kg": 155.1,
        "estimated_cost_savings_usd": 136.8,
        "risk_summary": "Low risk: workloads are idle.",
        "detail_summary": "Stopping half of the idle instances."
    })
}
