use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionEmissions {
    pub region: String,
    pub emissions_kg: f64,
}

/// A cloud resource the backend flagged as under-utilized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdleResource {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub region: String,
    pub instance_type: String,
    /// Average CPU utilisation over the last 7 days, 0.0 - 1.0
    pub avg_cpu_7d: f64,
    pub daily_cost_usd: f64,
}

/// Aggregate rendered by the sustainability page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SustainabilityMetrics {
    pub total_monthly_emissions_kg: f64,
    pub emissions_by_region: Vec<RegionEmissions>,
    pub idle_resources: Vec<IdleResource>,
    pub potential_monthly_emissions_savings_kg: f64,
    pub potential_monthly_cost_savings_usd: f64,
    pub sustainability_score: f64,
    pub ai_insight: String,
}
