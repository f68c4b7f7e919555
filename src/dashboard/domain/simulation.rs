use crate::shared::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of hypothetical infrastructure change to estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationType {
    IdleShutdown,
    RegionMigration,
    EnableEncryption,
}

impl SimulationType {
    pub fn as_str(self) -> &'static str {
        match self {
            SimulationType::IdleShutdown => "idle_shutdown",
            SimulationType::RegionMigration => "region_migration",
            SimulationType::EnableEncryption => "enable_encryption",
        }
    }

    /// Human-readable label used in rendered reports
    pub fn label(self) -> &'static str {
        match self {
            SimulationType::IdleShutdown => "Idle Resource Shutdown",
            SimulationType::RegionMigration => "Region Migration",
            SimulationType::EnableEncryption => "Enable Encryption",
        }
    }
}

impl FromStr for SimulationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "idle_shutdown" => Ok(SimulationType::IdleShutdown),
            "region_migration" => Ok(SimulationType::RegionMigration),
            "enable_encryption" => Ok(SimulationType::EnableEncryption),
            _ => Err(format!(
                "Invalid simulation type: {}. Please specify 'idle_shutdown', 'region_migration' or 'enable_encryption'",
                s
            )),
        }
    }
}

impl fmt::Display for SimulationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON body of `POST /simulations/run`.
///
/// Absent regions are omitted from the body rather than sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub simulation_type: SimulationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_region: Option<String>,
    pub workload_percent: u8,
}

impl SimulationRequest {
    pub const MAX_WORKLOAD_PERCENT: u8 = 100;

    /// Creates a request, rejecting workloads above 100% and blank regions.
    pub fn new(
        simulation_type: SimulationType,
        workload_percent: u8,
        source_region: Option<String>,
        target_region: Option<String>,
    ) -> Result<Self, DashboardError> {
        if workload_percent > Self::MAX_WORKLOAD_PERCENT {
            return Err(DashboardError::Validation {
                message: format!(
                    "workload_percent must be between 0 and {}, got {}",
                    Self::MAX_WORKLOAD_PERCENT,
                    workload_percent
                ),
            });
        }

        for (field, region) in [
            ("source_region", &source_region),
            ("target_region", &target_region),
        ] {
            if region.as_deref().is_some_and(|r| r.trim().is_empty()) {
                return Err(DashboardError::Validation {
                    message: format!("{} must not be blank", field),
                });
            }
        }

        Ok(Self {
            simulation_type,
            source_region,
            target_region,
            workload_percent,
        })
    }
}

/// Server-side estimate for a simulation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub estimated_emissions_reduction_kg: f64,
    pub estimated_cost_savings_usd: f64,
    pub risk_summary: String,
    pub detail_summary: String,
}
