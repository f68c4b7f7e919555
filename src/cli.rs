use clap::{Parser, Subcommand};
use orbyte_console::application::dto::OutputFormat;
use orbyte_console::config::API_URL_ENV;
use orbyte_console::dashboard::domain::SimulationType;
use std::path::PathBuf;

/// Compliance and sustainability dashboard for the Orbyte API
#[derive(Parser, Debug)]
#[command(name = "orbyte")]
#[command(version)]
#[command(about = "Compliance and sustainability dashboard for the Orbyte API", long_about = None)]
pub struct Args {
    /// API base URL including /api (e.g. http://localhost:8000/api)
    #[arg(long, global = true, env = API_URL_ENV, value_name = "URL")]
    pub api_url: Option<String>,

    /// Path to a config file (defaults to ./orbyte.config.yml if present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format: markdown or json
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Compliance and sustainability scores, trends and top issues
    Overview,
    /// Compliance controls with per-framework scores and open risks
    Controls,
    /// Run the server-side analysis of one control
    Analyze {
        /// Control identifier (e.g. AC-2)
        control_id: String,
    },
    /// Emissions by region and idle resources
    Sustainability,
    /// Estimate the impact of an infrastructure change
    Simulate {
        /// idle_shutdown, region_migration or enable_encryption
        #[arg(long = "type", value_name = "TYPE")]
        simulation_type: SimulationType,

        /// Share of the workload affected, 0 to 100
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        workload: u8,

        /// Region the workload runs in today
        #[arg(long, value_name = "REGION")]
        source_region: Option<String>,

        /// Region to migrate to
        #[arg(long, value_name = "REGION")]
        target_region: Option<String>,
    },
    /// Overview and sustainability loaded side by side
    Summary,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
