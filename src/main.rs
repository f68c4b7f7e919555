mod cli;

use anyhow::Context;
use cli::{Args, Command};
use orbyte_console::adapters::outbound::console::StderrProgressReporter;
use orbyte_console::adapters::outbound::network::HttpDashboardClient;
use orbyte_console::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use orbyte_console::application::read_models::DashboardView;
use orbyte_console::application::use_cases::{
    AnalyzeControlUseCase, LoadComplianceUseCase, LoadOverviewUseCase, LoadSummaryUseCase,
    LoadSustainabilityUseCase, RunSimulationUseCase,
};
use orbyte_console::config::{self, ConfigFile, Settings};
use orbyte_console::dashboard::domain::SimulationRequest;
use orbyte_console::dashboard::state::ViewState;
use orbyte_console::shared::error::ExitCode;
use orbyte_console::shared::Result;
use std::process;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_logging(args.verbose);

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// `RUST_LOG` wins over both the default and `--verbose`.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,orbyte_console=debug,orbyte=debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(args: Args) -> Result<ExitCode> {
    let config_file = load_config(&args)?;
    let settings = Settings::resolve(args.api_url.as_deref(), args.format, config_file.as_ref())?;
    log::debug!("Using API base URL {}", settings.api_base_url);

    // Create adapters (Dependency Injection)
    let api = HttpDashboardClient::new(&settings.api_base_url)?;
    let progress_reporter = StderrProgressReporter::new();

    let state = load_view(args.command, api, progress_reporter, &settings).await?;

    // Create formatter using factory
    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&state)?;

    // Present output
    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&formatted_output)?;

    let failed = state.is_error() || state.data().is_some_and(DashboardView::has_partial_failure);
    Ok(if failed {
        ExitCode::ApplicationError
    } else {
        ExitCode::Success
    })
}

/// An explicit `--config` must exist; otherwise look in the working directory.
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match args.config.as_deref() {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            config::discover_config(&cwd)
        }
    }
}

async fn load_view(
    command: Command,
    api: HttpDashboardClient,
    progress_reporter: StderrProgressReporter,
    settings: &Settings,
) -> Result<ViewState<DashboardView>> {
    let state = match command {
        Command::Overview => LoadOverviewUseCase::new(api, progress_reporter)
            .execute()
            .await
            .map(DashboardView::Overview),
        Command::Controls => LoadComplianceUseCase::new(api, progress_reporter)
            .execute()
            .await
            .map(DashboardView::Compliance),
        Command::Analyze { control_id } => AnalyzeControlUseCase::new(api, progress_reporter)
            .select(&control_id)
            .await
            .map(DashboardView::Analysis),
        Command::Sustainability => LoadSustainabilityUseCase::new(api, progress_reporter)
            .execute()
            .await
            .map(DashboardView::Sustainability),
        Command::Simulate {
            simulation_type,
            workload,
            source_region,
            target_region,
        } => {
            let request = SimulationRequest::new(
                simulation_type,
                workload,
                Some(source_region.unwrap_or_else(|| settings.source_region.clone())),
                Some(target_region.unwrap_or_else(|| settings.target_region.clone())),
            )?;
            RunSimulationUseCase::new(api, progress_reporter)
                .execute(request)
                .await
                .map(DashboardView::Simulation)
        }
        Command::Summary => {
            let summary = LoadSummaryUseCase::new(api, progress_reporter)
                .execute()
                .await;
            ViewState::Success(DashboardView::Summary(summary))
        }
    };
    Ok(state)
}
