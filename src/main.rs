use clap::Parser;
use diet_planner::adapters::http;
use diet_planner::config::LogFormat;
use diet_planner::utils::error::{ErrorSeverity, PlannerError};
use diet_planner::utils::{logger, validation::Validate};
use diet_planner::{AppState, CliConfig};

fn exit_with(e: &PlannerError) -> ! {
    tracing::error!(
        "❌ Startup failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger("info", cli.verbose);
            exit_with(&e);
        }
    };

    match config.logging.format {
        LogFormat::Compact => logger::init_cli_logger(&config.log_level(), cli.verbose),
        LogFormat::Json => logger::init_json_logger(&config.log_level(), cli.verbose),
    }

    tracing::info!("Starting diet-planner {}", env!("CARGO_PKG_VERSION"));
    if cli.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let state = match AppState::from_config(&config) {
        Ok(state) => state,
        Err(e) => exit_with(&e),
    };

    if let Err(e) = http::run(state, &config.server.bind, config.server.max_body_bytes).await {
        exit_with(&PlannerError::ServerError {
            message: format!("{:#}", e),
        });
    }

    Ok(())
}
