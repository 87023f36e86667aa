use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(level: &str, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("diet_planner=debug,tower_http=debug,info")
        } else {
            EnvFilter::new(format!("diet_planner={level},tower_http={level}"))
        }
    })
}

pub fn init_cli_logger(level: &str, verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(level: &str, verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(), // one object per line for log shippers
        )
        .init();
}
