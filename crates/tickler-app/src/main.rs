use clap::Parser;
use tickler_app::cli::Cli;
use tickler_app::commands::run;
use tickler_core::config::load_config;
use tickler_core::constants::DEFAULT_LOG_LEVEL;
use tickler_rule::rule::CalendarDate;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping default");
    }

    let today = CalendarDate::today();
    tracing::debug!(command = ?cli.command, %today, "Running command");

    run(
        &cli.command,
        &config.engine,
        today,
        std::io::stdin().lock(),
        std::io::stdout().lock(),
    )?;

    Ok(())
}
