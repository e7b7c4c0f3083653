use std::process::ExitCode;

mod cli;
use cli::parse_cli_options;

use menucal::pipeline::MenuPipeline;
use menucal::storage::config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();

    let options = match parse_cli_options() {
        Ok(options) => options,
        Err(err) => {
            eprintln!("Error: {}", err);
            println!("Usage: menucal [--endpoint URL] [--output PATH]");
            return ExitCode::FAILURE;
        }
    };

    let mut config = match Config::load_or_create() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Falling back to default config: {}", err);
            Config::default()
        }
    };

    if let Some(endpoint) = options.endpoint {
        config.menu.endpoint = endpoint;
    }
    if let Some(output) = options.output {
        config.output.path = output;
    }

    let pipeline = MenuPipeline::new(config);
    match pipeline.run().await {
        Ok(summary) => {
            println!(
                "School menu updated successfully ({} events).",
                summary.events
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error updating menu: {}", err);
            tracing::error!("Menu update failed: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn setup_logging() {
    let log_dir = dirs::config_dir()
        .map(|d| d.join("menucal"))
        .unwrap_or_else(|| std::path::PathBuf::from("."));

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "menucal.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("menucal started");
}
