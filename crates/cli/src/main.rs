//! Command-line entry point for the frontdesk data manager.
mod commands;
mod config;

use anyhow::Result;
use config::CliConfig;
use frontdesk_registry::FrontDesk;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();

    setup_logging();

    let data_dir = config.resolve_data_dir();
    tracing::debug!("Using data directory {}", data_dir.display());

    let desk = FrontDesk::open(&data_dir);
    let args: Vec<String> = std::env::args().skip(1).collect();

    match commands::run(&desk, &args) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

/// Setup logging to stderr, filtered by `RUST_LOG`.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
