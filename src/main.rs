//! session-auth - Application entry point
//!
//! CLI-based entry point that dispatches to the server or the
//! OpenAPI exporter.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use session_auth::{
    cli::{Cli, Commands},
    commands,
    config::Config,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Verbose mode sets debug level
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Serve(args) => match Config::from_env() {
            Ok(config) => {
                tracing::debug!(?config, "Configuration loaded");
                commands::serve::execute(args, config).await
            }
            Err(e) => Err(e),
        },
        Commands::Openapi => commands::openapi::execute().await,
    };

    if let Err(e) = result {
        // Debug output keeps the detail that Display hides from HTTP clients
        tracing::error!("Command failed: {:?}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
