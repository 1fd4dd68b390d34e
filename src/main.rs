// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (to stderr, so stdout only carries results)
// 2. Parse and validate command-line arguments
// 3. Read the URL list and build the prober + dispatcher
// 4. Probe everything, then write out the URLs that returned 200
// 5. Exit with proper code (0 = done, 1 = runtime error, 2 = bad configuration)
//
// Every configuration problem is caught in steps 2-3, before any request is
// made and before anything is written.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod checker; // src/checker/ - probing and dispatching
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - validation of the parsed arguments
mod list; // src/list.rs - URL list input and output

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use checker::{Dispatcher, HttpProber};
use cli::Cli;
use config::{ConfigError, RunConfig};

#[tokio::main]
async fn main() {
    init_logging();

    let exit_code = match run(Cli::parse()).await {
        Ok(()) => 0,
        Err(e) => {
            // Configuration errors get their own exit code so scripts can
            // tell "you called me wrong" apart from "something broke"
            if let Some(config_error) = e.downcast_ref::<ConfigError>() {
                eprintln!("Configuration error: {}", config_error);
                2
            } else {
                eprintln!("Error: {:#}", e);
                1
            }
        }
    };

    std::process::exit(exit_code);
}

// RUST_LOG overrides the default level, e.g. RUST_LOG=url_filter=debug
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "url_filter=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = RunConfig::from_cli(cli)?;

    tracing::info!(input = %config.input.display(), "reading urls");
    let urls = list::read_url_list(&config.input)?;

    let prober = HttpProber::new(config.timeout)?;
    let timeout = prober.timeout();
    let dispatcher = Dispatcher::new(prober, config.concurrency.get())?;

    tracing::info!(
        urls = urls.len(),
        concurrency = dispatcher.concurrency().get(),
        timeout_secs = timeout.as_secs(),
        "checking urls"
    );

    let passed = dispatcher.run(urls).await;

    list::write_results(config.output.as_deref(), &passed, config.format)
}
