//! Collatz compute client
//!
//! Reads its target and request value from the environment, queries the
//! compute server over TCP, and prints the answer line to stdout. All
//! diagnostics go to stderr so stdout carries nothing but the response.

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use collatz_wire::{request_steps, Connector};

mod config;

use config::Config;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    info!(
        host = %config.host,
        port = config.port,
        count = config.count,
        "requesting step count"
    );

    let connector = Connector::new(config.host, config.port);
    match request_steps(connector, config.count).await {
        Ok(answer) => println!("{answer}"),
        Err(e) => {
            error!("request failed: {e}");
            std::process::exit(1);
        }
    }
}
