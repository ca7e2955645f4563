//! ShadeGen Web Server Binary
//!
//! This binary starts the ShadeGen web server that provides a REST API
//! for browser-based palette tooling.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (port 3080)
//! shadegen-web
//!
//! # Specify port and host
//! shadegen-web --port 8080 --host 0.0.0.0
//! ```

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shadegen::config::Config;
use shadegen::web;

/// ShadeGen Web Server - REST API for palette generation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3080")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration (defaults when no config file exists)
    let config = Config::load().context("Failed to load configuration")?;

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .context("Invalid host/port combination")?;

    let state = web::AppState::new(config);
    web::serve(state, addr).await
}
