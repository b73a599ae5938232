//! Serves the book catalog over HTTP.
//!
//! The catalog starts out with the sample data and lives only as long as the process.

use anyhow::Context as _;
use catalog::{Store, build_app, build_schema, config::AppConfig};
use clap::Parser;
use std::future::pending;
use tokio::{net::TcpListener, signal::ctrl_c};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "catalog-server", version, about = "Book catalog GraphQL server")]
struct Args {
    /// Port to listen on. Takes precedence over the configuration file and `CATALOG__*`
    /// variables.
    #[arg(long, env = "PORT")]
    port: Option<u16>,
    /// Print the GraphQL schema and exit.
    #[arg(long)]
    print_schema: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();
    let args = Args::parse();

    let schema = build_schema(Store::seeded());
    if args.print_schema {
        println!("{}", schema.sdl());
        return Ok(());
    }

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if let Some(port) = args.port {
        config.server.port = port;
    }
    let address = config.address();

    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("Unable to bind {address}"))?;
    info!("Server ready at: http://{}/", listener.local_addr()?);

    axum::serve(listener, build_app(schema))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

    info!("shutdown");
    Ok(())
}

/// Logs to stderr, filtered by `RUST_LOG` (`info` if unset).
fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Resolves on Ctrl-C. If the handler cannot be installed the server keeps running.
async fn shutdown_signal() {
    if let Err(err) = ctrl_c().await {
        error!(%err, "failed to install Ctrl-C handler");
        pending::<()>().await;
    }
}
