//! HTTP server command
//!
//! Connects to Postgres, ensures the items table, then serves the API.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use itemctl_server::http::{run_server, ServerConfig};

use crate::config::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "ITEMCTL_BIND", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// Seconds before an in-flight request is abandoned
    #[arg(long, env = "ITEMCTL_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting itemctl server on {}", args.bind);

    let store = args.db.connect().await?;

    let config = ServerConfig {
        bind_addr: args.bind,
        request_timeout: Duration::from_secs(args.request_timeout_secs),
    };

    // Blocks until shutdown; schema bootstrap failures surface here
    run_server(Arc::new(store), config)
        .await
        .context("Server error")?;

    Ok(())
}
