//! Schema command: ensure the items table exists and exit

use anyhow::{Context, Result};
use clap::Parser;

use itemctl_server::ItemStore;

use crate::config::DatabaseArgs;

/// Arguments for the schema command
#[derive(Parser, Debug)]
pub struct SchemaArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

pub async fn run_schema(args: SchemaArgs) -> Result<()> {
    let store = args.db.connect().await?;
    store
        .ensure_schema()
        .await
        .context("Failed to ensure items schema")?;

    tracing::info!("items table ready");
    Ok(())
}
