//! contexta viewer server
//!
//! Greets each request's viewer, resolved from the `name` query parameter
//! and carried to the handlers through request-scoped context.

use anyhow::Context;
use clap::Parser;
use contexta_observability::tracing_setup;
use contexta_viewer::{ViewerConfig, start_server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_setup::init_tracing();

    let config = ViewerConfig::parse();
    start_server(&config)
        .await
        .with_context(|| format!("viewer server on {} failed", config.bind_addr()))?;
    Ok(())
}
