//! CLI bootstrap for the bookshelf server.
//!
//! Parses arguments, initializes tracing, opens the document store, and
//! hands the collection handles to the HTTP layer. The store handle is
//! constructed here and injected; nothing is process-global.

mod args;
mod errors;

pub use args::Cli;
pub use errors::{CliError, CliResult};

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::rest::{AppState, HttpServer};
use crate::store::Store;

/// Parse arguments, boot, and serve.
pub async fn run() -> CliResult<()> {
    let config = Cli::parse_args().into_config();

    init_tracing();

    let store = Store::open(&config.database);
    let state = Arc::new(AppState::new(&store, &config)?);
    tracing::info!(database = %store.database(), "document store opened");

    HttpServer::new(state, config).start().await?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bookshelf=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
