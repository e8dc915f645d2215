//! `waypost run` — start the redirect server.
//!
//! Loads the primary redirect table from the mapping file (or the
//! built-in sample), composes the handler chain, and serves it with
//! graceful shutdown. Any startup failure aborts before the listener is
//! bound; there is no degraded start with a partial table.

use std::net::SocketAddr;
use std::sync::Arc;

use crate::cli::RunArgs;
use crate::config;
use crate::error::WaypostError;
use crate::handler::greeting::GreetingHandler;
use crate::handler::map::MapHandler;
use crate::handler::table::TableHandler;
use crate::handler::Fallback;
use crate::logging;
use crate::server::{self, AppState};

pub async fn execute(args: RunArgs) -> Result<(), WaypostError> {
    let log_format = logging::resolve_format(args.pretty, args.json);
    logging::init(&args.log_level, log_format);

    let table = config::load_table(args.config.as_deref(), args.format).await?;
    let mapping_count = table.len();
    let source_label = args.config.as_ref().map_or_else(
        || "(built-in sample)".to_string(),
        |p| p.display().to_string(),
    );

    // Chain order: file-backed table, then built-in map, then greeting.
    // Resolution stops at the first stage that knows the path.
    let chain: Fallback = Box::new(TableHandler::new(
        table,
        Box::new(MapHandler::builtin(Box::new(GreetingHandler))),
    ));

    let state = Arc::new(AppState::new(chain));
    let router = server::build_router(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        addr = %addr,
        mappings = mapping_count,
        source = %source_label,
        format = args.format.extension(),
        "waypost started"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    tracing::info!("waypost stopped");
    Ok(())
}
