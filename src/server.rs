//! Axum server setup, shared application state, and graceful shutdown.
//!
//! Contains [`AppState`] (the `Arc`-shared state holding the handler
//! chain), [`build_router`] for constructing the Axum router whose
//! fallback is the chain dispatcher, and [`shutdown_signal`] for
//! SIGTERM / Ctrl+C handling.

use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handler::{self, Fallback};

pub struct AppState {
    /// Head of the handler chain, built once before the listener starts
    /// and read-only for the life of the process.
    pub chain: Fallback,
}

impl AppState {
    #[must_use]
    pub fn new(chain: Fallback) -> Self {
        Self { chain }
    }
}

/// Every route, including `/`, goes through the chain: there are no
/// reserved paths that could shadow a configured mapping.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .fallback(handler::dispatch)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C"),
        () = terminate => tracing::info!("received SIGTERM"),
    }
}
