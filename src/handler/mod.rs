//! The fallback chain that answers every request.
//!
//! The [`dispatch`] function is the Axum fallback that receives every
//! incoming request and hands its path to the head of the chain. A chain
//! stage implements [`PathHandler`]: it either resolves the path to a
//! `302 Found` or delegates to the stage it holds as its fallback.
//! Submodules provide the stages: the file-backed redirect table
//! ([`table`]), the built-in literal map ([`map`]), and the terminal
//! greeting ([`greeting`]).

pub mod greeting;
pub mod map;
pub mod table;

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::server::AppState;

/// One stage of the chain.
///
/// Stages are composed once at startup into a linked sequence via boxed
/// fallbacks and are immutable afterwards, so `handle` borrows `self`
/// shared and needs no synchronization under concurrent requests.
pub trait PathHandler: Send + Sync {
    /// Stage name used in logs.
    fn name(&self) -> &'static str;

    /// Answer `path`, either resolving it or delegating to the fallback.
    fn handle(&self, path: &str) -> Response;
}

/// The link type of the chain.
pub type Fallback = Box<dyn PathHandler>;

/// Axum entrypoint: every request, any method, flows through here.
pub async fn dispatch(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let path = uri.path();
    let correlation_id = headers
        .get("x-correlation-id")
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| uuid::Uuid::new_v4().to_string(), String::from);

    tracing::info!(
        correlation_id = %correlation_id,
        method = %method,
        path = %path,
        "request received"
    );

    state.chain.handle(path)
}

/// Build a `302 Found` response pointing at `location`.
pub(crate) fn found(stage: &'static str, path: &str, location: &str) -> Response {
    tracing::debug!(stage, path, location, "redirecting");
    Response::builder()
        .status(StatusCode::FOUND)
        .header(header::LOCATION, location)
        .body(Body::empty())
        .unwrap_or_else(|e| {
            tracing::error!(stage, location, error = %e, "failed to build redirect response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        })
}
