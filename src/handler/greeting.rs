//! Terminal chain stage.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::PathHandler;

/// Body returned for any path no stage could resolve.
pub const GREETING: &str = "Hello, world!\n";

/// Unconditionally answers `200 OK` with a fixed greeting. Holding no
/// fallback, it guarantees the chain terminates with a response.
pub struct GreetingHandler;

impl PathHandler for GreetingHandler {
    fn name(&self) -> &'static str {
        "greeting"
    }

    fn handle(&self, path: &str) -> Response {
        tracing::debug!(stage = self.name(), path, "no mapping matched");
        (StatusCode::OK, GREETING).into_response()
    }
}
