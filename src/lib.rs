//! Waypost is a path-to-URL redirect server.
//!
//! It receives incoming HTTP requests and walks them through an ordered
//! chain of lookup stages: a redirect table parsed from a YAML or JSON
//! mapping file, then a built-in literal map, then a terminal greeting
//! handler. The first stage that knows the request path answers with a
//! `302 Found` pointing at the mapped URL; a stage that does not know it
//! delegates to its fallback, so every request receives a response.
//!
//! # Architecture
//!
//! - [`cli`] -- Command-line argument parsing with clap derive macros.
//! - [`cmd`] -- Subcommand dispatch and execution (run, init, validate).
//! - [`config`] -- Mapping file loading, the
//!   [`RedirectTable`](config::model::RedirectTable), and built-in defaults
//!   as named constants.
//! - [`error`] -- Unified error types using `thiserror`.
//! - [`handler`] -- The fallback chain: the [`PathHandler`](handler::PathHandler)
//!   trait and its table, map, and greeting stages.
//! - [`logging`] -- Structured tracing setup with JSON and pretty-print output.
//! - [`server`] -- Axum server setup, shared application state, and graceful
//!   shutdown.

// Binary crate — public functions are internal, not consumed by external users.
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod handler;
pub mod logging;
pub mod server;
